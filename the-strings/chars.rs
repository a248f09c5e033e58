use unicode_general_category::{
  GeneralCategory,
  get_general_category,
};

/// Whitespace in the sense used by blank checks and space normalization.
///
/// Space, line and paragraph separators count, except the non-breaking ones,
/// as do the ASCII control characters tab, line feed, vertical tab, form feed,
/// carriage return and the four information separators.
#[inline]
pub fn char_is_whitespace(ch: char) -> bool {
  match ch {
      '\u{00A0}' | // No-break Space
      '\u{2007}' | // Figure Space
      '\u{202F}'   // Narrow No-break Space
      => false,

      '\u{0009}'..='\u{000D}' | // Tab, LF, VT, FF, CR
      '\u{001C}'..='\u{001F}'   // File, Group, Record and Unit Separator
      => true,

      ch => matches!(
        get_general_category(ch),
        GeneralCategory::SpaceSeparator
          | GeneralCategory::LineSeparator
          | GeneralCategory::ParagraphSeparator
      ),
    }
}

#[inline]
pub fn char_is_letter(ch: char) -> bool {
  matches!(
    get_general_category(ch),
    GeneralCategory::UppercaseLetter
      | GeneralCategory::LowercaseLetter
      | GeneralCategory::TitlecaseLetter
      | GeneralCategory::ModifierLetter
      | GeneralCategory::OtherLetter
  )
}

/// Decimal digits of any script, e.g. `'7'` or `'\u{0967}'`.
#[inline]
pub fn char_is_digit(ch: char) -> bool {
  matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

#[inline]
pub fn char_is_letter_or_digit(ch: char) -> bool {
  char_is_letter(ch) || char_is_digit(ch)
}

/// ASCII 32 through 126 inclusive.
#[inline]
pub fn char_is_ascii_printable(ch: char) -> bool {
  matches!(ch, ' '..='~')
}
