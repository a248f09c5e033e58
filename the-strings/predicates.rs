//! Emptiness, blankness, character class and equality checks.
//!
//! Character class checks walk whole characters, so a supplementary letter
//! counts as a letter. Empty and blank follow the usual conventions: absent
//! is empty, and blank is empty or whitespace only.

use std::cmp::Ordering;

use crate::{
  chars::{
    char_is_ascii_printable,
    char_is_digit,
    char_is_letter,
    char_is_letter_or_digit,
    char_is_whitespace,
  },
  text::{
    len_utf16,
    region_matches,
    simple_lower,
    simple_upper,
    units,
  },
};

pub fn is_empty(s: Option<&str>) -> bool {
  s.is_none_or(str::is_empty)
}

pub fn is_not_empty(s: Option<&str>) -> bool {
  !is_empty(s)
}

/// Whether `s` is absent, empty or made of whitespace only.
///
/// ```
/// use the_strings::predicates::is_blank;
///
/// assert!(is_blank(None));
/// assert!(is_blank(Some(" \t\n")));
/// assert!(!is_blank(Some(" bob ")));
/// ```
pub fn is_blank(s: Option<&str>) -> bool {
  s.is_none_or(|s| s.chars().all(char_is_whitespace))
}

pub fn is_not_blank(s: Option<&str>) -> bool {
  !is_blank(s)
}

/// Whether any of the texts is empty. False for no texts at all.
pub fn is_any_empty(all: &[Option<&str>]) -> bool {
  all.iter().any(|&s| is_empty(s))
}

/// Whether every text is empty. True for no texts at all.
pub fn is_all_empty(all: &[Option<&str>]) -> bool {
  all.iter().all(|&s| is_empty(s))
}

pub fn is_none_empty(all: &[Option<&str>]) -> bool {
  !is_any_empty(all)
}

pub fn is_any_blank(all: &[Option<&str>]) -> bool {
  all.iter().any(|&s| is_blank(s))
}

pub fn is_all_blank(all: &[Option<&str>]) -> bool {
  all.iter().all(|&s| is_blank(s))
}

pub fn is_none_blank(all: &[Option<&str>]) -> bool {
  !is_any_blank(all)
}

fn non_empty_all(s: Option<&str>, pred: impl Fn(char) -> bool) -> bool {
  matches!(s, Some(s) if !s.is_empty() && s.chars().all(&pred))
}

fn present_all(s: Option<&str>, pred: impl Fn(char) -> bool) -> bool {
  matches!(s, Some(s) if s.chars().all(&pred))
}

/// Whether `s` is non-empty and contains only letters.
pub fn is_alpha(s: Option<&str>) -> bool {
  non_empty_all(s, char_is_letter)
}

/// Whether `s` is present and contains only letters and spaces.
pub fn is_alpha_space(s: Option<&str>) -> bool {
  present_all(s, |ch| ch == ' ' || char_is_letter(ch))
}

pub fn is_alphanumeric(s: Option<&str>) -> bool {
  non_empty_all(s, char_is_letter_or_digit)
}

pub fn is_alphanumeric_space(s: Option<&str>) -> bool {
  present_all(s, |ch| ch == ' ' || char_is_letter_or_digit(ch))
}

/// Whether `s` is non-empty and contains only decimal digits of any script.
///
/// Signs and decimal points are not digits, so `"-1"` and `"1.5"` are not
/// numeric.
pub fn is_numeric(s: Option<&str>) -> bool {
  non_empty_all(s, char_is_digit)
}

pub fn is_numeric_space(s: Option<&str>) -> bool {
  present_all(s, |ch| ch == ' ' || char_is_digit(ch))
}

/// Whether `s` is present and contains only whitespace. True for `""`.
pub fn is_whitespace(s: Option<&str>) -> bool {
  present_all(s, char_is_whitespace)
}

pub fn is_ascii_printable(s: Option<&str>) -> bool {
  present_all(s, char_is_ascii_printable)
}

pub fn is_all_lower_case(s: Option<&str>) -> bool {
  non_empty_all(s, char::is_lowercase)
}

pub fn is_all_upper_case(s: Option<&str>) -> bool {
  non_empty_all(s, char::is_uppercase)
}

/// Whether `s` contains both an uppercase and a lowercase character.
pub fn is_mixed_case(s: Option<&str>) -> bool {
  let Some(s) = s else {
    return false;
  };
  let (mut upper, mut lower) = (false, false);
  for ch in s.chars() {
    upper |= ch.is_uppercase();
    lower |= ch.is_lowercase();
    if upper && lower {
      return true;
    }
  }
  false
}

pub fn contains_whitespace(s: Option<&str>) -> bool {
  s.is_some_and(|s| s.chars().any(char_is_whitespace))
}

/// Length of `s` in UTF-16 code units, `0` when absent.
pub fn length(s: Option<&str>) -> usize {
  s.map_or(0, len_utf16)
}

/// Whether both texts are absent, or both present and equal.
pub fn equals(a: Option<&str>, b: Option<&str>) -> bool {
  a == b
}

/// Like [`equals`], comparing code units without regard to case.
///
/// ```
/// use the_strings::predicates::equals_ignore_case;
///
/// assert!(equals_ignore_case(Some("abc"), Some("ABC")));
/// assert!(equals_ignore_case(None, None));
/// assert!(!equals_ignore_case(Some("abc"), None));
/// ```
pub fn equals_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
  match (a, b) {
    (None, None) => true,
    (Some(a), Some(b)) => {
      let (a, b) = (units(a), units(b));
      a.len() == b.len() && region_matches(&a, 0, &b, true)
    },
    _ => false,
  }
}

pub fn equals_any(s: Option<&str>, candidates: &[Option<&str>]) -> bool {
  candidates.iter().any(|&candidate| equals(s, candidate))
}

pub fn equals_any_ignore_case(s: Option<&str>, candidates: &[Option<&str>]) -> bool {
  candidates
    .iter()
    .any(|&candidate| equals_ignore_case(s, candidate))
}

fn affix_matches(s: Option<&str>, affix: Option<&str>, at_end: bool, ignore_case: bool) -> bool {
  let (Some(s), Some(affix)) = (s, affix) else {
    return s.is_none() && affix.is_none();
  };
  let (s, affix) = (units(s), units(affix));
  let Some(slack) = s.len().checked_sub(affix.len()) else {
    return false;
  };
  let offset = if at_end { slack } else { 0 };
  region_matches(&s, offset, &affix, ignore_case)
}

/// Whether `s` starts with `prefix`. Two absent texts count as a match.
pub fn starts_with(s: Option<&str>, prefix: Option<&str>) -> bool {
  affix_matches(s, prefix, false, false)
}

pub fn starts_with_ignore_case(s: Option<&str>, prefix: Option<&str>) -> bool {
  affix_matches(s, prefix, false, true)
}

/// Whether `s` ends with `suffix`. Two absent texts count as a match.
pub fn ends_with(s: Option<&str>, suffix: Option<&str>) -> bool {
  affix_matches(s, suffix, true, false)
}

pub fn ends_with_ignore_case(s: Option<&str>, suffix: Option<&str>) -> bool {
  affix_matches(s, suffix, true, true)
}

/// Whether a non-empty `s` ends with any of `suffixes`.
pub fn ends_with_any(s: Option<&str>, suffixes: &[Option<&str>]) -> bool {
  is_not_empty(s) && suffixes.iter().any(|&suffix| ends_with(s, suffix))
}

/// Orders two texts by their code units, absent texts first when
/// `absent_first` is set and last otherwise.
pub fn compare(a: Option<&str>, b: Option<&str>, absent_first: bool) -> Ordering {
  match (a, b) {
    (None, None) => Ordering::Equal,
    (None, Some(_)) if absent_first => Ordering::Less,
    (None, Some(_)) => Ordering::Greater,
    (Some(_), None) if absent_first => Ordering::Greater,
    (Some(_), None) => Ordering::Less,
    (Some(a), Some(b)) => a.encode_utf16().cmp(b.encode_utf16()),
  }
}

fn fold_unit(unit: u16) -> u16 {
  let Some(ch) = char::from_u32(unit.into()) else {
    return unit;
  };
  let folded = simple_lower(simple_upper(ch));
  let mut buf = [0; 2];
  match folded.encode_utf16(&mut buf) {
    [single] => *single,
    _ => unit,
  }
}

/// Like [`compare`], folding the case of each code unit first.
pub fn compare_ignore_case(a: Option<&str>, b: Option<&str>, absent_first: bool) -> Ordering {
  match (a, b) {
    (Some(a), Some(b)) => {
      let a = a.encode_utf16().map(fold_unit);
      let b = b.encode_utf16().map(fold_unit);
      a.cmp(b)
    },
    _ => compare(a, b, absent_first),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_empty_and_blank() {
    assert!(is_empty(None));
    assert!(is_empty(Some("")));
    assert!(!is_empty(Some(" ")));
    assert!(is_not_empty(Some("bob")));
    assert!(is_blank(None));
    assert!(is_blank(Some("")));
    assert!(is_blank(Some(" \u{2028}\u{3000}")));
    assert!(!is_blank(Some("\u{00A0}")));
    assert!(!is_blank(Some("  bob  ")));
    assert!(is_not_blank(Some("bob")));
  }

  #[test]
  fn test_many_texts() {
    assert!(!is_any_empty(&[]));
    assert!(is_any_empty(&[Some("a"), None]));
    assert!(!is_any_empty(&[Some("a"), Some(" ")]));
    assert!(is_all_empty(&[]));
    assert!(is_all_empty(&[None, Some("")]));
    assert!(!is_all_empty(&[None, Some("a")]));
    assert!(is_none_empty(&[Some("a"), Some(" ")]));
    assert!(!is_any_blank(&[]));
    assert!(is_any_blank(&[Some("foo"), Some(" ")]));
    assert!(is_all_blank(&[None, Some(" "), Some("")]));
    assert!(!is_all_blank(&[Some(" "), Some("x")]));
    assert!(is_none_blank(&[Some("a"), Some("b")]));
    assert!(!is_none_blank(&[Some("a"), None]));
  }

  #[test]
  fn test_character_classes() {
    assert!(!is_alpha(None));
    assert!(!is_alpha(Some("")));
    assert!(is_alpha(Some("abc")));
    assert!(!is_alpha(Some("ab2c")));
    assert!(is_alpha(Some("\u{10400}")));
    assert!(is_alpha_space(Some("")));
    assert!(is_alpha_space(Some("ab c")));
    assert!(!is_alpha_space(Some("ab-c")));
    assert!(is_alphanumeric(Some("ab2c")));
    assert!(!is_alphanumeric(Some("ab c")));
    assert!(is_alphanumeric_space(Some("ab2 c")));
    assert!(!is_alphanumeric_space(None));
  }

  #[test]
  fn test_numeric() {
    assert!(!is_numeric(None));
    assert!(!is_numeric(Some("")));
    assert!(is_numeric(Some("123")));
    assert!(is_numeric(Some("\u{0967}\u{0968}\u{0969}")));
    assert!(!is_numeric(Some("12 3")));
    assert!(!is_numeric(Some("-123")));
    assert!(!is_numeric(Some("12.3")));
    assert!(is_numeric_space(Some("")));
    assert!(is_numeric_space(Some("12 3")));
    assert!(!is_numeric_space(Some("ab2c")));
  }

  #[test]
  fn test_whitespace_and_printable() {
    assert!(!is_whitespace(None));
    assert!(is_whitespace(Some("")));
    assert!(is_whitespace(Some("  ")));
    assert!(!is_whitespace(Some("ab c")));
    assert!(is_ascii_printable(Some("")));
    assert!(is_ascii_printable(Some("Ceki")));
    assert!(!is_ascii_printable(Some("Ceki G\u{00FC}lc\u{00FC}")));
    assert!(!is_ascii_printable(Some("\r\n")));
    assert!(!contains_whitespace(None));
    assert!(!contains_whitespace(Some("")));
    assert!(contains_whitespace(Some("a b")));
    assert!(!contains_whitespace(Some("ab")));
  }

  #[test]
  fn test_case_classes() {
    assert!(!is_all_lower_case(None));
    assert!(!is_all_lower_case(Some("")));
    assert!(is_all_lower_case(Some("abc")));
    assert!(!is_all_lower_case(Some("abC")));
    assert!(!is_all_lower_case(Some("ab c")));
    assert!(is_all_upper_case(Some("ABC")));
    assert!(!is_all_upper_case(Some("aBC")));
    assert!(!is_mixed_case(None));
    assert!(!is_mixed_case(Some("a")));
    assert!(!is_mixed_case(Some("ABC")));
    assert!(is_mixed_case(Some("aBc")));
    assert!(is_mixed_case(Some("A c")));
    assert!(is_mixed_case(Some("a/C")));
  }

  #[test]
  fn test_length() {
    assert_eq!(length(None), 0);
    assert_eq!(length(Some("")), 0);
    assert_eq!(length(Some("abc")), 3);
    assert_eq!(length(Some("\u{1F600}")), 2);
  }

  #[test]
  fn test_equals() {
    assert!(equals(None, None));
    assert!(!equals(None, Some("abc")));
    assert!(equals(Some("abc"), Some("abc")));
    assert!(!equals(Some("abc"), Some("ABC")));
    assert!(equals_ignore_case(Some("abc"), Some("ABC")));
    assert!(!equals_ignore_case(Some("abc"), Some("ABCD")));
    assert!(!equals_ignore_case(Some("straße"), Some("STRASSE")));
    assert!(!equals_any(None, &[]));
    assert!(equals_any(None, &[None, Some("abc")]));
    assert!(!equals_any(Some("abc"), &[None, Some("def")]));
    assert!(equals_any(Some("abc"), &[Some("abc"), Some("def")]));
    assert!(!equals_any(Some("abc"), &[Some("ABC"), Some("DEF")]));
    assert!(equals_any_ignore_case(Some("abc"), &[Some("ABC"), Some("DEF")]));
  }

  #[test]
  fn test_starts_and_ends_with() {
    assert!(starts_with(None, None));
    assert!(!starts_with(None, Some("abc")));
    assert!(!starts_with(Some("abcdef"), None));
    assert!(starts_with(Some("abcdef"), Some("")));
    assert!(starts_with(Some("abcdef"), Some("abc")));
    assert!(!starts_with(Some("ABCDEF"), Some("abc")));
    assert!(starts_with_ignore_case(Some("ABCDEF"), Some("abc")));
    assert!(!starts_with_ignore_case(Some("AB"), Some("abc")));
    assert!(ends_with(None, None));
    assert!(ends_with(Some("abcdef"), Some("def")));
    assert!(!ends_with(Some("ABCDEF"), Some("def")));
    assert!(!ends_with(Some("ABCDEF"), Some("cde")));
    assert!(ends_with_ignore_case(Some("ABCDEF"), Some("def")));
  }

  #[test]
  fn test_ends_with_any() {
    assert!(!ends_with_any(None, &[None]));
    assert!(!ends_with_any(Some("abcxyz"), &[]));
    assert!(!ends_with_any(Some(""), &[Some("")]));
    assert!(ends_with_any(Some("abcxyz"), &[Some("")]));
    assert!(ends_with_any(Some("abcxyz"), &[None, Some("xyz"), Some("abc")]));
    assert!(!ends_with_any(Some("abcXYZ"), &[Some("def"), Some("xyz")]));
  }

  #[test]
  fn test_compare() {
    assert_eq!(compare(None, None, true), Ordering::Equal);
    assert_eq!(compare(None, Some("a"), true), Ordering::Less);
    assert_eq!(compare(None, Some("a"), false), Ordering::Greater);
    assert_eq!(compare(Some("a"), None, true), Ordering::Greater);
    assert_eq!(compare(Some("a"), None, false), Ordering::Less);
    assert_eq!(compare(Some("abc"), Some("abc"), true), Ordering::Equal);
    assert_eq!(compare(Some("a"), Some("b"), true), Ordering::Less);
    assert_eq!(compare(Some("ab"), Some("abc"), true), Ordering::Less);
    assert_eq!(compare(Some("a"), Some("B"), true), Ordering::Greater);
    // Code unit order puts a supplementary character before U+FFFF.
    assert_eq!(compare(Some("\u{1F600}"), Some("\u{FFFF}"), true), Ordering::Less);
    assert_eq!(compare_ignore_case(Some("abc"), Some("ABC"), true), Ordering::Equal);
    assert_eq!(compare_ignore_case(Some("a"), Some("B"), true), Ordering::Less);
    assert_eq!(compare_ignore_case(None, Some("a"), false), Ordering::Greater);
  }
}
