//! Case conversion.

use std::borrow::Cow;

use serde::{
  Deserialize,
  Serialize,
};

use crate::text::{
  simple_lower,
  simple_upper,
};

/// Rule used to lowercase (or uppercase) whole texts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseFold {
  /// Locale independent Unicode case mapping.
  #[default]
  Unicode,
  /// Unicode case mapping with the Turkish and Azerbaijani dotted and dotless
  /// `i` rules.
  Turkic,
}

impl CaseFold {
  pub fn to_lowercase(self, s: &str) -> String {
    match self {
      Self::Unicode => s.to_lowercase(),
      Self::Turkic => {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();
        while let Some(ch) = chars.next() {
          match ch {
            // I followed by a combining dot above is a dotted i.
            'I' if chars.peek() == Some(&'\u{0307}') => {
              chars.next();
              out.push('i');
            },
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.push(ch),
          }
        }
        out.to_lowercase()
      },
    }
  }

  pub fn to_uppercase(self, s: &str) -> String {
    match self {
      Self::Unicode => s.to_uppercase(),
      Self::Turkic => {
        s.chars()
          .map(|ch| {
            match ch {
              'i' => 'İ',
              'ı' => 'I',
              _ => ch,
            }
          })
          .collect::<String>()
          .to_uppercase()
      },
    }
  }
}

pub fn lower_case(s: Option<&str>) -> Option<String> {
  lower_case_with(s, CaseFold::Unicode)
}

pub fn lower_case_with(s: Option<&str>, fold: CaseFold) -> Option<String> {
  s.map(|s| fold.to_lowercase(s))
}

pub fn upper_case(s: Option<&str>) -> Option<String> {
  upper_case_with(s, CaseFold::Unicode)
}

pub fn upper_case_with(s: Option<&str>, fold: CaseFold) -> Option<String> {
  s.map(|s| fold.to_uppercase(s))
}

/// Titlecase form of a single character.
///
/// Titlecase differs from single character uppercase only for the Latin
/// digraphs and for Georgian Mkhedruli, which has no titlecase form.
fn title_case(ch: char) -> char {
  match ch {
    'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
    'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
    'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
    'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
    '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => ch,
    _ => simple_upper(ch),
  }
}

fn map_first(s: &str, map: impl Fn(char) -> char) -> Cow<'_, str> {
  let mut chars = s.chars();
  let Some(first) = chars.next() else {
    return Cow::Borrowed(s);
  };
  let mapped = map(first);
  if mapped == first {
    return Cow::Borrowed(s);
  }
  let mut out = String::with_capacity(s.len() + mapped.len_utf8());
  out.push(mapped);
  out.push_str(chars.as_str());
  Cow::Owned(out)
}

/// Titlecases the first character, leaving the rest untouched.
///
/// ```
/// use the_strings::case::capitalize;
///
/// assert_eq!(capitalize(Some("cat")).as_deref(), Some("Cat"));
/// assert_eq!(capitalize(Some("cAt")).as_deref(), Some("CAt"));
/// ```
pub fn capitalize(s: Option<&str>) -> Option<Cow<'_, str>> {
  s.map(|s| map_first(s, title_case))
}

/// Lowercases the first character, leaving the rest untouched.
pub fn uncapitalize(s: Option<&str>) -> Option<Cow<'_, str>> {
  s.map(|s| map_first(s, simple_lower))
}

/// Swaps upper and titlecase characters to lowercase and lowercase characters
/// to uppercase.
pub fn swap_case(s: Option<&str>) -> Option<String> {
  let s = s?;
  Some(
    s.chars()
      .map(|ch| {
        if ch.is_uppercase() || title_case(ch) == ch && simple_lower(ch) != ch {
          simple_lower(ch)
        } else if ch.is_lowercase() {
          simple_upper(ch)
        } else {
          ch
        }
      })
      .collect(),
  )
}
