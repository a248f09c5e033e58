//! Fallbacks for absent, empty and blank texts.

use crate::predicates::{
  is_blank,
  is_empty,
};

/// `s`, or the empty text when absent.
pub fn default_string(s: Option<&str>) -> &str {
  s.unwrap_or_default()
}

/// `s` unless it is empty, otherwise `default`.
///
/// ```
/// use the_strings::defaults::default_if_empty;
///
/// assert_eq!(default_if_empty(Some(""), Some("NULL")), Some("NULL"));
/// assert_eq!(default_if_empty(Some(" "), Some("NULL")), Some(" "));
/// ```
pub fn default_if_empty<'a>(s: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
  if is_empty(s) { default } else { s }
}

/// `s` unless it is blank, otherwise `default`.
pub fn default_if_blank<'a>(s: Option<&'a str>, default: Option<&'a str>) -> Option<&'a str> {
  if is_blank(s) { default } else { s }
}

/// `s` unless it is empty, otherwise whatever `default` produces. `default`
/// only runs when it is needed.
///
/// ```
/// use the_strings::defaults::get_if_empty;
///
/// assert_eq!(get_if_empty(None, || Some("NULL")), Some("NULL"));
/// assert_eq!(get_if_empty(Some(" "), || Some("NULL")), Some(" "));
/// ```
pub fn get_if_empty<'a>(
  s: Option<&'a str>,
  default: impl FnOnce() -> Option<&'a str>,
) -> Option<&'a str> {
  if is_empty(s) { default() } else { s }
}

/// `s` unless it is blank, otherwise whatever `default` produces.
pub fn get_if_blank<'a>(
  s: Option<&'a str>,
  default: impl FnOnce() -> Option<&'a str>,
) -> Option<&'a str> {
  if is_blank(s) { default() } else { s }
}

/// The first text that is not empty.
pub fn first_non_empty<'a>(all: &[Option<&'a str>]) -> Option<&'a str> {
  all.iter().copied().find(|&s| !is_empty(s)).flatten()
}

/// The first text that is not blank.
pub fn first_non_blank<'a>(all: &[Option<&'a str>]) -> Option<&'a str> {
  all.iter().copied().find(|&s| !is_blank(s)).flatten()
}
