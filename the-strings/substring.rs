//! Position-clamped substrings.
//!
//! Positions past either end are clamped instead of failing, and negative
//! lengths produce the empty text.

use std::borrow::Cow;

use crate::text::{
  self,
  len_utf16,
};

/// The leftmost `len` code units of `s`.
///
/// ```
/// use the_strings::substring::left;
///
/// assert_eq!(left(Some("abc"), 2).as_deref(), Some("ab"));
/// assert_eq!(left(Some("abc"), 4).as_deref(), Some("abc"));
/// assert_eq!(left(Some("abc"), -1).as_deref(), Some(""));
/// ```
pub fn left(s: Option<&str>, len: isize) -> Option<Cow<'_, str>> {
  let s = s?;
  let Ok(len) = usize::try_from(len) else {
    return Some(Cow::Borrowed(""));
  };
  Some(text::slice(s, 0, len.min(len_utf16(s))))
}

/// The rightmost `len` code units of `s`.
pub fn right(s: Option<&str>, len: isize) -> Option<Cow<'_, str>> {
  let s = s?;
  let Ok(len) = usize::try_from(len) else {
    return Some(Cow::Borrowed(""));
  };
  let total = len_utf16(s);
  Some(text::slice(s, total.saturating_sub(len), total))
}

/// `len` code units of `s` starting at `pos`.
///
/// A negative `pos` counts as `0`; a `pos` past the end gives the empty text.
pub fn mid(s: Option<&str>, pos: isize, len: isize) -> Option<Cow<'_, str>> {
  let s = s?;
  let total = len_utf16(s);
  let pos = text::clamp_start(pos);
  let Ok(len) = usize::try_from(len) else {
    return Some(Cow::Borrowed(""));
  };
  if pos > total {
    return Some(Cow::Borrowed(""));
  }
  Some(text::slice(s, pos, pos.saturating_add(len).min(total)))
}

/// Replaces the code units `start..end` of `s` with `overlay`.
///
/// Both positions are clamped to the text and swapped if reversed, so an
/// overlay past the end is appended. An absent overlay deletes the range.
///
/// ```
/// use the_strings::substring::overlay;
///
/// assert_eq!(overlay(Some("abcdef"), Some("zzzz"), 2, 4).as_deref(), Some("abzzzzef"));
/// assert_eq!(overlay(Some("abcdef"), Some("zzzz"), 4, 2).as_deref(), Some("abzzzzef"));
/// assert_eq!(overlay(Some("abcdef"), Some("zzzz"), 8, 10).as_deref(), Some("abcdefzzzz"));
/// ```
pub fn overlay<'a>(s: Option<&'a str>, overlay: Option<&str>, start: isize, end: isize) -> Option<Cow<'a, str>> {
  let s = s?;
  let overlay = overlay.unwrap_or_default();
  let total = len_utf16(s);
  let start = text::clamp_start(start).min(total);
  let end = text::clamp_start(end).min(total);
  let (start, end) = if start > end { (end, start) } else { (start, end) };
  if overlay.is_empty() && start == end {
    return Some(Cow::Borrowed(s));
  }

  let mut out = text::slice(s, 0, start).into_owned();
  out.push_str(overlay);
  out.push_str(&text::slice(s, end, total));
  Some(Cow::Owned(out))
}
