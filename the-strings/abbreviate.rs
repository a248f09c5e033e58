//! Width-constrained abbreviation with a replacement marker.
//!
//! Widths, offsets and marker lengths are all counted in UTF-16 code units,
//! and an abbreviated result is never wider than the requested width.

use std::borrow::Cow;

use crate::{
  Error,
  Result,
  text::{
    self,
    len_utf16,
  },
};

/// Marker used by [`abbreviate`] and [`abbreviate_at`].
pub const ELLIPSIS: &str = "...";

/// Abbreviates `s` to at most `max_width` units, ending in `"..."`.
///
/// ```
/// use the_strings::abbreviate::abbreviate;
///
/// assert_eq!(abbreviate(Some("abcdefg"), 6).unwrap().as_deref(), Some("abc..."));
/// assert_eq!(abbreviate(Some("abcdefg"), 7).unwrap().as_deref(), Some("abcdefg"));
/// assert!(abbreviate(Some("abcdefg"), 3).is_err());
/// ```
pub fn abbreviate(s: Option<&str>, max_width: isize) -> Result<Option<Cow<'_, str>>> {
  abbreviate_with_marker_at(s, Some(ELLIPSIS), 0, max_width)
}

/// Abbreviates `s` so that the unit at `offset` stays visible somewhere in
/// the result, with `"..."` standing in for the cut parts.
///
/// ```
/// use the_strings::abbreviate::abbreviate_at;
///
/// assert_eq!(abbreviate_at(Some("abcdefghijklmno"), 6, 10).unwrap().as_deref(), Some("...ghij..."));
/// ```
pub fn abbreviate_at(s: Option<&str>, offset: isize, max_width: isize) -> Result<Option<Cow<'_, str>>> {
  abbreviate_with_marker_at(s, Some(ELLIPSIS), offset, max_width)
}

pub fn abbreviate_with_marker<'a>(
  s: Option<&'a str>,
  marker: Option<&str>,
  max_width: isize,
) -> Result<Option<Cow<'a, str>>> {
  abbreviate_with_marker_at(s, marker, 0, max_width)
}

/// Abbreviates `s` to at most `max_width` units using `marker` for the cut
/// parts, keeping the unit at `offset` visible.
///
/// An absent text or marker is passed through. An empty marker truncates the
/// text to `max_width` units instead.
///
/// # Errors
///
/// [`Error::AbbreviationWidth`] if `max_width` leaves no room for the marker
/// and one unit of text, [`Error::AbbreviationWidthWithOffset`] if an offset
/// abbreviation needs markers on both ends and `max_width` leaves no room for
/// them.
pub fn abbreviate_with_marker_at<'a>(
  s: Option<&'a str>,
  marker: Option<&str>,
  offset: isize,
  max_width: isize,
) -> Result<Option<Cow<'a, str>>> {
  let Some(s) = s else {
    return Ok(None);
  };
  let marker = match marker {
    None => return Ok(Some(Cow::Borrowed(s))),
    Some("") => {
      if s.is_empty() || max_width <= 0 {
        return Ok(Some(Cow::Borrowed(s)));
      }
      let width = text::clamp_start(max_width).min(len_utf16(s));
      return Ok(Some(text::slice(s, 0, width)));
    },
    Some(marker) => marker,
  };
  if s.is_empty() {
    return Ok(Some(Cow::Borrowed(s)));
  }
  abbreviate_units(s, marker, offset, max_width).map(Some)
}

fn abbreviate_units<'a>(s: &'a str, marker: &str, offset: isize, max_width: isize) -> Result<Cow<'a, str>> {
  let marker_len = len_utf16(marker);
  let min_width = marker_len + 1;
  let min_width_with_offset = 2 * marker_len + 1;

  let max_width = match usize::try_from(max_width) {
    Ok(max_width) if max_width >= min_width => max_width,
    _ => return Err(Error::AbbreviationWidth(min_width)),
  };
  let len = len_utf16(s);
  if len <= max_width {
    return Ok(Cow::Borrowed(s));
  }

  let keep = max_width - marker_len;
  let mut offset = text::clamp_start(offset).min(len);
  // Slide the window left so it still fills up when the tail is short.
  if len - offset < keep {
    offset = len - keep;
  }
  if offset <= marker_len + 1 {
    let mut out = text::slice(s, 0, keep).into_owned();
    out.push_str(marker);
    return Ok(Cow::Owned(out));
  }
  if max_width < min_width_with_offset {
    return Err(Error::AbbreviationWidthWithOffset(min_width_with_offset));
  }

  let mut out = String::from(marker);
  if offset + keep < len {
    let tail = text::slice(s, offset, len);
    out.push_str(&abbreviate_units(&tail, marker, 0, text::signed(keep))?);
  } else {
    out.push_str(&text::slice(s, len - keep, len));
  }
  Ok(Cow::Owned(out))
}

/// Shortens `s` to `length` units by replacing its middle with `middle`.
///
/// The kept units are split between both ends, the front getting the extra
/// one. Nothing happens unless `s` is longer than `length` and `length`
/// leaves room for `middle` plus one unit on each side.
///
/// ```
/// use the_strings::abbreviate::abbreviate_middle;
///
/// assert_eq!(abbreviate_middle(Some("abcdef"), Some("."), 4).as_deref(), Some("ab.f"));
/// assert_eq!(abbreviate_middle(Some("abc"), Some("."), 3).as_deref(), Some("abc"));
/// ```
pub fn abbreviate_middle<'a>(s: Option<&'a str>, middle: Option<&str>, length: isize) -> Option<Cow<'a, str>> {
  let s = s?;
  let Some(middle) = middle.filter(|middle| !middle.is_empty()) else {
    return Some(Cow::Borrowed(s));
  };
  let len = len_utf16(s);
  let middle_len = len_utf16(middle);
  let length = text::clamp_start(length);
  if s.is_empty() || length >= len || length < middle_len + 2 {
    return Some(Cow::Borrowed(s));
  }

  let target = length - middle_len;
  let start = target.div_ceil(2);
  let end = len - target / 2;
  let mut out = text::slice(s, 0, start).into_owned();
  out.push_str(middle);
  out.push_str(&text::slice(s, end, len));
  Some(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALPHABET: &str = "abcdefghijklmno";

  fn abbr(s: &str, max_width: isize) -> String {
    abbreviate(Some(s), max_width).unwrap().unwrap().into_owned()
  }

  fn abbr_at(s: &str, offset: isize, max_width: isize) -> String {
    abbreviate_at(Some(s), offset, max_width).unwrap().unwrap().into_owned()
  }

  fn abbr_marker(s: &str, marker: &str, offset: isize, max_width: isize) -> String {
    abbreviate_with_marker_at(Some(s), Some(marker), offset, max_width)
      .unwrap()
      .unwrap()
      .into_owned()
  }

  #[test]
  fn test_abbreviate() {
    assert_eq!(abbreviate(None, 4), Ok(None));
    assert_eq!(abbr("", 4), "");
    assert_eq!(abbr("abcdefg", 6), "abc...");
    assert_eq!(abbr("abcdefg", 7), "abcdefg");
    assert_eq!(abbr("abcdefg", 8), "abcdefg");
    assert_eq!(abbr("abcdefg", 4), "a...");
    assert_eq!(abbreviate(Some("abcdefg"), 3), Err(Error::AbbreviationWidth(4)));
    assert_eq!(abbreviate(Some("abcdefg"), -1), Err(Error::AbbreviationWidth(4)));
    // The empty text passes through whatever the width.
    assert_eq!(abbr("", 0), "");
  }

  #[test]
  fn test_abbreviate_at() {
    assert_eq!(abbreviate_at(None, 0, 4), Ok(None));
    assert_eq!(abbr_at("", 0, 4), "");
    assert_eq!(abbr_at(ALPHABET, -1, 10), "abcdefg...");
    assert_eq!(abbr_at(ALPHABET, 0, 10), "abcdefg...");
    assert_eq!(abbr_at(ALPHABET, 1, 10), "abcdefg...");
    assert_eq!(abbr_at(ALPHABET, 4, 10), "abcdefg...");
    assert_eq!(abbr_at(ALPHABET, 5, 10), "...fghi...");
    assert_eq!(abbr_at(ALPHABET, 6, 10), "...ghij...");
    assert_eq!(abbr_at(ALPHABET, 8, 10), "...ijklmno");
    assert_eq!(abbr_at(ALPHABET, 10, 10), "...ijklmno");
    assert_eq!(abbr_at(ALPHABET, 12, 10), "...ijklmno");
    assert_eq!(abbr_at(ALPHABET, isize::MAX, 10), "...ijklmno");
    assert_eq!(
      abbreviate_at(Some("abcdefghij"), 0, 3),
      Err(Error::AbbreviationWidth(4))
    );
    assert_eq!(
      abbreviate_at(Some("abcdefghij"), 5, 6),
      Err(Error::AbbreviationWidthWithOffset(7))
    );
  }

  #[test]
  fn test_abbreviate_with_marker() {
    let with = |s: &str, marker: &str, w: isize| {
      abbreviate_with_marker(Some(s), Some(marker), w)
        .unwrap()
        .unwrap()
        .into_owned()
    };
    assert_eq!(abbreviate_with_marker(None, Some("..."), 4), Ok(None));
    assert_eq!(
      abbreviate_with_marker(Some("abcdefg"), None, 2).unwrap().as_deref(),
      Some("abcdefg")
    );
    assert_eq!(with("", "...", 4), "");
    assert_eq!(with("abcdefg", ".", 5), "abcd.");
    assert_eq!(with("abcdefg", ".", 7), "abcdefg");
    assert_eq!(with("abcdefg", ".", 8), "abcdefg");
    assert_eq!(with("abcdefg", "..", 4), "ab..");
    assert_eq!(with("abcdefg", "..", 3), "a..");
    assert_eq!(
      abbreviate_with_marker(Some("abcdefg"), Some(".."), 2),
      Err(Error::AbbreviationWidth(3))
    );
    assert_eq!(
      abbreviate_with_marker(Some("abcdefg"), Some("..."), 3),
      Err(Error::AbbreviationWidth(4))
    );
  }

  #[test]
  fn test_abbreviate_with_marker_at() {
    assert_eq!(abbreviate_with_marker_at(None, None, 0, 0), Ok(None));
    assert_eq!(
      abbreviate_with_marker_at(Some(ALPHABET), None, 3, 4).unwrap().as_deref(),
      Some(ALPHABET)
    );
    assert_eq!(abbr_marker("", "...", 0, 4), "");
    assert_eq!(abbr_marker(ALPHABET, "---", -1, 10), "abcdefg---");
    assert_eq!(abbr_marker(ALPHABET, ",", 0, 10), "abcdefghi,");
    assert_eq!(abbr_marker(ALPHABET, ",", 1, 10), "abcdefghi,");
    assert_eq!(abbr_marker(ALPHABET, ",", 2, 10), "abcdefghi,");
    assert_eq!(abbr_marker(ALPHABET, "::", 4, 10), "::efghij::");
    assert_eq!(abbr_marker(ALPHABET, "...", 6, 10), "...ghij...");
    assert_eq!(abbr_marker(ALPHABET, "*", 9, 10), "*ghijklmno");
    assert_eq!(abbr_marker(ALPHABET, "'", 10, 10), "'ghijklmno");
    assert_eq!(abbr_marker(ALPHABET, "!", 12, 10), "!ghijklmno");
    assert_eq!(
      abbreviate_with_marker_at(Some("abcdefghij"), Some("abra"), 0, 4),
      Err(Error::AbbreviationWidth(5))
    );
    assert_eq!(
      abbreviate_with_marker_at(Some("abcdefghij"), Some("..."), 5, 6),
      Err(Error::AbbreviationWidthWithOffset(7))
    );
  }

  #[test]
  fn test_empty_marker_truncates() {
    assert_eq!(abbr_marker("abcdefg", "", 0, 3), "abc");
    assert_eq!(abbr_marker("abcdefg", "", 4, 3), "abc");
    assert_eq!(abbr_marker("abc", "", 0, 10), "abc");
    assert_eq!(abbr_marker("abcdefg", "", 0, 0), "abcdefg");
    assert_eq!(abbr_marker("", "", 0, 3), "");
  }

  #[test]
  fn test_abbreviate_counts_code_units() {
    // Each emoji is two units wide; cutting one in half leaves a replacement
    // character so the width still holds.
    let s = "\u{1F600}\u{1F600}\u{1F600}\u{1F600}";
    assert_eq!(abbr(s, 6), "\u{1F600}\u{FFFD}...");
    assert_eq!(abbr(s, 7), "\u{1F600}\u{1F600}...");
    assert_eq!(abbr(s, 8), s);
  }

  #[test]
  fn test_abbreviate_middle() {
    assert_eq!(abbreviate_middle(None, None, 0), None);
    assert_eq!(abbreviate_middle(Some("abc"), None, 0).as_deref(), Some("abc"));
    assert_eq!(abbreviate_middle(Some("abc"), Some("."), 0).as_deref(), Some("abc"));
    assert_eq!(abbreviate_middle(Some("abc"), Some("."), 3).as_deref(), Some("abc"));
    assert_eq!(abbreviate_middle(Some("abcdef"), Some("."), 4).as_deref(), Some("ab.f"));
    assert_eq!(abbreviate_middle(Some("abcdef"), Some(""), 4).as_deref(), Some("abcdef"));
    assert_eq!(abbreviate_middle(Some(""), Some("."), 4).as_deref(), Some(""));
    assert_eq!(abbreviate_middle(Some("abcdef"), Some("."), -4).as_deref(), Some("abcdef"));
    assert_eq!(
      abbreviate_middle(Some("Now is the time"), Some("..."), 9).as_deref(),
      Some("Now...ime")
    );
  }

  quickcheck::quickcheck! {
      fn abbreviation_never_exceeds_width(s: String, offset: i8, width: u8) -> bool {
          let width = isize::from(width) + 7;
          let abbreviated = abbreviate_at(Some(&s), isize::from(offset), width).unwrap().unwrap();
          len_utf16(&abbreviated) <= width as usize
      }

      fn abbreviate_middle_hits_the_length(s: String, length: u8) -> bool {
          let length = usize::from(length);
          let shortened = abbreviate_middle(Some(&s), Some("..."), length as isize).unwrap();
          let len = len_utf16(&s);
          if length < len && length >= 5 {
              len_utf16(&shortened) == length
          } else {
              shortened == s
          }
      }
  }
}
