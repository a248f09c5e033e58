//! Repetition, padding and centering.
//!
//! Widths are measured in UTF-16 code units. Padding never truncates: a text
//! already at or above the requested size is returned as is. Absent or empty
//! pad strings pad with a single space; longer pad strings are repeated one
//! code unit at a time and cut to fit.

use std::borrow::Cow;

use crate::text::{
  self,
  len_utf16,
  units,
};

/// Largest number of pad units produced through the single character path.
pub const PAD_LIMIT: usize = 8192;

const SPACE: &str = " ";

/// Repeats `s` `times` times. A non-positive count yields the empty text.
///
/// ```
/// use the_strings::pad::repeat;
///
/// assert_eq!(repeat(Some("ab"), 3).as_deref(), Some("ababab"));
/// assert_eq!(repeat(Some("ab"), -2).as_deref(), Some(""));
/// assert_eq!(repeat(None, 2), None);
/// ```
pub fn repeat(s: Option<&str>, times: isize) -> Option<Cow<'_, str>> {
  let s = s?;
  let Ok(times) = usize::try_from(times) else {
    return Some(Cow::Borrowed(""));
  };
  Some(match times {
    0 => Cow::Borrowed(""),
    1 => Cow::Borrowed(s),
    _ if s.is_empty() => Cow::Borrowed(s),
    _ => Cow::Owned(s.repeat(times)),
  })
}

/// Repeats `ch` `times` times. A non-positive count yields the empty text.
pub fn repeat_char(ch: char, times: isize) -> String {
  let times = text::clamp_start(times);
  std::iter::repeat_n(ch, times).collect()
}

/// Number of pad units needed to bring `s` up to `size`, if any.
fn pad_count(s: &str, size: isize) -> Option<usize> {
  let size = usize::try_from(size).ok()?;
  size.checked_sub(len_utf16(s)).filter(|&pads| pads > 0)
}

/// Exactly `count` code units taken cyclically from `pad`.
fn padding(pad: &str, count: usize) -> Cow<'_, str> {
  let pad_len = len_utf16(pad);
  if count == pad_len {
    return Cow::Borrowed(pad);
  }
  if count < pad_len {
    return text::slice(pad, 0, count);
  }
  let pad = units(pad);
  let cycled: Vec<u16> = pad.iter().copied().cycle().take(count).collect();
  Cow::Owned(String::from_utf16_lossy(&cycled))
}

/// Pad units for the single character path, or `None` when the character
/// path does not apply.
fn char_padding(ch: char, pads: usize) -> Option<String> {
  if ch.len_utf16() != 1 {
    tracing::trace!(?ch, "pad character spans a surrogate pair, padding by code unit");
    return None;
  }
  if pads > PAD_LIMIT {
    tracing::trace!(pads, limit = PAD_LIMIT, "padding above limit, using the pad string path");
    return None;
  }
  Some(std::iter::repeat_n(ch, pads).collect())
}

fn effective_pad(pad: Option<&str>) -> &str {
  pad.filter(|pad| !pad.is_empty()).unwrap_or(SPACE)
}

fn pad_with<'a>(pad: Cow<'_, str>, s: &'a str, left: bool) -> Cow<'a, str> {
  let mut out = String::with_capacity(pad.len() + s.len());
  if left {
    out.push_str(&pad);
    out.push_str(s);
  } else {
    out.push_str(s);
    out.push_str(&pad);
  }
  Cow::Owned(out)
}

fn pad_char(s: Option<&str>, size: isize, ch: char, left: bool) -> Option<Cow<'_, str>> {
  let s = s?;
  let Some(pads) = pad_count(s, size) else {
    return Some(Cow::Borrowed(s));
  };
  let pad = match char_padding(ch, pads) {
    Some(pad) => Cow::Owned(pad),
    None => {
      let mut buf = [0; 4];
      return pad_str(Some(s), size, Some(ch.encode_utf8(&mut buf)), left);
    },
  };
  Some(pad_with(pad, s, left))
}

fn pad_str<'a>(s: Option<&'a str>, size: isize, pad: Option<&str>, left: bool) -> Option<Cow<'a, str>> {
  let s = s?;
  let pad = effective_pad(pad);
  let Some(pads) = pad_count(s, size) else {
    return Some(Cow::Borrowed(s));
  };
  let mut chars = pad.chars();
  let single = match (chars.next(), chars.next()) {
    (Some(ch), None) => char_padding(ch, pads),
    _ => None,
  };
  let pad = match single {
    Some(single) => Cow::Owned(single),
    None => padding(pad, pads),
  };
  Some(pad_with(pad, s, left))
}

/// Left pads `s` with spaces up to `size` code units.
///
/// ```
/// use the_strings::pad::left_pad;
///
/// assert_eq!(left_pad(Some("bat"), 5).as_deref(), Some("  bat"));
/// assert_eq!(left_pad(Some("bat"), 1).as_deref(), Some("bat"));
/// ```
pub fn left_pad(s: Option<&str>, size: isize) -> Option<Cow<'_, str>> {
  left_pad_char(s, size, ' ')
}

pub fn left_pad_char(s: Option<&str>, size: isize, pad: char) -> Option<Cow<'_, str>> {
  pad_char(s, size, pad, true)
}

/// Left pads `s` with `pad` up to `size` code units.
///
/// ```
/// use the_strings::pad::left_pad_str;
///
/// assert_eq!(left_pad_str(Some("bat"), 8, Some("yz")).as_deref(), Some("yzyzybat"));
/// assert_eq!(left_pad_str(Some("bat"), 5, None).as_deref(), Some("  bat"));
/// ```
pub fn left_pad_str<'a>(s: Option<&'a str>, size: isize, pad: Option<&str>) -> Option<Cow<'a, str>> {
  pad_str(s, size, pad, true)
}

pub fn right_pad(s: Option<&str>, size: isize) -> Option<Cow<'_, str>> {
  right_pad_char(s, size, ' ')
}

pub fn right_pad_char(s: Option<&str>, size: isize, pad: char) -> Option<Cow<'_, str>> {
  pad_char(s, size, pad, false)
}

pub fn right_pad_str<'a>(s: Option<&'a str>, size: isize, pad: Option<&str>) -> Option<Cow<'a, str>> {
  pad_str(s, size, pad, false)
}

/// Centers `s` in a text of `size` code units, padded with spaces.
///
/// When the padding cannot be split evenly the extra unit goes on the right.
pub fn center(s: Option<&str>, size: isize) -> Option<Cow<'_, str>> {
  center_char(s, size, ' ')
}

/// ```
/// use the_strings::pad::center_char;
///
/// assert_eq!(center_char(Some("a"), 4, 'y').as_deref(), Some("yayy"));
/// ```
pub fn center_char(s: Option<&str>, size: isize, pad: char) -> Option<Cow<'_, str>> {
  let s = s?;
  let Some(pads) = pad_count(s, size) else {
    return Some(Cow::Borrowed(s));
  };
  let left = left_pad_char(Some(s), text::signed(len_utf16(s) + pads / 2), pad)?;
  let centered = right_pad_char(Some(left.as_ref()), size, pad)?.into_owned();
  Some(Cow::Owned(centered))
}

pub fn center_str<'a>(s: Option<&'a str>, size: isize, pad: Option<&str>) -> Option<Cow<'a, str>> {
  let s = s?;
  let Some(pads) = pad_count(s, size) else {
    return Some(Cow::Borrowed(s));
  };
  let left = left_pad_str(Some(s), text::signed(len_utf16(s) + pads / 2), pad)?;
  let centered = right_pad_str(Some(left.as_ref()), size, pad)?.into_owned();
  Some(Cow::Owned(centered))
}
