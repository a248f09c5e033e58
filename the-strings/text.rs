//! UTF-16 code unit view over `str`.
//!
//! Positions handed out and accepted by this crate count UTF-16 code units,
//! so a character outside the Basic Multilingual Plane occupies two positions.
//! Slicing at a position that splits a surrogate pair yields U+FFFD for the
//! orphaned half; the replacement is itself one code unit wide, so lengths
//! measured in code units are preserved.

use std::borrow::Cow;

/// Number of UTF-16 code units needed to encode `s`.
#[inline]
#[must_use]
pub fn len_utf16(s: &str) -> usize {
  s.chars().map(char::len_utf16).sum()
}

/// Collects the UTF-16 code units of `s`.
#[inline]
pub fn units(s: &str) -> Vec<u16> {
  s.encode_utf16().collect()
}

/// Converts a code unit position into a byte offset.
///
/// Returns `None` when `unit_idx` is past the end of `s` or falls between the
/// two halves of a surrogate pair.
#[must_use]
pub fn byte_offset(s: &str, unit_idx: usize) -> Option<usize> {
  let mut pos = 0;
  for (byte_idx, ch) in s.char_indices() {
    if pos == unit_idx {
      return Some(byte_idx);
    }
    if pos > unit_idx {
      return None;
    }
    pos += ch.len_utf16();
  }
  (pos == unit_idx).then_some(s.len())
}

/// Returns the code units `start..end` of `s`.
///
/// Borrows from `s` whenever both ends fall on character boundaries.
///
/// # Panics
///
/// Panics if `start > end` or `end` exceeds the code unit length of `s`.
pub fn slice(s: &str, start: usize, end: usize) -> Cow<'_, str> {
  match (byte_offset(s, start), byte_offset(s, end)) {
    (Some(from), Some(to)) => Cow::Borrowed(&s[from..to]),
    _ => Cow::Owned(String::from_utf16_lossy(&units(s)[start..end])),
  }
}

/// Iterates over the characters of `s` together with their code unit offset.
pub fn char_offsets(s: &str) -> impl Iterator<Item = (usize, char)> + '_ {
  s.chars().scan(0, |pos, ch| {
    let at = *pos;
    *pos += ch.len_utf16();
    Some((at, ch))
  })
}

/// Clamps a possibly negative position to `0`.
#[inline]
pub(crate) fn clamp_start(pos: isize) -> usize {
  usize::try_from(pos).unwrap_or(0)
}

/// Converts a code unit count into a signed position, saturating at `isize::MAX`.
#[inline]
pub(crate) fn signed(n: usize) -> isize {
  isize::try_from(n).unwrap_or(isize::MAX)
}

/// Single character mapping to uppercase; characters whose uppercase form
/// spans several characters map to themselves.
#[inline]
pub(crate) fn simple_upper(ch: char) -> char {
  let mut upper = ch.to_uppercase();
  match (upper.next(), upper.next()) {
    (Some(mapped), None) => mapped,
    _ => ch,
  }
}

/// Single character mapping to lowercase, see [`simple_upper`].
#[inline]
pub(crate) fn simple_lower(ch: char) -> char {
  let mut lower = ch.to_lowercase();
  match (lower.next(), lower.next()) {
    (Some(mapped), None) => mapped,
    _ => ch,
  }
}

/// Compares two code units without regard to case.
///
/// Units are equal when identical, when their uppercase forms match, or when
/// the lowercase forms of those uppercase forms match. Surrogate halves only
/// ever compare equal to themselves.
pub fn unit_eq_ignore_case(a: u16, b: u16) -> bool {
  if a == b {
    return true;
  }
  let (Some(a), Some(b)) = (char::from_u32(a.into()), char::from_u32(b.into())) else {
    return false;
  };
  let (a, b) = (simple_upper(a), simple_upper(b));
  a == b || simple_lower(a) == simple_lower(b)
}

/// Whether `hay[offset..]` starts with `needle`, comparing units with
/// [`unit_eq_ignore_case`] when `ignore_case` is set.
pub(crate) fn region_matches(hay: &[u16], offset: usize, needle: &[u16], ignore_case: bool) -> bool {
  let Some(region) = hay.get(offset..offset + needle.len()) else {
    return false;
  };
  if ignore_case {
    region
      .iter()
      .zip(needle)
      .all(|(&a, &b)| unit_eq_ignore_case(a, b))
  } else {
    region == needle
  }
}
