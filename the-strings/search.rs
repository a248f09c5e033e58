//! Substring and character search.
//!
//! All searches report UTF-16 code unit positions and use `None` as the only
//! "not found" answer. Absent haystacks and absent needles are not errors,
//! they simply never match.
//!
//! Position rules shared by every forward search:
//! - a negative start is treated as `0`,
//! - an empty needle matches at the start, clamped to the haystack length,
//! - a non-empty needle never matches at or past the end.
//!
//! Backward searches treat a negative start as "nothing to search" and clamp
//! a start past the end to the last position the needle fits at.

use std::borrow::Cow;

use crate::text::{
  self,
  region_matches,
  units,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
  Sensitive,
  Insensitive,
}

fn find(hay: &[u16], needle: &[u16], start: isize, case: Case) -> Option<usize> {
  let start = text::clamp_start(start);
  if needle.is_empty() {
    return Some(start.min(hay.len()));
  }
  let last = hay.len().checked_sub(needle.len())?;
  (start..=last).find(|&i| region_matches(hay, i, needle, case == Case::Insensitive))
}

fn rfind(hay: &[u16], needle: &[u16], start: isize, case: Case) -> Option<usize> {
  let start = usize::try_from(start).ok()?;
  let last = hay.len().checked_sub(needle.len())?;
  let start = start.min(last);
  if needle.is_empty() {
    return Some(start);
  }
  (0..=start)
    .rev()
    .find(|&i| region_matches(hay, i, needle, case == Case::Insensitive))
}

fn encode(ch: char, buf: &mut [u16; 2]) -> &[u16] {
  ch.encode_utf16(buf)
}

/// Finds the first occurrence of `search` in `seq`.
///
/// ```
/// use the_strings::search::index_of;
///
/// assert_eq!(index_of(Some("aabaabaa"), Some("ab")), Some(1));
/// assert_eq!(index_of(Some("aabaabaa"), Some("")), Some(0));
/// assert_eq!(index_of(None, Some("a")), None);
/// ```
pub fn index_of(seq: Option<&str>, search: Option<&str>) -> Option<usize> {
  index_of_from(seq, search, 0)
}

/// Finds the first occurrence of `search` in `seq` at or after `start`.
pub fn index_of_from(seq: Option<&str>, search: Option<&str>, start: isize) -> Option<usize> {
  let (seq, search) = (seq?, search?);
  find(&units(seq), &units(search), start, Case::Sensitive)
}

/// Finds the first occurrence of `ch`. An empty `seq` never matches.
pub fn index_of_char(seq: Option<&str>, ch: char) -> Option<usize> {
  index_of_char_from(seq, ch, 0)
}

pub fn index_of_char_from(seq: Option<&str>, ch: char, start: isize) -> Option<usize> {
  let seq = seq.filter(|s| !s.is_empty())?;
  let mut buf = [0; 2];
  find(&units(seq), encode(ch, &mut buf), start, Case::Sensitive)
}

/// Finds the last occurrence of `search` in `seq`.
///
/// ```
/// use the_strings::search::last_index_of;
///
/// assert_eq!(last_index_of(Some("aabaabaa"), Some("ab")), Some(4));
/// assert_eq!(last_index_of(Some("aabaabaa"), Some("")), Some(8));
/// ```
pub fn last_index_of(seq: Option<&str>, search: Option<&str>) -> Option<usize> {
  last_index_of_from(seq, search, isize::MAX)
}

/// Finds the last occurrence of `search` starting at or before `start`.
pub fn last_index_of_from(seq: Option<&str>, search: Option<&str>, start: isize) -> Option<usize> {
  let (seq, search) = (seq?, search?);
  rfind(&units(seq), &units(search), start, Case::Sensitive)
}

pub fn last_index_of_char(seq: Option<&str>, ch: char) -> Option<usize> {
  last_index_of_char_from(seq, ch, isize::MAX)
}

pub fn last_index_of_char_from(seq: Option<&str>, ch: char, start: isize) -> Option<usize> {
  let seq = seq.filter(|s| !s.is_empty())?;
  let mut buf = [0; 2];
  rfind(&units(seq), encode(ch, &mut buf), start, Case::Sensitive)
}

/// Case-insensitive [`index_of`].
///
/// Characters are compared one code unit at a time, so folds that change the
/// length of the text (`ß` to `SS`) never shift positions.
pub fn index_of_ignore_case(seq: Option<&str>, search: Option<&str>) -> Option<usize> {
  index_of_ignore_case_from(seq, search, 0)
}

pub fn index_of_ignore_case_from(
  seq: Option<&str>,
  search: Option<&str>,
  start: isize,
) -> Option<usize> {
  let (seq, search) = (seq?, search?);
  find(&units(seq), &units(search), start, Case::Insensitive)
}

pub fn last_index_of_ignore_case(seq: Option<&str>, search: Option<&str>) -> Option<usize> {
  last_index_of_ignore_case_from(seq, search, isize::MAX)
}

pub fn last_index_of_ignore_case_from(
  seq: Option<&str>,
  search: Option<&str>,
  start: isize,
) -> Option<usize> {
  let (seq, search) = (seq?, search?);
  rfind(&units(seq), &units(search), start, Case::Insensitive)
}

fn ordinal_search(
  seq: Option<&str>,
  search: Option<&str>,
  ordinal: isize,
  backward: bool,
) -> Option<usize> {
  let (seq, search) = (seq?, search?);
  if ordinal <= 0 {
    return None;
  }
  let hay = units(seq);
  let needle = units(search);
  if needle.is_empty() {
    return Some(if backward { hay.len() } else { 0 });
  }

  // Matches may overlap: every step resumes one unit past the previous match.
  let mut index = if backward { text::signed(hay.len()) } else { -1 };
  for _ in 0..ordinal {
    let found = if backward {
      rfind(&hay, &needle, index - 1, Case::Sensitive)
    } else {
      find(&hay, &needle, index + 1, Case::Sensitive)
    }?;
    index = text::signed(found);
  }
  usize::try_from(index).ok()
}

/// Finds the `ordinal`-th (1-based) occurrence of `search`.
///
/// ```
/// use the_strings::search::ordinal_index_of;
///
/// assert_eq!(ordinal_index_of(Some("ababab"), Some("aba"), 2), Some(2));
/// assert_eq!(ordinal_index_of(Some("ababab"), Some("aba"), 0), None);
/// ```
pub fn ordinal_index_of(seq: Option<&str>, search: Option<&str>, ordinal: isize) -> Option<usize> {
  ordinal_search(seq, search, ordinal, false)
}

/// Finds the `ordinal`-th (1-based) occurrence of `search`, counting from the end.
pub fn last_ordinal_index_of(
  seq: Option<&str>,
  search: Option<&str>,
  ordinal: isize,
) -> Option<usize> {
  ordinal_search(seq, search, ordinal, true)
}

/// Smallest index at which any of `searches` occurs. Absent candidates are
/// skipped.
pub fn index_of_any_str(seq: Option<&str>, searches: Option<&[Option<&str>]>) -> Option<usize> {
  let hay = units(seq?);
  searches?
    .iter()
    .flatten()
    .filter_map(|search| find(&hay, &units(search), 0, Case::Sensitive))
    .min()
}

/// Largest index at which any of `searches` occurs. Absent candidates are
/// skipped.
pub fn last_index_of_any_str(
  seq: Option<&str>,
  searches: Option<&[Option<&str>]>,
) -> Option<usize> {
  let hay = units(seq?);
  searches?
    .iter()
    .flatten()
    .filter_map(|search| rfind(&hay, &units(search), isize::MAX, Case::Sensitive))
    .max()
}

pub fn contains(seq: Option<&str>, search: Option<&str>) -> bool {
  index_of(seq, search).is_some()
}

pub fn contains_char(seq: Option<&str>, ch: char) -> bool {
  index_of_char(seq, ch).is_some()
}

pub fn contains_ignore_case(seq: Option<&str>, search: Option<&str>) -> bool {
  index_of_ignore_case(seq, search).is_some()
}

/// Whether any of `searches` occurs in `seq`. An empty `seq` contains
/// nothing and absent candidates are skipped.
///
/// ```
/// use the_strings::search::contains_any_str;
///
/// assert!(contains_any_str(Some("abc"), Some(&[Some("d"), Some("abc")])));
/// assert!(!contains_any_str(Some(""), Some(&[Some("")])));
/// ```
pub fn contains_any_str(seq: Option<&str>, searches: Option<&[Option<&str>]>) -> bool {
  let Some(seq) = seq.filter(|s| !s.is_empty()) else {
    return false;
  };
  searches.is_some_and(|searches| searches.iter().any(|&search| contains(Some(seq), search)))
}

/// Counts non-overlapping occurrences of `sub`. Empty or absent inputs count
/// zero.
pub fn count_matches(seq: Option<&str>, sub: Option<&str>) -> usize {
  let (Some(seq), Some(sub)) = (seq, sub) else {
    return 0;
  };
  if seq.is_empty() || sub.is_empty() {
    return 0;
  }
  let hay = units(seq);
  let needle = units(sub);
  let mut count = 0;
  let mut from = 0;
  while let Some(at) = find(&hay, &needle, text::signed(from), Case::Sensitive) {
    count += 1;
    from = at + needle.len();
  }
  count
}

pub fn count_matches_char(seq: Option<&str>, ch: char) -> usize {
  seq.map_or(0, |seq| seq.chars().filter(|&c| c == ch).count())
}

/// Position of the first code unit at which `a` and `b` differ.
///
/// Identical inputs (including two absent ones) have no difference. When only
/// one side is absent the difference starts at `0`.
pub fn index_of_difference(a: Option<&str>, b: Option<&str>) -> Option<usize> {
  match (a, b) {
    (None, None) => None,
    (None, Some(_)) | (Some(_), None) => Some(0),
    (Some(a), Some(b)) => {
      let (a, b) = (units(a), units(b));
      let common = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
      (common < a.len() || common < b.len()).then_some(common)
    },
  }
}

/// Position at which the texts in `all` start to differ.
///
/// Fewer than two entries, all entries absent, or all entries empty have no
/// difference. Any absent or empty entry among non-empty ones differs at `0`.
pub fn index_of_difference_all(all: &[Option<&str>]) -> Option<usize> {
  if all.len() <= 1 {
    return None;
  }
  let texts: Vec<Option<Vec<u16>>> = all.iter().map(|s| s.map(units)).collect();
  let any_absent = texts.iter().any(Option::is_none);
  let present = || texts.iter().flatten();
  let shortest = if any_absent {
    0
  } else {
    present().map(Vec::len).min().unwrap_or(0)
  };
  let longest = present().map(Vec::len).max();

  match longest {
    None => return None,
    Some(0) if !any_absent => return None,
    _ => {},
  }
  if shortest == 0 {
    return Some(0);
  }

  // Every entry is present and non-empty from here on.
  let first = texts[0].as_deref().unwrap_or_default();
  let diff = (0..shortest).find(|&pos| present().skip(1).any(|other| other[pos] != first[pos]));
  match diff {
    Some(pos) => Some(pos),
    None if longest != Some(shortest) => Some(shortest),
    None => None,
  }
}

/// The remainder of `b` from the point where it differs from `a`.
///
/// ```
/// use the_strings::search::difference;
///
/// assert_eq!(difference(Some("abcde"), Some("abxyz")).as_deref(), Some("xyz"));
/// assert_eq!(difference(Some("abc"), Some("abc")).as_deref(), Some(""));
/// ```
pub fn difference<'a>(a: Option<&'a str>, b: Option<&'a str>) -> Option<Cow<'a, str>> {
  let (a, b) = match (a, b) {
    (None, b) => return b.map(Cow::Borrowed),
    (a, None) => return a.map(Cow::Borrowed),
    (Some(a), Some(b)) => (a, b),
  };
  match index_of_difference(Some(a), Some(b)) {
    None => Some(Cow::Borrowed("")),
    Some(at) => Some(text::slice(b, at, text::len_utf16(b))),
  }
}

/// The longest prefix shared by every entry of `all`.
///
/// Absent entries share nothing with present ones.
pub fn common_prefix<'a>(all: &[Option<&'a str>]) -> Cow<'a, str> {
  let Some(first) = all.first() else {
    return Cow::Borrowed("");
  };
  match index_of_difference_all(all) {
    None => Cow::Borrowed(first.unwrap_or_default()),
    Some(0) => Cow::Borrowed(""),
    Some(at) => text::slice(first.unwrap_or_default(), 0, at),
  }
}
