//! Character-set membership scans.
//!
//! The haystack is walked one Unicode scalar value at a time, so a surrogate
//! pair is always consumed as a single supplementary character and can only
//! match that same character in the set. Reported positions are the UTF-16
//! code unit offsets of the matching character.
//!
//! | Function           | Absent text | Absent or empty set | Empty text |
//! |--------------------|-------------|---------------------|------------|
//! | `contains_any`     | false       | false               | false      |
//! | `contains_none`    | true        | true                | true       |
//! | `contains_only`    | false       | false               | true       |
//! | `index_of_any`     | `None`      | `None`              | `None`     |
//! | `index_of_any_but` | `None`      | `None`              | `None`     |

use crate::text::char_offsets;

/// A set of characters to test membership against.
pub trait CharSet {
  fn is_empty(&self) -> bool;
  fn has(&self, ch: char) -> bool;
}

impl CharSet for str {
  #[inline]
  fn is_empty(&self) -> bool {
    str::is_empty(self)
  }

  #[inline]
  fn has(&self, ch: char) -> bool {
    self.contains(ch)
  }
}

impl CharSet for [char] {
  #[inline]
  fn is_empty(&self) -> bool {
    <[char]>::is_empty(self)
  }

  #[inline]
  fn has(&self, ch: char) -> bool {
    self.contains(&ch)
  }
}

fn first_in<S: CharSet + ?Sized>(seq: &str, set: &S) -> Option<usize> {
  char_offsets(seq).find(|&(_, ch)| set.has(ch)).map(|(at, _)| at)
}

fn first_not_in<S: CharSet + ?Sized>(seq: &str, set: &S) -> Option<usize> {
  char_offsets(seq).find(|&(_, ch)| !set.has(ch)).map(|(at, _)| at)
}

fn any_of<S: CharSet + ?Sized>(seq: Option<&str>, set: Option<&S>) -> bool {
  match (seq, set) {
    (Some(seq), Some(set)) if !set.is_empty() => first_in(seq, set).is_some(),
    _ => false,
  }
}

fn none_of<S: CharSet + ?Sized>(seq: Option<&str>, set: Option<&S>) -> bool {
  match (seq, set) {
    (Some(seq), Some(set)) => first_in(seq, set).is_none(),
    _ => true,
  }
}

fn only_of<S: CharSet + ?Sized>(seq: Option<&str>, set: Option<&S>) -> bool {
  match (seq, set) {
    (Some(""), Some(_)) => true,
    (Some(seq), Some(set)) if !set.is_empty() => first_not_in(seq, set).is_none(),
    _ => false,
  }
}

fn index_in<S: CharSet + ?Sized>(seq: Option<&str>, set: Option<&S>) -> Option<usize> {
  let set = set.filter(|set| !set.is_empty())?;
  first_in(seq?, set)
}

fn index_not_in<S: CharSet + ?Sized>(seq: Option<&str>, set: Option<&S>) -> Option<usize> {
  let set = set.filter(|set| !set.is_empty())?;
  first_not_in(seq?, set)
}

/// Whether `seq` contains any character of `chars`.
///
/// ```
/// use the_strings::charset::contains_any;
///
/// assert!(contains_any(Some("zzabyycdxx"), Some("za")));
/// assert!(!contains_any(Some("aba"), Some("z")));
/// assert!(!contains_any(Some("aba"), Some("")));
/// ```
pub fn contains_any(seq: Option<&str>, chars: Option<&str>) -> bool {
  any_of(seq, chars)
}

pub fn contains_any_chars(seq: Option<&str>, chars: Option<&[char]>) -> bool {
  any_of(seq, chars)
}

/// Whether `seq` contains none of `chars`. Absent inputs contain nothing.
pub fn contains_none(seq: Option<&str>, chars: Option<&str>) -> bool {
  none_of(seq, chars)
}

pub fn contains_none_chars(seq: Option<&str>, chars: Option<&[char]>) -> bool {
  none_of(seq, chars)
}

/// Whether every character of `seq` is in `valid`.
///
/// The empty text consists only of valid characters, even for an empty set.
pub fn contains_only(seq: Option<&str>, valid: Option<&str>) -> bool {
  only_of(seq, valid)
}

pub fn contains_only_chars(seq: Option<&str>, valid: Option<&[char]>) -> bool {
  only_of(seq, valid)
}

/// Position of the first character of `seq` that is in `chars`.
pub fn index_of_any(seq: Option<&str>, chars: Option<&str>) -> Option<usize> {
  index_in(seq, chars)
}

pub fn index_of_any_chars(seq: Option<&str>, chars: Option<&[char]>) -> Option<usize> {
  index_in(seq, chars)
}

/// Position of the first character of `seq` that is not in `chars`.
///
/// ```
/// use the_strings::charset::index_of_any_but_chars;
///
/// assert_eq!(index_of_any_but_chars(Some("zzabyycdxx"), Some(&['z', 'a'][..])), Some(3));
/// ```
pub fn index_of_any_but(seq: Option<&str>, chars: Option<&str>) -> Option<usize> {
  index_not_in(seq, chars)
}

pub fn index_of_any_but_chars(seq: Option<&str>, chars: Option<&[char]>) -> Option<usize> {
  index_not_in(seq, chars)
}
