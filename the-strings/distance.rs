//! Levenshtein edit distance.
//!
//! Insertions, deletions and substitutions each cost one. Distances count
//! UTF-16 code units. Unlike the search functions, absent inputs are a
//! precondition violation here: there is no distance between a text and
//! nothing.

use std::mem;

use crate::{
  Error,
  Result,
  text::units,
};

/// Edit distance between `s` and `t`.
///
/// ```
/// use the_strings::distance::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance(Some("frog"), Some("fog")), Ok(1));
/// assert!(levenshtein_distance(None, Some("fog")).is_err());
/// ```
pub fn levenshtein_distance(s: Option<&str>, t: Option<&str>) -> Result<usize> {
  let (Some(s), Some(t)) = (s, t) else {
    return Err(Error::MissingInput);
  };
  Ok(unbounded(&units(s), &units(t)))
}

/// Edit distance between `s` and `t` if it is at most `threshold`.
///
/// Returns `Ok(None)` when the distance exceeds `threshold`. Only a diagonal
/// stripe of width `2 * threshold + 1` of the cost table is computed.
///
/// ```
/// use the_strings::distance::levenshtein_distance_within;
///
/// assert_eq!(levenshtein_distance_within(Some("elephant"), Some("hippo"), 7), Ok(Some(7)));
/// assert_eq!(levenshtein_distance_within(Some("elephant"), Some("hippo"), 6), Ok(None));
/// ```
pub fn levenshtein_distance_within(
  s: Option<&str>,
  t: Option<&str>,
  threshold: isize,
) -> Result<Option<usize>> {
  let (Some(s), Some(t)) = (s, t) else {
    return Err(Error::MissingInput);
  };
  let Ok(bound) = usize::try_from(threshold) else {
    return Err(Error::NegativeThreshold(threshold));
  };
  Ok(bounded(&units(s), &units(t), bound))
}

/// Classic dynamic program over a single rolling row sized by the shorter
/// input.
pub(crate) fn unbounded<'a, T: PartialEq>(mut s: &'a [T], mut t: &'a [T]) -> usize {
  if s.len() > t.len() {
    mem::swap(&mut s, &mut t);
  }
  let n = s.len();
  if n == 0 {
    return t.len();
  }

  let mut row: Vec<usize> = (0..=n).collect();
  for (j, t_j) in t.iter().enumerate() {
    let mut upper_left = row[0];
    row[0] = j + 1;
    for i in 1..=n {
      let upper = row[i];
      let cost = usize::from(s[i - 1] != *t_j);
      row[i] = (row[i - 1] + 1).min(upper + 1).min(upper_left + cost);
      upper_left = upper;
    }
  }
  row[n]
}

/// Banded dynamic program. Cells outside the stripe hold `usize::MAX` so they
/// never win a minimum.
pub(crate) fn bounded<'a, T: PartialEq>(
  mut s: &'a [T],
  mut t: &'a [T],
  threshold: usize,
) -> Option<usize> {
  if s.len() > t.len() {
    mem::swap(&mut s, &mut t);
  }
  let (n, m) = (s.len(), t.len());
  if n == 0 {
    return (m <= threshold).then_some(m);
  }
  if m - n > threshold {
    tracing::trace!(n, m, threshold, "length difference exceeds edit distance threshold");
    return None;
  }

  let mut prev = vec![usize::MAX; n + 1];
  let mut cur = vec![usize::MAX; n + 1];
  let boundary = n.min(threshold) + 1;
  for (i, cell) in prev.iter_mut().take(boundary).enumerate() {
    *cell = i;
  }

  for j in 1..=m {
    let t_j = &t[j - 1];
    cur[0] = j;

    let min = j.saturating_sub(threshold).max(1);
    let max = j.saturating_add(threshold).min(n);
    if min > max {
      tracing::trace!(row = j, "edit distance stripe left the table");
      return None;
    }
    // The cell left of the stripe is stale from two rows back.
    if min > 1 {
      cur[min - 1] = usize::MAX;
    }

    for i in min..=max {
      cur[i] = if s[i - 1] == *t_j {
        prev[i - 1]
      } else {
        cur[i - 1].min(prev[i]).min(prev[i - 1]).saturating_add(1)
      };
    }
    mem::swap(&mut prev, &mut cur);
  }

  (prev[n] <= threshold).then_some(prev[n])
}
