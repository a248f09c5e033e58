//! Similarity scores between two texts.

use crate::{
  CaseFold,
  Error,
  Result,
  text::units,
};

const WINKLER_SCALING: f64 = 0.1;
const WINKLER_THRESHOLD: f64 = 0.7;

/// Typeahead score of `query` against `term`, in the manner of fuzzy file
/// finders.
///
/// Both texts are lowercased with `fold`. Every query unit that is found in
/// the term after the previous match scores one point, and two more when it
/// immediately follows the previous match. Higher is more similar.
///
/// ```
/// use the_strings::{CaseFold, similarity::fuzzy_score};
///
/// assert_eq!(fuzzy_score(Some("Workshop"), Some("wo"), CaseFold::Unicode), Ok(4));
/// assert_eq!(fuzzy_score(Some("Workshop"), Some("ws"), CaseFold::Unicode), Ok(2));
/// ```
pub fn fuzzy_score(term: Option<&str>, query: Option<&str>, fold: CaseFold) -> Result<usize> {
  let (Some(term), Some(query)) = (term, query) else {
    return Err(Error::MissingInput);
  };
  let term = units(&fold.to_lowercase(term));
  let query = units(&fold.to_lowercase(query));

  let mut score = 0;
  let mut term_idx = 0;
  let mut previous: Option<usize> = None;
  for unit in query {
    let Some(found) = term[term_idx..].iter().position(|&t| t == unit) else {
      term_idx = term.len();
      continue;
    };
    let at = term_idx + found;
    score += 1;
    if previous.is_some_and(|prev| prev + 1 == at) {
      score += 2;
    }
    previous = Some(at);
    term_idx = at + 1;
  }
  Ok(score)
}

struct JaroMatches {
  matches: usize,
  half_transpositions: usize,
  prefix: usize,
  max_len: usize,
}

fn jaro_matches(first: &[u16], second: &[u16]) -> JaroMatches {
  let (min, max) = if first.len() > second.len() {
    (second, first)
  } else {
    (first, second)
  };
  let range = (max.len() / 2).saturating_sub(1);

  let mut matched_min = vec![false; min.len()];
  let mut matched_max = vec![false; max.len()];
  let mut matches = 0;
  for (mi, &unit) in min.iter().enumerate() {
    let mut window = mi.saturating_sub(range)..(mi + range + 1).min(max.len());
    if let Some(xi) = window.find(|&xi| !matched_max[xi] && max[xi] == unit) {
      matched_min[mi] = true;
      matched_max[xi] = true;
      matches += 1;
    }
  }

  let in_min = min.iter().zip(&matched_min).filter(|(_, hit)| **hit).map(|(u, _)| u);
  let in_max = max.iter().zip(&matched_max).filter(|(_, hit)| **hit).map(|(u, _)| u);
  let transpositions = in_min.zip(in_max).filter(|(a, b)| a != b).count();

  let prefix = first
    .iter()
    .zip(second)
    .take_while(|(a, b)| a == b)
    .count();

  JaroMatches {
    matches,
    half_transpositions: transpositions / 2,
    prefix,
    max_len: max.len(),
  }
}

/// Jaro-Winkler similarity of two texts, between `0.0` and `1.0` and rounded
/// to two decimals.
///
/// The Winkler prefix boost is only applied when the Jaro similarity is at
/// least `0.7`.
///
/// ```
/// use the_strings::similarity::jaro_winkler_similarity;
///
/// assert_eq!(jaro_winkler_similarity(Some("frog"), Some("fog")), Ok(0.93));
/// assert_eq!(jaro_winkler_similarity(Some("fly"), Some("ant")), Ok(0.0));
/// ```
pub fn jaro_winkler_similarity(first: Option<&str>, second: Option<&str>) -> Result<f64> {
  let (Some(first), Some(second)) = (first, second) else {
    return Err(Error::MissingInput);
  };
  let (first, second) = (units(first), units(second));
  let JaroMatches {
    matches,
    half_transpositions,
    prefix,
    max_len,
  } = jaro_matches(&first, &second);
  if matches == 0 {
    return Ok(0.0);
  }

  let m = matches as f64;
  let jaro = (m / first.len() as f64
    + m / second.len() as f64
    + (m - half_transpositions as f64) / m)
    / 3.0;
  let winkler = if jaro < WINKLER_THRESHOLD {
    jaro
  } else {
    jaro + WINKLER_SCALING.min(1.0 / max_len as f64) * prefix as f64 * (1.0 - jaro)
  };
  // Half-up rounding, ties go towards positive infinity.
  Ok((winkler * 100.0 + 0.5).floor() / 100.0)
}
