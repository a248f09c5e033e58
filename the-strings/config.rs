//! Configured defaults for the operations that take a case rule or a marker.

use std::borrow::Cow;

use serde::{
  Deserialize,
  Serialize,
};

use crate::{
  CaseFold,
  ConfigError,
  Result,
  abbreviate::{
    self,
    ELLIPSIS,
  },
  case,
  similarity,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
  pub case_fold:     CaseFold,
  pub abbrev_marker: String,
  pub middle_marker: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      case_fold:     CaseFold::Unicode,
      abbrev_marker: ELLIPSIS.to_string(),
      middle_marker: ELLIPSIS.to_string(),
    }
  }
}

impl Config {
  /// Parses a configuration table. Missing keys keep their defaults.
  ///
  /// ```
  /// use the_strings::{CaseFold, Config};
  ///
  /// let config = Config::from_toml_str("case-fold = \"turkic\"").unwrap();
  /// assert_eq!(config.case_fold, CaseFold::Turkic);
  /// assert_eq!(config.abbrev_marker, "...");
  /// ```
  pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
    let config: Self = toml::from_str(contents)?;
    tracing::debug!(
      case_fold = ?config.case_fold,
      abbrev_marker = %config.abbrev_marker,
      middle_marker = %config.middle_marker,
      "loaded string config"
    );
    if config.middle_marker.is_empty() {
      tracing::warn!("empty middle-marker, abbreviate_middle will leave texts unchanged");
    }
    Ok(config)
  }

  pub fn fuzzy_score(&self, term: Option<&str>, query: Option<&str>) -> Result<usize> {
    similarity::fuzzy_score(term, query, self.case_fold)
  }

  pub fn lower_case(&self, s: Option<&str>) -> Option<String> {
    case::lower_case_with(s, self.case_fold)
  }

  pub fn upper_case(&self, s: Option<&str>) -> Option<String> {
    case::upper_case_with(s, self.case_fold)
  }

  pub fn abbreviate<'a>(&self, s: Option<&'a str>, max_width: isize) -> Result<Option<Cow<'a, str>>> {
    abbreviate::abbreviate_with_marker(s, Some(self.abbrev_marker.as_str()), max_width)
  }

  pub fn abbreviate_at<'a>(
    &self,
    s: Option<&'a str>,
    offset: isize,
    max_width: isize,
  ) -> Result<Option<Cow<'a, str>>> {
    abbreviate::abbreviate_with_marker_at(s, Some(self.abbrev_marker.as_str()), offset, max_width)
  }

  pub fn abbreviate_middle<'a>(&self, s: Option<&'a str>, length: isize) -> Option<Cow<'a, str>> {
    abbreviate::abbreviate_middle(s, Some(self.middle_marker.as_str()), length)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.case_fold, CaseFold::Unicode);
    assert_eq!(config.abbrev_marker, "...");
    assert_eq!(config.middle_marker, "...");
    assert_eq!(Config::from_toml_str("").unwrap(), config);
  }

  #[test]
  fn test_parse_config() {
    let config = Config::from_toml_str(
      r#"
        case-fold = "turkic"
        abbrev-marker = "…"
        middle-marker = "~"
      "#,
    )
    .unwrap();
    assert_eq!(config, Config {
      case_fold:     CaseFold::Turkic,
      abbrev_marker: "…".to_string(),
      middle_marker: "~".to_string(),
    });
  }

  #[test]
  fn test_reject_bad_config() {
    assert!(Config::from_toml_str("case-fold = \"klingon\"").is_err());
    assert!(Config::from_toml_str("abbrev_marker = \"..\"").is_err());
    assert!(Config::from_toml_str("ellipsis = true").is_err());
    let err = Config::from_toml_str("case-fold = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
  }

  #[test]
  fn test_configured_operations() {
    let config = Config::from_toml_str(
      r#"
        case-fold = "turkic"
        abbrev-marker = "~"
        middle-marker = "--"
      "#,
    )
    .unwrap();
    assert_eq!(config.fuzzy_score(Some("TITLE"), Some("tı")), Ok(4));
    assert_eq!(config.fuzzy_score(None, Some("a")), Err(Error::MissingInput));
    assert_eq!(config.lower_case(Some("DIŞ")).as_deref(), Some("dış"));
    assert_eq!(config.upper_case(Some("iz")).as_deref(), Some("İZ"));
    assert_eq!(
      config.abbreviate(Some("abcdefg"), 4).unwrap().as_deref(),
      Some("abc~")
    );
    assert_eq!(
      config.abbreviate_at(Some("abcdefghijklmno"), 4, 10).unwrap().as_deref(),
      Some("~efghijkl~")
    );
    assert_eq!(
      config.abbreviate_middle(Some("abcdef"), 4).as_deref(),
      Some("a--f")
    );
  }

  #[test]
  fn test_empty_markers() {
    let config = Config::from_toml_str("abbrev-marker = \"\"\nmiddle-marker = \"\"").unwrap();
    assert_eq!(config.abbreviate(Some("abcdefg"), 3).unwrap().as_deref(), Some("abc"));
    assert_eq!(config.abbreviate_middle(Some("abcdef"), 4).as_deref(), Some("abcdef"));
  }
}
