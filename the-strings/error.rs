use thiserror::Error;

/// Precondition violations.
///
/// Absent inputs and "no match" outcomes are never reported through this type;
/// only operations with no meaningful answer for their arguments fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("strings must not be absent")]
  MissingInput,
  #[error("threshold must not be negative, got {0}")]
  NegativeThreshold(isize),
  #[error("minimum abbreviation width is {0}")]
  AbbreviationWidth(usize),
  #[error("minimum abbreviation width with offset is {0}")]
  AbbreviationWidthWithOffset(usize),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error(transparent)]
  Parse(#[from] toml::de::Error),
}
