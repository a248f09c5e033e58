//! Absent-safe string primitives with UTF-16 code unit positions.
//!
//! Every function takes its text as `Option<&str>`: `None` is the absent
//! state and is distinct from the empty string. Searches answer with
//! `Option<usize>`, where `None` means "not found". Positions and lengths
//! count UTF-16 code units of the input, see [`text`].

pub mod abbreviate;
pub mod case;
pub mod chars;
pub mod charset;
pub mod config;
pub mod defaults;
pub mod distance;
mod error;
pub mod join;
pub mod pad;
pub mod predicates;
pub mod remove;
pub mod search;
pub mod similarity;
pub mod substring;
pub mod text;

pub use case::CaseFold;
pub use config::Config;
pub use error::{
  ConfigError,
  Error,
  Result,
};
