//! Serde-deserializable matcher configuration.
//!
//! [`MatcherConfig`] carries the legacy flag triple exactly as callers write
//! it, in either `snake_case` or `camelCase`:
//!
//! ```json
//! { "caseSensitive": true, "exactMatch": false, "useRegularExpressions": true }
//! ```
//!
//! Every flag defaults to `false`. Unknown fields are rejected so a typo does
//! not silently fall back to a case-insensitive contains match.

use crate::{MatchOptions, Matcher, MatcherError};
use serde::{Deserialize, Serialize};

/// Configuration for a [`Matcher`].
///
/// # Example
///
/// ```
/// use recmatch::{MatchMode, MatcherConfig};
///
/// let json = r#"{ "exactMatch": true, "useRegularExpressions": true }"#;
/// let config = MatcherConfig::from_json(json).unwrap();
/// assert_eq!(config.build().mode(), MatchMode::Exact);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Compare without case folding.
    #[serde(alias = "caseSensitive")]
    pub case_sensitive: bool,

    /// Require whole-string equality. Overrides `use_regular_expressions`.
    #[serde(alias = "exactMatch")]
    pub exact_match: bool,

    /// Treat the candidate as a regular expression.
    #[serde(alias = "useRegularExpressions")]
    pub use_regular_expressions: bool,
}

impl MatcherConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidConfig`] if `json` is malformed or has
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self, MatcherError> {
        serde_json::from_str(json).map_err(|e| MatcherError::InvalidConfig {
            message: e.to_string(),
        })
    }

    /// Resolve the flags into [`MatchOptions`].
    #[must_use]
    pub const fn options(&self) -> MatchOptions {
        MatchOptions::from_flags(
            self.case_sensitive,
            self.exact_match,
            self.use_regular_expressions,
        )
    }

    /// Build the runtime [`Matcher`].
    #[must_use]
    pub const fn build(&self) -> Matcher {
        Matcher::with_options(self.options())
    }
}

impl From<MatcherConfig> for Matcher {
    fn from(config: MatcherConfig) -> Self {
        config.build()
    }
}
