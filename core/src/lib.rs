//! recmatch - query recorded entries by string key
//!
//! A small matcher engine for mock data-access layers: recorded statements,
//! prepared result sets and executed calls are kept under string keys, and
//! callers look them up again with a query string.
//!
//! # Architecture
//!
//! - [`MatchMode`] - Which leaf strategy compares two strings (contains, exact, regex)
//! - [`MatchOptions`] - A mode plus the case-sensitivity bit
//! - [`Pattern`] - A candidate string compiled for one mode
//! - [`Direction`] - Which operand (recorded key or query) is the candidate
//! - [`Matcher`] - Fixed options plus the query operations over maps and collections
//!
//! # Key Design Insights
//!
//! 1. **Exact wins over regex**: the legacy flag triple collapses into a single
//!    [`MatchMode`] in [`MatchMode::from_flags`], the only place precedence is decided.
//!
//! 2. **Absent is empty**: a `None` query, key or element compares as `""`.
//!    Nothing about absence is ever an error.
//!
//! 3. **Candidate is the pattern**: in every mode the candidate operand is the
//!    needle (substring, expected value or regex) and the source operand is searched.
//!    [`Direction`] only decides which side is the candidate.
//!
//! # Example
//!
//! ```
//! use recmatch::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let mut results = BTreeMap::new();
//! results.insert("SELECT * FROM users", "users_rs");
//! results.insert("SELECT * FROM orders", "orders_rs");
//!
//! // Case-insensitive contains, the default
//! let matcher = Matcher::default();
//! let found = matcher
//!     .matching_values(&results, Some("from users"), Direction::QueryInKey)
//!     .unwrap();
//! assert_eq!(found, vec![&"users_rs"]);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod matcher;
mod mode;
mod pattern;
mod trace;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use matcher::{AsKey, Direction, Matcher};
pub use mode::{MatchMode, MatchOptions};
pub use pattern::Pattern;
pub use trace::{EntryTrace, QueryTrace};

#[cfg(feature = "config")]
pub use config::MatcherConfig;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use recmatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        AsKey, Direction, EntryTrace, MatchMode, MatchOptions, Matcher, MatcherError, Pattern,
        QueryTrace,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from pattern compilation and configuration loading.
///
/// Only regex mode can fail at query time. A bad pattern is a caller
/// configuration error and is always surfaced, never swallowed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MatcherError {
    /// A regular expression failed to compile.
    #[error("invalid pattern \"{pattern}\": {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller, before anchoring.
        pattern: String,
        /// The regex engine's error.
        #[source]
        source: regex::Error,
    },
    /// Configuration deserialization failed.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// The underlying error message.
        message: String,
    },
}
