//! Query trace types for debugging why recorded entries did or did not match.
//!
//! Use [`Matcher::explain()`](crate::Matcher::explain) to get one
//! [`EntryTrace`] per visited key, with the operands exactly as they were
//! handed to the leaf strategy.
//!
//! # Example
//!
//! ```
//! use recmatch::{Direction, Matcher};
//!
//! let trace = Matcher::default()
//!     .explain(["select a", "update b"], Some("select"), Direction::QueryInKey)
//!     .unwrap();
//! assert_eq!(trace.matched_count(), 1);
//! println!("{trace}");
//! ```

use crate::{Direction, MatchOptions};
use std::fmt;

/// Outcome of one recorded key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTrace {
    /// The recorded key.
    pub key: String,
    /// The operand that was searched.
    pub source: String,
    /// The operand used as needle or pattern.
    pub candidate: String,
    /// Whether the key matched.
    pub matched: bool,
}

/// Outcome of a whole query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTrace {
    /// Options of the matcher that ran the query.
    pub options: MatchOptions,
    /// Direction the query ran in.
    pub direction: Direction,
    /// The query after normalization (`None` becomes `""`).
    pub query: String,
    /// One trace per key, in iteration order.
    pub entries: Vec<EntryTrace>,
}

impl QueryTrace {
    /// Keys that matched, in iteration order.
    pub fn matched_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.matched)
            .map(|e| e.key.as_str())
    }

    /// Number of keys that matched.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.entries.iter().filter(|e| e.matched).count()
    }

    /// Whether any key matched.
    #[must_use]
    pub fn any_matched(&self) -> bool {
        self.entries.iter().any(|e| e.matched)
    }
}

impl fmt::Display for QueryTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "query \"{}\" [{}, {:?}]: {}/{} matched",
            self.query,
            self.options,
            self.direction,
            self.matched_count(),
            self.entries.len()
        )?;
        for entry in &self.entries {
            let mark = if entry.matched { "+" } else { "-" };
            writeln!(
                f,
                "  {mark} \"{}\" (source \"{}\", candidate \"{}\")",
                entry.key, entry.source, entry.candidate
            )?;
        }
        Ok(())
    }
}
