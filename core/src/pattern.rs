//! `Pattern` - a candidate string compiled for one [`MatchMode`]
//!
//! A pattern is built once from the candidate operand and then tested against
//! any number of source strings. Case folding of the candidate, and regex
//! compilation, happen at construction so repeated tests stay cheap.

use crate::{MatchMode, MatchOptions, MatcherError};
use regex::Regex;
use regex_syntax::hir::{Hir, Look};
use regex_syntax::ParserBuilder;
use std::borrow::Cow;

/// A compiled candidate.
///
/// # Example
///
/// ```
/// use recmatch::{MatchMode, MatchOptions, Pattern};
///
/// let contains = Pattern::contains("from users", false);
/// assert!(contains.is_match("SELECT * FROM USERS"));
///
/// // Regex patterns must match the whole source.
/// let options = MatchOptions::new(MatchMode::Regex, true);
/// let regex = Pattern::compile(r"select \* from \w+", options).unwrap();
/// assert!(regex.is_match("select * from users"));
/// assert!(!regex.is_match("select * from users where id = 1"));
/// ```
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Substring match.
    Contains {
        /// The substring, already lowercased when `ignore_case` is set.
        needle: String,
        /// Fold the source before searching.
        ignore_case: bool,
    },
    /// Whole-string equality.
    Exact {
        /// The expected value, already lowercased when `ignore_case` is set.
        expected: String,
        /// Fold the source before comparing.
        ignore_case: bool,
    },
    /// Anchored regular expression (RE2 semantics, linear time).
    Regex(Regex),
}

impl Pattern {
    /// Compile `candidate` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if the mode is
    /// [`MatchMode::Regex`] and `candidate` is not a valid regex.
    pub fn compile(candidate: &str, options: MatchOptions) -> Result<Self, MatcherError> {
        match options.mode {
            MatchMode::Contains => Ok(Self::contains(candidate, options.case_sensitive)),
            MatchMode::Exact => Ok(Self::exact(candidate, options.case_sensitive)),
            MatchMode::Regex => Self::regex(candidate, options.case_sensitive),
        }
    }

    /// Create a substring pattern.
    #[must_use]
    pub fn contains(needle: &str, case_sensitive: bool) -> Self {
        Self::Contains {
            needle: fold(needle, !case_sensitive).into_owned(),
            ignore_case: !case_sensitive,
        }
    }

    /// Create an equality pattern.
    #[must_use]
    pub fn exact(expected: &str, case_sensitive: bool) -> Self {
        Self::Exact {
            expected: fold(expected, !case_sensitive).into_owned(),
            ignore_case: !case_sensitive,
        }
    }

    /// Create a regex pattern that must match the entire source.
    ///
    /// The pattern is parsed and wrapped in start and end anchors at the
    /// syntax-tree level, so inline flags and verbose-mode comments in the
    /// pattern cannot reach the anchors. Case-insensitivity is applied by the
    /// parser rather than by folding, so character classes keep their meaning.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] if `pattern` does not compile.
    pub fn regex(pattern: &str, case_sensitive: bool) -> Result<Self, MatcherError> {
        let invalid = |source: regex::Error| MatcherError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };

        // Surface the engine's own error (and size limits) for bad input.
        Regex::new(pattern).map_err(invalid)?;

        let hir = ParserBuilder::new()
            .case_insensitive(!case_sensitive)
            .build()
            .parse(pattern)
            .map_err(|e| invalid(regex::Error::Syntax(e.to_string())))?;
        let anchored = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);

        Regex::new(&anchored.to_string())
            .map(Self::Regex)
            .map_err(invalid)
    }

    /// The mode this pattern was compiled for.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        match self {
            Self::Contains { .. } => MatchMode::Contains,
            Self::Exact { .. } => MatchMode::Exact,
            Self::Regex(_) => MatchMode::Regex,
        }
    }

    /// Test `source` against this pattern.
    #[must_use]
    pub fn is_match(&self, source: &str) -> bool {
        match self {
            Self::Contains {
                needle,
                ignore_case,
            } => fold(source, *ignore_case).contains(needle.as_str()),
            Self::Exact {
                expected,
                ignore_case,
            } => fold(source, *ignore_case) == expected.as_str(),
            Self::Regex(re) => re.is_match(source),
        }
    }
}

fn fold(s: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(s.to_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
