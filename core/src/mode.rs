//! `MatchMode` and `MatchOptions` - how two strings are compared
//!
//! Callers historically describe matching with three booleans
//! (`case_sensitive`, `exact_match`, `use_regular_expressions`). Internally the
//! two mode flags collapse into one [`MatchMode`], so the precedence between
//! them is decided once, in [`MatchMode::from_flags`].

use std::fmt;

/// The leaf strategy used to compare a source string with a candidate.
///
/// # Example
///
/// ```
/// use recmatch::MatchMode;
///
/// assert_eq!(MatchMode::from_flags(false, false), MatchMode::Contains);
/// assert_eq!(MatchMode::from_flags(false, true), MatchMode::Regex);
/// // Exact always wins over regex.
/// assert_eq!(MatchMode::from_flags(true, true), MatchMode::Exact);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MatchMode {
    /// Source contains the candidate as a substring.
    #[default]
    Contains,
    /// Source equals the candidate.
    Exact,
    /// Candidate is a regular expression that must match the whole source.
    Regex,
}

impl MatchMode {
    /// Resolve the legacy flag pair into a mode.
    ///
    /// `exact_match` overrides `use_regular_expressions`.
    #[must_use]
    pub const fn from_flags(exact_match: bool, use_regular_expressions: bool) -> Self {
        match (exact_match, use_regular_expressions) {
            (true, _) => Self::Exact,
            (false, true) => Self::Regex,
            (false, false) => Self::Contains,
        }
    }

    /// Whether this mode treats the candidate as a regular expression.
    #[must_use]
    pub const fn is_regex(self) -> bool {
        matches!(self, Self::Regex)
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains => f.write_str("contains"),
            Self::Exact => f.write_str("exact"),
            Self::Regex => f.write_str("regex"),
        }
    }
}

/// A [`MatchMode`] plus case sensitivity.
///
/// The default is a case-insensitive contains match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOptions {
    /// How the strings are compared.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: MatchMode,
    /// Compare without case folding.
    #[cfg_attr(feature = "serde", serde(default))]
    pub case_sensitive: bool,
}

impl MatchOptions {
    /// Create options from a mode and case sensitivity.
    #[must_use]
    pub const fn new(mode: MatchMode, case_sensitive: bool) -> Self {
        Self {
            mode,
            case_sensitive,
        }
    }

    /// Create options from the legacy flag triple.
    #[must_use]
    pub const fn from_flags(
        case_sensitive: bool,
        exact_match: bool,
        use_regular_expressions: bool,
    ) -> Self {
        Self::new(
            MatchMode::from_flags(exact_match, use_regular_expressions),
            case_sensitive,
        )
    }
}

impl fmt::Display for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let case = if self.case_sensitive {
            "case-sensitive"
        } else {
            "case-insensitive"
        };
        write!(f, "{} ({case})", self.mode)
    }
}
