//! `Matcher` - query operations over recorded entries
//!
//! A [`Matcher`] holds fixed [`MatchOptions`] and filters entry sources by a
//! query string. Entry sources are plain iterators, so the result order is
//! whatever order the caller's container yields. Pass an ordered container
//! (`BTreeMap`, a `Vec` of pairs, an insertion-ordered map) when the order of
//! the result matters.

use crate::{MatchMode, MatchOptions, MatcherError, Pattern};
use crate::{EntryTrace, QueryTrace};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Which operand plays the candidate (needle) role.
///
/// The recorded key and the query are mapped onto the `(source, candidate)`
/// operands of [`Matcher::matches`]. The candidate is the substring in contains
/// mode and the pattern in regex mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// The query is searched for inside each recorded key.
    ///
    /// `source = key`, `candidate = query`.
    #[default]
    QueryInKey,
    /// Each recorded key is searched for inside the query.
    ///
    /// `source = query`, `candidate = key`.
    KeyInQuery,
}

impl Direction {
    /// Map the legacy `queryContainsData` flag onto a direction.
    #[must_use]
    pub const fn from_flag(query_contains_data: bool) -> Self {
        if query_contains_data {
            Self::KeyInQuery
        } else {
            Self::QueryInKey
        }
    }

    /// Arrange a key and a query as `(source, candidate)`.
    #[must_use]
    pub fn operands<'a>(self, key: &'a str, query: &'a str) -> (&'a str, &'a str) {
        match self {
            Self::QueryInKey => (key, query),
            Self::KeyInQuery => (query, key),
        }
    }
}

/// A recorded key or collection element as seen by a [`Matcher`].
///
/// Absent keys (`None`) compare as `""`, the same as an absent query.
pub trait AsKey {
    /// The key text.
    fn as_key(&self) -> &str;
}

impl AsKey for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl AsKey for String {
    fn as_key(&self) -> &str {
        self
    }
}

impl AsKey for Box<str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl AsKey for Cow<'_, str> {
    fn as_key(&self) -> &str {
        self
    }
}

impl<T: AsKey + ?Sized> AsKey for &T {
    fn as_key(&self) -> &str {
        (**self).as_key()
    }
}

impl<T: AsKey> AsKey for Option<T> {
    fn as_key(&self) -> &str {
        self.as_ref().map_or("", AsKey::as_key)
    }
}

/// Matches recorded string keys against a query.
///
/// Options are fixed at construction. A `Matcher` holds no other state, so it
/// can be shared across threads and reused for any number of queries.
///
/// # Example
///
/// ```
/// use recmatch::{Direction, Matcher};
///
/// let recorded = vec![("SELECT * FROM A", 1), ("UPDATE A SET x = 1", 2)];
///
/// // Does the query contain a recorded key?
/// let matcher = Matcher::default();
/// let hits = matcher
///     .matching_values(recorded, Some("xSELECT * FROM Ax"), Direction::KeyInQuery)
///     .unwrap();
/// assert_eq!(hits, vec![1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    /// Create a matcher from the legacy flag triple.
    ///
    /// `exact_match` overrides `use_regular_expressions`.
    #[must_use]
    pub const fn new(
        case_sensitive: bool,
        exact_match: bool,
        use_regular_expressions: bool,
    ) -> Self {
        Self::with_options(MatchOptions::from_flags(
            case_sensitive,
            exact_match,
            use_regular_expressions,
        ))
    }

    /// Create a contains or exact matcher with regex matching disabled.
    #[must_use]
    pub const fn simple(case_sensitive: bool, exact_match: bool) -> Self {
        Self::new(case_sensitive, exact_match, false)
    }

    /// Create a matcher from a mode and case sensitivity.
    #[must_use]
    pub const fn from_mode(mode: MatchMode, case_sensitive: bool) -> Self {
        Self::with_options(MatchOptions::new(mode, case_sensitive))
    }

    /// Create a matcher from prepared options.
    #[must_use]
    pub const fn with_options(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Returns the options this matcher was built with.
    #[must_use]
    pub const fn options(&self) -> MatchOptions {
        self.options
    }

    /// Returns the resolved match mode.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.options.mode
    }

    /// Whether comparisons are case-sensitive.
    #[must_use]
    pub const fn is_case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    /// Compile a candidate with this matcher's options.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] in regex mode if `candidate`
    /// is not a valid regex.
    pub fn compile(&self, candidate: &str) -> Result<Pattern, MatcherError> {
        Pattern::compile(candidate, self.options)
    }

    /// Compare two strings.
    ///
    /// `candidate` is the needle: the substring in contains mode, the expected
    /// value in exact mode, and the pattern in regex mode. `None` on either
    /// side compares as `""`.
    ///
    /// ```
    /// use recmatch::Matcher;
    ///
    /// let matcher = Matcher::new(false, false, true);
    /// assert!(matcher.matches(Some("abc123"), Some("abc.*")).unwrap());
    ///
    /// let exact = Matcher::new(false, true, true);
    /// assert!(!exact.matches(Some("abc123"), Some("abc.*")).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] in regex mode if `candidate`
    /// is not a valid regex.
    pub fn matches(
        &self,
        source: Option<&str>,
        candidate: Option<&str>,
    ) -> Result<bool, MatcherError> {
        let source = source.unwrap_or_default();
        let candidate = candidate.unwrap_or_default();
        Ok(self.compile(candidate)?.is_match(source))
    }

    /// Collect the value of every entry whose key matches `query`.
    ///
    /// Values are returned in iteration order. The same value reachable
    /// under several matching keys appears once per key. Keys may be any
    /// [`AsKey`], including `Option`; an absent key compares as `""`.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidPattern`] in regex mode if the
    /// candidate side (the query, or a key for [`Direction::KeyInQuery`]) is
    /// not a valid regex.
    pub fn matching_values<I, K, T>(
        &self,
        entries: I,
        query: Option<&str>,
        direction: Direction,
    ) -> Result<Vec<T>, MatcherError>
    where
        I: IntoIterator<Item = (K, T)>,
        K: AsKey,
    {
        let mut scan = Scan::new(self, query, direction);
        let mut result = Vec::new();
        for (key, value) in entries {
            if scan.accepts(key.as_key())? {
                result.push(value);
            }
        }
        scan.finish(result.len());
        Ok(result)
    }

    /// Like [`matching_values`](Self::matching_values) for entries whose value
    /// is itself a collection; every element of a matching collection is
    /// appended in its own order.
    ///
    /// ```
    /// use recmatch::{Direction, Matcher};
    ///
    /// let batches = vec![("k1", vec!["a", "b"]), ("k2", vec!["c"])];
    /// let all = Matcher::default()
    ///     .matching_values_flattened(batches, Some("k"), Direction::QueryInKey)
    ///     .unwrap();
    /// assert_eq!(all, vec!["a", "b", "c"]);
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`matching_values`](Self::matching_values).
    pub fn matching_values_flattened<I, K, C, T>(
        &self,
        entries: I,
        query: Option<&str>,
        direction: Direction,
    ) -> Result<Vec<T>, MatcherError>
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsKey,
        C: IntoIterator<Item = T>,
    {
        let mut scan = Scan::new(self, query, direction);
        let mut result = Vec::new();
        for (key, values) in entries {
            if scan.accepts(key.as_key())? {
                result.extend(values);
            }
        }
        scan.finish(result.len());
        Ok(result)
    }

    /// Whether any element matches `query`.
    ///
    /// Stops at the first match. An empty collection never matches. An
    /// absent (`None`) element compares as `""`.
    ///
    /// # Errors
    ///
    /// Same as [`matching_values`](Self::matching_values), for elements visited
    /// before the first match.
    pub fn contains<I, S>(
        &self,
        elements: I,
        query: Option<&str>,
        direction: Direction,
    ) -> Result<bool, MatcherError>
    where
        I: IntoIterator<Item = S>,
        S: AsKey,
    {
        let mut scan = Scan::new(self, query, direction);
        for element in elements {
            if scan.accepts(element.as_key())? {
                scan.finish(1);
                return Ok(true);
            }
        }
        scan.finish(0);
        Ok(false)
    }

    /// Evaluate every key and record why each one did or did not match.
    ///
    /// Unlike [`contains`](Self::contains), every key is visited.
    ///
    /// # Errors
    ///
    /// Same as [`matching_values`](Self::matching_values).
    pub fn explain<I, K>(
        &self,
        keys: I,
        query: Option<&str>,
        direction: Direction,
    ) -> Result<QueryTrace, MatcherError>
    where
        I: IntoIterator<Item = K>,
        K: AsKey,
    {
        let mut scan = Scan::new(self, query, direction);
        let mut entries = Vec::new();
        for key in keys {
            let key = key.as_key();
            let matched = scan.accepts(key)?;
            let (source, candidate) = direction.operands(key, scan.query);
            entries.push(EntryTrace {
                key: key.to_string(),
                source: source.to_string(),
                candidate: candidate.to_string(),
                matched,
            });
        }
        scan.finish(entries.iter().filter(|e| e.matched).count());
        Ok(QueryTrace {
            options: self.options,
            direction,
            query: scan.query.to_string(),
            entries,
        })
    }
}

impl From<MatchOptions> for Matcher {
    fn from(options: MatchOptions) -> Self {
        Self::with_options(options)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Scan
// ═══════════════════════════════════════════════════════════════════════════════

/// One pass of a query over an entry source.
///
/// For [`Direction::QueryInKey`] the query is the candidate for every entry,
/// so it is compiled on the first visited entry and reused. An empty source
/// never compiles anything.
struct Scan<'m, 'q> {
    matcher: &'m Matcher,
    query: &'q str,
    direction: Direction,
    query_pattern: Option<Pattern>,
    visited: usize,
}

impl<'m, 'q> Scan<'m, 'q> {
    fn new(matcher: &'m Matcher, query: Option<&'q str>, direction: Direction) -> Self {
        Self {
            matcher,
            query: query.unwrap_or_default(),
            direction,
            query_pattern: None,
            visited: 0,
        }
    }

    fn accepts(&mut self, key: &str) -> Result<bool, MatcherError> {
        self.visited += 1;
        let matched = match self.direction {
            Direction::QueryInKey => {
                let pattern = match self.query_pattern.take() {
                    Some(pattern) => pattern,
                    None => self.matcher.compile(self.query)?,
                };
                let matched = pattern.is_match(key);
                self.query_pattern = Some(pattern);
                matched
            }
            Direction::KeyInQuery => self.matcher.compile(key)?.is_match(self.query),
        };
        trace!(key, query = self.query, matched, "evaluated entry");
        Ok(matched)
    }

    fn finish(&self, matched: usize) {
        debug!(
            mode = %self.matcher.mode(),
            case_sensitive = self.matcher.is_case_sensitive(),
            direction = ?self.direction,
            visited = self.visited,
            matched,
            "query complete"
        );
    }
}
