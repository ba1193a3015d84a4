use regex::RegexSet;

use crate::Result;

/// A set of regular expressions used by fragment and path rules.
#[derive(Clone, Debug)]
pub struct RegexFilter {
    /// User-defined set of regex patterns
    pub regex: RegexSet,
}

impl RegexFilter {
    /// Compile `patterns` into a single set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidRegex`](crate::ErrorKind::InvalidRegex) if
    /// any of the patterns does not compile.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            regex: RegexSet::new(patterns)?,
        })
    }

    #[inline]
    #[must_use]
    /// Returns `true` if the given input string matches the regex set
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    #[inline]
    #[must_use]
    /// Whether there were no regular expressions defined
    pub fn is_empty(&self) -> bool {
        self.regex.is_empty()
    }

    /// Create a new empty regex set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            regex: RegexSet::empty(),
        }
    }
}

impl PartialEq for RegexFilter {
    fn eq(&self, other: &Self) -> bool {
        // Workaround, see https://github.com/rust-lang/regex/issues/364
        self.regex.patterns() == other.regex.patterns()
    }
}

impl From<RegexSet> for RegexFilter {
    fn from(regex: RegexSet) -> Self {
        Self { regex }
    }
}
