use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome of classifying a URL.
///
/// This is deliberately not a boolean. [`Classification::Invalid`] means the
/// input was structurally broken in a way that kept the classifier from
/// deciding applicability at all, e.g. a fragment that had to parse as a URL
/// but didn't. Callers should treat it as a decision of its own, usually by
/// rejecting the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    /// The URL satisfies the classifier
    Match,
    /// The URL is well-formed but does not satisfy the classifier
    #[default]
    NotAMatch,
    /// The URL (or a part of it that had to be reinterpreted) is malformed
    Invalid,
}

impl Classification {
    /// Combine two classifications with classifier-level OR.
    ///
    /// [`Classification::Invalid`] wins over everything, then
    /// [`Classification::Match`], then [`Classification::NotAMatch`].
    /// The operation is associative and commutative, so the order in which
    /// classifiers are combined never changes the outcome.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Invalid, _) | (_, Self::Invalid) => Self::Invalid,
            (Self::Match, _) | (_, Self::Match) => Self::Match,
            (Self::NotAMatch, Self::NotAMatch) => Self::NotAMatch,
        }
    }

    #[inline]
    #[must_use]
    /// Returns `true` for [`Classification::Match`]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match)
    }

    #[inline]
    #[must_use]
    /// Returns `true` for [`Classification::Invalid`]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match => f.write_str("MATCH"),
            Self::NotAMatch => f.write_str("NOT_A_MATCH"),
            Self::Invalid => f.write_str("INVALID"),
        }
    }
}
