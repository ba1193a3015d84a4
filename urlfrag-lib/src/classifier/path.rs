use super::UrlClassifier;
use crate::{Classification, RegexFilter, UrlValue};

/// Matches URLs by their path.
///
/// Meant for fragments that carry an application route, like
/// `https://example.org/#/app/settings`. Such fragments are reparsed against
/// the placeholder origin, and by default only URLs that kept that origin
/// can match: `#//evil.example/app/` names a host of its own and is not a
/// route. Use [`PathClassifier::allow_authority`] to classify ordinary URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct PathClassifier {
    paths: RegexFilter,
    allow_authority: bool,
}

impl PathClassifier {
    /// Match URLs whose path matches one of the patterns in `paths`.
    #[must_use]
    pub fn new(paths: RegexFilter) -> Self {
        Self {
            paths,
            allow_authority: false,
        }
    }

    /// Also match URLs that carry their own scheme or host.
    #[must_use]
    pub fn allow_authority(mut self) -> Self {
        self.allow_authority = true;
        self
    }
}

impl UrlClassifier for PathClassifier {
    fn classify(&self, url: &UrlValue) -> Classification {
        let Some(parsed) = url.url() else {
            return Classification::Invalid;
        };
        if !self.allow_authority && !url.inherits_placeholder_authority() {
            return Classification::NotAMatch;
        }
        if self.paths.is_match(parsed.path()) {
            Classification::Match
        } else {
            Classification::NotAMatch
        }
    }
}
