mod any_of;
mod path;

pub use any_of::AnyOf;
pub use path::PathClassifier;

use crate::{Classification, UrlValue};

/// Decides whether a [`UrlValue`] belongs to a class of URLs.
///
/// Implementations must be pure: the same value always yields the same
/// [`Classification`]. Any `Fn(&UrlValue) -> Classification` is a classifier.
pub trait UrlClassifier: Send + Sync {
    /// Classify a single URL.
    fn classify(&self, url: &UrlValue) -> Classification;

    /// Returns `true` if this classifier can never yield anything other than
    /// [`Classification::NotAMatch`].
    ///
    /// Callers may use this to skip work that would only feed this
    /// classifier. It must not be used to change outcomes.
    fn matches_nothing(&self) -> bool {
        false
    }

    /// Combine with `other` under classifier-level OR.
    fn or<C>(self, other: C) -> AnyOf
    where
        Self: Sized + 'static,
        C: UrlClassifier + 'static,
    {
        AnyOf::new().with(self).with(other)
    }
}

impl<F> UrlClassifier for F
where
    F: Fn(&UrlValue) -> Classification + Send + Sync,
{
    fn classify(&self, url: &UrlValue) -> Classification {
        self(url)
    }
}

/// The classifier that matches no URL at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchNothing;

impl UrlClassifier for MatchNothing {
    fn classify(&self, _url: &UrlValue) -> Classification {
        Classification::NotAMatch
    }

    fn matches_nothing(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchNothing, UrlClassifier};
    use crate::{Classification, UrlValue, test_utils::url_value};

    #[test]
    fn test_match_nothing() {
        assert!(MatchNothing.matches_nothing());
        assert_eq!(
            MatchNothing.classify(&url_value("https://example.org/#top")),
            Classification::NotAMatch
        );
        assert_eq!(
            MatchNothing.classify(&url_value("http://[::1")),
            Classification::NotAMatch
        );
    }

    #[test]
    fn test_closure_is_classifier() {
        let https = |url: &UrlValue| match url.url() {
            Some(url) if url.scheme() == "https" => Classification::Match,
            Some(_) => Classification::NotAMatch,
            None => Classification::Invalid,
        };

        assert!(!https.matches_nothing());
        assert_eq!(
            https.classify(&url_value("https://example.org")),
            Classification::Match
        );
        assert_eq!(
            https.classify(&url_value("http://example.org")),
            Classification::NotAMatch
        );
    }
}
