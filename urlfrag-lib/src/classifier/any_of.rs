use std::{fmt::Debug, sync::Arc};

use super::UrlClassifier;
use crate::{Classification, UrlValue};

/// Classifier-level OR over any number of classifiers.
///
/// The first [`Classification::Invalid`] ends evaluation, otherwise any
/// [`Classification::Match`] wins. An empty `AnyOf` matches nothing.
#[derive(Clone, Default)]
pub struct AnyOf(Vec<Arc<dyn UrlClassifier>>);

impl AnyOf {
    /// Create an empty combination, which matches no URL.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a classifier and return the combination.
    #[must_use]
    pub fn with<C: UrlClassifier + 'static>(mut self, classifier: C) -> Self {
        self.push(Arc::new(classifier));
        self
    }

    /// Add a shared classifier.
    pub fn push(&mut self, classifier: Arc<dyn UrlClassifier>) {
        self.0.push(classifier);
    }

    /// Number of combined classifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no classifier was combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl UrlClassifier for AnyOf {
    fn classify(&self, url: &UrlValue) -> Classification {
        let mut result = Classification::NotAMatch;
        for classifier in &self.0 {
            result = result.or(classifier.classify(url));
            if result.is_invalid() {
                break;
            }
        }
        result
    }

    fn matches_nothing(&self) -> bool {
        self.0.iter().all(|classifier| classifier.matches_nothing())
    }
}

impl FromIterator<Arc<dyn UrlClassifier>> for AnyOf {
    fn from_iter<T: IntoIterator<Item = Arc<dyn UrlClassifier>>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("classifiers", &self.0.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::AnyOf;
    use crate::{
        Classification::{self, Invalid, Match, NotAMatch},
        MatchNothing, UrlClassifier, UrlValue,
        test_utils::{constant, url_value},
    };
    use rstest::rstest;

    #[test]
    fn test_empty_matches_nothing() {
        let any = AnyOf::new();
        assert!(any.is_empty());
        assert!(any.matches_nothing());
        assert_eq!(any.classify(&url_value("https://example.org")), NotAMatch);
    }

    #[test]
    fn test_only_sentinels_match_nothing() {
        let any = MatchNothing.or(AnyOf::new());
        assert_eq!(any.len(), 2);
        assert!(any.matches_nothing());
        assert!(!any.with(constant(NotAMatch)).matches_nothing());
    }

    #[rstest]
    #[case(vec![], NotAMatch)]
    #[case(vec![NotAMatch, NotAMatch], NotAMatch)]
    #[case(vec![NotAMatch, Match], Match)]
    #[case(vec![Match, NotAMatch], Match)]
    #[case(vec![Match, Invalid], Invalid)]
    #[case(vec![Invalid, Match], Invalid)]
    #[case(vec![NotAMatch, Invalid, NotAMatch], Invalid)]
    fn test_or(#[case] members: Vec<Classification>, #[case] expected: Classification) {
        let forward: AnyOf = members
            .iter()
            .map(|c| Arc::new(constant(*c)) as Arc<dyn UrlClassifier>)
            .collect();
        let backward: AnyOf = members
            .iter()
            .rev()
            .map(|c| Arc::new(constant(*c)) as Arc<dyn UrlClassifier>)
            .collect();

        let url = url_value("https://example.org");
        assert_eq!(forward.classify(&url), expected);
        assert_eq!(backward.classify(&url), expected);
    }

    #[test]
    fn test_invalid_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = {
            let calls = Arc::clone(&calls);
            move |_: &UrlValue| {
                calls.fetch_add(1, Ordering::SeqCst);
                Match
            }
        };

        let any = constant(Invalid).or(counter);
        assert_eq!(any.classify(&url_value("https://example.org")), Invalid);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
