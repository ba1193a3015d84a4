use std::{fmt::Debug, sync::Arc};

use super::{FragmentPolicy, FragmentPredicate};
use crate::{AnyOf, MatchNothing, UrlClassifier};

/// Collects fragment rules and freezes them into a [`FragmentPolicy`].
///
/// Every registration returns the builder, so calls can be chained:
///
/// ```
/// use urlfrag_lib::{FragmentPolicyBuilder, absent, exact};
///
/// let policy = FragmentPolicyBuilder::new()
///     .matches(absent())
///     .matches(exact("#top"))
///     .build();
/// ```
///
/// A builder can be reused after [`build`](FragmentPolicyBuilder::build).
/// Rules registered afterwards do not affect policies that were already
/// built.
#[derive(Clone, Default)]
pub struct FragmentPolicyBuilder {
    predicates: Vec<Arc<dyn FragmentPredicate>>,
    as_relative_url: Vec<Arc<dyn UrlClassifier>>,
}

impl FragmentPolicyBuilder {
    /// A new blank builder. Built as-is, it rejects every fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match URLs whose raw fragment satisfies `predicate`.
    ///
    /// If there is no fragment the predicate receives [`Fragment::absent`],
    /// otherwise the fragment with its leading `#`. Predicates registered
    /// here are OR-ed together.
    ///
    /// [`Fragment::absent`]: crate::Fragment::absent
    pub fn matches<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FragmentPredicate + 'static,
    {
        self.predicates.push(Arc::new(predicate));
        self
    }

    /// Match URLs whose fragment content, without the `#`, parses as a URL
    /// relative to the [placeholder origin](crate::UrlContext::placeholder)
    /// that `classifier` matches.
    ///
    /// Single-page applications often keep a route in the fragment, as in
    /// `https://example.org/#/app/settings`. The fragment is never resolved
    /// against the URL it belongs to.
    ///
    /// This requires a fragment to be present. To also accept URLs without
    /// one, add [`absent`](crate::absent) through
    /// [`matches`](FragmentPolicyBuilder::matches). Classifiers registered
    /// here are combined with classifier-level OR.
    pub fn match_fragment_as_relative_url<C>(&mut self, classifier: C) -> &mut Self
    where
        C: UrlClassifier + 'static,
    {
        self.as_relative_url.push(Arc::new(classifier));
        self
    }

    /// Builds a policy from the rules registered so far.
    #[must_use]
    pub fn build(&self) -> FragmentPolicy {
        let as_relative_url: Arc<dyn UrlClassifier> = match self.as_relative_url.as_slice() {
            [] => Arc::new(MatchNothing),
            [classifier] => Arc::clone(classifier),
            classifiers => Arc::new(classifiers.iter().cloned().collect::<AnyOf>()),
        };

        FragmentPolicy::new(self.predicates.clone().into(), as_relative_url)
    }
}

impl Debug for FragmentPolicyBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentPolicyBuilder")
            .field("predicates", &self.predicates.len())
            .field("as_relative_url", &self.as_relative_url.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::FragmentPolicyBuilder;
    use crate::{
        Classification::{Match, NotAMatch},
        exact,
        test_utils::{constant, url_value},
    };

    #[test]
    fn test_chaining_returns_same_builder() {
        let mut builder = FragmentPolicyBuilder::new();
        let chained: *const FragmentPolicyBuilder = builder.matches(exact("#a"));
        assert!(std::ptr::eq(chained, &builder));
    }

    #[test]
    fn test_built_policy_is_unaffected_by_later_rules() {
        let mut builder = FragmentPolicyBuilder::new();
        builder.matches(exact("#a"));
        let first = builder.build();

        builder
            .matches(exact("#b"))
            .match_fragment_as_relative_url(constant(Match));
        let second = builder.build();

        let b = url_value("https://example.org/#b");
        assert_eq!(first.classify(&b), NotAMatch);
        assert_eq!(second.classify(&b), Match);
        assert_eq!(first.classify(&url_value("https://example.org/#c")), NotAMatch);
        assert_eq!(second.classify(&url_value("https://example.org/#c")), Match);
    }

    #[test]
    fn test_debug() {
        let mut builder = FragmentPolicyBuilder::new();
        builder.matches(exact("#a")).matches(exact("#b"));
        assert_eq!(
            format!("{builder:?}"),
            "FragmentPolicyBuilder { predicates: 2, as_relative_url: 0 }"
        );
    }
}
