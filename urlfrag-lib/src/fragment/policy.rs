use std::{
    fmt::Debug,
    sync::{Arc, LazyLock},
};

use log::{debug, trace};

use super::{FragmentPolicyBuilder, FragmentPredicate};
use crate::{Classification, Fragment, UrlClassifier, UrlContext, UrlValue};

static PLACEHOLDER: LazyLock<UrlContext> = LazyLock::new(UrlContext::placeholder);

/// An immutable fragment classifier, created by [`FragmentPolicyBuilder`].
///
/// Cloning is cheap and a policy can be shared between threads.
#[derive(Clone)]
pub struct FragmentPolicy {
    predicates: Arc<[Arc<dyn FragmentPredicate>]>,
    as_relative_url: Arc<dyn UrlClassifier>,
}

impl FragmentPolicy {
    pub(super) fn new(
        predicates: Arc<[Arc<dyn FragmentPredicate>]>,
        as_relative_url: Arc<dyn UrlClassifier>,
    ) -> Self {
        Self {
            predicates,
            as_relative_url,
        }
    }

    /// A new blank builder.
    #[must_use]
    pub fn builder() -> FragmentPolicyBuilder {
        FragmentPolicyBuilder::new()
    }

    /// Classify the fragment of `url`.
    ///
    /// # Details
    ///
    /// 1. If any raw predicate matches the fragment, the result is
    ///    [`Classification::Match`] and the fragment is not reparsed. A `url`
    ///    that did not parse has an [absent](Fragment::absent) fragment.
    /// 2. Otherwise, if there is a fragment and a relative-URL classifier was
    ///    registered, the fragment content is parsed against the placeholder
    ///    origin and classified:
    ///    - content that does not parse is [`Classification::Invalid`],
    ///    - the classifier's [`Classification::Invalid`] is final,
    ///    - its [`Classification::Match`] makes the result a match.
    /// 3. Anything else is [`Classification::NotAMatch`].
    ///
    /// Whether the URL itself is well-formed is left to other classifiers.
    #[must_use]
    pub fn classify(&self, url: &UrlValue) -> Classification {
        let fragment = url.fragment();
        if self.is_raw_match(fragment) {
            trace!("Raw fragment {fragment:?} of {url} matched");
            return Classification::Match;
        }

        match fragment.content() {
            Some(content) if !self.as_relative_url.matches_nothing() => {
                self.classify_as_relative_url(content)
            }
            _ => Classification::NotAMatch,
        }
    }

    fn is_raw_match(&self, fragment: Fragment<'_>) -> bool {
        self.predicates
            .iter()
            .any(|predicate| predicate.is_match(fragment))
    }

    fn classify_as_relative_url(&self, content: &str) -> Classification {
        // Explicitly not relative to the URL the fragment belongs to.
        let fragment_url = UrlValue::parse(&PLACEHOLDER, content);
        if let Some(e) = fragment_url.parse_error() {
            debug!("Fragment content {content:?} is not a valid relative URL: {e}");
            return Classification::Invalid;
        }

        let result = self.as_relative_url.classify(&fragment_url);
        trace!("Fragment content {content:?} as {fragment_url}: {result}");
        if result.is_invalid() {
            debug!("Fragment content {content:?} was classified as invalid");
        }
        result
    }
}

impl UrlClassifier for FragmentPolicy {
    fn classify(&self, url: &UrlValue) -> Classification {
        FragmentPolicy::classify(self, url)
    }
}

impl Debug for FragmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FragmentPolicy")
            .field("predicates", &self.predicates.len())
            .field(
                "as_relative_url",
                &!self.as_relative_url.matches_nothing(),
            )
            .finish()
    }
}
