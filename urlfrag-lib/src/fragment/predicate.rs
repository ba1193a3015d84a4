use crate::{Fragment, RegexFilter};

/// A test over the raw fragment of a URL.
///
/// The predicate sees [`Fragment::absent`] when the URL has no `#` and the
/// fragment text including its leading `#` otherwise. Any
/// `Fn(Fragment<'_>) -> bool` is a predicate.
pub trait FragmentPredicate: Send + Sync {
    /// Returns `true` if the fragment satisfies this predicate
    fn is_match(&self, fragment: Fragment<'_>) -> bool;
}

impl<F> FragmentPredicate for F
where
    F: Fn(Fragment<'_>) -> bool + Send + Sync,
{
    fn is_match(&self, fragment: Fragment<'_>) -> bool {
        self(fragment)
    }
}

/// Matches present fragments, including the leading `#`, against the set.
/// An absent fragment never matches.
impl FragmentPredicate for RegexFilter {
    fn is_match(&self, fragment: Fragment<'_>) -> bool {
        fragment
            .as_str()
            .is_some_and(|text| RegexFilter::is_match(self, text))
    }
}

#[derive(Clone, Copy, Debug)]
struct Absent;

impl FragmentPredicate for Absent {
    fn is_match(&self, fragment: Fragment<'_>) -> bool {
        fragment.is_absent()
    }
}

#[derive(Clone, Copy, Debug)]
struct Empty;

impl FragmentPredicate for Empty {
    fn is_match(&self, fragment: Fragment<'_>) -> bool {
        fragment.is_empty()
    }
}

#[derive(Clone, Debug)]
struct Exact(String);

impl FragmentPredicate for Exact {
    fn is_match(&self, fragment: Fragment<'_>) -> bool {
        fragment.as_str() == Some(self.0.as_str())
    }
}

/// Matches URLs without a fragment, like `http://example.org/`.
#[must_use]
pub fn absent() -> impl FragmentPredicate + Clone + use<> {
    Absent
}

/// Matches URLs whose fragment is just `#`, like `http://example.org/#`.
#[must_use]
pub fn empty() -> impl FragmentPredicate + Clone + use<> {
    Empty
}

/// Matches exactly the given fragment. `text` includes the leading `#`, so
/// `exact("#")` is the same as [`empty`].
#[must_use]
pub fn exact(text: &str) -> impl FragmentPredicate + Clone + use<> {
    Exact(text.to_string())
}
