use crate::{Classification, UrlClassifier, UrlContext, UrlValue};

/// Parse `text` as an absolute URL. Relative input is resolved against the
/// placeholder origin.
pub(crate) fn url_value(text: &str) -> UrlValue {
    UrlValue::parse(&UrlContext::placeholder(), text)
}

/// A classifier that ignores its input.
pub(crate) fn constant(classification: Classification) -> impl UrlClassifier + Copy {
    move |_: &UrlValue| classification
}

/// A classifier that matches URLs with exactly the given path.
pub(crate) fn only_path(path: &'static str) -> impl UrlClassifier + Copy {
    move |url: &UrlValue| match url.url() {
        Some(url) if url.path() == path => Classification::Match,
        Some(_) => Classification::NotAMatch,
        None => Classification::Invalid,
    }
}

/// A classifier for code paths that must never classify anything.
///
/// # Panic
///
/// Panics when invoked
pub(crate) fn panicking() -> impl UrlClassifier + Copy {
    |url: &UrlValue| -> Classification { panic!("Unexpected classification of {url}") }
}
