//! `test-utils` is used for testing `urlfrag-lib`.
//! This crate does not depend on `urlfrag-lib`, else we would get dependency cycles.
//! Macros are used instead, so that the importer is responsible for providing the dependencies.

/// Parse a string against the placeholder origin.
/// Absolute URLs keep their own scheme and host.
#[macro_export]
macro_rules! url_value {
    ($text:expr) => {
        UrlValue::parse(&UrlContext::placeholder(), $text)
    };
}

/// Assert how a classifier classifies each of the given URLs
///
/// ```ignore
/// assert_classifies!(policy, {
///     "https://example.org/#top" => Classification::Match,
///     "https://example.org/#" => Classification::NotAMatch,
/// });
/// ```
#[macro_export]
macro_rules! assert_classifies {
    ($classifier:expr, { $($url:expr => $expected:expr),+ $(,)? }) => {{
        let classifier = &$classifier;
        $(
            assert_eq!(
                classifier.classify(&$crate::url_value!($url)),
                $expected,
                "classifying {}",
                $url
            );
        )+
    }};
}

/// Get the path to the `fixtures` directory.
#[macro_export]
macro_rules! fixtures_path {
    () => {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .unwrap()
            .join("fixtures")
    };
}

/// Get the path of a policy file in the `fixtures/policies` directory.
#[macro_export]
macro_rules! policy_fixture {
    ($filename:expr) => {
        $crate::fixtures_path!().join("policies").join($filename)
    };
}
