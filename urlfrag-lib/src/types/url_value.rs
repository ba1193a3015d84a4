use std::fmt::Display;

use url::Url;

use super::context::PLACEHOLDER_HOST;
use crate::{Fragment, UrlContext};

/// A URL as seen by classifiers: the original text, plus either the parsed
/// [`Url`] or the reason it did not parse.
///
/// Parsing never fails loudly. A value that did not parse is still a value,
/// and classifiers report it as
/// [`Classification::Invalid`](crate::Classification::Invalid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlValue {
    text: String,
    parsed: Result<Url, url::ParseError>,
    inherits_placeholder_authority: bool,
}

impl UrlValue {
    /// Resolves `text` against `context`.
    #[must_use]
    pub fn parse(context: &UrlContext, text: &str) -> Self {
        let parsed = context.join(text);
        let inherits_placeholder_authority = context.is_placeholder()
            && parsed.as_ref().is_ok_and(|url| {
                url.scheme() == "http"
                    && url.host_str() == Some(PLACEHOLDER_HOST)
                    && url.port().is_none()
                    && url.username().is_empty()
                    && url.password().is_none()
            })
            && !names_authority(text);

        Self {
            text: text.to_string(),
            parsed,
            inherits_placeholder_authority,
        }
    }

    /// The text this value was parsed from.
    #[inline]
    #[must_use]
    pub fn original_text(&self) -> &str {
        &self.text
    }

    /// The parsed URL, or `None` if the text did not parse.
    #[inline]
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.parsed.as_ref().ok()
    }

    /// Why the text did not parse, if it didn't.
    #[must_use]
    pub fn parse_error(&self) -> Option<url::ParseError> {
        self.parsed.as_ref().err().copied()
    }

    #[inline]
    #[must_use]
    /// Returns `true` if the text parsed as a URL
    pub const fn is_valid(&self) -> bool {
        self.parsed.is_ok()
    }

    /// Whether this value was resolved against the
    /// [placeholder](UrlContext::placeholder) and kept its authority, i.e.
    /// the text was a path, query or fragment without a host of its own.
    ///
    /// Text that spells out an authority is never inheriting, even when it
    /// names the placeholder itself, as in `http://placeholder.invalid/app`.
    #[inline]
    #[must_use]
    pub const fn inherits_placeholder_authority(&self) -> bool {
        self.inherits_placeholder_authority
    }

    /// The fragment, with the leading `#` if present.
    ///
    /// A value that did not parse has no fragment.
    #[must_use]
    pub fn fragment(&self) -> Fragment<'_> {
        let Some(url) = self.url() else {
            return Fragment::absent();
        };
        match url.fragment() {
            Some(content) => {
                // The fragment is always the tail of the serialization.
                let serialized = url.as_str();
                let start = serialized.len() - content.len() - 1;
                Fragment::present(&serialized[start..]).unwrap_or_default()
            }
            None => Fragment::absent(),
        }
    }
}

/// Whether `text` starts with an authority, e.g. `//host` or `http://host`.
///
/// Follows the URL parser in ignoring leading control characters and any tab
/// or newline. A `\` counts as `/`.
fn names_authority(text: &str) -> bool {
    let text: String = text
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect();
    let rest = match text.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http:") => &text[5..],
        _ => text.as_str(),
    };
    rest.chars().take(2).filter(|c| matches!(c, '/' | '\\')).count() == 2
}

impl From<Url> for UrlValue {
    fn from(url: Url) -> Self {
        Self {
            text: url.to_string(),
            parsed: Ok(url),
            inherits_placeholder_authority: false,
        }
    }
}

impl Display for UrlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.parsed {
            Ok(url) => f.write_str(url.as_str()),
            Err(_) => f.write_str(&self.text),
        }
    }
}
