use std::{convert::TryFrom, fmt::Display};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ErrorKind, Result};

/// Host of the placeholder origin used by [`UrlContext::placeholder`].
///
/// `.invalid` is reserved by RFC 2606 and can never resolve, so a URL that
/// still carries this host after resolution did not name an authority of
/// its own.
pub const PLACEHOLDER_HOST: &str = "placeholder.invalid";

const PLACEHOLDER_URL: &str = "http://placeholder.invalid/";

/// The base against which URL text is resolved.
///
/// Relative references like `../c` or `/app` only become URLs once they are
/// joined with a base. Fragment content is always joined with the
/// [placeholder](UrlContext::placeholder), never with the URL it came from,
/// so it cannot borrow that URL's host or path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UrlContext {
    /// Base URL. This **must** be a valid base. That is, [`Url::cannot_be_a_base`] must be false.
    base_url: Url,
}

impl UrlContext {
    /// The neutral placeholder origin `http://placeholder.invalid/`, with an
    /// unknown host and the root path.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            base_url: Url::parse(PLACEHOLDER_URL).expect("placeholder URL is well-formed"),
        }
    }

    /// Constructs a [`UrlContext`] from the given URL, requiring that it be
    /// acceptable as a base URL. That is, it cannot be a URL like `data:`.
    ///
    /// # Errors
    ///
    /// Errors if the given URL cannot be a base.
    pub fn from_url(url: Url) -> Result<Self> {
        if url.cannot_be_a_base() {
            return Err(ErrorKind::InvalidBase(
                url.to_string(),
                "The given URL cannot be used as a base URL".to_string(),
            ));
        }

        Ok(Self { base_url: url })
    }

    /// Returns `true` if this is the placeholder origin.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.base_url.as_str() == PLACEHOLDER_URL
    }

    /// The base URL of this context.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `text` against the base URL. `text` may be absolute or relative.
    pub(crate) fn join(&self, text: &str) -> std::result::Result<Url, url::ParseError> {
        self.base_url.join(text)
    }
}

impl Default for UrlContext {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl TryFrom<String> for UrlContext {
    type Error = ErrorKind;

    fn try_from(value: String) -> Result<Self> {
        let url = Url::parse(&value).map_err(|e| ErrorKind::InvalidBase(value, e.to_string()))?;
        Self::from_url(url)
    }
}

impl TryFrom<&str> for UrlContext {
    type Error = ErrorKind;

    fn try_from(value: &str) -> Result<Self> {
        Self::try_from(value.to_string())
    }
}

impl From<UrlContext> for String {
    fn from(context: UrlContext) -> Self {
        context.base_url.into()
    }
}

impl Display for UrlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_url.as_str())
    }
}
