use std::fmt::Display;

/// The fragment of a URL, borrowed from its serialization.
///
/// RFC 3986 says that
///
/// > two URIs that differ only by the suffix "#" are considered different
/// > regardless of the scheme.
///
/// so a URL without `#` has an *absent* fragment while `http://example.org/#`
/// has a *present* but empty one. A present fragment always includes the
/// leading `#`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fragment<'a>(Option<&'a str>);

impl<'a> Fragment<'a> {
    /// The fragment of a URL without `#`.
    #[must_use]
    pub const fn absent() -> Self {
        Self(None)
    }

    /// A present fragment. Returns `None` unless `text` starts with `#`.
    #[must_use]
    pub fn present(text: &'a str) -> Option<Self> {
        text.starts_with('#').then_some(Self(Some(text)))
    }

    #[inline]
    #[must_use]
    /// Returns `true` if the URL has no `#`
    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    #[inline]
    #[must_use]
    /// Returns `true` if the URL has a `#`, even a trailing one
    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    #[inline]
    #[must_use]
    /// Returns `true` if the fragment is present and is just `#`
    pub fn is_empty(&self) -> bool {
        self.0 == Some("#")
    }

    /// The fragment including the leading `#`.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        self.0
    }

    /// The fragment content after the leading `#`.
    #[must_use]
    pub fn content(&self) -> Option<&'a str> {
        self.0.map(|text| &text[1..])
    }
}

impl Display for Fragment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::Fragment;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_and_empty_differ() {
        let absent = Fragment::absent();
        let empty = Fragment::present("#").unwrap();

        assert_ne!(absent, empty);
        assert!(absent.is_absent());
        assert!(!absent.is_empty());
        assert!(empty.is_present());
        assert!(empty.is_empty());
        assert_eq!(absent.content(), None);
        assert_eq!(empty.content(), Some(""));
    }

    #[test]
    fn test_present_requires_hash() {
        assert_eq!(Fragment::present("top"), None);
        assert_eq!(Fragment::present(""), None);

        let fragment = Fragment::present("#top").unwrap();
        assert_eq!(fragment.as_str(), Some("#top"));
        assert_eq!(fragment.content(), Some("top"));
        assert_eq!(fragment.to_string(), "#top");
    }
}
