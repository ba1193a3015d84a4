use std::path::PathBuf;

use thiserror::Error;

/// Possible errors when building policies with `urlfrag_lib`.
///
/// Classification itself never fails: a malformed URL is reported as
/// [`Classification::Invalid`](crate::Classification::Invalid).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The given string can not be parsed into a valid base URL
    #[error("Error with base `{0}`: {1}")]
    InvalidBase(String, String),
    /// A regular expression in a policy did not compile
    #[error("Invalid regular expression in policy: {0}")]
    InvalidRegex(#[from] regex::Error),
    /// An exact fragment was given without its leading `#`
    #[error("Fragment `{0}` must start with '#'")]
    InvalidFragment(String),
    /// The policy configuration is not valid TOML or has unknown keys
    #[error("Failed to parse policy configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// The policy configuration file could not be read
    #[error("Failed to read policy configuration from `{}`: {}", .0.display(), .1)]
    Io(PathBuf, std::io::Error),
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidBase(b1, e1), Self::InvalidBase(b2, e2)) => b1 == b2 && e1 == e2,
            (Self::InvalidRegex(e1), Self::InvalidRegex(e2)) => e1 == e2,
            (Self::InvalidFragment(f1), Self::InvalidFragment(f2)) => f1 == f2,
            (Self::ConfigParse(e1), Self::ConfigParse(e2)) => e1.to_string() == e2.to_string(),
            (Self::Io(p1, e1), Self::Io(p2, e2)) => p1 == p2 && e1.kind() == e2.kind(),
            _ => false,
        }
    }
}

impl Eq for ErrorKind {}

#[cfg(test)]
mod tests {
    use super::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_display() {
        assert_eq!(
            ErrorKind::InvalidFragment("top".to_string()).to_string(),
            "Fragment `top` must start with '#'"
        );
        assert_eq!(
            ErrorKind::Io(
                PathBuf::from("policy.toml"),
                std::io::Error::from(std::io::ErrorKind::NotFound)
            )
            .to_string(),
            format!(
                "Failed to read policy configuration from `policy.toml`: {}",
                std::io::Error::from(std::io::ErrorKind::NotFound)
            )
        );
    }

    #[test]
    fn test_eq_compares_io_error_kind() {
        let not_found = |path: &str| {
            ErrorKind::Io(
                PathBuf::from(path),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
        };
        assert_eq!(not_found("a.toml"), not_found("a.toml"));
        assert_ne!(not_found("a.toml"), not_found("b.toml"));
    }
}
