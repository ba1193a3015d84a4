//! Declarative fragment policies.
//!
//! A policy can be written down as TOML instead of being assembled in code:
//!
//! ```toml
//! # Match URLs without a fragment
//! allow_absent = true
//! # Match URLs ending in a bare "#"
//! allow_empty = false
//! # Exact fragments, including the leading '#'
//! fragments = ["#top", "#main"]
//! # Regular expressions over the fragment, including the leading '#'
//! patterns = ['^#section-\d+$']
//!
//! # Each table matches fragments that are application routes
//! [[relative_url]]
//! paths = ['^/app/']
//! allow_authority = false
//! ```
use std::{fs, path::Path, str::FromStr};

use log::debug;
use serde::Deserialize;

use crate::{
    ErrorKind, FragmentPolicy, PathClassifier, RegexFilter, Result, absent, empty, exact,
};

/// Rules for fragments that are reparsed as relative URLs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelativeUrlConfig {
    /// Regular expressions over the path of the reparsed fragment
    #[serde(default)]
    pub paths: Vec<String>,

    /// Whether the fragment may name its own scheme or host,
    /// e.g. `#https://example.org/app/`
    #[serde(default)]
    pub allow_authority: bool,
}

/// A fragment policy as read from a configuration file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FragmentPolicyConfig {
    /// Match URLs without a fragment
    #[serde(default)]
    pub allow_absent: bool,

    /// Match URLs whose fragment is just `#`
    #[serde(default)]
    pub allow_empty: bool,

    /// Exact fragments to match, each including its leading `#`
    #[serde(default)]
    pub fragments: Vec<String>,

    /// Regular expressions over the fragment, including its leading `#`
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Fragments to reparse as relative URLs
    #[serde(default)]
    pub relative_url: Vec<RelativeUrlConfig>,
}

impl FragmentPolicyConfig {
    /// Load a policy configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|e| ErrorKind::Io(path.to_path_buf(), e))?;
        contents.parse()
    }

    /// Build the policy described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an exact fragment lacks its leading `#` or a
    /// regular expression does not compile.
    pub fn build(&self) -> Result<FragmentPolicy> {
        let mut builder = FragmentPolicy::builder();

        if self.allow_absent {
            builder.matches(absent());
        }
        if self.allow_empty {
            builder.matches(empty());
        }
        for fragment in &self.fragments {
            if !fragment.starts_with('#') {
                return Err(ErrorKind::InvalidFragment(fragment.clone()));
            }
            builder.matches(exact(fragment.as_str()));
        }
        if !self.patterns.is_empty() {
            builder.matches(RegexFilter::new(&self.patterns)?);
        }
        for relative_url in &self.relative_url {
            let mut classifier = PathClassifier::new(RegexFilter::new(&relative_url.paths)?);
            if relative_url.allow_authority {
                classifier = classifier.allow_authority();
            }
            builder.match_fragment_as_relative_url(classifier);
        }

        let policy = builder.build();
        debug!("Built fragment policy from configuration: {policy:?}");
        Ok(policy)
    }
}

impl FromStr for FragmentPolicyConfig {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
