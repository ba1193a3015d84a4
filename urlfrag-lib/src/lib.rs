//! `urlfrag` decides whether the fragment of a URL (the part after `#`)
//! satisfies a policy.
//!
//! A policy is assembled with a [`FragmentPolicyBuilder`] from two kinds of
//! rules:
//!
//! * predicates over the raw fragment text, which see an absent fragment
//!   differently from an empty one (`http://example.org/` vs.
//!   `http://example.org/#`), and
//! * URL classifiers, which are applied to the fragment content after it has
//!   been reparsed as a relative URL against a neutral placeholder origin.
//!   This covers single-page applications that keep a route in the fragment.
//!
//! ```
//! use urlfrag_lib::{
//!     Classification, FragmentPolicy, PathClassifier, RegexFilter, UrlContext, UrlValue, exact,
//! };
//!
//! # fn main() -> urlfrag_lib::Result<()> {
//! let policy = FragmentPolicy::builder()
//!     .matches(exact("#top"))
//!     .match_fragment_as_relative_url(PathClassifier::new(RegexFilter::new([r"^/app/"])?))
//!     .build();
//!
//! let context = UrlContext::placeholder();
//! let classify = |text: &str| policy.classify(&UrlValue::parse(&context, text));
//!
//! assert_eq!(classify("https://example.org/#top"), Classification::Match);
//! assert_eq!(classify("https://example.org/#/app/settings"), Classification::Match);
//! assert_eq!(classify("https://example.org/#//evil.example/app/"), Classification::NotAMatch);
//! assert_eq!(classify("https://example.org/#http://[::1"), Classification::Invalid);
//! # Ok(())
//! # }
//! ```
//!
//! Policies can also be loaded from TOML, see [`FragmentPolicyConfig`].
#![warn(clippy::all, clippy::pedantic)]
#![warn(
    absolute_paths_not_starting_with_crate,
    rustdoc::invalid_html_tags,
    missing_copy_implementations,
    missing_debug_implementations,
    semicolon_in_expressions_from_macros,
    unreachable_pub,
    unused_extern_crates,
    variant_size_differences,
    clippy::missing_const_for_fn
)]
#![deny(anonymous_parameters, macro_use_extern_crate)]
#![deny(missing_docs)]

mod classifier;
mod filter;
mod fragment;
mod types;

pub mod config;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    classifier::{AnyOf, MatchNothing, PathClassifier, UrlClassifier},
    config::{FragmentPolicyConfig, RelativeUrlConfig},
    filter::RegexFilter,
    fragment::{
        FragmentPolicy, FragmentPolicyBuilder, FragmentPredicate, absent, empty, exact,
    },
    types::{
        Classification, ErrorKind, Fragment, PLACEHOLDER_HOST, Result, UrlContext, UrlValue,
    },
};
