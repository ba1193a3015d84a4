#![allow(unreachable_pub)]

mod classification;
mod context;
mod error;
mod fragment;
mod url_value;

pub use classification::Classification;
pub use context::{PLACEHOLDER_HOST, UrlContext};
pub use error::ErrorKind;
pub use fragment::Fragment;
pub use url_value::UrlValue;

/// The urlfrag `Result` type
pub type Result<T> = std::result::Result<T, crate::ErrorKind>;
