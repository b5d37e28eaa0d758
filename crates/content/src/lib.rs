//! Dynamic page content served by the CMS
//!
//! The page ships with pre-rendered band info, services and social links.
//! Whatever the CMS returns replaces them; when a collection cannot be loaded
//! the pre-rendered version stays untouched.

mod client;
mod loader;
mod types;

pub use client::*;
pub use loader::*;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0} returned no records")]
    Empty(&'static str),
}

pub type Result<T> = std::result::Result<T, ContentError>;
