//! Headline source abstraction layer.
//!
//! This module defines the [`HeadlineSource`] trait and the response types
//! ([`NewsResult`], [`Article`]).  The only concrete source is
//! [`NewsApiClient`], in [`newsapi`].
//!
//! ## For contributors: adding a new source
//!
//! 1. Create a new file in this directory (e.g. `gnews.rs`).
//! 2. Define a client struct and implement [`HeadlineSource`] for it,
//!    converting the provider's payload into [`NewsResult`].
//! 3. Add `mod gnews;` below and re-export your struct in the `pub use` block.
//! 4. Construct it in `main.rs` in place of (or next to) `NewsApiClient`.
//!
//! The store and the UI only ever see [`NewsResult`], so nothing else changes.

mod article;
mod error;
mod newsapi;

pub use article::{Article, NewsResult};
pub use error::{error_message, ApiError};
pub use newsapi::NewsApiClient;

use async_trait::async_trait;

/// Trait that every headline provider must implement.
///
/// The store calls [`top_headlines()`](HeadlineSource::top_headlines) from a
/// spawned tokio task, so implementations must be [`Send`] + [`Sync`].
#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Human-readable label used in logs and the status bar.
    fn name(&self) -> &str;

    /// Fetch the current top headlines for a two-letter country code.
    async fn top_headlines(&self, country: &str, api_key: &str) -> Result<NewsResult, ApiError>;
}
