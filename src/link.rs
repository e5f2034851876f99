//! Handing article links to the host's default URI opener.

use anyhow::{Context, Result};
use url::Url;

/// Opens a URL outside the application.
pub trait LinkOpener {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Hands URLs to the platform's default handler through the `open` crate,
/// without waiting for the browser.
///
/// The URL is passed as a single argument, never through a shell, so query
/// strings with `&` or `|` reach the browser intact.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &Url) -> Result<()> {
        open::that_detached(url.as_str())
            .with_context(|| format!("could not launch a browser for {url}"))
    }
}
