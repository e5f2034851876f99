//! Fetch lifecycle state.
//!
//! [`NewsStore`] owns the one piece of mutable state in the application, the
//! current [`FetchState`], and publishes every transition over a
//! [`tokio::sync::watch`] channel.  The UI never mutates it; it only reads
//! snapshots from a [`watch::Receiver`].
//!
//! ```text
//!   fetch()                 task completes
//! Idle ──► Loading ──────────────────────► Success(result) | Error(message)
//!            ▲                                         │
//!            └──────────────── fetch() ────────────────┘
//! ```
//!
//! ## Overlapping fetches
//!
//! Each `fetch()` bumps a generation counter, aborts the previous task and
//! publishes `Loading`.  A finishing task only publishes if its generation is
//! still current; the check and the write happen under the channel's lock, so
//! a stale result can never land after a newer `Loading`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::source::{error_message, HeadlineSource, NewsResult};

/// Where the latest fetch stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request succeeded.
    Success(NewsResult),
    /// The latest request failed with this message.
    Error(String),
}

/// Holds the fetch state and drives requests against a [`HeadlineSource`].
pub struct NewsStore {
    source: Arc<dyn HeadlineSource>,
    country: String,
    api_key: String,
    state: Arc<watch::Sender<FetchState>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl NewsStore {
    pub fn new(
        source: Arc<dyn HeadlineSource>,
        country: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            source,
            country: country.into(),
            api_key: api_key.into(),
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    /// The country this store fetches headlines for.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Name of the underlying source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Start a fetch.
    ///
    /// `Loading` is published before this returns; the request itself runs on
    /// a spawned task.  Must be called from within a tokio runtime.
    pub fn fetch(&mut self) {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = FetchState::Loading;
        });
        debug!(generation, country = %self.country, "fetch started");

        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let current = Arc::clone(&self.generation);
        let country = self.country.clone();
        let api_key = self.api_key.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let next = match source.top_headlines(&country, &api_key).await {
                Ok(result) => FetchState::Success(result),
                Err(e) => FetchState::Error(error_message(&e)),
            };

            publish(&state, &current, generation, next);
        }));
    }
}

/// Write a finished fetch's outcome unless a newer fetch has started since.
///
/// Returns whether `next` was published.
fn publish(
    state: &watch::Sender<FetchState>,
    current: &AtomicU64,
    generation: u64,
    next: FetchState,
) -> bool {
    let applied = state.send_if_modified(|state| {
        if current.load(Ordering::SeqCst) != generation {
            return false;
        }
        *state = next;
        true
    });

    if applied {
        debug!(generation, "fetch finished");
    } else {
        debug!(generation, "dropping stale fetch result");
    }
    applied
}

impl Drop for NewsStore {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
