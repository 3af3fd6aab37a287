use futures::future::{AbortHandle, Abortable};
use tokio::sync::watch;

use crate::{listing::ListingSummary, source::ListingSource};

pub const LOAD_FAILED_MESSAGE: &str =
    "데이터를 불러오는 데 실패했습니다. 잠시 후 다시 시도해주세요.";
pub const EMPTY_FEED_MESSAGE: &str = "등록된 숙소가 없습니다.";

/// What the listing feed currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Vec<ListingSummary>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Render the feed as an HTML fragment.
    ///
    /// Depends on nothing but `self`, so it can be called any number of times.
    pub fn render(&self) -> String {
        crate::server::ui::render_listing_feed(self)
    }
}

/// The listing feed component.
///
/// Holds the configured listing source. Every call to [`ListingFeed::start`]
/// is an independent activation with its own state and exactly one request.
#[derive(Clone, Debug)]
pub struct ListingFeed {
    source: ListingSource,
}

impl ListingFeed {
    pub fn new(source: ListingSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &ListingSource {
        &self.source
    }

    /// Activate the feed: the state starts out as [`ViewState::Loading`] and
    /// a single fetch is spawned in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> FeedActivation {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let (abort, registration) = AbortHandle::new_pair();

        let task = Abortable::new(settle(self.source.clone(), tx), registration);
        tokio::spawn(async move {
            if task.await.is_err() {
                tracing::debug!("listing fetch cancelled before settlement");
            }
        });

        tracing::trace!("listing feed activated");

        FeedActivation { state: rx, abort }
    }
}

async fn settle(source: ListingSource, tx: watch::Sender<ViewState>) {
    let next = match source.fetch_listings().await {
        Ok(listings) => ViewState::Loaded(listings),
        Err(err) => {
            tracing::warn!(endpoint = %source.endpoint(), "failed to load listings: {}", err);
            ViewState::Error(LOAD_FAILED_MESSAGE.to_string())
        }
    };

    // Receivers may already be gone; the value is simply discarded then.
    tx.send_replace(next);
}

/// Handle to a single activation of the listing feed.
///
/// Dropping the handle cancels a request that has not settled yet.
#[derive(Debug)]
pub struct FeedActivation {
    state: watch::Receiver<ViewState>,
    abort: AbortHandle,
}

impl FeedActivation {
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_settled()
    }

    pub fn render(&self) -> String {
        self.state.borrow().render()
    }

    /// Wait for the request to settle and return the final state.
    ///
    /// Returns the current (still loading) state if the activation was
    /// cancelled first.
    pub async fn settled(&mut self) -> ViewState {
        let settled = self
            .state
            .wait_for(ViewState::is_settled)
            .await
            .map(|state| state.clone());

        settled.unwrap_or_else(|_| self.state())
    }

    pub fn cancel(&self) {
        self.abort.abort();
    }
}

impl Drop for FeedActivation {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
