// ── Paginated list store ──
//
// Holds one page window per list and refetches it on page change.
// State lives in a `watch` channel: readers take cheap snapshots or
// subscribe, and every write goes through `send_modify` /
// `send_if_modified`, so the staleness check and the write that depends
// on it happen under the same lock.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::Resource;
use crate::source::ResourceSource;
use crate::store::window::PageWindow;

/// Where the store is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// Nothing requested yet.
    Idle,
    /// A fetch for `page` is in flight.
    Loading { page: u32 },
    /// The window reflects the latest completed fetch (or the previous
    /// window, if that fetch failed; see [`ListState::last_error`]).
    Loaded,
}

/// Result of a page change that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The fetched page is now the current window.
    Applied,
    /// A newer page request superseded this one; its result was dropped.
    Stale,
    /// The request was a no-op (page < 1, or no page in that direction).
    Ignored,
}

/// Snapshot of one list's state.
#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub phase: LoadPhase,
    pub window: PageWindow<T>,
    /// Failure from the most recent load, cleared by the next success.
    pub last_error: Option<CoreError>,
    request_token: u64,
}

impl<T> ListState<T> {
    fn new(page_size: u32) -> Self {
        Self {
            phase: LoadPhase::Idle,
            window: PageWindow::empty(page_size),
            last_error: None,
            request_token: 0,
        }
    }

    /// Token of the latest issued page request.
    pub fn request_token(&self) -> u64 {
        self.request_token
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }
}

/// In-memory state for one paginated list (brands or products).
///
/// Page changes are not queued: each `set_page` issues a new request
/// token, and a completed fetch is written only if its token is still
/// the latest one.
pub struct PaginatedListStore<S: ResourceSource> {
    source: Arc<S>,
    page_size: u32,
    state: watch::Sender<ListState<S::Item>>,
}

impl<S: ResourceSource> PaginatedListStore<S> {
    /// `page_size` is fixed for the store's lifetime; 0 is raised to 1.
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let (state, _) = watch::channel(ListState::new(page_size));
        Self {
            source,
            page_size,
            state,
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Current state by value.
    pub fn snapshot(&self) -> ListState<S::Item> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ListState<S::Item>> {
        self.state.subscribe()
    }

    pub fn page_number(&self) -> u32 {
        self.state.borrow().window.page_number
    }

    pub fn items(&self) -> Vec<S::Item> {
        self.state.borrow().window.items.clone()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number() > 1
    }

    pub fn has_next(&self) -> bool {
        self.state.borrow().window.has_more
    }

    // ── Page changes ─────────────────────────────────────────────────

    /// Fetch page `page` and make it the current window.
    ///
    /// On failure the previous window stays in place, the error is
    /// recorded in `last_error` and returned. Results (and failures) of
    /// superseded requests are dropped and reported as
    /// [`PageOutcome::Stale`].
    pub async fn set_page(&self, page: u32) -> Result<PageOutcome, CoreError> {
        if page < 1 {
            debug!(kind = S::Item::KIND, page, "ignoring page change below 1");
            return Ok(PageOutcome::Ignored);
        }

        let mut token = 0;
        self.state.send_modify(|s| {
            s.request_token += 1;
            token = s.request_token;
            s.phase = LoadPhase::Loading { page };
        });
        debug!(kind = S::Item::KIND, page, token, "loading page");

        let page_size = self.page_size;
        match self.source.list(page, page_size).await {
            Ok(fetched) => {
                let applied = self.state.send_if_modified(|s| {
                    if s.request_token != token {
                        return false;
                    }
                    s.window = PageWindow::from_fetch(page, page_size, fetched.items);
                    s.phase = LoadPhase::Loaded;
                    s.last_error = None;
                    true
                });
                if applied {
                    info!(kind = S::Item::KIND, page, "page loaded");
                    Ok(PageOutcome::Applied)
                } else {
                    warn!(kind = S::Item::KIND, page, token, "discarding stale page response");
                    Ok(PageOutcome::Stale)
                }
            }
            Err(err) => {
                let current = self.state.send_if_modified(|s| {
                    if s.request_token != token {
                        return false;
                    }
                    s.phase = LoadPhase::Loaded;
                    s.last_error = Some(err.clone());
                    true
                });
                if current {
                    warn!(kind = S::Item::KIND, page, error = %err, "page load failed");
                    Err(err)
                } else {
                    debug!(kind = S::Item::KIND, page, error = %err, "dropping stale page failure");
                    Ok(PageOutcome::Stale)
                }
            }
        }
    }

    /// Refetch the current page.
    pub async fn reload(&self) -> Result<PageOutcome, CoreError> {
        self.set_page(self.page_number()).await
    }

    pub async fn next_page(&self) -> Result<PageOutcome, CoreError> {
        if !self.has_next() {
            return Ok(PageOutcome::Ignored);
        }
        self.set_page(self.page_number().saturating_add(1)).await
    }

    pub async fn previous_page(&self) -> Result<PageOutcome, CoreError> {
        if !self.has_previous() {
            return Ok(PageOutcome::Ignored);
        }
        self.set_page(self.page_number() - 1).await
    }

    // ── Local reconciliation ─────────────────────────────────────────

    /// Splice an item out of the current window by id. No refetch.
    pub fn remove_item(&self, id: u64) -> Option<S::Item> {
        let mut removed = None;
        self.state.send_if_modified(|s| {
            removed = s.window.remove(id);
            removed.is_some()
        });
        if removed.is_some() {
            debug!(kind = S::Item::KIND, id, "removed item from window");
        }
        removed
    }

    /// Patch an item in the current window with a fresh representation.
    /// Returns `false` if no item with that id is on the current page.
    pub fn replace_item(&self, item: S::Item) -> bool {
        let id = item.id();
        let replaced = self.state.send_if_modified(|s| s.window.replace(item));
        if replaced {
            debug!(kind = S::Item::KIND, id, "replaced item in window");
        }
        replaced
    }
}
