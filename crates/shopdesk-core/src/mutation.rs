// ── Mutation coordinator ──
//
// Orchestrates delete and update intents against one list: holds the
// single open intent, calls the data source, and reconciles the list
// store locally afterwards (splice on delete, patch on update).
//
// The intent slot lock is never held across a source call. An
// `in_flight` flag marks the window between releasing it and getting
// the result back.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::Resource;
use crate::source::ResourceSource;
use crate::store::PaginatedListStore;

/// Which kind of intent an error or log line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum IntentKind {
    #[strum(to_string = "delete")]
    Delete,
    #[strum(to_string = "update")]
    Update,
    #[strum(to_string = "mutation")]
    Any,
}

/// A pending user-initiated change awaiting confirmation.
#[derive(Debug, Clone)]
pub enum MutationIntent<T: Resource> {
    Delete { target: T },
    Update { target: T, draft: T::Draft },
}

impl<T: Resource> MutationIntent<T> {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::Delete { .. } => IntentKind::Delete,
            Self::Update { .. } => IntentKind::Update,
        }
    }

    pub fn target(&self) -> &T {
        match self {
            Self::Delete { target } | Self::Update { target, .. } => target,
        }
    }
}

/// How a confirmed delete ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Item removed from the current window.
    Removed,
    /// The page emptied out, so the store moved back to `page`.
    SteppedBack { page: u32 },
    /// The server no longer had the item. Treated as done; the window is
    /// left as it was.
    AlreadyAbsent,
}

struct IntentSlot<T: Resource> {
    intent: Option<MutationIntent<T>>,
    in_flight: bool,
}

/// Delete / update orchestration for one list.
///
/// At most one intent is open at a time; opening a second one is
/// rejected with [`CoreError::IntentInProgress`].
pub struct MutationCoordinator<S: ResourceSource> {
    store: Arc<PaginatedListStore<S>>,
    slot: Mutex<IntentSlot<S::Item>>,
}

impl<S: ResourceSource> MutationCoordinator<S> {
    pub fn new(store: Arc<PaginatedListStore<S>>) -> Self {
        Self {
            store,
            slot: Mutex::new(IntentSlot {
                intent: None,
                in_flight: false,
            }),
        }
    }

    pub fn store(&self) -> &Arc<PaginatedListStore<S>> {
        &self.store
    }

    /// The open intent, if any.
    pub async fn intent(&self) -> Option<MutationIntent<S::Item>> {
        self.slot.lock().await.intent.clone()
    }

    /// `true` while a confirmed delete or update is waiting on the server.
    pub async fn busy(&self) -> bool {
        self.slot.lock().await.in_flight
    }

    // ── Opening intents ──────────────────────────────────────────────

    pub async fn request_delete(&self, item: S::Item) -> Result<(), CoreError> {
        self.open(MutationIntent::Delete { target: item }).await
    }

    /// Open an update intent and return the draft seeded from `item`.
    pub async fn request_update(
        &self,
        item: S::Item,
    ) -> Result<<S::Item as Resource>::Draft, CoreError> {
        let draft = item.to_draft();
        self.open(MutationIntent::Update {
            target: item,
            draft: draft.clone(),
        })
        .await?;
        Ok(draft)
    }

    async fn open(&self, intent: MutationIntent<S::Item>) -> Result<(), CoreError> {
        let mut slot = self.slot.lock().await;
        if let Some(ref open) = slot.intent {
            return Err(CoreError::IntentInProgress { kind: open.kind() });
        }
        debug!(
            kind = S::Item::KIND,
            intent = %intent.kind(),
            id = intent.target().id(),
            "intent opened"
        );
        slot.intent = Some(intent);
        Ok(())
    }

    /// Discard the open intent. Rejected while its request is in flight.
    pub async fn cancel(&self) -> Result<Option<MutationIntent<S::Item>>, CoreError> {
        let mut slot = self.slot.lock().await;
        if slot.in_flight {
            let kind = slot.intent.as_ref().map_or(IntentKind::Any, MutationIntent::kind);
            return Err(CoreError::IntentBusy { kind });
        }
        Ok(slot.intent.take())
    }

    // ── Delete ───────────────────────────────────────────────────────

    /// Send the open delete intent to the server and reconcile the list.
    ///
    /// - success: the item is removed by id; if it was the last item on a
    ///   page past the first, the store steps back one page and reloads it.
    ///   A window that no longer holds the item is left alone.
    /// - not found: the intent is resolved and the window is left as is.
    /// - any other failure: the intent stays open and the error is
    ///   returned.
    pub async fn confirm_delete(&self) -> Result<DeleteOutcome, CoreError> {
        let id = {
            let mut slot = self.slot.lock().await;
            if slot.in_flight {
                return Err(CoreError::IntentBusy {
                    kind: IntentKind::Delete,
                });
            }
            let Some(MutationIntent::Delete { ref target }) = slot.intent else {
                return Err(CoreError::NoIntent {
                    kind: IntentKind::Delete,
                });
            };
            let id = target.id();
            slot.in_flight = true;
            id
        };

        let result = self.store.source().delete(id).await;

        {
            let mut slot = self.slot.lock().await;
            slot.in_flight = false;
            match result {
                Ok(()) => slot.intent = None,
                Err(ref e) if e.is_not_found() => {
                    slot.intent = None;
                    info!(kind = S::Item::KIND, id, "item already gone; delete resolved");
                    return Ok(DeleteOutcome::AlreadyAbsent);
                }
                Err(e) => {
                    warn!(kind = S::Item::KIND, id, error = %e, "delete failed");
                    return Err(e);
                }
            }
        }

        info!(kind = S::Item::KIND, id, "deleted");
        let removed = self.store.remove_item(id);

        // Only step back when this delete is what emptied the page.
        let snap = self.store.snapshot();
        let page = snap.window.page_number;
        if removed.is_some() && snap.window.is_empty() && page > 1 {
            let previous = page - 1;
            debug!(kind = S::Item::KIND, from = page, to = previous, "page emptied; stepping back");
            // Reload failures are surfaced through the store's `last_error`;
            // the delete itself already succeeded.
            if let Err(e) = self.store.set_page(previous).await {
                warn!(kind = S::Item::KIND, page = previous, error = %e, "reload after step-back failed");
            }
            return Ok(DeleteOutcome::SteppedBack { page: previous });
        }
        Ok(DeleteOutcome::Removed)
    }

    // ── Update ───────────────────────────────────────────────────────

    /// Send `draft` for the open update intent.
    ///
    /// On success the store's copy is replaced by the server's returned
    /// representation and the intent closes. On failure the intent stays
    /// open holding `draft`, so it can be resubmitted.
    pub async fn confirm_update(
        &self,
        draft: <S::Item as Resource>::Draft,
    ) -> Result<S::Item, CoreError> {
        let id = {
            let mut slot = self.slot.lock().await;
            if slot.in_flight {
                return Err(CoreError::IntentBusy {
                    kind: IntentKind::Update,
                });
            }
            let Some(MutationIntent::Update {
                ref target,
                draft: ref mut kept,
            }) = slot.intent
            else {
                return Err(CoreError::NoIntent {
                    kind: IntentKind::Update,
                });
            };
            *kept = draft.clone();
            let id = target.id();
            slot.in_flight = true;
            id
        };

        let result = self.store.source().update(id, &draft).await;

        let mut slot = self.slot.lock().await;
        slot.in_flight = false;
        match result {
            Ok(updated) => {
                slot.intent = None;
                drop(slot);
                info!(kind = S::Item::KIND, id, "updated");
                if !self.store.replace_item(updated.clone()) {
                    debug!(kind = S::Item::KIND, id, "updated item not on current page");
                }
                Ok(updated)
            }
            Err(e) => {
                warn!(kind = S::Item::KIND, id, error = %e, "update failed; draft kept");
                Err(e)
            }
        }
    }
}
