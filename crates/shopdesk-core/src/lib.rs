//! List-state reconciliation between `shopdesk-api` and front ends.
//!
//! - **[`Backoffice`]**: Facade owning the admin client. Vends one
//!   [`ListSession`] per resource type and passes notification calls
//!   straight through.
//!
//! - **[`PaginatedListStore`]**: Current page window for one list, held in
//!   a `tokio::sync::watch` channel. Page changes carry a request token so
//!   a slow, superseded fetch can never overwrite a newer page.
//!
//! - **[`MutationCoordinator`]**: One open delete/update intent at a time.
//!   Confirmed changes are reconciled into the store locally (splice by id,
//!   patch with the server's representation) instead of refetching, with a
//!   step back one page when a delete empties a page past the first.
//!
//! - **[`ResourceSource`]**: Seam between list state and HTTP, generic over
//!   the item shape ([`Resource`]). [`ApiSource`] forwards to the client.

pub mod backoffice;
pub mod config;
pub mod error;
pub mod model;
pub mod mutation;
pub mod source;
pub mod store;

// ── Primary re-exports ──────────────────────────────────────────────
pub use backoffice::{Backoffice, ListSession};
pub use config::{ClientConfig, DEFAULT_PAGE_SIZE, TlsVerification};
pub use error::CoreError;
pub use model::Resource;
pub use mutation::{DeleteOutcome, IntentKind, MutationCoordinator, MutationIntent};
pub use source::{ApiSource, ResourceSource};
pub use store::{ListState, LoadPhase, PageOutcome, PageWindow, PaginatedListStore};

// Wire types consumers need alongside the store.
pub use shopdesk_api::{
    Brand, BrandForm, BrandStatus, MediaFile, Notification, Page, Product, ProductForm,
    ProductImage, Reference,
};
