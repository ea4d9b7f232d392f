// ── Backoffice facade ──
//
// Entry point for consumers: owns the admin client and vends one
// list session (store + coordinator) per resource type. Notifications
// are plain request/response calls with no list state.

use std::sync::Arc;

use tracing::debug;

use shopdesk_api::{AdminClient, Brand, Notification, Product};

use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::mutation::MutationCoordinator;
use crate::source::{ApiSource, ResourceSource};
use crate::store::PaginatedListStore;

/// A list store paired with the coordinator that mutates it.
pub struct ListSession<S: ResourceSource> {
    store: Arc<PaginatedListStore<S>>,
    mutations: MutationCoordinator<S>,
}

impl<S: ResourceSource> ListSession<S> {
    pub fn new(source: Arc<S>, page_size: u32) -> Self {
        let store = Arc::new(PaginatedListStore::new(source, page_size));
        let mutations = MutationCoordinator::new(Arc::clone(&store));
        Self { store, mutations }
    }

    pub fn store(&self) -> &Arc<PaginatedListStore<S>> {
        &self.store
    }

    pub fn mutations(&self) -> &MutationCoordinator<S> {
        &self.mutations
    }

    /// The data source behind this list, for reads and creates that do
    /// not touch the window.
    pub fn source(&self) -> &S {
        self.store.source()
    }
}

/// Cheaply cloneable handle to one backend.
#[derive(Clone)]
pub struct Backoffice {
    inner: Arc<BackofficeInner>,
}

struct BackofficeInner {
    config: ClientConfig,
    client: Arc<AdminClient>,
}

impl Backoffice {
    /// Build the HTTP client for `config`. Does not contact the server.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let client = Arc::new(config.build_client()?);
        debug!(base_url = %client.base_url(), page_size = config.page_size, "backoffice ready");
        Ok(Self {
            inner: Arc::new(BackofficeInner { config, client }),
        })
    }

    /// Wrap an already-built client (tests, custom transports).
    pub fn with_client(config: ClientConfig, client: AdminClient) -> Self {
        Self {
            inner: Arc::new(BackofficeInner {
                config,
                client: Arc::new(client),
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &AdminClient {
        &self.inner.client
    }

    // ── List sessions ────────────────────────────────────────────────

    pub fn brands(&self) -> ListSession<ApiSource<Brand>> {
        self.session(self.inner.config.page_size)
    }

    pub fn products(&self) -> ListSession<ApiSource<Product>> {
        self.session(self.inner.config.page_size)
    }

    /// A fresh list session for any resource with an API source, using
    /// `page_size` instead of the configured default.
    pub fn session<T>(&self, page_size: u32) -> ListSession<ApiSource<T>>
    where
        ApiSource<T>: ResourceSource,
    {
        ListSession::new(
            Arc::new(ApiSource::new(Arc::clone(&self.inner.client))),
            page_size,
        )
    }

    // ── Notifications ────────────────────────────────────────────────

    pub async fn latest_notifications(&self) -> Result<Vec<Notification>, CoreError> {
        Ok(self.inner.client.latest_notifications().await?)
    }

    pub async fn send_notification(
        &self,
        title: &str,
        body: &str,
    ) -> Result<Notification, CoreError> {
        Ok(self.inner.client.send_notification(title, body).await?)
    }
}
