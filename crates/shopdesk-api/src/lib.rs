// shopdesk-api: Async Rust client for the storefront admin REST API

pub mod auth;
pub mod brands;
pub mod client;
pub mod error;
pub mod form;
pub mod models;
pub mod notifications;
pub mod products;
pub mod transport;

pub use auth::Credentials;
pub use client::AdminClient;
pub use error::Error;
pub use form::{BrandForm, MediaFile, ProductForm};
pub use models::{Brand, BrandStatus, Notification, Page, Product, ProductImage, Reference};
pub use transport::{TlsMode, TransportConfig};
