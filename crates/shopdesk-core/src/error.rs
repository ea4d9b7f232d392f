// ── Core error types ──
//
// User-facing errors from shopdesk-core. Consumers never see reqwest
// errors or JSON parse failures directly; the `From<shopdesk_api::Error>`
// impl translates transport-layer errors into this taxonomy.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::mutation::IntentKind;

/// Unified error type for the core crate.
///
/// `Clone` so the list store can keep the last failure in its snapshot.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach backend at {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ── Response errors ──────────────────────────────────────────────
    #[error("Not found: {path}")]
    NotFound { path: String },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Mutation intent errors ───────────────────────────────────────
    #[error("A {kind} is already open; finish or cancel it first")]
    IntentInProgress { kind: IntentKind },

    #[error("No {kind} is open")]
    NoIntent { kind: IntentKind },

    #[error("A {kind} request is still in flight")]
    IntentBusy { kind: IntentKind },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopdesk_api::Error> for CoreError {
    fn from(err: shopdesk_api::Error) -> Self {
        match err {
            shopdesk_api::Error::Authentication { message } => CoreError::Auth { message },
            shopdesk_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() || e.is_request() {
                    CoreError::Transport {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            shopdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            shopdesk_api::Error::Tls(msg) => CoreError::Transport {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            shopdesk_api::Error::NotFound { path } => CoreError::NotFound { path },
            shopdesk_api::Error::Validation { message, fields } => {
                CoreError::Validation { message, fields }
            }
            shopdesk_api::Error::Server { status, message } => {
                CoreError::Server { status, message }
            }
            shopdesk_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            shopdesk_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            shopdesk_api::Error::InvalidForm { field, reason } => CoreError::Validation {
                message: format!("{field}: {reason}"),
                fields: BTreeMap::from([(field, vec![reason])]),
            },
        }
    }
}
