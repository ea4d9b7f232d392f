// ── Runtime connection configuration ──
//
// These types describe *how* to reach the admin backend. They carry the
// bearer token and connection tuning, but never touch disk. The CLI
// builds a `ClientConfig` (usually via shopdesk-config) and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use shopdesk_api::{AdminClient, Credentials, TlsMode, TransportConfig};

use crate::error::CoreError;

/// Page size used when a profile does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(std::path::PathBuf),
    /// Skip verification (local development backends).
    DangerAcceptInvalid,
}

impl From<TlsVerification> for TlsMode {
    fn from(tls: TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// Configuration for talking to one backend.
///
/// The token is threaded in explicitly; nothing here is read from
/// process-wide state.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend root (e.g. `https://shop.example`).
    pub base_url: Url,
    pub token: SecretString,
    pub tls: TlsVerification,
    pub timeout: Duration,
    /// Fixed page size for every list session built from this config.
    pub page_size: u32,
}

impl ClientConfig {
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            base_url,
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build the HTTP client this configuration describes.
    pub fn build_client(&self) -> Result<AdminClient, CoreError> {
        if self.page_size == 0 {
            return Err(CoreError::Config {
                message: "page size must be at least 1".into(),
            });
        }
        let transport = TransportConfig {
            tls: self.tls.clone().into(),
            timeout: self.timeout,
        };
        let credentials = Credentials::bearer(self.token.clone());
        Ok(AdminClient::new(
            self.base_url.as_str(),
            &credentials,
            &transport,
        )?)
    }
}
