// Async HTTP client for the storefront admin REST API.
//
// Base path: /api/v1/ (public), /api/v1/admin/ (privileged)
// Auth: `Authorization: Bearer <token>` default header
//
// Endpoint methods live in `brands.rs`, `products.rs`, and
// `notifications.rs` as inherent impls; this module only knows about
// URLs, verbs, and response classification.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;

const API_ROOT: &str = "/api/v1";

// ── Error response shape (Laravel-style) ─────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the storefront admin API.
///
/// Stateless apart from the underlying connection pool: every call
/// carries the bearer token captured at construction and nothing is
/// retried.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AdminClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a backend root URL, explicit credentials, and transport
    /// settings.
    ///
    /// `base_url` may be the site root (`https://shop.example`) or already
    /// point at the API root (`https://shop.example/api/v1`).
    pub fn new(
        base_url: &str,
        credentials: &Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client_with_headers(credentials.default_headers()?)?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Normalize to `{root}/api/v1/` with a trailing slash so relative
    /// joins land under the API root.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();

        if path.ends_with(API_ROOT) {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}{API_ROOT}/"));
        }

        Ok(url)
    }

    /// The normalized API root (always ends with `/api/v1/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Public endpoint: `{root}/api/v1/{path}`.
    pub(crate) fn public_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Privileged endpoint: `{root}/api/v1/admin/{path}`.
    pub(crate) fn admin_url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(&format!("admin/{path}"))?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T, Error> {
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        self.handle_response(resp).await
    }

    /// POST a multipart body. Updates go through here as well, with a
    /// `_method=PUT` field already added by the caller.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: Url,
        form: Form,
    ) -> Result<T, Error> {
        debug!("POST {url} (multipart)");

        let resp = self.http.post(url).multipart(form).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<(), Error> {
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            trace!(len = body.len(), "response body received");
            serde_json::from_str(&body).map_err(|e| {
                let preview = preview(&body);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body: body.clone(),
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: StatusCode, resp: reqwest::Response) -> Error {
        let path = resp.url().path().to_owned();
        let raw = resp.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<ErrorResponse>(&raw).ok();
        let message = parsed
            .as_ref()
            .and_then(|e| e.message.clone())
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    status.to_string()
                } else {
                    preview(&raw).to_owned()
                }
            });

        match status {
            StatusCode::UNAUTHORIZED => Error::Authentication { message },
            StatusCode::NOT_FOUND => Error::NotFound { path },
            StatusCode::UNPROCESSABLE_ENTITY => Error::Validation {
                message,
                fields: parsed.and_then(|e| e.errors).unwrap_or_default(),
            },
            s if s.is_server_error() => Error::Server {
                status: s.as_u16(),
                message,
            },
            s => Error::Api {
                status: s.as_u16(),
                message,
            },
        }
    }
}

/// First 200 characters of a body, for error messages.
fn preview(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

/// Query parameters for a paginated listing.
pub(crate) fn page_params(page: u32, per_page: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("per_page", per_page.to_string())]
}
