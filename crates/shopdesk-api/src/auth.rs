use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

/// Credentials for authenticating with the admin backend.
///
/// The token is captured once and handed to the client at construction
/// time. Rotation means building a new client; a rejected token surfaces
/// as [`Error::Authentication`] and re-authentication is the caller's job.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: SecretString,
}

impl Credentials {
    /// Wrap a bearer token.
    pub fn bearer(token: SecretString) -> Self {
        Self { token }
    }

    /// Build the default headers every request carries:
    /// `Authorization: Bearer <token>` and `Accept: application/json`.
    pub(crate) fn default_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid bearer token header value: {e}"),
            })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

impl From<SecretString> for Credentials {
    fn from(token: SecretString) -> Self {
        Self::bearer(token)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_carry_bearer_and_accept() {
        let creds = Credentials::bearer(SecretString::from("abc123".to_string()));
        let headers = creds.default_headers().unwrap();

        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ACCEPT], "application/json");
    }

    #[test]
    fn newline_in_token_is_rejected() {
        let creds = Credentials::bearer(SecretString::from("bad\ntoken".to_string()));
        assert!(matches!(
            creds.default_headers(),
            Err(Error::Authentication { .. })
        ));
    }
}
