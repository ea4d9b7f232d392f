//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a stable process exit code.

use miette::Diagnostic;
use thiserror::Error;

use shopdesk_config::ConfigError;
use shopdesk_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the backend at {url}")]
    #[diagnostic(
        code(shopdesk::connection_failed),
        help(
            "Check that the server is running and the base URL is right.\n\
             Reason: {reason}\n\
             Self-signed certificate? Try --insecure (-k)."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(shopdesk::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(shopdesk::auth_failed),
        help(
            "The token was rejected. Issue a new one and store it with:\n\
             shopdesk config init"
        )
    )]
    AuthFailed { message: String },

    #[error("No token configured for profile '{profile}'")]
    #[diagnostic(
        code(shopdesk::no_credentials),
        help(
            "Configure credentials with: shopdesk config init\n\
             Or pass --token / set SHOPDESK_TOKEN."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(shopdesk::not_found),
        help("Run: shopdesk {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("{message}")]
    #[diagnostic(code(shopdesk::busy), help("Finish or cancel the open change first."))]
    Conflict { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Server rejected the request: {message}")]
    #[diagnostic(code(shopdesk::rejected), help("{details}"))]
    Rejected { message: String, details: String },

    #[error("API error: {message}")]
    #[diagnostic(code(shopdesk::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(shopdesk::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(shopdesk::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: shopdesk config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(shopdesk::keyring),
        help("Store the token in the config file instead, or set token_env on the profile.")
    )]
    Keyring(String),

    #[error(transparent)]
    #[diagnostic(code(shopdesk::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(shopdesk::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to write config: {0}")]
    #[diagnostic(code(shopdesk::serialization))]
    Serialization(String),

    #[error("Internal error: {0}")]
    #[diagnostic(code(shopdesk::internal))]
    Internal(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Conflict { .. } => exit_code::CONFLICT,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Rewrite a generic not-found into one naming the resource the user
    /// asked for.
    pub fn for_resource(self, resource_type: &str, identifier: impl ToString) -> Self {
        match self {
            Self::NotFound { .. } => Self::NotFound {
                resource_type: resource_type.into(),
                identifier: identifier.to_string(),
                list_command: format!("{resource_type}s list"),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { url, reason } => Self::ConnectionFailed { url, reason },

            CoreError::Timeout => Self::Timeout,

            CoreError::Auth { message } => Self::AuthFailed { message },

            CoreError::NotFound { path } => Self::NotFound {
                resource_type: "resource".into(),
                identifier: path,
                list_command: "--help".into(),
            },

            CoreError::Validation { message, fields } => {
                let details = fields
                    .iter()
                    .map(|(field, msgs)| format!("{field}: {}", msgs.join("; ")))
                    .collect::<Vec<_>>()
                    .join("\n");
                Self::Rejected { message, details }
            }

            CoreError::Server { status, message } => Self::ApiError {
                message: format!("HTTP {status}: {message}"),
            },

            CoreError::Api { message, .. } => Self::ApiError { message },

            err @ (CoreError::IntentInProgress { .. }
            | CoreError::NoIntent { .. }
            | CoreError::IntentBusy { .. }) => Self::Conflict {
                message: err.to_string(),
            },

            CoreError::Config { message } => Self::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::UnknownProfile { name } => Self::ProfileNotFound {
                name,
                available: "(none)".into(),
            },
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Keyring(message) => Self::Keyring(message),
            ConfigError::Serialization(e) => Self::Serialization(e.to_string()),
            ConfigError::Figment(e) => Self::Config(e),
            ConfigError::Io(e) => Self::Io(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn exit_codes_follow_error_class() {
        assert_eq!(
            CliError::from(CoreError::Auth {
                message: "bad".into()
            })
            .exit_code(),
            exit_code::AUTH
        );
        assert_eq!(CliError::from(CoreError::Timeout).exit_code(), exit_code::TIMEOUT);
        assert_eq!(
            CliError::from(CoreError::Transport {
                url: "http://x".into(),
                reason: "refused".into()
            })
            .exit_code(),
            exit_code::CONNECTION
        );
        assert_eq!(
            CliError::from(ConfigError::NoCredentials {
                profile: "default".into()
            })
            .exit_code(),
            exit_code::AUTH
        );
    }

    #[test]
    fn not_found_is_renamed_for_the_resource() {
        let err = CliError::from(CoreError::NotFound {
            path: "/api/v1/admin/brands/9".into(),
        })
        .for_resource("brand", 9);
        assert_eq!(err.to_string(), "brand '9' not found");
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn validation_fields_become_help_text() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_owned(), vec!["is required".to_owned()]);
        let err = CliError::from(CoreError::Validation {
            message: "invalid".into(),
            fields,
        });
        match err {
            CliError::Rejected { details, .. } => assert_eq!(details, "name: is required"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
