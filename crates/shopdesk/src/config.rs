//! CLI configuration: thin wrapper around `shopdesk_config`.
//!
//! Adds resolution that respects `GlobalOpts` flag overrides
//! (--base-url, --token, --insecure, --timeout) on top of the profile.

use std::time::Duration;

use secrecy::SecretString;

use shopdesk_core::{ClientConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use shopdesk_config::{
    Config, Profile, config_path, load_config, load_config_or_default, save_config,
};

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    config.active_profile_name(global.profile.as_deref())
}

/// Build the `ClientConfig` for this invocation.
///
/// Flags win over the profile, the profile over `[defaults]`. Without a
/// matching profile, `--base-url` and `--token` must both be given.
pub fn build_client_config(global: &GlobalOpts, cfg: &Config) -> Result<ClientConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let Some(stored) = cfg.profiles.get(&profile_name) else {
        if global.profile.is_some() {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(cfg),
            });
        }
        return from_flags_only(global, cfg, &profile_name);
    };

    let mut profile = stored.clone();
    if let Some(ref url) = global.base_url {
        profile.base_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }

    let token = match global.token {
        Some(ref token) => SecretString::from(token.clone()),
        None => shopdesk_config::resolve_token(&profile, &profile_name)?,
    };

    Ok(shopdesk_config::profile_to_client_config(
        &profile,
        &cfg.defaults,
        token,
    )?)
}

fn from_flags_only(
    global: &GlobalOpts,
    cfg: &Config,
    profile_name: &str,
) -> Result<ClientConfig, CliError> {
    let url_str = global
        .base_url
        .as_deref()
        .ok_or_else(|| CliError::ProfileNotFound {
            name: profile_name.into(),
            available: available_profiles(cfg),
        })?;
    let base_url = shopdesk_config::parse_base_url(url_str)?;

    let token = global
        .token
        .clone()
        .map(SecretString::from)
        .ok_or_else(|| CliError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let mut config = ClientConfig::new(base_url, token);
    config.tls = if global.insecure || cfg.defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };
    config.timeout = Duration::from_secs(global.timeout.unwrap_or(cfg.defaults.timeout));
    config.page_size = cfg.defaults.page_size;
    Ok(config)
}

/// Comma-separated profile names for error help text.
pub fn available_profiles(cfg: &Config) -> String {
    if cfg.profiles.is_empty() {
        "(none)".into()
    } else {
        cfg.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
    }
}
