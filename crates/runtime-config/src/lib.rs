//! Shared shell configuration types.
//!
//! The TUI reads/writes `tripdeck.toml` using these types. The backend URL
//! and anonymous key are opaque injected values; the shell performs no
//! validation on them beyond trimming.

use serde::{Deserialize, Serialize};

/// Canonical config file name used by the shell.
pub const CONFIG_FILE_NAME: &str = "tripdeck.toml";

/// Top-level shell configuration (persisted as `tripdeck.toml`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub identity: IdentitySettings,
}

/// Where the notification endpoint lives and which anonymous credential
/// accompanies every read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Public anonymous key sent as a bearer credential
    #[serde(default, alias = "public_anon_key")]
    pub anon_key: String,
    /// Request timeout for notification reads
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            anon_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentitySettings {
    #[serde(default = "default_nickname")]
    pub nickname: String,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            nickname: default_nickname(),
        }
    }
}

// ── Serde default functions ─────────────────────────────────────────────

fn default_backend_url() -> String {
    "https://api.tripdeck.io".to_string()
}
fn default_request_timeout_secs() -> u64 {
    15
}
fn default_nickname() -> String {
    "traveler".to_string()
}

/// Apply compatibility fallbacks after loading raw TOML.
/// Returns true when any field was updated.
pub fn apply_compat_fallbacks(config: &mut ShellConfig) -> bool {
    let mut changed = false;

    if config.backend.url.trim().is_empty() {
        config.backend.url = default_backend_url();
        changed = true;
    }

    if config.backend.request_timeout_secs == 0 {
        config.backend.request_timeout_secs = default_request_timeout_secs();
        changed = true;
    }

    changed
}
