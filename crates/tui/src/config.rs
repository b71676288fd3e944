use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// Re-export shared config types
pub use tripdeck_runtime_config::{
    apply_compat_fallbacks, BackendSettings, ShellConfig, CONFIG_FILE_NAME,
};

// ── File I/O ────────────────────────────────────────────────────────

pub fn config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Could not determine home directory")?;
    Ok(PathBuf::from(home).join(".config").join("tripdeck"))
}

/// Load shell config from `~/.config/tripdeck/tripdeck.toml`.
/// Missing or unreadable files yield defaults; `TRIPDECK_BACKEND_URL` and
/// `TRIPDECK_ANON_KEY` override the file when set.
pub fn load_shell_config() -> ShellConfig {
    let mut config = config_dir()
        .map(|d| load_shell_config_from(&d))
        .unwrap_or_default();
    apply_env_overrides(&mut config);
    apply_compat_fallbacks(&mut config);
    config
}

fn load_shell_config_from(dir: &Path) -> ShellConfig {
    let path = dir.join(CONFIG_FILE_NAME);
    std::fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

fn apply_env_overrides(config: &mut ShellConfig) {
    if let Ok(url) = std::env::var("TRIPDECK_BACKEND_URL") {
        if !url.trim().is_empty() {
            config.backend.url = url;
        }
    }
    if let Ok(key) = std::env::var("TRIPDECK_ANON_KEY") {
        if !key.trim().is_empty() {
            config.backend.anon_key = key;
        }
    }
}

/// Write the config to `~/.config/tripdeck/tripdeck.toml` on first run,
/// so users have a file to edit. An existing file is never touched.
pub fn ensure_shell_config_file(config: &ShellConfig) -> Result<()> {
    let dir = config_dir()?;
    ensure_shell_config_file_in(&dir, config)
}

fn ensure_shell_config_file_in(dir: &Path, config: &ShellConfig) -> Result<()> {
    if dir.join(CONFIG_FILE_NAME).exists() {
        return Ok(());
    }
    save_shell_config_to(dir, config)
}

fn save_shell_config_to(dir: &Path, config: &ShellConfig) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
