use directories::BaseDirs;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "portfolio.toml";
pub const DEFAULT_TABLE: &str = "messages";

pub const URL_VAR: &str = "PORTFOLIO_STORE_URL";
pub const KEY_VAR: &str = "PORTFOLIO_STORE_KEY";
pub const TABLE_VAR: &str = "PORTFOLIO_STORE_TABLE";

/// Where contact submissions go. Missing values are valid; they only fail once a
/// submission is actually sent.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StoreSettings {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        // Baked in at compile time.
        Self {
            url: option_env!("PORTFOLIO_STORE_URL").unwrap_or_default().to_string(),
            anon_key: option_env!("PORTFOLIO_STORE_KEY").unwrap_or_default().to_string(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl StoreSettings {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join(CONFIG_FILE))
    }

    /// Build-time defaults, then `portfolio.toml` in the config dir, then the
    /// process environment.
    pub fn load() -> Self {
        let file = Self::toml_path().and_then(|path| match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!("Could not read {}: {e}", path.display());
                }
                None
            }
        });
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    pub fn from_sources<F>(file: Option<&str>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match file.map(toml::from_str::<StoreSettings>) {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                warn!("Ignoring malformed {CONFIG_FILE}: {e}");
                Self::default()
            }
            None => Self::default(),
        };

        if let Some(url) = env(URL_VAR) {
            settings.url = url;
        }
        if let Some(key) = env(KEY_VAR) {
            settings.anon_key = key;
        }
        if let Some(table) = env(TABLE_VAR).filter(|t| !t.trim().is_empty()) {
            settings.table = table;
        }
        if settings.table.trim().is_empty() {
            settings.table = DEFAULT_TABLE.to_string();
        }

        settings.url = normalize_url(&settings.url);
        settings
    }
}

pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
