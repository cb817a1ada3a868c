//! Configuration for the FAQ assistant

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Env var naming a TOML config file
pub const CONFIG_ENV: &str = "FAQ_ASSISTANT_CONFIG";
/// Env var overriding the knowledge file path
pub const KB_PATH_ENV: &str = "FAQ_ASSISTANT_KB_PATH";

/// Main assistant configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Knowledge store configuration
    #[serde(default)]
    pub store: StoreConfig,
    /// Chat front-end configuration
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Knowledge store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the persisted knowledge file (default: knowledge_data.json)
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Chat front-end configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// First assistant line of a session
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Topics offered by the quick FAQ list
    #[serde(default = "default_quick_faqs")]
    pub quick_faqs: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            quick_faqs: default_quick_faqs(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("knowledge_data.json")
}

fn default_greeting() -> String {
    "Hello! Type your question. Use 'learn question: answer' to teach me something new."
        .to_string()
}

fn default_quick_faqs() -> Vec<String> {
    [
        "account types",
        "loan types",
        "interest rates",
        "atm locations",
        "banking hours",
        "contact support",
        "fees",
        "branch locations",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl AssistantConfig {
    /// Parse a TOML config file; missing sections and fields use defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        toml::from_str(&text).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Load configuration
    ///
    /// Precedence: explicit `path` > `FAQ_ASSISTANT_CONFIG` > defaults. The
    /// knowledge path is then overridden by `FAQ_ASSISTANT_KB_PATH` if set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(env_path) {
            Some(p) => {
                tracing::info!("Loading configuration from {}", p.display());
                Self::from_file(p)?
            }
            None => Self::default(),
        };

        if let Some(kb_path) = std::env::var_os(KB_PATH_ENV) {
            config.store.path = PathBuf::from(kb_path);
        }

        Ok(config)
    }
}
