// src/config.rs
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    storage_backend: StorageBackend,
    storage_dir: PathBuf,
    admin_email: Option<String>,
    admin_password_hash: Option<String>,
    allowed_origins: Vec<String>,
    seed_articles: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{name} must be a boolean, got `{other}`"
        ))),
    }
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    /// Build configuration from environment variables, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let storage_backend = match non_empty("STORAGE_BACKEND").as_deref() {
            None | Some("file") => StorageBackend::File,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "STORAGE_BACKEND must be `file` or `memory`, got `{other}`"
                )));
            }
        };

        let storage_dir = non_empty("STORAGE_DIR").map_or_else(default_storage_dir, PathBuf::from);

        let admin_email = non_empty("ADMIN_EMAIL");
        let admin_password_hash = non_empty("ADMIN_PASSWORD_HASH");
        if admin_email.is_some() && admin_password_hash.is_none() {
            return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH"));
        }

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let seed_articles = non_empty("SEED_ARTICLES")
            .map(|raw| parse_bool("SEED_ARTICLES", &raw))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            storage_backend,
            storage_dir,
            admin_email,
            admin_password_hash,
            allowed_origins,
            seed_articles,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Admin credentials, if configured. Without them nobody can sign in.
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        self.admin_email
            .as_deref()
            .zip(self.admin_password_hash.as_deref())
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn seed_articles(&self) -> bool {
        self.seed_articles
    }
}
