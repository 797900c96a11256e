//! Command implementations.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod chat;
pub mod orders;

use std::path::PathBuf;

use thiserror::Error;

use tienda_storefront::{ApiClient, ClientConfig, JsonFileStore};

/// Errors shared by every command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] tienda_storefront::ConfigError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] tienda_storefront::ApiError),

    /// Session file location could not be determined.
    #[error("cannot locate a session file: set TIENDA_SESSION_FILE or HOME")]
    NoSessionPath,

    /// User input could not be parsed.
    #[error("invalid {what}: {value}")]
    InvalidInput {
        /// What was being parsed.
        what: &'static str,
        /// The rejected input.
        value: String,
    },

    /// The command cannot run as invoked.
    #[error("{0}")]
    Usage(&'static str),
}

impl From<tienda_core::session::StoreError> for CliError {
    fn from(err: tienda_core::session::StoreError) -> Self {
        Self::Api(err.into())
    }
}

/// Build the API client with the file-backed session store.
pub fn client() -> Result<ApiClient<JsonFileStore>, CliError> {
    let config = ClientConfig::from_env()?;
    let path = match &config.session_file {
        Some(path) => path.clone(),
        None => default_session_path().ok_or(CliError::NoSessionPath)?,
    };
    let store = JsonFileStore::open(path)?;
    Ok(ApiClient::new(&config, store)?)
}

fn default_session_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    Some(PathBuf::from(home).join(".tienda").join("session.json"))
}
