//! HTTP backend for the Kith relationship graph editor.
//!
//! A small axum service exposing the storage interfaces the editing UI
//! needs: fetch-all and replace-all of the people document, image upload,
//! and static serving of the data and images folders. The layout engine
//! does not live here; it consumes the same document through the shared
//! `kith-core` types.
//!
//! # Layout on disk
//!
//! Everything lives under one data directory:
//!
//! ```text
//! <data_dir>/
//!   data/relationships.json   the people document
//!   images/                   uploaded photos
//! ```

mod routes;
mod store;

pub use routes::{ApiStatus, UploadResponse, router};
pub use store::{DocumentStore, ImageStore, StoreError};

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

/// Errors from running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where to listen and where the data lives.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    port: u16,
    data_dir: PathBuf,
}

impl ServerConfig {
    /// Creates a server configuration.
    pub fn new(port: u16, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            port,
            data_dir: data_dir.into(),
        }
    }

    /// Returns the listen port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the data directory root.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the people document path inside the data directory.
    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join("data").join("relationships.json")
    }

    /// Returns the images directory inside the data directory.
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir.join("images")
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub document: DocumentStore,
    pub images: ImageStore,
}

impl AppState {
    /// Creates the stores for a server configuration.
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            document: DocumentStore::new(config.document_path()),
            images: ImageStore::new(config.images_dir()),
        }
    }
}

/// Initializes the tracing subscriber for server logging.
///
/// Safe to call when a subscriber is already installed; the second install
/// is ignored.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// Binds and runs the server until the process is stopped.
///
/// # Errors
///
/// Returns [`ServerError::Io`] when the data directories cannot be created,
/// the port cannot be bound, or the accept loop fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    std::fs::create_dir_all(config.images_dir())?;
    if let Some(parent) = config.document_path().parent() {
        std::fs::create_dir_all(parent)?;
    }

    let state = AppState::new(&config);
    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.port());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, data_dir = %config.data_dir().display(), "Backend server running");

    axum::serve(listener, app).await?;
    Ok(())
}
