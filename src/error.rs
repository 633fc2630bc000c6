//! Error types for the host layer
//!
//! The simulation itself is total and never fails; these cover page setup,
//! GPU initialisation and the embedded content file.

use thiserror::Error;

/// Problems with the biography content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed content file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content file has no entries")]
    Empty,
}

/// Errors raised while starting or running the browser host
#[derive(Debug, Error)]
pub enum Error {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing DOM element #{0}")]
    MissingElement(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("failed to create render surface: {0}")]
    Surface(String),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(String),
    #[error("failed to create GPU device: {0}")]
    Device(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

pub type Result<T> = std::result::Result<T, Error>;
