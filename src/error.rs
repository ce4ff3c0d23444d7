//! Error type for icon generation.
//!
//! The taxonomy is deliberately small: directory creation, PNG
//! encode/save, and manifest write failures. All of them abort the run;
//! there is no retry or partial-output cleanup.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an icon generation run.
#[derive(Debug, Error)]
pub enum IconError {
    /// The output directory could not be created.
    #[error("failed to create output directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A rendered icon could not be encoded or written as PNG.
    #[error("failed to write icon {path:?}")]
    SaveIcon {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The manifest could not be serialized.
    #[error("failed to serialize Contents.json")]
    ManifestJson(#[from] serde_json::Error),

    /// The manifest could not be written to disk.
    #[error("failed to write manifest {path:?}")]
    WriteManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
