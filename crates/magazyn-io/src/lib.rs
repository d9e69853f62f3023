//! File import/export for magazyn.
//!
//! A [`Loader`] is a format-specific routine for reading and writing a
//! whole collection of [`Item`]s. The [`LoaderRegistry`] picks a loader by
//! file extension, defaulting to CSV for unknown or missing extensions.
//!
//! Failures are values, not aborts: a missing file on read or an OS
//! failure on write surfaces as a [`LoadError`] carrying the path and the
//! underlying reason, and the caller decides what to tell the user. An
//! import replaces the in-memory collection only when the read succeeds.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod csv_loader;
mod json_loader;
mod registry;

pub use csv_loader::CsvLoader;
pub use json_loader::JsonLoader;
pub use registry::LoaderRegistry;

use magazyn_core::Item;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing a collection file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO failure: missing file on read, permission or OS failure on write.
    #[error("failed to access {path}: {source}")]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("invalid CSV in {path}: {source}")]
    Csv {
        /// The file with malformed content.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON content.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The file with malformed content.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A numeric field that is not a well-formed decimal literal.
    #[error("invalid number in {path}: {source}")]
    Decimal {
        /// The file with the malformed field.
        path: PathBuf,
        /// The rejected input.
        #[source]
        source: magazyn_core::ValidationError,
    },
}

impl LoadError {
    /// True when reading failed because the file does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A format-specific import/export routine, selected by file extension.
pub trait Loader {
    /// Short format name (`"csv"`, `"json"`), used in messages.
    fn name(&self) -> &'static str;

    /// Whether this loader handles the given path's extension.
    fn identify(&self, path: &Path) -> bool;

    /// Read a whole collection from `path`.
    fn read(&self, path: &Path) -> Result<Vec<Item>, LoadError>;

    /// Write a whole collection to `path`, replacing any previous content.
    fn write(&self, path: &Path, items: &[Item]) -> Result<(), LoadError>;
}
