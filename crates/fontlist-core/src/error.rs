//! Error types for fontlist

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FontListError>;

/// Main error type for fontlist
///
/// Only the first three variants are fatal to a run. Everything a source
/// reports per family or per font is a [`FontListError::Source`] and gets
/// skipped by the enumerator.
#[derive(Debug, Error)]
pub enum FontListError {
    #[error("Could not create {} file!", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create DirectWrite factory.")]
    FactoryCreation(String),

    #[error("Failed to get system font collection.")]
    CollectionUnavailable(String),

    #[error("Font source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FontListError {
    /// Underlying platform message, if the variant carries one
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::FactoryCreation(detail)
            | Self::CollectionUnavailable(detail)
            | Self::Source(detail) => Some(detail),
            _ => None,
        }
    }
}
