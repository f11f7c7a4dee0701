#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::{io, path::PathBuf};

use regimen_domain as domain;

pub mod catalog;
pub mod export;
pub mod settings;

pub use catalog::{LoadPolicy, load_catalog, load_catalog_file};
pub use export::export_plan;
pub use settings::{load_settings, load_settings_file};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed JSON: {0}")]
    Malformed(serde_json::Error),
    #[error("expected a list of exercises or an object with a \"workouts\" or \"exercises\" list")]
    UnexpectedLayout,
    #[error("malformed exercise record #{index}: {source}")]
    MalformedRecord {
        index: usize,
        source: serde_json::Error,
    },
    #[error("invalid exercise record #{index} ({name}): {source}")]
    InvalidRecord {
        index: usize,
        name: String,
        source: domain::ValidationError,
    },
    #[error(transparent)]
    Catalog(#[from] domain::ValidationError),
    #[error(transparent)]
    Settings(#[from] domain::SettingsError),
    #[error("catalog contains no valid exercises")]
    Empty,
}
