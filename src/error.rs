use std::path::PathBuf;

use cell_kernel::{BlockError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TermcellError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),

    #[error("Block error: {0}")]
    Block(#[from] BlockError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown backend: {0} (expected \"scalar\" or \"batched\")")]
    UnknownBackend(String),

    #[error("Invalid palette: {0}")]
    Palette(#[from] PaletteError),
}
