/// Errors that end the terminal viewer
use meshview_core::{LoadError, OptionsError};
use std::convert::Infallible;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    ReadMesh {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load {path}: {source}")]
    LoadMesh {
        path: String,
        #[source]
        source: LoadError<Infallible>,
    },

    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("usage: meshview-terminal [--config <options.toml>] [<mesh.stl>]")]
    Usage,
}
