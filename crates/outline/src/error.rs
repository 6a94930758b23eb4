use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Failed to load image {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image {path:?}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutlineError>;
