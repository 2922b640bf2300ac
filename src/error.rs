use std::path::PathBuf;

/// Failure of a single job. None of these abort the batch.
#[derive(thiserror::Error, Debug)]
pub enum JobError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
