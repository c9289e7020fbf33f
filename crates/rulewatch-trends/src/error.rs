use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("failed to create chart directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render {chart} chart: {message}")]
    Render { chart: &'static str, message: String },
}
