use crate::template::TemplateError;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for converting a markdown file.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markdown source or the template could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The final HTML could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The conversion service could not be reached or its body could not be read.
    #[error("request to the markdown API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The conversion service answered with a non-success status.
    #[error("request to the markdown API failed with status {status}: {body}")]
    Conversion { status: u16, body: String },

    /// The page template is malformed.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
