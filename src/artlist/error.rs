use crate::model::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtlistError {
    #[error("Artwork not found: {0}")]
    NotFound(RecordId),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("Not allowed right now: {0}")]
    Precondition(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<calamine::Error> for ArtlistError {
    fn from(err: calamine::Error) -> Self {
        ArtlistError::Import(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ArtlistError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ArtlistError::Export(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ArtlistError>;
