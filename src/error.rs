use thiserror::Error;

/// Errors produced while extracting or exporting styles.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to decode image {source_ref}: {reason}")]
    Decode { source_ref: String, reason: String },

    #[error("failed to rasterize image: {0}")]
    Render(String),

    #[error("malformed hex color: {0:?}")]
    MalformedColor(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub(crate) fn decode(source_ref: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            source_ref: source_ref.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
