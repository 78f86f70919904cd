use thiserror::Error;

#[derive(Error, Debug)]
pub enum VertexError {
    #[error("failed to initialize token counting client: {0}")]
    ClientInit(String),

    #[error("Vertex AI API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request to Vertex AI failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected countTokens response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, VertexError>;
