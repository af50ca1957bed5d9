use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Secrets error: {0}")]
    Secrets(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NewsResult<T> = Result<T, NewsError>;
