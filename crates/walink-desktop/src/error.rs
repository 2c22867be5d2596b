use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("command failed: {0}")]
    Command(String),
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("refusing to open non-https url: {0}")]
    InsecureUrl(String),
}

pub type Result<T> = std::result::Result<T, DesktopError>;
