use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend configuration missing: {0}")]
    NotConfigured(&'static str),
    #[error("A record with mobile {mobile} already exists")]
    Duplicate { mobile: String },
    #[error("Network request failed: {0}")]
    Transport(String),
    #[error("Backend rejected the request ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("Unexpected backend response: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
