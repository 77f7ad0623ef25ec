use thiserror::Error;

/// Which stage of the lookup produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RequestConstruction,
    RequestExecution,
    Parsing,
}

#[derive(Debug, Error)]
pub enum WikiError {
    #[error("invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response could not be parsed: {0}")]
    MalformedResponse(String),
}

impl WikiError {
    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::Transport(_) => "REQUEST_FAILED",
            Self::MalformedResponse(_) => "PARSE_FAILED",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidUrl { .. } => ErrorKind::RequestConstruction,
            Self::Transport(_) => ErrorKind::RequestExecution,
            Self::MalformedResponse(_) => ErrorKind::Parsing,
        }
    }
}

impl From<serde_json::Error> for WikiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}
