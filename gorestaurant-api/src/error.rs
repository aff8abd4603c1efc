use tower_api_client::{Error as TransportError, StatusCode};

#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a 4xx/5xx status. The body is kept verbatim
    /// since the backend does not use a structured error envelope.
    Http(StatusCode, String),
    Transport(TransportError),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Http(status, _) => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<TransportError> for ApiError {
    fn from(value: TransportError) -> Self {
        match value {
            TransportError::ClientError(status, body) | TransportError::ServerError(status, body) => {
                ApiError::Http(status, body)
            }
            e => ApiError::Transport(e),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Http(status, body) if body.trim().is_empty() => write!(f, "({})", status),
            ApiError::Http(status, body) => write!(f, "({}) {}", status, body.trim()),
        }
    }
}

impl std::error::Error for ApiError {}
