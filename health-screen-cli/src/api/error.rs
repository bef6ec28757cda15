use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to a remote screening server
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Invalid screening input: {0}")]
    InvalidInput(String),

    #[error("Screening failed on the server: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response ({status}): {message}")]
    Unexpected { status: u16, message: String },
}

impl RemoteError {
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let msg = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            message
        };

        match status {
            StatusCode::UNPROCESSABLE_ENTITY => RemoteError::InvalidInput(msg),
            status if status.is_server_error() => RemoteError::ServerError(msg),
            _ => RemoteError::Unexpected {
                status: status.as_u16(),
                message: msg,
            },
        }
    }
}
