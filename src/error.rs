use std::fmt;

#[derive(Debug)]
pub enum VoamigoError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    NetworkError(reqwest::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for VoamigoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoamigoError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            VoamigoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            VoamigoError::NetworkError(e) => write!(f, "Network error: {}", e),
            VoamigoError::JsonError(e) => write!(f, "JSON error: {}", e),
            VoamigoError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for VoamigoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VoamigoError::NetworkError(e) => Some(e),
            VoamigoError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for VoamigoError {
    fn from(err: reqwest::Error) -> Self {
        VoamigoError::NetworkError(err)
    }
}

impl From<serde_json::Error> for VoamigoError {
    fn from(err: serde_json::Error) -> Self {
        VoamigoError::JsonError(err)
    }
}

impl From<String> for VoamigoError {
    fn from(msg: String) -> Self {
        VoamigoError::Other(msg)
    }
}

impl From<&str> for VoamigoError {
    fn from(msg: &str) -> Self {
        VoamigoError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VoamigoError>;
