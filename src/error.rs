use thiserror::Error;

#[derive(Debug, Error)]
pub enum BouquetError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Prompt is required")]
    MissingPrompt,

    #[error("OpenAI API key not configured")]
    MissingApiKey,

    /// The provider answered with something other than 200.
    #[error("Failed to generate image")]
    Upstream { status: u16, details: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Client error: {0}")]
    ClientError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Response error: {0}")]
    ResponseError(String),
}

impl BouquetError {
    /// HTTP status the handler answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            BouquetError::MethodNotAllowed => 405,
            BouquetError::InvalidJson(_) | BouquetError::MissingPrompt => 400,
            BouquetError::Upstream { status, .. } => *status,
            BouquetError::MissingApiKey
            | BouquetError::ConfigError(_)
            | BouquetError::ClientError(_)
            | BouquetError::RequestError(_)
            | BouquetError::ResponseError(_) => 500,
        }
    }

    /// Upstream response text, only present for provider rejections.
    pub fn details(&self) -> Option<&str> {
        match self {
            BouquetError::Upstream { details, .. } => Some(details.as_str()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BouquetError {
    fn from(e: reqwest::Error) -> Self {
        BouquetError::RequestError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BouquetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BouquetError::MethodNotAllowed.status_code(), 405);
        assert_eq!(BouquetError::MissingPrompt.status_code(), 400);
        assert_eq!(BouquetError::MissingApiKey.status_code(), 500);
        assert_eq!(
            BouquetError::RequestError("connection refused".into()).status_code(),
            500
        );

        let upstream = BouquetError::Upstream {
            status: 429,
            details: "rate limited".into(),
        };
        assert_eq!(upstream.status_code(), 429);
        assert_eq!(upstream.details(), Some("rate limited"));
    }

    #[test]
    fn test_messages_match_response_bodies() {
        let invalid = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        assert_eq!(BouquetError::InvalidJson(invalid).to_string(), "Invalid JSON");
        assert_eq!(
            BouquetError::MissingApiKey.to_string(),
            "OpenAI API key not configured"
        );
        assert_eq!(
            BouquetError::ResponseError("No images generated".into()).to_string(),
            "Response error: No images generated"
        );
        assert!(BouquetError::MissingPrompt.details().is_none());
    }
}
