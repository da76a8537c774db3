use thiserror::Error;

/// Startup failures. None of these are recoverable at runtime.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API_KEY no está configurada. Asegúrese de que la variable de entorno API_KEY esté definida.")]
    MissingCredential,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Failures talking to the generation endpoint. The orchestrator folds all
/// of these into the generic unavailable result.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("service responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("service returned no text in the response candidates")]
    EmptyResponse,

    #[error("response is not a valid analysis document: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ServiceError::Timeout
        } else {
            ServiceError::Transport(err)
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("user interface failed: {0}")]
    Ui(#[from] iced::Error),
}
