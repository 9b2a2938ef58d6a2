use crate::error::AppError;
use crate::infrastructure::repositories::TtsRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("{0}")]
    Invalid(String),
    #[error(transparent)]
    Upstream(#[from] TtsRepositoryError),
    #[error("failed to store audio artifact: {0}")]
    Storage(#[from] std::io::Error),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Upstream(TtsRepositoryError::Timeout(secs)) => {
                AppError::UpstreamTimeout(format!("no response after {}s", secs))
            }
            TtsServiceError::Upstream(e) => AppError::UpstreamService(e.to_string()),
            TtsServiceError::Storage(e) => AppError::Internal(e.to_string()),
        }
    }
}
