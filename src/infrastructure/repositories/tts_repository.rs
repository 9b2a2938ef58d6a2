use async_trait::async_trait;

/// Errors surfaced by a speech synthesis provider.
#[derive(Debug, thiserror::Error)]
pub enum TtsRepositoryError {
    /// The provider answered with a non-success HTTP status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The request did not complete within the configured deadline.
    #[error("request to provider timed out after {0}s")]
    Timeout(u64),

    /// The provider could not be reached or the response body was lost.
    #[error("failed to reach provider: {0}")]
    Connection(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider behind a single call.
///
/// Implementations are responsible for:
/// - Authenticating against the provider
/// - Enforcing a deadline on the outbound call
/// - Reporting non-success provider statuses as errors, never as audio
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize text to speech.
    ///
    /// Returns the complete MP3 audio returned by the provider. A single
    /// call is made per invocation; failures are terminal, not retried.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsRepositoryError>;
}
