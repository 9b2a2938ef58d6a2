use super::tts_repository::{TtsRepository, TtsRepositoryError};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

/// Client for an OpenAI-compatible `/audio/speech` endpoint.
///
/// The credential and voice parameters are fixed at construction time;
/// only the input text varies per call.
pub struct SpeechApiRepository {
    http_client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    voice: String,
    timeout_secs: u64,
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

impl SpeechApiRepository {
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        voice: String,
        timeout_secs: u64,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            api_url,
            api_key,
            model,
            voice,
            timeout_secs,
        })
    }
}

#[async_trait]
impl TtsRepository for SpeechApiRepository {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, TtsRepositoryError> {
        tracing::info!(
            model = %self.model,
            voice = %self.voice,
            text_length = text.len(),
            "Calling speech synthesis API"
        );

        let body = SpeechRequest {
            model: &self.model,
            input: text,
            voice: &self.voice,
            response_format: "mp3",
        };

        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %self.api_url, "Speech API request failed");
                if e.is_timeout() {
                    TtsRepositoryError::Timeout(self.timeout_secs)
                } else {
                    TtsRepositoryError::Connection(e.to_string())
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                message = %message,
                "Speech API returned an error status"
            );
            return Err(TtsRepositoryError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read speech API response body");
            TtsRepositoryError::Connection(e.to_string())
        })?;

        tracing::debug!(
            audio_size = audio.len(),
            "Speech API audio received successfully"
        );

        Ok(audio.to_vec())
    }
}
