use super::error::TtsServiceError;
use crate::infrastructure::repositories::TtsRepository;
use crate::infrastructure::storage::{ArtifactStore, ScratchArtifact};
use async_trait::async_trait;
use std::sync::Arc;

/// Hard cap on input length, counted in decoded characters.
const MAX_INPUT_CHARS: usize = 3500;

const PLAIN_TEXT_MIME: &str = "text/plain";

/// An uploaded text file, as received from the HTTP layer.
#[derive(Debug)]
pub struct TextUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// The outcome of a successful synthesis.
///
/// `audio` holds the provider's bytes verbatim; the response is served from
/// memory and never re-reads the artifact. The artifact guard keeps the
/// scratch file alive until the response has been produced.
#[derive(Debug)]
pub struct SynthesizedSpeech {
    pub audio: Vec<u8>,
    pub download_name: String,
    pub char_count: usize,
    pub artifact: ScratchArtifact,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    artifact_store: Arc<ArtifactStore>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, artifact_store: Arc<ArtifactStore>) -> Self {
        Self {
            tts_repo,
            artifact_store,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Convert an uploaded text file to speech.
    ///
    /// The pipeline is a straight line: validate declared content type,
    /// decode and validate length, call the provider once, materialize the
    /// artifact, hand the audio back. Validation failures short-circuit
    /// before any network call; upstream failures are terminal, not retried.
    async fn synthesize_upload(
        &self,
        upload: TextUpload,
    ) -> Result<SynthesizedSpeech, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize_upload(
        &self,
        upload: TextUpload,
    ) -> Result<SynthesizedSpeech, TtsServiceError> {
        tracing::info!(
            file_name = %upload.file_name,
            content_type = %upload.content_type,
            payload_size = upload.data.len(),
            "TTS synthesis request"
        );

        // 1. Declared-metadata check only; the payload is not sniffed, so a
        // mislabeled binary with a text/plain content type passes.
        if upload.content_type != PLAIN_TEXT_MIME {
            return Err(TtsServiceError::Invalid(
                "Only .txt files allowed".to_string(),
            ));
        }

        // 2. Decode and bound the input before any network I/O.
        let text = String::from_utf8(upload.data)
            .map_err(|_| TtsServiceError::Invalid("File must be valid UTF-8 text".to_string()))?;

        let char_count = text.chars().count();
        if char_count > MAX_INPUT_CHARS {
            return Err(TtsServiceError::Invalid(
                "Text too long (max 3500 chars)".to_string(),
            ));
        }

        // 3. Single provider call; no retry edge.
        let audio = self.tts_repo.synthesize(&text).await?;

        // 4. Materialize the scratch artifact.
        let artifact = self.artifact_store.write(&audio).await?;

        let download_name = format!("{}.mp3", upload.file_name);

        tracing::info!(
            char_count = char_count,
            audio_size = audio.len(),
            artifact = %artifact.file_name(),
            download_name = %download_name,
            "TTS synthesis completed"
        );

        Ok(SynthesizedSpeech {
            audio,
            download_name,
            char_count,
            artifact,
        })
    }
}
