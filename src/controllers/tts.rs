use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
};
use std::sync::Arc;

use crate::{
    domain::tts::{TextUpload, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - Convert an uploaded text file to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        mut multipart: Multipart,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        // Single file field per invocation; the first field is the upload.
        let field = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart upload: {}", e)))?
            .ok_or_else(|| AppError::BadRequest("Missing file upload".to_string()))?;

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?
            .to_vec();

        let speech = controller
            .tts_service
            .synthesize_upload(TextUpload {
                file_name,
                content_type,
                data,
            })
            .await
            .map_err(AppError::from)?;

        // Build headers
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&format!(
                "attachment; filename=\"{}\"",
                speech.download_name
            ))
            .map_err(|_| {
                AppError::BadRequest("Upload file name contains invalid characters".to_string())
            })?,
        );

        Ok((StatusCode::OK, headers, Body::from(speech.audio)))
        // speech.artifact drops here; the scratch file is released once the
        // response body has been built.
    }
}
