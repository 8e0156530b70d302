use std::sync::Arc;

use crate::core::imaging;
use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{
    ErrorDetails, ImagePreview, OcrResponse, PreviewRegistry, SelectedImage, UploadState,
};

#[derive(Debug, Default)]
pub struct OcrSession {
    upload_state: UploadState,
    result: Option<OcrResponse>,
    error: Option<String>,
    preview: Option<ImagePreview>,
    is_processing: bool,
    generation: u64,
    previews: PreviewRegistry,
}

impl OcrSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upload_state(&self) -> UploadState {
        self.upload_state
    }

    pub fn result(&self) -> Option<&OcrResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn preview(&self) -> Option<&ImagePreview> {
        self.preview.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn live_preview_count(&self) -> usize {
        self.previews.live_count()
    }

    pub fn begin_upload(&mut self, image: &SelectedImage) -> Option<u64> {
        self.reset();

        if let Err(e) = imaging::validate_image(image) {
            log::warn!("[OCR_SESSION] Rejected {}: {}", image.file_name, e);
            self.error = Some(e.to_string());
            self.upload_state = UploadState::Error;
            return None;
        }

        self.preview = Some(self.previews.create_preview(image.bytes.clone()));
        self.upload_state = UploadState::Uploading;
        self.is_processing = true;

        log::info!(
            "[OCR_SESSION] Upload {} started for {}",
            self.generation,
            image.file_name
        );
        Some(self.generation)
    }

    pub fn complete_upload(
        &mut self,
        generation: u64,
        outcome: Result<OcrResponse, ErrorDetails>,
    ) -> bool {
        if generation != self.generation || self.upload_state != UploadState::Uploading {
            log::debug!(
                "[OCR_SESSION] Ignoring stale outcome for upload {} (current {}, state {})",
                generation,
                self.generation,
                self.upload_state
            );
            return false;
        }

        match outcome {
            Ok(response) => {
                log::info!(
                    "[OCR_SESSION] Upload {} succeeded with {} characters",
                    generation,
                    response.text.chars().count()
                );
                self.result = Some(response);
                self.upload_state = UploadState::Success;
            }
            Err(details) => {
                log::error!(
                    "[OCR_SESSION] Upload {} failed ({}): {}",
                    generation,
                    details.kind,
                    details.message
                );
                self.error = Some(details.message);
                self.upload_state = UploadState::Error;
            }
        }

        self.is_processing = false;
        true
    }

    pub fn reset(&mut self) {
        if let Some(preview) = self.preview.take() {
            self.previews.revoke_preview(preview);
        }

        self.generation = self.generation.wrapping_add(1);
        self.upload_state = UploadState::Idle;
        self.result = None;
        self.error = None;
        self.is_processing = false;
    }
}

pub async fn process_image(
    ocr_service: Arc<dyn OcrService>,
    image: SelectedImage,
) -> Result<OcrResponse, ErrorDetails> {
    let original = image.clone();
    let optimized = tokio::task::spawn_blocking(move || imaging::compress_image_if_needed(image))
        .await
        .unwrap_or_else(|e| {
            log::error!("[OCR_SESSION] Compression task failed: {}", e);
            original
        });

    ocr_service.recognize_text(&optimized).await
}
