use async_trait::async_trait;

use crate::core::models::{ErrorDetails, OcrResponse, SelectedImage};

#[async_trait]
pub trait OcrService: Send + Sync {
    async fn recognize_text(&self, image: &SelectedImage) -> Result<OcrResponse, ErrorDetails>;

    async fn check_health(&self) -> bool;
}
