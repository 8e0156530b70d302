use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{ErrorDetails, OcrResponse, SelectedImage, TransportFailure};
use crate::global_constants;

pub struct HttpOcrService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpOcrService {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(
            base_url,
            Duration::from_secs(global_constants::OCR_REQUEST_TIMEOUT_SECONDS),
        )
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        log::info!(
            "[OCR_API] Using OCR service at {} (timeout {:?})",
            base_url,
            timeout
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn ocr_url(&self) -> String {
        format!("{}{}", self.base_url, global_constants::OCR_ENDPOINT_PATH)
    }

    fn health_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn build_form(image: &SelectedImage) -> Result<Form, ErrorDetails> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)
            .map_err(|e| ErrorDetails::from_message(&e.to_string()))?;

        Ok(Form::new().part("file", part).text("confidence", "true"))
    }
}

pub fn classify_transport_error(error: &reqwest::Error) -> TransportFailure {
    if error.is_timeout() {
        TransportFailure::Timeout
    } else if error.is_connect() {
        TransportFailure::Connect
    } else if error.is_request() || error.is_body() {
        TransportFailure::NoResponse(error.to_string())
    } else {
        TransportFailure::Other(error.to_string())
    }
}

fn log_and_classify(error: reqwest::Error) -> ErrorDetails {
    let details = ErrorDetails::from_transport(classify_transport_error(&error));
    log::error!(
        "[OCR_API] OCR processing error: kind={}, message={}, cause={}",
        details.kind,
        details.message,
        error
    );
    details
}

#[async_trait]
impl OcrService for HttpOcrService {
    async fn recognize_text(&self, image: &SelectedImage) -> Result<OcrResponse, ErrorDetails> {
        let url = self.ocr_url();
        log::info!(
            "[OCR_API] Uploading {} ({}, {} bytes) to {}",
            image.file_name,
            image.mime_type,
            image.size_in_bytes(),
            url
        );

        let form = Self::build_form(image)?;
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(log_and_classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(log_and_classify)?;

        if !status.is_success() {
            let parsed_body = serde_json::from_slice::<Value>(&body).ok();
            let details = ErrorDetails::from_status(status.as_u16(), parsed_body);
            log::error!(
                "[OCR_API] OCR processing error: status={}, kind={}, message={}",
                status,
                details.kind,
                details.message
            );
            return Err(details);
        }

        let ocr_response: OcrResponse = serde_json::from_slice(&body).map_err(|e| {
            log::error!("[OCR_API] Could not parse OCR response: {}", e);
            ErrorDetails::from_message(&format!("Unexpected response from server: {}", e))
        })?;

        log::info!(
            "[OCR_API] Recognized {} characters (confidence {:?})",
            ocr_response.text.chars().count(),
            ocr_response.confidence
        );

        Ok(ocr_response)
    }

    async fn check_health(&self) -> bool {
        match self.client.get(self.health_url()).send().await {
            Ok(response) => {
                let healthy = response.status() == reqwest::StatusCode::OK;
                log::debug!("[OCR_API] Health check returned {}", response.status());
                healthy
            }
            Err(e) => {
                log::debug!("[OCR_API] Health check failed: {}", e);
                false
            }
        }
    }
}
