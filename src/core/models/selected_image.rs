use std::path::Path;

use anyhow::{Context, Result};

#[derive(Clone)]
pub struct SelectedImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl SelectedImage {
    pub fn build_from_bytes(file_name: String, bytes: Vec<u8>) -> Self {
        let mime_type = detect_mime_type(&file_name, &bytes);

        log::debug!(
            "[SELECTED_IMAGE] {} detected as {} ({} bytes)",
            file_name,
            mime_type,
            bytes.len()
        );

        Self {
            file_name,
            mime_type,
            bytes,
        }
    }

    pub async fn load_from_path(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Unable to read {}", path.display()))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self::build_from_bytes(file_name, bytes))
    }

    pub fn size_in_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn size_in_megabytes(&self) -> f64 {
        self.bytes.len() as f64 / 1024.0 / 1024.0
    }
}

fn detect_mime_type(file_name: &str, bytes: &[u8]) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }

    mime_guess::from_path(file_name)
        .first()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
