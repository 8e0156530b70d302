use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ClipboardProvider;

pub struct ArboardClipboardProvider;

impl ArboardClipboardProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for ArboardClipboardProvider {
    fn copy_text(&self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text))
            .context("Failed to copy to clipboard")?;

        log::info!("[CLIPBOARD] Copied {} characters", text.chars().count());
        Ok(())
    }
}
