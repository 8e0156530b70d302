use anyhow::Result;

pub trait ClipboardProvider: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<()>;
}
