pub trait SystemThemeDetector: Send + Sync {
    fn prefers_dark(&self) -> bool;
}
