use std::collections::HashSet;

use iced::widget::image;
use uuid::Uuid;

#[derive(Clone)]
pub struct ImagePreview {
    pub id: Uuid,
    pub handle: image::Handle,
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview").field("id", &self.id).finish()
    }
}

#[derive(Debug, Default)]
pub struct PreviewRegistry {
    live: HashSet<Uuid>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_preview(&mut self, bytes: Vec<u8>) -> ImagePreview {
        let id = Uuid::new_v4();
        self.live.insert(id);

        log::debug!(
            "[PREVIEW] Created preview {} ({} live)",
            id,
            self.live.len()
        );

        ImagePreview {
            id,
            handle: image::Handle::from_bytes(bytes),
        }
    }

    pub fn revoke_preview(&mut self, preview: ImagePreview) {
        if self.live.remove(&preview.id) {
            log::debug!(
                "[PREVIEW] Revoked preview {} ({} live)",
                preview.id,
                self.live.len()
            );
        } else {
            log::warn!("[PREVIEW] Preview {} was already revoked", preview.id);
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_preview_registers_unique_ids() {
        let mut registry = PreviewRegistry::new();

        let first = registry.create_preview(vec![1, 2, 3]);
        let second = registry.create_preview(vec![4, 5, 6]);

        assert_ne!(first.id, second.id);
        assert_eq!(registry.live_count(), 2);
        assert!(registry.live.contains(&first.id));
    }

    #[test]
    fn test_revoke_preview_releases_it() {
        let mut registry = PreviewRegistry::new();
        let preview = registry.create_preview(vec![1]);
        let id = preview.id;

        registry.revoke_preview(preview);

        assert!(!registry.live.contains(&id));
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_revoking_twice_is_harmless() {
        let mut registry = PreviewRegistry::new();
        let preview = registry.create_preview(vec![1]);

        registry.revoke_preview(preview.clone());
        registry.revoke_preview(preview);

        assert_eq!(registry.live_count(), 0);
    }
}
