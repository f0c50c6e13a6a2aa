//! Label text bookkeeping.
//!
//! The host tessellates label text with the loaded font. Rust only needs an
//! approximate footprint for picking, so widths start as an estimate from a
//! per-character advance and are replaced when the host reports the real
//! measured width.

use crate::api::types::LabelId;
use crate::components::visual::Shape;
use crate::core::scene::Scene;

/// Horizontal advance as a fraction of text size.
pub const DEFAULT_ADVANCE: f32 = 0.55;

/// Estimated width of `text` set at `size`.
pub fn estimate_width(text: &str, size: f32, advance: f32) -> f32 {
    text.chars().count() as f32 * size * advance
}

/// Label strings in creation order. `LabelId` indexes this table.
#[derive(Debug, Default, Clone)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>) -> LabelId {
        self.labels.push(text.into());
        LabelId((self.labels.len() - 1) as u32)
    }

    pub fn get(&self, id: LabelId) -> Option<&str> {
        self.labels.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }
}

/// Replace the estimated width of every text node showing `label`.
/// Returns the number of nodes updated.
pub fn apply_measured_width(scene: &mut Scene, label: LabelId, width: f32) -> usize {
    if !(width.is_finite() && width >= 0.0) {
        log::warn!("ignoring measured width {} for label {}", width, label.0);
        return 0;
    }
    let mut updated = 0;
    for node in scene.iter_mut() {
        if let Some(visual) = node.visual.as_mut() {
            if let Shape::Text { label: l, width: w, .. } = &mut visual.shape {
                if *l == label {
                    *w = width;
                    updated += 1;
                }
            }
        }
    }
    updated
}
