use bytemuck::{Pod, Zeroable};

/// Unique identifier for a node in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Index into the engine's label table (text the host tessellates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(pub u32);

/// A scene event communicated from Rust to the host page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SceneEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SceneEvent {
    pub const FLOATS: usize = 4;

    /// A phrase body was picked; `a` is the phrase index.
    pub const PHRASE_SELECTED: f32 = 1.0;

    pub fn phrase_selected(index: usize) -> Self {
        Self {
            kind: Self::PHRASE_SELECTED,
            a: index as f32,
            ..Default::default()
        }
    }
}

/// Time information for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the scene was initialised.
    pub elapsed: f64,
    /// Number of frames rendered before this one.
    pub frame: u64,
}

impl FrameTime {
    pub fn new(elapsed: f64, frame: u64) -> Self {
        Self { elapsed, frame }
    }

    /// Elapsed time narrowed for per-frame trig.
    pub fn seconds(&self) -> f32 {
        self.elapsed as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_event_is_4_floats() {
        assert_eq!(std::mem::size_of::<SceneEvent>(), SceneEvent::FLOATS * 4);
    }

    #[test]
    fn phrase_selected_payload() {
        let ev = SceneEvent::phrase_selected(7);
        assert_eq!(ev.kind, SceneEvent::PHRASE_SELECTED);
        assert_eq!(ev.a, 7.0);
    }
}
