use bytemuck::{Pod, Zeroable};

/// Per-node render data read by the host renderer.
/// Must match the host protocol: 20 floats = 80 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct NodeInstance {
    pub position: [f32; 3],
    /// Rotation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    pub scale: [f32; 3],
    /// Shape kind (see `Shape::kind`).
    pub kind: f32,
    /// Primary shape size in world units (radius, text size, ...).
    pub extent: f32,
    pub color: [f32; 3],
    /// Emissive colour premultiplied by intensity.
    pub emissive: [f32; 3],
    pub opacity: f32,
    /// Label table index for text shapes, -1 otherwise.
    pub label: f32,
}

impl NodeInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Node instances for one frame.
/// Normal-blend instances come first; additive ones start at `additive_split`.
pub struct RenderBuffer {
    pub instances: Vec<NodeInstance>,
    pub additive_split: u32,
    capacity: usize,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            additive_split: 0,
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.additive_split = 0;
    }

    /// Append an instance. Returns false (and drops it) when full.
    pub fn push(&mut self, instance: NodeInstance) -> bool {
        if self.instances.len() >= self.capacity {
            return false;
        }
        self.instances.push(instance);
        true
    }

    pub fn set_additive_split(&mut self, split: u32) {
        self.additive_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to instance data for host-side reads of WASM memory.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_instance_is_20_floats() {
        assert_eq!(std::mem::size_of::<NodeInstance>(), NodeInstance::STRIDE_BYTES);
    }

    #[test]
    fn push_respects_capacity() {
        let mut buf = RenderBuffer::with_capacity(2);
        assert!(buf.push(NodeInstance::default()));
        assert!(buf.push(NodeInstance::default()));
        assert!(!buf.push(NodeInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
