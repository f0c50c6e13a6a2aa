/// Input event types the engine understands.
/// Pointer coordinates are client pixels, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved.
    PointerMove { x: f32, y: f32 },
    /// Scroll wheel; positive `delta` scrolls away from the user (zoom out).
    Wheel { delta: f32 },
    /// The viewport changed size (client pixels).
    Resize { width: f32, height: f32 },
}

/// Events pushed by the host between frames. The stage reads them during
/// `update`; the runner clears the queue once the frame is done.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Forget everything pushed so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Pending events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Wheel { delta: 1.0 });
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.iter().count(), 0);
    }

    #[test]
    fn iter_preserves_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        q.push(InputEvent::PointerUp { x: 1.0, y: 2.0 });
        let kinds: Vec<_> = q.iter().copied().collect();
        assert_eq!(kinds[0], InputEvent::Resize { width: 800.0, height: 600.0 });
        assert_eq!(kinds[1], InputEvent::PointerUp { x: 1.0, y: 2.0 });
    }
}
