//! Time sources for the frame loop.
//!
//! The runner never reads wall-clock time directly; it asks a `Clock`.
//! Tests drive the loop with a `ManualClock` and synthetic timestamps.

use std::cell::Cell;

/// A monotonic-ish source of seconds.
pub trait Clock {
    /// Current time in seconds. Only differences between readings matter.
    fn now(&self) -> f64;
}

/// Clock whose time only changes when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::rc::Rc<C> {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(10.0);
        clock.advance(0.5);
        assert_eq!(clock.now(), 10.5);
        clock.set(2.0);
        assert_eq!(clock.now(), 2.0);
    }

    #[test]
    fn shared_clock_sees_updates() {
        let clock = Rc::new(ManualClock::new(0.0));
        let handle = Rc::clone(&clock);
        clock.advance(1.25);
        assert_eq!(handle.now(), 1.25);
    }
}
