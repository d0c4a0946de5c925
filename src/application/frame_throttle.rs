use std::cell::Cell;

/// Coalesces high-frequency pointer positions into one update per animation frame.
///
/// The latest position always wins; earlier ones are overwritten, never queued.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    pending: Cell<Option<f64>>,
    scheduled: Cell<bool>,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position. Returns `true` when the caller must schedule a frame.
    pub fn push(&self, pointer_x: f64) -> bool {
        self.pending.set(Some(pointer_x));
        !self.scheduled.replace(true)
    }

    /// Called from the frame callback: the position to apply, if any.
    pub fn take(&self) -> Option<f64> {
        self.scheduled.set(false);
        self.pending.take()
    }

    /// Drop any pending position, e.g. on pointer up.
    pub fn cancel(&self) {
        self.pending.set(None);
        self.scheduled.set(false);
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_push_per_frame_schedules() {
        let throttle = FrameThrottle::new();
        assert!(throttle.push(1.0));
        assert!(!throttle.push(2.0));
        assert!(!throttle.push(3.0));
        assert_eq!(throttle.take(), Some(3.0));
        assert_eq!(throttle.take(), None);
        assert!(throttle.push(4.0));
    }

    #[test]
    fn cancel_discards_pending_move() {
        let throttle = FrameThrottle::new();
        throttle.push(1.0);
        throttle.cancel();
        assert!(!throttle.is_scheduled());
        assert_eq!(throttle.take(), None);
    }
}
