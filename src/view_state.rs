//! Range-window selection state: position, size and the pointer interaction in progress.

/// Part of the selection window a pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grip {
    Body,
    LeftHandle,
    RightHandle,
}

/// Pointer interaction in progress, with the values captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging { start_x: f64, start_left: f64 },
    ResizingLeft { start_x: f64, start_left: f64, start_width: f64 },
    ResizingRight { start_x: f64, start_width: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLimits {
    pub min_width_pct: f64,
    pub max_width_pct: f64,
}

impl Default for WindowLimits {
    fn default() -> Self {
        Self { min_width_pct: 5.0, max_width_pct: 100.0 }
    }
}

/// Selection window over the track, in percent.
///
/// After every mutation: `0 <= left_pct`, `min <= width_pct <= max`,
/// `left_pct + width_pct <= 100`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    left_pct: f64,
    width_pct: f64,
    mode: InteractionMode,
    limits: WindowLimits,
}

impl WindowState {
    /// Window of `width_pct` over the most recent end of the track.
    pub fn anchored_latest(width_pct: f64, limits: WindowLimits) -> Self {
        let width_pct = width_pct.clamp(limits.min_width_pct, limits.max_width_pct);
        Self { left_pct: 100.0 - width_pct, width_pct, mode: InteractionMode::Idle, limits }
    }

    /// Window covering as much of the track as the limits allow, starting at the left edge.
    pub fn full_range(limits: WindowLimits) -> Self {
        Self { left_pct: 0.0, width_pct: limits.max_width_pct, mode: InteractionMode::Idle, limits }
    }

    pub fn left_pct(&self) -> f64 {
        self.left_pct
    }

    pub fn width_pct(&self) -> f64 {
        self.width_pct
    }

    pub fn right_edge_pct(&self) -> f64 {
        self.left_pct + self.width_pct
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn limits(&self) -> WindowLimits {
        self.limits
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    /// Start an interaction. Ignored unless idle, so a handle press that also reaches
    /// the window body cannot turn into a drag.
    pub fn begin(&mut self, grip: Grip, pointer_x: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.mode = match grip {
            Grip::Body => {
                InteractionMode::Dragging { start_x: pointer_x, start_left: self.left_pct }
            }
            Grip::LeftHandle => InteractionMode::ResizingLeft {
                start_x: pointer_x,
                start_left: self.left_pct,
                start_width: self.width_pct,
            },
            Grip::RightHandle => {
                InteractionMode::ResizingRight { start_x: pointer_x, start_width: self.width_pct }
            }
        };
        true
    }

    /// Apply a pointer position. Returns whether the window changed.
    ///
    /// A track without measurable width cannot convert pixels to percent, so the
    /// move is dropped.
    pub fn pointer_move(&mut self, pointer_x: f64, track_width: f64) -> bool {
        if !(track_width.is_finite() && track_width > 0.0) || !pointer_x.is_finite() {
            return false;
        }
        let limits = self.limits;
        let (left, width) = match self.mode {
            InteractionMode::Idle => return false,
            InteractionMode::Dragging { start_x, start_left } => {
                let delta = (pointer_x - start_x) / track_width * 100.0;
                let left = (start_left + delta).min(100.0 - self.width_pct).max(0.0);
                (left, self.width_pct)
            }
            InteractionMode::ResizingLeft { start_x, start_left, start_width } => {
                let delta = (pointer_x - start_x) / track_width * 100.0;
                let right_edge = start_left + start_width;
                let mut left = start_left + delta;
                let mut width = start_width - delta;
                if left < 0.0 {
                    left = 0.0;
                    width = right_edge;
                }
                if width < limits.min_width_pct {
                    width = limits.min_width_pct;
                    left = right_edge - limits.min_width_pct;
                }
                if width > limits.max_width_pct {
                    width = limits.max_width_pct;
                    left = right_edge - limits.max_width_pct;
                }
                (left, width)
            }
            InteractionMode::ResizingRight { start_x, start_width } => {
                let delta = (pointer_x - start_x) / track_width * 100.0;
                let width = (start_width + delta)
                    .max(limits.min_width_pct)
                    .min(limits.max_width_pct)
                    .min(100.0 - self.left_pct);
                (self.left_pct, width)
            }
        };

        let changed = left != self.left_pct || width != self.width_pct;
        self.left_pct = left;
        self.width_pct = width;
        debug_assert!(self.holds_invariants(), "window out of bounds: {:?}", self);
        changed
    }

    /// Pointer up or cancel: back to idle from any interaction.
    pub fn release(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    fn holds_invariants(&self) -> bool {
        const EPS: f64 = 1e-9;
        self.left_pct >= -EPS
            && self.width_pct >= self.limits.min_width_pct - EPS
            && self.width_pct <= self.limits.max_width_pct + EPS
            && self.left_pct + self.width_pct <= 100.0 + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: f64 = 1_000.0;

    #[test]
    fn default_window_hugs_the_latest_end() {
        let window = WindowState::anchored_latest(12.5, WindowLimits::default());
        assert_eq!(window.left_pct(), 87.5);
        assert_eq!(window.right_edge_pct(), 100.0);
    }

    #[test]
    fn drag_clamps_to_track() {
        let mut window = WindowState::anchored_latest(12.5, WindowLimits::default());
        window.begin(Grip::Body, 500.0);
        assert!(!window.pointer_move(700.0, TRACK));
        assert_eq!(window.left_pct(), 87.5);
        assert!(window.pointer_move(300.0, TRACK));
        assert!((window.left_pct() - 67.5).abs() < 1e-9);
        window.pointer_move(-50_000.0, TRACK);
        assert_eq!(window.left_pct(), 0.0);
    }

    #[test]
    fn left_resize_past_right_edge_keeps_min_width() {
        let mut window = WindowState::full_range(WindowLimits::default());
        window.left_pct = 50.0;
        window.width_pct = 20.0;
        window.begin(Grip::LeftHandle, 0.0);
        window.pointer_move(300.0, TRACK);
        assert_eq!(window.width_pct(), 5.0);
        assert_eq!(window.left_pct(), 65.0);
    }

    #[test]
    fn left_resize_past_zero_absorbs_into_width() {
        let mut window = WindowState::anchored_latest(20.0, WindowLimits::default());
        window.begin(Grip::LeftHandle, 900.0);
        window.pointer_move(-100.0, TRACK);
        assert_eq!(window.left_pct(), 0.0);
        assert_eq!(window.width_pct(), 100.0);
    }

    #[test]
    fn right_resize_stops_at_track_end() {
        let mut window = WindowState::anchored_latest(20.0, WindowLimits::default());
        window.left_pct = 40.0;
        window.begin(Grip::RightHandle, 0.0);
        window.pointer_move(900.0, TRACK);
        assert_eq!(window.right_edge_pct(), 100.0);
        window.pointer_move(-900.0, TRACK);
        assert_eq!(window.width_pct(), 5.0);
    }

    #[test]
    fn second_grip_is_ignored_until_release() {
        let mut window = WindowState::anchored_latest(20.0, WindowLimits::default());
        assert!(window.begin(Grip::RightHandle, 10.0));
        assert!(!window.begin(Grip::Body, 10.0));
        assert!(matches!(window.mode(), InteractionMode::ResizingRight { .. }));
        window.release();
        assert!(window.is_idle());
        assert!(!window.pointer_move(50.0, TRACK));
    }

    #[test]
    fn zero_width_track_drops_moves() {
        let mut window = WindowState::anchored_latest(20.0, WindowLimits::default());
        window.begin(Grip::Body, 0.0);
        assert!(!window.pointer_move(100.0, 0.0));
        assert_eq!(window.left_pct(), 80.0);
    }
}
