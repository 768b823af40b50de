// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pointer hover state for interactive boxes.
//!
//! Hover only changes the stroke width. It lives outside the box overlay so
//! the filter and stylist stay pure.

use crate::boxes::BoxOverlay;

/// Stroke width of a box that is not hovered.
pub const BOX_STROKE_WIDTH: f64 = 3.0;
/// Stroke width of a hovered interactive box.
pub const BOX_HOVER_STROKE_WIDTH: f64 = 5.0;

/// Pointer events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Hover state of a single box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    /// Apply a pointer event.
    #[must_use]
    pub const fn on_event(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter => Self::Hovered,
            PointerEvent::Leave => Self::Idle,
        }
    }

    #[must_use]
    pub const fn stroke_width(self) -> f64 {
        match self {
            Self::Idle => BOX_STROKE_WIDTH,
            Self::Hovered => BOX_HOVER_STROKE_WIDTH,
        }
    }
}

/// Hover states for every box of one rendered overlay.
///
/// Slots are indexed by position in the overlay, not by input index. Any
/// change of box set wipes all hover flags.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    states: Vec<HoverState>,
    interactive: Vec<bool>,
}

impl HoverTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the tracker for a freshly computed overlay.
    pub fn sync(&mut self, overlay: &BoxOverlay) {
        self.interactive = overlay.iter().map(|a| a.is_interactive).collect();
        self.states = vec![HoverState::Idle; overlay.len()];
    }

    /// Feed a pointer event for the box at `slot`.
    ///
    /// Out-of-range slots and non-interactive boxes are ignored.
    pub fn handle(&mut self, slot: usize, event: PointerEvent) {
        if !self.interactive.get(slot).copied().unwrap_or(false) {
            return;
        }
        if let Some(state) = self.states.get_mut(slot) {
            *state = state.on_event(event);
        }
    }

    pub fn enter(&mut self, slot: usize) {
        self.handle(slot, PointerEvent::Enter);
    }

    pub fn leave(&mut self, slot: usize) {
        self.handle(slot, PointerEvent::Leave);
    }

    #[must_use]
    pub fn state(&self, slot: usize) -> HoverState {
        self.states.get(slot).copied().unwrap_or_default()
    }

    /// Current stroke width for the box at `slot`.
    #[must_use]
    pub fn stroke_width(&self, slot: usize) -> f64 {
        self.state(slot).stroke_width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::compute_box_overlay;
    use crate::config::BoxOverlayConfig;
    use crate::geometry::DetectionBox;

    fn overlay(interactive: bool) -> BoxOverlay {
        let boxes = [
            DetectionBox::new(0.0, 0.0, 10.0, 10.0, "person", 0.9),
            DetectionBox::new(20.0, 20.0, 10.0, 10.0, "car", 0.8),
        ];
        compute_box_overlay(&boxes, 100.0, 100.0, &BoxOverlayConfig::default(), interactive)
    }

    #[test]
    fn test_state_transitions() {
        let state = HoverState::default();
        assert_eq!(state.stroke_width(), 3.0);
        let state = state.on_event(PointerEvent::Enter);
        assert_eq!(state, HoverState::Hovered);
        assert_eq!(state.stroke_width(), 5.0);
        let state = state.on_event(PointerEvent::Leave);
        assert_eq!(state.stroke_width(), 3.0);
    }

    #[test]
    fn test_tracker_enter_leave() {
        let mut tracker = HoverTracker::new();
        tracker.sync(&overlay(true));

        tracker.enter(1);
        assert_eq!(tracker.stroke_width(0), BOX_STROKE_WIDTH);
        assert_eq!(tracker.stroke_width(1), BOX_HOVER_STROKE_WIDTH);

        tracker.leave(1);
        assert_eq!(tracker.state(1), HoverState::Idle);
    }

    #[test]
    fn test_non_interactive_boxes_ignore_hover() {
        let mut tracker = HoverTracker::new();
        tracker.sync(&overlay(false));
        tracker.enter(0);
        assert_eq!(tracker.state(0), HoverState::Idle);
    }

    #[test]
    fn test_sync_clears_hover_and_ignores_out_of_range() {
        let mut tracker = HoverTracker::new();
        tracker.sync(&overlay(true));
        tracker.enter(0);
        tracker.enter(7);
        assert_eq!(tracker.state(0), HoverState::Hovered);
        assert_eq!(tracker.state(7), HoverState::Idle);

        tracker.sync(&overlay(true));
        assert_eq!(tracker.state(0), HoverState::Idle);
    }
}
