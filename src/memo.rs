// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Recompute gate for overlay stages.
//!
//! [`OverlayMemo`] keeps the last snapshot and its output, and only reruns the
//! stage when the equality check says the inputs changed.

use crate::boxes::BoxOverlay;
use crate::compare::{BoxOverlayInputs, PoseOverlayInputs, box_inputs_equal, pose_inputs_equal};
use crate::pose::PoseOverlay;

/// An overlay stage whose inputs can be compared for reuse.
pub trait OverlayStage {
    /// Render-ready result of the stage.
    type Output;

    /// Run the stage.
    fn compute(&self) -> Self::Output;

    /// Whether `self` and `other` would produce the same output.
    fn same_inputs(&self, other: &Self) -> bool;
}

impl OverlayStage for BoxOverlayInputs {
    type Output = BoxOverlay;

    fn compute(&self) -> BoxOverlay {
        Self::compute(self)
    }

    fn same_inputs(&self, other: &Self) -> bool {
        box_inputs_equal(self, other)
    }
}

impl OverlayStage for PoseOverlayInputs {
    type Output = PoseOverlay;

    fn compute(&self) -> PoseOverlay {
        Self::compute(self)
    }

    fn same_inputs(&self, other: &Self) -> bool {
        pose_inputs_equal(self, other)
    }
}

/// Last-result cache for one overlay stage.
pub struct OverlayMemo<S: OverlayStage> {
    cached: Option<(S, S::Output)>,
    recomputes: usize,
}

impl<S: OverlayStage> Default for OverlayMemo<S> {
    fn default() -> Self {
        Self {
            cached: None,
            recomputes: 0,
        }
    }
}

impl<S: OverlayStage> OverlayMemo<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the output for `inputs`, recomputing only if they changed.
    ///
    /// # Returns
    ///
    /// * The output and whether it was freshly computed.
    pub fn get(&mut self, inputs: S) -> (&S::Output, bool) {
        let (entry, fresh) = match self.cached.take() {
            Some(entry) if entry.0.same_inputs(&inputs) => (entry, false),
            _ => {
                let output = inputs.compute();
                self.recomputes += 1;
                ((inputs, output), true)
            }
        };

        let (_, output) = self.cached.insert(entry);
        (output, fresh)
    }

    /// How many times the stage has actually run.
    #[must_use]
    pub const fn recomputes(&self) -> usize {
        self.recomputes
    }

    /// Drop the cached result so the next call recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}
