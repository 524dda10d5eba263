use serde::{Deserialize, Serialize};

use crate::camera::FramingResult;

/// One write of the camera transform to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionStep {
    pub transform: FramingResult,
    /// Zero means "apply instantly".
    pub duration_ms: u32,
}

impl TransitionStep {
    /// CSS `transition` value for this step.
    #[must_use]
    pub fn css_transition(self) -> String {
        if self.duration_ms == 0 {
            "none".to_owned()
        } else {
            format!("transform {}ms ease-in-out", self.duration_ms)
        }
    }
}

/// Two-phase camera move.
///
/// The driver applies `settle` with transitions disabled, lets the surface
/// paint once, then applies `animate`. Starting from a settled state keeps a
/// half-finished previous transition from leaking into the new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionPlan {
    pub settle: TransitionStep,
    pub animate: TransitionStep,
}

impl TransitionPlan {
    #[must_use]
    pub fn new(current: FramingResult, target: FramingResult, duration_ms: u32) -> Self {
        Self {
            settle: TransitionStep {
                transform: current,
                duration_ms: 0,
            },
            animate: TransitionStep {
                transform: target,
                duration_ms,
            },
        }
    }

    #[must_use]
    pub fn steps(self) -> [TransitionStep; 2] {
        [self.settle, self.animate]
    }

    /// True when the move does not change the transform.
    #[must_use]
    pub fn is_noop(self) -> bool {
        self.settle.transform == self.animate.transform
    }
}
