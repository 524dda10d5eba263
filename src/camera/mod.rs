//! Camera framing: zoom/pan transforms that bring slide elements into view.
//!
//! The pure math lives on `CameraPolicy` and `compute_group_rect`;
//! `CameraDirector` is the adapter-facing entry point that resolves geometry
//! through `SceneGeometry` first.

mod category;
mod director;
mod framing;
mod policy;
mod scene;
mod transition;

pub use category::{CategoryKind, ContentCategory, ElementRole, trailing_index};
pub use director::CameraDirector;
pub use framing::{
    FramingRequest, FramingResult, ScreenViewport, SiblingElement, compute_group_rect,
};
pub use policy::{CameraPolicy, CategoryPolicy, HighlightPolicy, VerticalCeiling};
pub use scene::{SceneElement, SceneGeometry, StaticScene};
pub use transition::{TransitionPlan, TransitionStep};
