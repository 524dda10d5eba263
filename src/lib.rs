//! slide-lens: camera framing and square-cell scatter plots for slide decks.
//!
//! Two independent, pure computation layers:
//! - [`camera`] turns element geometry into zoom/pan transforms.
//! - [`core`] derives a square-cell coordinate system from scatter data, and
//!   [`api`] draws it through a backend-agnostic [`render::Renderer`].
//!
//! Geometry comes in through explicit values or the
//! [`camera::SceneGeometry`] adapter; nothing here touches a DOM directly.

pub mod api;
pub mod camera;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ScatterChart, ScatterRenderOptions};
pub use camera::{CameraDirector, CameraPolicy, FramingResult};
pub use error::{LensError, LensResult};
