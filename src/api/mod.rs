//! Host-facing scatter plot API.

mod scatter_chart;
mod scatter_frame_builder;
mod scatter_options;

pub use scatter_chart::ScatterChart;
pub use scatter_frame_builder::ScatterScene;
pub use scatter_options::ScatterRenderOptions;
