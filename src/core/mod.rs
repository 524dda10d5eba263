pub mod coordinate_system;
pub mod dataset;
pub mod primitives;
pub mod projection;
pub mod types;

pub use coordinate_system::{
    AxisGridLines, CELL_COUNT_TOLERANCE, CoordinateSystem, GridLine, GridLines,
    MAX_CELLS_PER_AXIS, grid_lines,
};
pub use dataset::{AxisParams, Dataset, extract_params};
pub use primitives::{decimal_gcd, gcd_f64};
pub use projection::{ProjectedPoint, project_points};
pub use types::{DataPoint, Rect, Viewport};
