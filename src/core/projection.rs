#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{CoordinateSystem, DataPoint};

/// Data point mapped into canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub source: DataPoint,
}

/// Projects scatter points through `system`.
///
/// Output order matches input order with or without `parallel-projection`.
#[must_use]
pub fn project_points(points: &[DataPoint], system: &CoordinateSystem) -> Vec<ProjectedPoint> {
    #[cfg(feature = "parallel-projection")]
    {
        points
            .par_iter()
            .map(|point| project_single_point(*point, system))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points
            .iter()
            .map(|point| project_single_point(*point, system))
            .collect()
    }
}

fn project_single_point(point: DataPoint, system: &CoordinateSystem) -> ProjectedPoint {
    ProjectedPoint {
        x: system.to_x(point.x),
        y: system.to_y(point.y),
        source: point,
    }
}
