use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DataPoint;
use crate::core::primitives::{decimal_to_f64, exact_abs_difference, f64_to_decimal};
use crate::error::{LensError, LensResult};

/// Axis ranges and nominal intervals derived from a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisParams {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_interval: f64,
    pub y_interval: f64,
}

/// Scans `points` for axis extents and reads the nominal intervals from the
/// first two points.
pub fn extract_params(points: &[DataPoint]) -> LensResult<AxisParams> {
    if points.len() < 2 {
        return Err(LensError::InvalidDataset(format!(
            "at least 2 points are required, got {}",
            points.len()
        )));
    }
    if let Some(index) = points.iter().position(|point| !point.is_finite()) {
        return Err(LensError::InvalidDataset(format!(
            "point #{index} has a non-finite coordinate"
        )));
    }
    for (index, point) in points.iter().enumerate() {
        f64_to_decimal(point.x, "x")
            .and_then(|_| f64_to_decimal(point.y, "y"))
            .map_err(|err| {
                LensError::InvalidDataset(format!("point #{index} is out of decimal range: {err}"))
            })?;
    }

    let x_interval = exact_abs_difference(points[0].x, points[1].x);
    let y_interval = exact_abs_difference(points[0].y, points[1].y);
    if x_interval == 0.0 {
        return Err(LensError::InvalidDataset(
            "x interval between the first two points must be non-zero".to_owned(),
        ));
    }
    if y_interval == 0.0 {
        return Err(LensError::InvalidDataset(
            "y interval between the first two points must be non-zero".to_owned(),
        ));
    }

    let mut params = AxisParams {
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
        x_interval,
        y_interval,
    };
    for point in points {
        params.x_min = params.x_min.min(point.x);
        params.x_max = params.x_max.max(point.x);
        params.y_min = params.y_min.min(point.y);
        params.y_max = params.y_max.max(point.y);
    }

    debug!(
        count = points.len(),
        x_min = params.x_min,
        x_max = params.x_max,
        y_min = params.y_min,
        y_max = params.y_max,
        x_interval,
        y_interval,
        "extracted scatter axis params"
    );
    Ok(params)
}

/// Validated scatter input: at least two finite points whose first pair
/// differs on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DataPoint>", into = "Vec<DataPoint>")]
pub struct Dataset {
    points: Vec<DataPoint>,
    params: AxisParams,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> LensResult<Self> {
        let params = extract_params(&points)?;
        Ok(Self { points, params })
    }

    pub fn from_pairs(pairs: &[[f64; 2]]) -> LensResult<Self> {
        Self::new(pairs.iter().copied().map(DataPoint::from).collect())
    }

    /// Parses whitespace-separated `"x,y"` tokens, e.g. `"0,0 1,1 2,4"`.
    pub fn parse(input: &str) -> LensResult<Self> {
        let points = input
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_point_token(index, token))
            .collect::<LensResult<Vec<_>>>()?;
        Self::new(points)
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn params(&self) -> AxisParams {
        self.params
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl TryFrom<Vec<DataPoint>> for Dataset {
    type Error = LensError;

    fn try_from(points: Vec<DataPoint>) -> LensResult<Self> {
        Self::new(points)
    }
}

impl From<Dataset> for Vec<DataPoint> {
    fn from(dataset: Dataset) -> Self {
        dataset.points
    }
}

impl FromStr for Dataset {
    type Err = LensError;

    fn from_str(input: &str) -> LensResult<Self> {
        Self::parse(input)
    }
}

fn parse_point_token(index: usize, token: &str) -> LensResult<DataPoint> {
    let (raw_x, raw_y) = token.split_once(',').ok_or_else(|| {
        LensError::InvalidDataset(format!(
            "token #{index} `{token}` is not an `x,y` pair"
        ))
    })?;
    let x = parse_coordinate(index, raw_x)?;
    let y = parse_coordinate(index, raw_y)?;
    Ok(DataPoint::new(x, y))
}

fn parse_coordinate(index: usize, raw: &str) -> LensResult<f64> {
    let raw = raw.trim();
    let value = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| {
            LensError::InvalidDataset(format!(
                "token #{index} has a non-numeric coordinate `{raw}`"
            ))
        })?;
    decimal_to_f64(value, "coordinate")
        .map_err(|err| LensError::InvalidDataset(format!("token #{index}: {err}")))
}
