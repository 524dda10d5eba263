use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::dataset::AxisParams;
use crate::core::primitives::{decimal_gcd, decimal_to_f64, f64_to_decimal, snap_decimal};
use crate::core::Viewport;
use crate::error::{LensError, LensResult};

/// Slack used when rounding cell counts that should be integral.
pub const CELL_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest cell count accepted on either axis. Each cell becomes a gridline.
pub const MAX_CELLS_PER_AXIS: f64 = 100_000.0;

/// Square-cell mapping from data space into canvas pixels.
///
/// Both axes share one data step (`gcd`) and one pixel step (`cell_size`),
/// so a unit on X covers the same number of pixels as a unit on Y. The grid
/// is centered inside the padded drawing area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub gcd: f64,
    pub cell_size: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_interval: f64,
    pub y_interval: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub actual_width: f64,
    pub actual_height: f64,
    pub total_x_cells: f64,
    pub total_y_cells: f64,
    x_label_every: u64,
    y_label_every: u64,
}

impl CoordinateSystem {
    pub fn new(canvas: Viewport, padding: f64, params: AxisParams) -> LensResult<Self> {
        if !canvas.is_valid() {
            return Err(LensError::InvalidViewport {
                width: f64::from(canvas.width),
                height: f64::from(canvas.height),
            });
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(LensError::InvalidData(
                "padding must be finite and >= 0".to_owned(),
            ));
        }

        let draw_width = f64::from(canvas.width) - 2.0 * padding;
        let draw_height = f64::from(canvas.height) - 2.0 * padding;
        if draw_width <= 0.0 || draw_height <= 0.0 {
            return Err(LensError::InvalidViewport {
                width: draw_width,
                height: draw_height,
            });
        }

        let x_interval = dataset_decimal(params.x_interval, "x interval")?;
        let y_interval = dataset_decimal(params.y_interval, "y interval")?;
        if x_interval.is_zero() || y_interval.is_zero() {
            return Err(LensError::InvalidDataset(
                "axis intervals must be non-zero".to_owned(),
            ));
        }
        let gcd = decimal_gcd(x_interval, y_interval);

        let x_span = decimal_span(params.x_min, params.x_max, "x")?;
        let y_span = decimal_span(params.y_min, params.y_max, "y")?;
        let total_x_cells = decimal_to_f64(checked_ratio(x_span, gcd, "x cell count")?, "x cells")?;
        let total_y_cells = decimal_to_f64(checked_ratio(y_span, gcd, "y cell count")?, "y cells")?;
        check_cell_count(total_x_cells, "x")?;
        check_cell_count(total_y_cells, "y")?;
        let x_label_every = label_stride(x_interval, gcd)?;
        let y_label_every = label_stride(y_interval, gcd)?;
        let gcd = decimal_to_f64(gcd, "gcd")?;

        let cell_size = (draw_width / total_x_cells).min(draw_height / total_y_cells);
        let actual_width = cell_size * total_x_cells;
        let actual_height = cell_size * total_y_cells;
        let offset_x = padding + (draw_width - actual_width) / 2.0;
        let offset_y = padding + (draw_height - actual_height) / 2.0;

        debug!(
            gcd,
            cell_size,
            total_x_cells,
            total_y_cells,
            offset_x,
            offset_y,
            "built scatter coordinate system"
        );

        Ok(Self {
            gcd,
            cell_size,
            x_min: params.x_min,
            x_max: params.x_max,
            y_min: params.y_min,
            y_max: params.y_max,
            x_interval: params.x_interval,
            y_interval: params.y_interval,
            offset_x,
            offset_y,
            actual_width,
            actual_height,
            total_x_cells,
            total_y_cells,
            x_label_every,
            y_label_every,
        })
    }

    #[must_use]
    pub fn to_x(&self, value: f64) -> f64 {
        self.offset_x + ((value - self.x_min) / self.gcd) * self.cell_size
    }

    /// Data-up maps to pixel-up, so larger values land closer to the top.
    #[must_use]
    pub fn to_y(&self, value: f64) -> f64 {
        self.offset_y + self.actual_height - ((value - self.y_min) / self.gcd) * self.cell_size
    }

    #[must_use]
    pub fn from_x(&self, pixel: f64) -> f64 {
        self.x_min + (pixel - self.offset_x) / self.cell_size * self.gcd
    }

    #[must_use]
    pub fn from_y(&self, pixel: f64) -> f64 {
        self.y_min + (self.offset_y + self.actual_height - pixel) / self.cell_size * self.gcd
    }

    /// Pixel box covered by the grid.
    #[must_use]
    pub fn plot_bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.offset_x,
            self.offset_y,
            self.offset_x + self.actual_width,
            self.offset_y + self.actual_height,
        )
    }

    /// Gridlines between every fine step, labelled on the coarse intervals.
    #[must_use]
    pub fn grid_lines(&self) -> GridLines {
        grid_lines(self)
    }
}

/// One gridline position on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub value: f64,
    pub show_label: bool,
}

/// Lazy iterator over one axis' gridlines. Clone it to restart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGridLines {
    min: f64,
    max: f64,
    step: f64,
    count: usize,
    label_every: u64,
    index: usize,
}

impl AxisGridLines {
    fn new(min: f64, max: f64, step: f64, total_cells: f64, label_every: u64) -> Self {
        let cells = (total_cells + CELL_COUNT_TOLERANCE).floor().max(0.0) as usize;
        Self {
            min,
            max,
            step,
            count: cells + 1,
            label_every: label_every.max(1),
            index: 0,
        }
    }

    fn line_at(&self, index: usize) -> GridLine {
        let mut value = self.min + index as f64 * self.step;
        if (value - self.max).abs() <= self.step * CELL_COUNT_TOLERANCE {
            value = self.max;
        }
        GridLine {
            value,
            show_label: (index as u64) % self.label_every == 0,
        }
    }
}

impl Iterator for AxisGridLines {
    type Item = GridLine;

    fn next(&mut self) -> Option<GridLine> {
        if self.index >= self.count {
            return None;
        }
        let line = self.line_at(self.index);
        self.index += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AxisGridLines {}

/// Gridlines for both axes of a coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLines {
    pub x: AxisGridLines,
    pub y: AxisGridLines,
}

#[must_use]
pub fn grid_lines(system: &CoordinateSystem) -> GridLines {
    GridLines {
        x: AxisGridLines::new(
            system.x_min,
            system.x_max,
            system.gcd,
            system.total_x_cells,
            system.x_label_every,
        ),
        y: AxisGridLines::new(
            system.y_min,
            system.y_max,
            system.gcd,
            system.total_y_cells,
            system.y_label_every,
        ),
    }
}

fn dataset_decimal(value: f64, field_name: &str) -> LensResult<Decimal> {
    f64_to_decimal(value, field_name)
        .map(snap_decimal)
        .map_err(|err| match err {
            LensError::InvalidData(reason) => LensError::InvalidDataset(reason),
            other => other,
        })
}

fn check_cell_count(cells: f64, axis: &str) -> LensResult<()> {
    if cells > MAX_CELLS_PER_AXIS {
        return Err(LensError::InvalidDataset(format!(
            "{axis} axis needs {cells} grid cells, more than the {MAX_CELLS_PER_AXIS} allowed"
        )));
    }
    Ok(())
}

fn decimal_span(min: f64, max: f64, axis: &str) -> LensResult<Decimal> {
    let min = dataset_decimal(min, "axis min")?;
    let max = dataset_decimal(max, "axis max")?;
    max.checked_sub(min)
        .ok_or_else(|| LensError::InvalidDataset(format!("{axis} range overflows decimal range")))
}

fn checked_ratio(numerator: Decimal, denominator: Decimal, what: &str) -> LensResult<Decimal> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| LensError::InvalidDataset(format!("{what} overflows decimal range")))
}

fn label_stride(interval: Decimal, gcd: Decimal) -> LensResult<u64> {
    checked_ratio(interval, gcd, "label stride")?
        .round()
        .to_u64()
        .ok_or_else(|| LensError::InvalidDataset("label stride is out of range".to_owned()))
}
