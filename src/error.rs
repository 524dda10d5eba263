use thiserror::Error;

pub type LensResult<T> = Result<T, LensError>;

#[derive(Debug, Error)]
pub enum LensError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("missing geometry: {0}")]
    MissingGeometry(String),
}
