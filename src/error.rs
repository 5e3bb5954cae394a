use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Programmer error at construction time (for example a missing canvas).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(
        "invalid canvas metrics: width={width}, height={height}, device_pixel_ratio={device_pixel_ratio}"
    )]
    InvalidMetrics {
        width: f64,
        height: f64,
        device_pixel_ratio: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
