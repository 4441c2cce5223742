use thiserror::Error;

pub type OverlayResult<T> = Result<T, OverlayError>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
