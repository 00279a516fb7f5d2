use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to write output line: {0}")]
    Output(#[from] std::io::Error),
    #[error("invalid coordinates ({latitude}, {longitude}): {reason}")]
    InvalidCoordinates {
        latitude: f64,
        longitude: f64,
        reason: &'static str,
    },
    #[error("invalid timestamp format {format:?}")]
    InvalidTimestampFormat { format: String },
}

pub type Result<T> = std::result::Result<T, Error>;
