use thiserror::Error;

/// Error taxonomy for the valuation pipeline
#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("market data unavailable: {0}")]
    DataUnavailable(String),

    #[error("invalid metric: {0}")]
    InvalidMetric(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("summary generation failed: {0}")]
    SummaryFailed(String),

    #[error("export failed: {0}")]
    ExportFailure(String),
}

pub type Result<T> = std::result::Result<T, ValuationError>;
