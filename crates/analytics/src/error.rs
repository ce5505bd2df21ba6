use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Decimal arithmetic error: {0}")]
    Decimal(#[from] CoreError),

    #[error("An unexpected error occurred during analytics calculation: {0}")]
    InternalError(String),
}
