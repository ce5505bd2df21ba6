use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Decimal arithmetic error: {0}")]
    Decimal(#[from] CoreError),
}
