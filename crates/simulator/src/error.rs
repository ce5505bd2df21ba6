use engine::error::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulatorError {
    #[error("Trade engine error during epoch: {0}")]
    Engine(#[from] EngineError),
}
