use indicatif::style::TemplateError;
use simulator::error::SimulatorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnsembleError {
    #[error("Epoch simulation failed within ensemble: {0}")]
    Simulator(#[from] SimulatorError),

    #[error("Progress bar template error: {0}")]
    ProgressBarTemplate(String),
}

impl From<TemplateError> for EnsembleError {
    fn from(error: TemplateError) -> Self {
        EnsembleError::ProgressBarTemplate(error.to_string())
    }
}
