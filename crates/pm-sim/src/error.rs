use pm_core::PmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("tick_interval_ms must be positive")]
    ZeroTickInterval,

    #[error(transparent)]
    Core(#[from] PmError),
}

pub type SimResult<T> = Result<T, SimError>;
