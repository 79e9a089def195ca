use seg_core::SegError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Model(#[from] SegError),

    #[error("initial board is {got}x{got} but the model expects {expected}x{expected}")]
    SideMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
