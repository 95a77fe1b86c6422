use thiserror::Error;

use croft_core::TreeKey;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no behavior tree registered for {0}")]
    MissingTree(TreeKey),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
