//! Errors raised while configuring the tree renderer

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("order {order} exceeds the maximum supported order {max}")]
    OrderTooDeep { order: u32, max: u32 },
}

pub type TreeResult<T> = Result<T, TreeError>;
