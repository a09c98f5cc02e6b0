use thiserror::Error;

use crate::{ChildId, Padding};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("unknown alignment `{0}` (expected start, middle or end)")]
    UnknownAlignment(String),

    #[error("unknown orientation `{0}` (expected horizontal or vertical)")]
    UnknownOrientation(String),

    #[error("invalid padding {0:?}: every side must be finite and non-negative")]
    InvalidPadding(Padding),

    #[error("invalid max {axis} {value}: must be a non-negative number")]
    InvalidExtent { axis: &'static str, value: f64 },

    #[error("child {0:?} does not belong to this panel")]
    UnknownChild(ChildId),
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
