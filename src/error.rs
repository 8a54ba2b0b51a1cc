//! Renderer configuration errors.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdenticonError {
    #[error("output size must be positive")]
    ZeroSize,

    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: u32, cols: u32 },

    #[error("{rows}x{cols} grid does not fit in {size}px: cells would be smaller than one pixel")]
    GridTooLarge { size: u32, rows: u32, cols: u32 },

    #[error("output size {size}px exceeds the maximum of {max}px")]
    SizeTooLarge { size: u32, max: u32 },
}
