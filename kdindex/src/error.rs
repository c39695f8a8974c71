use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Point has {found} dimensions but the tree is keyed on {expected}")]
    DimensionMisMatch { expected: usize, found: usize },
}
