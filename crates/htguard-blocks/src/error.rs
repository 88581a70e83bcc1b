//! Error types for htguard-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Block not found: {marker}")]
    BlockNotFound { marker: String },
}
