use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Store error: {0}")]
    StoreError(#[from] petrilink_store::StoreError),
}
