use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    SqlError(#[from] rusqlite::Error),

    #[error("Codec error: {0}")]
    CodecError(#[from] petrilink_codec::CodecError),

    #[error("Record already exists for cid {0}")]
    DuplicateCid(String),

    #[error("No record found for cid {0} after insert conflict")]
    MissingAfterConflict(String),
}

impl StoreError {
    /// True for the unique-constraint failure a concurrent or repeat
    /// ingestion produces; callers recover by re-reading.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateCid(_))
    }
}
