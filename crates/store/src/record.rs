/// A persisted artifact row. Immutable after creation: `cid` and
/// `base64_zipped` never change for a given row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    pub cid: String,
    /// Transport form: base64 of the single-entry zip the artifact was
    /// packed into. Extraction later unpacks exactly this payload.
    pub base64_zipped: String,
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub referrer: String,
}

/// Caller-supplied metadata attached at creation time.
#[derive(Debug, Clone, Default)]
pub struct RecordMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub referrer: String,
}

impl RecordMeta {
    pub fn with_referrer(referrer: impl Into<String>) -> Self {
        Self {
            referrer: referrer.into(),
            ..Self::default()
        }
    }
}
