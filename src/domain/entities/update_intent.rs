//! Per-identifier deletion record flowing through the deletion pipeline.

/// A pending "mark deleted" mutation for one short URL.
///
/// Produced by a worker lane from a single identifier and consumed exactly once
/// by the storage layer. Carries no identity beyond its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UpdateIntent {
    pub url_id: String,
}

impl UpdateIntent {
    pub fn new(url_id: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
        }
    }
}
