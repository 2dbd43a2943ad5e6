//! Short URL record as held by the in-memory store.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// A shortened URL together with the users who created it.
///
/// Deletion is soft: `deleted_at` is set and the record stays in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrl {
    pub id: String,
    pub original_url: String,
    pub owners: HashSet<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ShortUrl {
    pub fn new(id: String, original_url: String) -> Self {
        Self {
            id,
            original_url,
            owners: HashSet::new(),
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Returns `true` if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns `true` if `user_id` has ever shortened this URL.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owners.contains(user_id)
    }
}
