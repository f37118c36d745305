//! Creation, modification and logical deletion stamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::Change;

/// When and by whom something happened to an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub at: DateTime<Utc>,
    /// User or system id.
    pub by: String,
}

impl Stamp {
    pub fn new(at: DateTime<Utc>, by: impl Into<String>) -> Self {
        Self { at, by: by.into() }
    }
}

/// Creation, last modification and deletion of a business object.
///
/// Deletion is logical: a deleted object keeps its data and can be
/// undeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookkeeping {
    created: Stamp,
    last_modified: Option<Stamp>,
    deleted: Option<Stamp>,
}

impl Bookkeeping {
    pub fn new(at: DateTime<Utc>, by: impl Into<String>) -> Self {
        Self {
            created: Stamp::new(at, by),
            last_modified: None,
            deleted: None,
        }
    }

    pub fn created(&self) -> &Stamp {
        &self.created
    }

    pub fn last_modified(&self) -> Option<&Stamp> {
        self.last_modified.as_ref()
    }

    pub fn deleted(&self) -> Option<&Stamp> {
        self.deleted.as_ref()
    }

    pub fn mark_modified(&mut self, at: DateTime<Utc>, by: impl Into<String>) {
        self.last_modified = Some(Stamp::new(at, by));
    }

    /// Mark as deleted; an object already deleted keeps its first deletion.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>, by: impl Into<String>) -> Change {
        if self.deleted.is_some() {
            return Change::Unchanged;
        }
        self.deleted = Some(Stamp::new(at, by));
        Change::Changed
    }

    /// Revive a deleted object. Counts as a modification.
    pub fn mark_undeleted(&mut self, at: DateTime<Utc>, by: impl Into<String>) -> Change {
        if self.deleted.take().is_none() {
            return Change::Unchanged;
        }
        self.mark_modified(at, by);
        Change::Changed
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }

    /// Deleted on or before `now`. A deletion stamped in the future is not
    /// yet effective.
    pub fn is_deleted_at(&self, now: DateTime<Utc>) -> bool {
        self.deleted.as_ref().is_some_and(|d| d.at <= now)
    }

    /// The most recent of creation, modification and deletion.
    pub fn last_change_at(&self) -> DateTime<Utc> {
        [self.last_modified.as_ref(), self.deleted.as_ref()]
            .into_iter()
            .flatten()
            .map(|s| s.at)
            .fold(self.created.at, std::cmp::max)
    }
}
