//! Outcome of change-tracking setters.

use serde::{Deserialize, Serialize};

/// Outcome of a change-tracking setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Change {
    /// The stored value differs from before.
    Changed,
    /// The new value equalled the stored one; nothing was written.
    Unchanged,
}

impl Change {
    pub fn is_changed(self) -> bool {
        self == Self::Changed
    }

    pub fn is_unchanged(self) -> bool {
        self == Self::Unchanged
    }

    /// Combine two outcomes: changed if either changed.
    pub fn or(self, other: Self) -> Self {
        if self.is_changed() || other.is_changed() {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

impl From<bool> for Change {
    fn from(changed: bool) -> Self {
        if changed { Self::Changed } else { Self::Unchanged }
    }
}

/// Replace `*slot` with `value` if they differ.
pub fn set_if_changed<T: PartialEq>(slot: &mut T, value: T) -> Change {
    if *slot == value {
        return Change::Unchanged;
    }
    *slot = value;
    Change::Changed
}
