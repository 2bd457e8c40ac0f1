//! Guild role and member snapshots.

use crate::{RoleId, UserId};
use serde::{Deserialize, Serialize};

/// A guild role as reported by the role service.
///
/// Ordering is the guild's role ordering; the service returns roles already
/// sorted, and positional button indices are derived from that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier.
    pub id: RoleId,
    /// Full role name, including any category prefix.
    pub name: String,
}

impl Role {
    /// Create a role snapshot.
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A guild member snapshot: just the role set, which is all the press state
/// machine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member's user id.
    pub user_id: UserId,
    /// Role ids currently held by the member.
    pub role_ids: Vec<RoleId>,
}

impl Member {
    /// Create a member snapshot.
    pub fn new(user_id: UserId, role_ids: Vec<RoleId>) -> Self {
        Self { user_id, role_ids }
    }

    /// Whether the member holds the given role.
    pub fn holds(&self, role: RoleId) -> bool {
        self.role_ids.contains(&role)
    }
}
