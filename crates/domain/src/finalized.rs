//! Finalized projects: the curated set teams are formed around.

use crate::comment::Comment;
use crate::identifiers::{FinalizedProjectId, HackathonEventId, UserId};
use crate::membership::Membership;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project finalized by an administrator for team formation.
///
/// Embeds comment, interested-user and assigned-user lists. Cross-entity
/// invariant: within one hackathon event a user appears in the assigned list
/// of at most one finalized project at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalizedProject {
    pub id: FinalizedProjectId,
    pub hackathon_event_id: HackathonEventId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub interested_users: Vec<InterestedUser>,
    #[serde(default)]
    pub assigned_users: Vec<AssignedUser>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Interest mark on a finalized project. At most one per (project, user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestedUser {
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Membership for InterestedUser {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn joined(user_id: UserId, at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            created_at: at,
        }
    }
}

/// Team assignment on a finalized project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedUser {
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Membership for AssignedUser {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn joined(user_id: UserId, at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            created_at: at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::membership;

    #[test]
    fn test_legacy_finalized_project_defaults_embedded_lists() {
        let json = serde_json::json!({
            "id": FinalizedProjectId::new(),
            "hackathon_event_id": HackathonEventId::new(),
            "title": "Finalized",
            "description": "stored without sub-entity lists",
            "created_at": Utc::now(),
            "updated_at": Utc::now(),
        });
        let project: FinalizedProject = serde_json::from_value(json).unwrap();
        assert!(project.comments.is_empty());
        assert!(project.interested_users.is_empty());
        assert!(project.assigned_users.is_empty());
    }

    #[test]
    fn test_interest_and_assignment_are_memberships() {
        let mut interested: Vec<InterestedUser> = vec![];
        let mut assigned: Vec<AssignedUser> = vec![];
        let user = UserId::new();
        let now = Utc::now();

        assert!(membership::add_if_absent(&mut interested, user, now));
        assert!(!membership::add_if_absent(&mut interested, user, now));
        assert!(membership::add_if_absent(&mut assigned, user, now));
        assert!(membership::remove_if_present(&mut assigned, user));
    }
}
