//! Submitted projects.

use crate::comment::Comment;
use crate::identifiers::{HackathonEventId, ProjectId, UserId};
use crate::membership::Upvote;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A project submitted to a hackathon event.
///
/// Owned by exactly one creator. Comments and upvotes are embedded and
/// persisted inline; documents written before those lists existed
/// deserialize with empty defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub hackathon_event_id: HackathonEventId,
    pub creator_user_id: UserId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub upvotes: Vec<Upvote>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn is_created_by(&self, user_id: UserId) -> bool {
        self.creator_user_id == user_id
    }
}
