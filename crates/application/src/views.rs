//! Composite read views.
//!
//! List queries return the matching projects together with every user record
//! referenced anywhere inside them (creators, commenters, upvoters,
//! interested and assigned users), so a client can render a board without
//! issuing follow-up lookups.

use hackhub_domain::finalized::FinalizedProject;
use hackhub_domain::identifiers::UserId;
use hackhub_domain::membership::Membership;
use hackhub_domain::project::Project;
use hackhub_domain::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `listProjectsByEvent` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBoard {
    pub projects: Vec<Project>,
    pub visible_users: Vec<User>,
}

/// `listFinalizedProjectsByEvent` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalizedBoard {
    pub projects: Vec<FinalizedProject>,
    pub visible_users: Vec<User>,
}

/// Distinct user ids referenced by a set of projects, in first-appearance
/// order. Deduplication keeps the batch user lookup bounded by the number of
/// distinct participants rather than the number of reactions.
pub fn project_user_ids(projects: &[Project]) -> Vec<UserId> {
    let mut collector = UserIdCollector::default();
    for project in projects {
        collector.push(project.creator_user_id);
        for upvote in &project.upvotes {
            collector.push(upvote.user_id());
        }
        collector.extend_from_comments(&project.comments);
    }
    collector.into_ids()
}

/// Distinct user ids referenced by a set of finalized projects.
pub fn finalized_user_ids(projects: &[FinalizedProject]) -> Vec<UserId> {
    let mut collector = UserIdCollector::default();
    for project in projects {
        for interested in &project.interested_users {
            collector.push(interested.user_id());
        }
        for assigned in &project.assigned_users {
            collector.push(assigned.user_id());
        }
        collector.extend_from_comments(&project.comments);
    }
    collector.into_ids()
}

#[derive(Default)]
struct UserIdCollector {
    seen: HashSet<UserId>,
    ids: Vec<UserId>,
}

impl UserIdCollector {
    fn push(&mut self, id: UserId) {
        if self.seen.insert(id) {
            self.ids.push(id);
        }
    }

    fn extend_from_comments(&mut self, comments: &[hackhub_domain::comment::Comment]) {
        for comment in comments {
            self.push(comment.author_id);
            for upvote in &comment.upvotes {
                self.push(upvote.user_id());
            }
        }
    }

    fn into_ids(self) -> Vec<UserId> {
        self.ids
    }
}
