//! Membership records and toggle algorithms for embedded user lists.
//!
//! Upvotes, interest marks and assignments are all value records of
//! `{user_id, created_at}` embedded in a parent aggregate. The parent
//! guarantees at most one record per user; these functions preserve that
//! invariant for any list they are handed.
//!
//! `created_at` is domain time supplied by the caller, distinct from the
//! storage layer's own creation metadata.

use crate::identifiers::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A `{user_id, created_at}` record embedded in a parent aggregate.
pub trait Membership: Sized {
    fn user_id(&self) -> UserId;
    fn joined(user_id: UserId, at: DateTime<Utc>) -> Self;
}

/// An upvote on a project or a comment. At most one per (target, user).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upvote {
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Membership for Upvote {
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

/// Outcome of a strict toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

pub fn contains<M: Membership>(list: &[M], user_id: UserId) -> bool {
    list.iter().any(|m| m.user_id() == user_id)
}

/// Strict flip: present → removed, absent → added.
///
/// One function serves both directions; calling twice returns the list to
/// its original membership.
pub fn toggle<M: Membership>(list: &mut Vec<M>, user_id: UserId, at: DateTime<Utc>) -> Toggle {
    if remove_if_present(list, user_id) {
        Toggle::Removed
    } else {
        list.push(M::joined(user_id, at));
        Toggle::Added
    }
}

/// Idempotent add: a no-op when the user is already a member.
///
/// Returns whether the list changed.
pub fn add_if_absent<M: Membership>(list: &mut Vec<M>, user_id: UserId, at: DateTime<Utc>) -> bool {
    if contains(list, user_id) {
        return false;
    }
    list.push(M::joined(user_id, at));
    true
}

/// Idempotent remove: a no-op when the user is not a member.
///
/// Returns whether the list changed.
pub fn remove_if_present<M: Membership>(list: &mut Vec<M>, user_id: UserId) -> bool {
    let before = list.len();
    list.retain(|m| m.user_id() != user_id);
    list.len() != before
}
