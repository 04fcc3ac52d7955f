//! Comments embedded in a parent aggregate, and the whole-list operations
//! that mutate them.
//!
//! Comments have no independent lifecycle: the parent document owns the
//! ordered list, and every mutation here produces a new full list for the
//! caller to write back (whole-array replace, not a positional patch).

use crate::errors::{DomainError, DomainResult, EntityKind};
use crate::identifiers::{CommentId, UserId};
use crate::membership::{self, Toggle, Upvote};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment in a parent's ordered comment list.
///
/// `id` is opaque and unique within the parent's list. `upvotes` defaults to
/// empty when absent in stored documents written before upvotes existed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub text: String,
    #[serde(default)]
    pub upvotes: Vec<Upvote>,
}

/// Append a fresh comment and return its id.
pub fn append(
    list: &mut Vec<Comment>,
    author_id: UserId,
    text: String,
    at: DateTime<Utc>,
) -> CommentId {
    let id = CommentId::new();
    list.push(Comment {
        id,
        author_id,
        created_at: at,
        text,
        upvotes: vec![],
    });
    id
}

pub fn find(list: &[Comment], id: CommentId) -> Option<&Comment> {
    list.iter().find(|c| c.id == id)
}

fn find_mut(list: &mut [Comment], id: CommentId) -> DomainResult<&mut Comment> {
    list.iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| DomainError::not_found(EntityKind::Comment, id))
}

/// Merge new text into an existing comment; author and timestamps are kept.
pub fn update_text(list: &mut [Comment], id: CommentId, text: String) -> DomainResult<()> {
    let comment = find_mut(list, id)?;
    comment.text = text;
    Ok(())
}

/// Filter a comment out of the list, returning the removed value.
pub fn remove(list: &mut Vec<Comment>, id: CommentId) -> DomainResult<Comment> {
    let index = list
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| DomainError::not_found(EntityKind::Comment, id))?;
    Ok(list.remove(index))
}

/// Strict upvote toggle on one comment in the list.
pub fn toggle_upvote(
    list: &mut [Comment],
    id: CommentId,
    user_id: UserId,
    at: DateTime<Utc>,
) -> DomainResult<Toggle> {
    let comment = find_mut(list, id)?;
    Ok(membership::toggle(&mut comment.upvotes, user_id, at))
}

/// Idempotent upvote removal on one comment in the list.
pub fn remove_upvote(list: &mut [Comment], id: CommentId, user_id: UserId) -> DomainResult<bool> {
    let comment = find_mut(list, id)?;
    Ok(membership::remove_if_present(&mut comment.upvotes, user_id))
}
