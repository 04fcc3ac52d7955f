//! User account types.

use crate::identifiers::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account.
///
/// Created on first sign-in by the registration upsert, updated on profile
/// edits, never deleted in-band. `subject` is the external-auth subject id
/// issued by the identity provider and is unique across users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub subject: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// User roles for access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    pub fn can_manage_finalized_projects(&self) -> bool {
        self.is_admin()
    }

    pub fn can_assign_users(&self) -> bool {
        self.is_admin()
    }

    pub fn can_manage_events(&self) -> bool {
        self.is_admin()
    }
}

/// The profile fields a caller may change about themselves.
///
/// Compared against the stored record by the registration upsert; a patch is
/// written only when something actually differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserProfile {
    /// Whether the stored user already matches this candidate profile.
    pub fn matches(&self, user: &User) -> bool {
        self.first_name == user.first_name
            && self.last_name == user.last_name
            && self.avatar_url == user.avatar_url
    }
}
