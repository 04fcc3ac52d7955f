//! Identity resolution.
//!
//! The external identity provider verifies the caller and hands this layer an
//! opaque subject id; everything here maps that subject onto the internal
//! user record and classifies the outcome: not signed in, signed in but not
//! yet registered, or registered.

use chrono::Utc;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::identifiers::UserId;
use hackhub_domain::user::{User, UserProfile, UserRole};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The verified caller, as delivered by the identity provider at the
/// transport edge. `subject` is `None` for anonymous requests.
#[derive(Debug, Clone, Default)]
pub struct Caller {
    pub subject: Option<String>,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self { subject: None }
    }

    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
        }
    }
}

/// User repository port.
///
/// Each method executes as one atomic call against the underlying document
/// store. `find_by_subject` is a uniqueness-indexed lookup and may still
/// report more than one match if the index is broken; the resolver turns
/// that into `NOT_UNIQUE`.
#[async_trait::async_trait]
pub trait UserRepositoryPort: Send + Sync {
    async fn insert(&self, user: &User) -> DomainResult<UserId>;
    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    /// Batch lookup; unknown ids are skipped, not errors.
    async fn get_many(&self, ids: &[UserId]) -> DomainResult<Vec<User>>;
    async fn find_by_subject(&self, subject: &str) -> DomainResult<Vec<User>>;
    async fn update_profile(&self, id: UserId, profile: &UserProfile) -> DomainResult<()>;
}

/// Maps an external authenticated subject to the internal user record.
pub struct IdentityResolver<U> {
    users: Arc<U>,
}

impl<U> Clone for IdentityResolver<U> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
        }
    }
}

impl<U> IdentityResolver<U>
where
    U: UserRepositoryPort,
{
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// The caller's verified subject, or `UNAUTHENTICATED` when absent.
    pub fn resolve_identity<'c>(&self, caller: &'c Caller) -> DomainResult<&'c str> {
        caller
            .subject
            .as_deref()
            .ok_or(DomainError::Unauthenticated)
    }

    /// Look up the registered user for a subject.
    ///
    /// Zero matches is `USER_NOT_FOUND` (signed in but not yet registered);
    /// more than one match means the uniqueness index failed and surfaces as
    /// `NOT_UNIQUE`.
    pub async fn resolve_user(&self, subject: &str) -> DomainResult<User> {
        self.lookup_user(subject)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::User, subject))
    }

    /// Nullable lookup used by the registration path: an unregistered
    /// subject is not an error here.
    pub async fn lookup_user(&self, subject: &str) -> DomainResult<Option<User>> {
        let mut matches = self.users.find_by_subject(subject).await?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches.remove(0))),
            n => Err(DomainError::not_unique(format!(
                "{n} users mapped to one identity subject"
            ))),
        }
    }

    /// Resolve identity, then the user record, merging both error channels.
    pub async fn resolve_current_user(&self, caller: &Caller) -> DomainResult<User> {
        let subject = self.resolve_identity(caller)?;
        self.resolve_user(subject).await
    }

    /// Registration path, invoked once per sign-in session.
    ///
    /// Inserts a new user for an unknown subject; patches the stored record
    /// only when the candidate profile differs from it. Returns the user's
    /// id either way.
    #[instrument(skip(self, caller, profile))]
    pub async fn upsert_user(&self, caller: &Caller, profile: UserProfile) -> DomainResult<UserId> {
        let subject = self.resolve_identity(caller)?;
        match self.lookup_user(subject).await? {
            Some(existing) => {
                if !profile.matches(&existing) {
                    self.users.update_profile(existing.id, &profile).await?;
                    debug!(user_id = %existing.id, "User profile patched on sign-in");
                }
                Ok(existing.id)
            }
            None => {
                let user = User {
                    id: UserId::new(),
                    subject: subject.to_string(),
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    avatar_url: profile.avatar_url,
                    role: UserRole::User,
                    created_at: Utc::now(),
                };
                let id = self.users.insert(&user).await?;
                debug!(user_id = %id, "User registered on first sign-in");
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_identity_requires_subject() {
        // resolve_identity is synchronous, so it can be exercised without a
        // repository behind the resolver.
        let caller = Caller::anonymous();
        assert!(caller.subject.is_none());

        let caller = Caller::with_subject("auth0|123");
        assert_eq!(caller.subject.as_deref(), Some("auth0|123"));
    }
}
