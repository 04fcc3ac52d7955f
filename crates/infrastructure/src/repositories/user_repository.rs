//! User repository backed by the in-process document store.

use crate::store::DocumentCollection;
use async_trait::async_trait;
use hackhub_application::identity::UserRepositoryPort;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::identifiers::UserId;
use hackhub_domain::user::{User, UserProfile};
use tracing::{debug, instrument};

pub struct MemoryUserRepository {
    collection: DocumentCollection,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            collection: DocumentCollection::new("users"),
        }
    }

    fn decode(&self, id: UserId) -> DomainResult<Option<User>> {
        match self.collection.get(id.into_uuid()) {
            Some(body) => Ok(Some(self.collection.decode(id.into_uuid(), body)?)),
            None => Ok(None),
        }
    }

    /// Raw access for seeding and corrupting documents in tests.
    pub fn collection(&self) -> &DocumentCollection {
        &self.collection
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepositoryPort for MemoryUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: &User) -> DomainResult<UserId> {
        let body = self.collection.encode(user)?;
        self.collection.insert(user.id.into_uuid(), body)?;
        debug!("User document inserted");
        Ok(user.id)
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.decode(id)
    }

    async fn get_many(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let mut users = Vec::with_capacity(ids.len());
        for &id in ids {
            if let Some(user) = self.decode(id)? {
                users.push(user);
            }
        }
        Ok(users)
    }

    async fn find_by_subject(&self, subject: &str) -> DomainResult<Vec<User>> {
        let mut matches = Vec::new();
        for body in self.collection.all() {
            // Match on the raw field first so one corrupt document elsewhere
            // in the collection cannot break an unrelated lookup.
            if body.get("subject").and_then(|s| s.as_str()) != Some(subject) {
                continue;
            }
            let id = body
                .get("id")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(uuid::Uuid::nil);
            matches.push(self.collection.decode(id, body)?);
        }
        Ok(matches)
    }

    async fn update_profile(&self, id: UserId, profile: &UserProfile) -> DomainResult<()> {
        let found = self.collection.update(id.into_uuid(), |user: &mut User| {
            user.first_name = profile.first_name.clone();
            user.last_name = profile.last_name.clone();
            user.avatar_url = profile.avatar_url.clone();
        })?;
        if !found {
            return Err(DomainError::not_found(EntityKind::User, id));
        }
        debug!(user_id = %id, "User profile replaced");
        Ok(())
    }
}
