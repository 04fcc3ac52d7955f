//! User service.

use super::{EventPublisher, ServiceEvent};
use crate::identity::{Caller, IdentityResolver, UserRepositoryPort};
use crate::validation::{UpsertUserRequest, Validatable};
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::identifiers::UserId;
use hackhub_domain::user::{User, UserProfile};
use std::sync::Arc;
use tracing::{info, instrument};

/// User registration and lookups over the identity resolver.
pub struct UserService<U, E>
where
    U: UserRepositoryPort,
    E: EventPublisher,
{
    users: Arc<U>,
    identity: IdentityResolver<U>,
    events: Arc<E>,
}

impl<U, E> UserService<U, E>
where
    U: UserRepositoryPort,
    E: EventPublisher,
{
    pub fn new(users: Arc<U>, events: Arc<E>) -> Self {
        Self {
            identity: IdentityResolver::new(Arc::clone(&users)),
            users,
            events,
        }
    }

    /// Register the caller or patch their stored profile; run once per
    /// sign-in session.
    #[instrument(skip(self, caller, request))]
    pub async fn upsert_user(
        &self,
        caller: &Caller,
        request: UpsertUserRequest,
    ) -> DomainResult<UserId> {
        request.validate_all().ensure_valid()?;

        let subject = self.identity.resolve_identity(caller)?;
        let was_registered = self.identity.lookup_user(subject).await?.is_some();

        let profile = UserProfile {
            first_name: request.first_name,
            last_name: request.last_name,
            avatar_url: request.avatar_url,
        };
        let id = self.identity.upsert_user(caller, profile).await?;

        if !was_registered {
            info!(user_id = %id, "User registered");
            self.events
                .publish(ServiceEvent::UserRegistered { user_id: id })
                .await?;
        }
        Ok(id)
    }

    /// The caller's own user record; `USER_NOT_FOUND` when signed in but not
    /// yet registered.
    #[instrument(skip(self, caller))]
    pub async fn get_current_user(&self, caller: &Caller) -> DomainResult<User> {
        self.identity.resolve_current_user(caller).await
    }

    /// Fetch any user by id.
    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: UserId) -> DomainResult<User> {
        self.users
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::User, id))
    }
}
