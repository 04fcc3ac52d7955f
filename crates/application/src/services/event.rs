//! Hackathon-event service.
//!
//! Events are created and advanced by administrators; reads are open.

use super::{EventPublisher, ServiceEvent};
use crate::authorization::{Action, AuthorizationPolicy};
use crate::identity::{Caller, IdentityResolver, UserRepositoryPort};
use crate::validation::{CreateEventRequest, SetPhaseRequest, Validatable};
use async_trait::async_trait;
use chrono::Utc;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::event::{HackathonEvent, HackathonPhase};
use hackhub_domain::identifiers::HackathonEventId;
use std::sync::Arc;
use tracing::{info, instrument};

/// Hackathon-event repository port.
#[async_trait]
pub trait HackathonEventRepositoryPort: Send + Sync {
    async fn insert(&self, event: &HackathonEvent) -> DomainResult<HackathonEventId>;
    async fn get_by_id(&self, id: HackathonEventId) -> DomainResult<Option<HackathonEvent>>;
    /// The most recently created event, if any exist.
    async fn latest(&self) -> DomainResult<Option<HackathonEvent>>;
    async fn set_phase(&self, id: HackathonEventId, phase: HackathonPhase) -> DomainResult<()>;
}

/// Orchestrates hackathon-event operations.
pub struct HackathonEventService<R, U, P, E>
where
    R: HackathonEventRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    repository: Arc<R>,
    identity: IdentityResolver<U>,
    policy: Arc<P>,
    events: Arc<E>,
}

impl<R, U, P, E> HackathonEventService<R, U, P, E>
where
    R: HackathonEventRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    pub fn new(repository: Arc<R>, users: Arc<U>, policy: Arc<P>, events: Arc<E>) -> Self {
        Self {
            repository,
            identity: IdentityResolver::new(users),
            policy,
            events,
        }
    }

    /// Open a new hackathon event in the submission phase. Admin only.
    #[instrument(skip(self, caller, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateEventRequest,
    ) -> DomainResult<HackathonEvent> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&user, Action::CreateEvent)
            .ensure_allowed()?;

        let event = HackathonEvent {
            id: HackathonEventId::new(),
            name: request.name,
            current_phase: HackathonPhase::ProjectSubmission,
            created_at: Utc::now(),
        };
        let id = self.repository.insert(&event).await?;

        info!(hackathon_event_id = %id, "Hackathon event created");
        self.events
            .publish(ServiceEvent::HackathonEventCreated {
                hackathon_event_id: id,
            })
            .await?;
        Ok(event)
    }

    /// Move an event to the given phase. Admin only.
    ///
    /// Any target phase is accepted; the linear progression drives what the
    /// UI exposes, it is not enforced here.
    #[instrument(skip(self, caller, request))]
    pub async fn set_phase(
        &self,
        caller: &Caller,
        id: HackathonEventId,
        request: SetPhaseRequest,
    ) -> DomainResult<HackathonEvent> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        self.policy
            .evaluate(&user, Action::SetEventPhase)
            .ensure_allowed()?;

        let mut event = self.get_by_id(id).await?;
        self.repository.set_phase(id, request.phase).await?;
        event.current_phase = request.phase;

        info!(hackathon_event_id = %id, phase = ?request.phase, "Hackathon phase changed");
        self.events
            .publish(ServiceEvent::HackathonPhaseChanged {
                hackathon_event_id: id,
                phase: format!("{:?}", request.phase),
            })
            .await?;
        Ok(event)
    }

    /// Fetch one event by id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: HackathonEventId) -> DomainResult<HackathonEvent> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::HackathonEvent, id))
    }

    /// The most recently created event.
    ///
    /// Creation order stands in for "current event" selection; the phase of
    /// the returned event plays no part in the choice. An empty store is
    /// `HACKATHON_EVENT_NOT_FOUND`.
    #[instrument(skip(self))]
    pub async fn latest(&self) -> DomainResult<HackathonEvent> {
        self.repository
            .latest()
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::HackathonEvent, "latest"))
    }
}
