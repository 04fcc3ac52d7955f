//! Hackathon-event repository backed by the in-process document store.

use crate::store::DocumentCollection;
use async_trait::async_trait;
use hackhub_application::services::HackathonEventRepositoryPort;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::event::{HackathonEvent, HackathonPhase};
use hackhub_domain::identifiers::HackathonEventId;
use tracing::{debug, instrument};

pub struct MemoryHackathonEventRepository {
    collection: DocumentCollection,
}

impl MemoryHackathonEventRepository {
    pub fn new() -> Self {
        Self {
            collection: DocumentCollection::new("hackathon_events"),
        }
    }

    fn decode(&self, id: HackathonEventId) -> DomainResult<Option<HackathonEvent>> {
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

impl Default for MemoryHackathonEventRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HackathonEventRepositoryPort for MemoryHackathonEventRepository {
    #[instrument(skip(self, event), fields(hackathon_event_id = %event.id))]
    async fn insert(&self, event: &HackathonEvent) -> DomainResult<HackathonEventId> {
        let body = self.collection.encode(event)?;
        self.collection.insert(event.id.into_uuid(), body)?;
        debug!("Hackathon event document inserted");
        Ok(event.id)
    }

    async fn get_by_id(&self, id: HackathonEventId) -> DomainResult<Option<HackathonEvent>> {
        self.decode(id)
    }

    async fn latest(&self) -> DomainResult<Option<HackathonEvent>> {
        match self.collection.last() {
            Some(body) => {
                let id = body
                    .get("id")
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(uuid::Uuid::nil);
                Ok(Some(self.collection.decode(id, body)?))
            }
            None => Ok(None),
        }
    }

    async fn set_phase(&self, id: HackathonEventId, phase: HackathonPhase) -> DomainResult<()> {
        let found = self
            .collection
            .update(id.into_uuid(), |event: &mut HackathonEvent| {
                event.current_phase = phase;
            })?;
        if !found {
            return Err(DomainError::not_found(EntityKind::HackathonEvent, id));
        }
        debug!(hackathon_event_id = %id, phase = ?phase, "Hackathon phase stored");
        Ok(())
    }
}
