//! Finalized-project repository backed by the in-process document store.

use crate::store::DocumentCollection;
use async_trait::async_trait;
use chrono::Utc;
use hackhub_application::services::{FinalizedProjectPatch, FinalizedProjectRepositoryPort};
use hackhub_domain::comment::Comment;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::finalized::{AssignedUser, FinalizedProject, InterestedUser};
use hackhub_domain::identifiers::{FinalizedProjectId, HackathonEventId};
use tracing::{debug, instrument};

pub struct MemoryFinalizedProjectRepository {
    collection: DocumentCollection,
}

impl MemoryFinalizedProjectRepository {
    pub fn new() -> Self {
        Self {
            collection: DocumentCollection::new("finalized_projects"),
        }
    }

    fn decode(&self, id: FinalizedProjectId) -> DomainResult<Option<FinalizedProject>> {
        match self.collection.get(id.into_uuid()) {
            Some(body) => Ok(Some(self.collection.decode(id.into_uuid(), body)?)),
            None => Ok(None),
        }
    }

    /// Apply a mutation to the stored document under the store's write lock.
    fn mutate(
        &self,
        id: FinalizedProjectId,
        f: impl FnOnce(&mut FinalizedProject),
    ) -> DomainResult<()> {
        if self.collection.update(id.into_uuid(), f)? {
            Ok(())
        } else {
            Err(DomainError::not_found(EntityKind::FinalizedProject, id))
        }
    }

    /// Raw access for seeding and corrupting documents in tests.
    pub fn collection(&self) -> &DocumentCollection {
        &self.collection
    }
}

impl Default for MemoryFinalizedProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FinalizedProjectRepositoryPort for MemoryFinalizedProjectRepository {
    #[instrument(skip(self, project), fields(finalized_project_id = %project.id))]
    async fn insert(&self, project: &FinalizedProject) -> DomainResult<FinalizedProjectId> {
        let body = self.collection.encode(project)?;
        self.collection.insert(project.id.into_uuid(), body)?;
        debug!("Finalized project document inserted");
        Ok(project.id)
    }

    async fn get_by_id(&self, id: FinalizedProjectId) -> DomainResult<Option<FinalizedProject>> {
        self.decode(id)
    }

    async fn list_by_event(
        &self,
        event_id: HackathonEventId,
    ) -> DomainResult<Vec<FinalizedProject>> {
        let event_tag = event_id.to_string();
        let mut projects = Vec::new();
        for body in self.collection.all() {
            if body.get("hackathon_event_id").and_then(|v| v.as_str()) != Some(event_tag.as_str())
            {
                continue;
            }
            let id = body
                .get("id")
                .and_then(|v| v.as_str())
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(uuid::Uuid::nil);
            projects.push(self.collection.decode(id, body)?);
        }
        Ok(projects)
    }

    async fn update_fields(
        &self,
        id: FinalizedProjectId,
        patch: &FinalizedProjectPatch,
    ) -> DomainResult<()> {
        self.mutate(id, |project| {
            if let Some(title) = &patch.title {
                project.title = title.clone();
            }
            if let Some(description) = &patch.description {
                project.description = description.clone();
            }
            project.updated_at = patch.updated_at;
        })
    }

    async fn replace_comments(
        &self,
        id: FinalizedProjectId,
        comments: &[Comment],
    ) -> DomainResult<()> {
        self.mutate(id, |project| {
            project.comments = comments.to_vec();
            project.updated_at = Utc::now();
        })
    }

    async fn replace_interested(
        &self,
        id: FinalizedProjectId,
        interested: &[InterestedUser],
    ) -> DomainResult<()> {
        self.mutate(id, |project| {
            project.interested_users = interested.to_vec();
            project.updated_at = Utc::now();
        })
    }

    async fn replace_assigned(
        &self,
        id: FinalizedProjectId,
        assigned: &[AssignedUser],
    ) -> DomainResult<()> {
        self.mutate(id, |project| {
            project.assigned_users = assigned.to_vec();
            project.updated_at = Utc::now();
        })
    }

    async fn delete(&self, id: FinalizedProjectId) -> DomainResult<bool> {
        let removed = self.collection.remove(id.into_uuid());
        if removed {
            debug!(finalized_project_id = %id, "Finalized project document deleted");
        }
        Ok(removed)
    }
}
