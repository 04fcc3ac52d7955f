//! Project repository backed by the in-process document store.

use crate::store::DocumentCollection;
use async_trait::async_trait;
use chrono::Utc;
use hackhub_application::services::{ProjectPatch, ProjectRepositoryPort};
use hackhub_domain::comment::Comment;
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::identifiers::{HackathonEventId, ProjectId};
use hackhub_domain::membership::Upvote;
use hackhub_domain::project::Project;
use tracing::{debug, instrument};

pub struct MemoryProjectRepository {
    collection: DocumentCollection,
}

impl MemoryProjectRepository {
    pub fn new() -> Self {
        Self {
            collection: DocumentCollection::new("projects"),
        }
    }

    fn decode(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        match self.collection.get(id.into_uuid()) {
            Some(body) => Ok(Some(self.collection.decode(id.into_uuid(), body)?)),
            None => Ok(None),
        }
    }

    /// Apply a mutation to the stored document under the store's write lock.
    fn mutate(&self, id: ProjectId, f: impl FnOnce(&mut Project)) -> DomainResult<()> {
        if self.collection.update(id.into_uuid(), f)? {
            Ok(())
        } else {
            Err(DomainError::not_found(EntityKind::Project, id))
        }
    }

    /// Raw access for seeding and corrupting documents in tests.
    pub fn collection(&self) -> &DocumentCollection {
        &self.collection
    }
}

impl Default for MemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepositoryPort for MemoryProjectRepository {
    #[instrument(skip(self, project), fields(project_id = %project.id))]
    async fn insert(&self, project: &Project) -> DomainResult<ProjectId> {
        let body = self.collection.encode(project)?;
        self.collection.insert(project.id.into_uuid(), body)?;
        debug!("Project document inserted");
        Ok(project.id)
    }

    async fn get_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>> {
        self.decode(id)
    }

    async fn list_by_event(&self, event_id: HackathonEventId) -> DomainResult<Vec<Project>> {
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

    async fn update_fields(&self, id: ProjectId, patch: &ProjectPatch) -> DomainResult<()> {
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

    async fn replace_comments(&self, id: ProjectId, comments: &[Comment]) -> DomainResult<()> {
        self.mutate(id, |project| {
            project.comments = comments.to_vec();
            project.updated_at = Utc::now();
        })
    }

    async fn replace_upvotes(&self, id: ProjectId, upvotes: &[Upvote]) -> DomainResult<()> {
        self.mutate(id, |project| {
            project.upvotes = upvotes.to_vec();
            project.updated_at = Utc::now();
        })
    }

    async fn delete(&self, id: ProjectId) -> DomainResult<bool> {
        let removed = self.collection.remove(id.into_uuid());
        if removed {
            debug!(project_id = %id, "Project document deleted");
        }
        Ok(removed)
    }
}
