//! Project service.
//!
//! Mutations on submitted projects and their embedded comments and upvotes.
//! Embedded lists are mutated in memory with the domain algorithms, then the
//! whole updated array is written back in one repository call.

use super::{EventPublisher, ServiceEvent};
use crate::authorization::{Action, AuthorizationPolicy};
use crate::identity::{Caller, IdentityResolver, UserRepositoryPort};
use crate::validation::{CommentRequest, CreateProjectRequest, UpdateProjectRequest, Validatable};
use crate::views::{self, ProjectBoard};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hackhub_domain::comment::{self, Comment};
use hackhub_domain::errors::{DomainError, DomainResult, EntityKind};
use hackhub_domain::identifiers::{CommentId, HackathonEventId, ProjectId};
use hackhub_domain::membership::{self, Toggle, Upvote};
use hackhub_domain::project::Project;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Partial field update for a project. Absent fields keep their stored value.
#[derive(Debug, Clone)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Project repository port.
///
/// Each method is one atomic call against the underlying document store.
/// The `replace_*` methods overwrite the named embedded array wholesale and
/// bump `updated_at`.
#[async_trait]
pub trait ProjectRepositoryPort: Send + Sync {
    async fn insert(&self, project: &Project) -> DomainResult<ProjectId>;
    async fn get_by_id(&self, id: ProjectId) -> DomainResult<Option<Project>>;
    async fn list_by_event(&self, event_id: HackathonEventId) -> DomainResult<Vec<Project>>;
    async fn update_fields(&self, id: ProjectId, patch: &ProjectPatch) -> DomainResult<()>;
    async fn replace_comments(&self, id: ProjectId, comments: &[Comment]) -> DomainResult<()>;
    async fn replace_upvotes(&self, id: ProjectId, upvotes: &[Upvote]) -> DomainResult<()>;
    /// Returns whether a document was actually deleted.
    async fn delete(&self, id: ProjectId) -> DomainResult<bool>;
}

/// Orchestrates every project operation.
pub struct ProjectService<R, U, P, E>
where
    R: ProjectRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    projects: Arc<R>,
    users: Arc<U>,
    identity: IdentityResolver<U>,
    policy: Arc<P>,
    events: Arc<E>,
}

impl<R, U, P, E> ProjectService<R, U, P, E>
where
    R: ProjectRepositoryPort,
    U: UserRepositoryPort,
    P: AuthorizationPolicy,
    E: EventPublisher,
{
    pub fn new(projects: Arc<R>, users: Arc<U>, policy: Arc<P>, events: Arc<E>) -> Self {
        Self {
            projects,
            identity: IdentityResolver::new(Arc::clone(&users)),
            users,
            policy,
            events,
        }
    }

    async fn load(&self, id: ProjectId) -> DomainResult<Project> {
        self.projects
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(EntityKind::Project, id))
    }

    /// Submit a new project. Any registered caller may create.
    #[instrument(skip(self, caller, request))]
    pub async fn create(
        &self,
        caller: &Caller,
        request: CreateProjectRequest,
    ) -> DomainResult<Project> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;

        let now = Utc::now();
        let project = Project {
            id: ProjectId::new(),
            hackathon_event_id: request.hackathon_event_id,
            creator_user_id: user.id,
            title: request.title,
            description: request.description,
            comments: vec![],
            upvotes: vec![],
            created_at: now,
            updated_at: now,
        };
        let id = self.projects.insert(&project).await?;

        info!(project_id = %id, "Project created");
        self.events
            .publish(ServiceEvent::ProjectCreated { project_id: id })
            .await?;
        Ok(project)
    }

    /// Patch title and/or description. Creator only.
    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: &Caller,
        id: ProjectId,
        request: UpdateProjectRequest,
    ) -> DomainResult<Project> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        self.policy
            .evaluate(&user, Action::UpdateProject(&project))
            .ensure_allowed()?;

        let patch = ProjectPatch {
            title: request.title,
            description: request.description,
            updated_at: Utc::now(),
        };
        self.projects.update_fields(id, &patch).await?;

        if let Some(title) = patch.title {
            project.title = title;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        project.updated_at = patch.updated_at;

        info!(project_id = %id, "Project updated");
        self.events
            .publish(ServiceEvent::ProjectUpdated { project_id: id })
            .await?;
        Ok(project)
    }

    /// Delete a project and everything embedded in it. Creator only.
    #[instrument(skip(self, caller))]
    pub async fn delete(&self, caller: &Caller, id: ProjectId) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let project = self.load(id).await?;

        self.policy
            .evaluate(&user, Action::DeleteProject(&project))
            .ensure_allowed()?;

        if !self.projects.delete(id).await? {
            // Lost a race with another deletion.
            return Err(DomainError::not_found(EntityKind::Project, id));
        }

        info!(project_id = %id, "Project deleted");
        self.events
            .publish(ServiceEvent::ProjectDeleted { project_id: id })
            .await?;
        Ok(())
    }

    /// Append a comment to the project and return the fresh comment id.
    #[instrument(skip(self, caller, request))]
    pub async fn add_comment(
        &self,
        caller: &Caller,
        id: ProjectId,
        request: CommentRequest,
    ) -> DomainResult<CommentId> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let comment_id = comment::append(&mut project.comments, user.id, request.text, Utc::now());
        self.projects.replace_comments(id, &project.comments).await?;

        debug!(project_id = %id, comment_id = %comment_id, "Comment added");
        self.events
            .publish(ServiceEvent::ProjectCommentAdded {
                project_id: id,
                comment_id,
            })
            .await?;
        Ok(comment_id)
    }

    /// Replace a comment's text. Author only; author and timestamps are kept.
    #[instrument(skip(self, caller, request))]
    pub async fn update_comment(
        &self,
        caller: &Caller,
        id: ProjectId,
        comment_id: CommentId,
        request: CommentRequest,
    ) -> DomainResult<()> {
        request.validate_all().ensure_valid()?;
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let target = comment::find(&project.comments, comment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Comment, comment_id))?;
        self.policy
            .evaluate(&user, Action::UpdateComment(target))
            .ensure_allowed()?;

        comment::update_text(&mut project.comments, comment_id, request.text)?;
        self.projects.replace_comments(id, &project.comments).await
    }

    /// Delete a comment. Comment author or project creator.
    #[instrument(skip(self, caller))]
    pub async fn delete_comment(
        &self,
        caller: &Caller,
        id: ProjectId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let target = comment::find(&project.comments, comment_id)
            .ok_or_else(|| DomainError::not_found(EntityKind::Comment, comment_id))?;
        self.policy
            .evaluate(
                &user,
                Action::DeleteProjectComment {
                    project: &project,
                    comment: target,
                },
            )
            .ensure_allowed()?;

        comment::remove(&mut project.comments, comment_id)?;
        self.projects.replace_comments(id, &project.comments).await?;

        debug!(project_id = %id, comment_id = %comment_id, "Comment deleted");
        self.events
            .publish(ServiceEvent::ProjectCommentDeleted {
                project_id: id,
                comment_id,
            })
            .await?;
        Ok(())
    }

    /// Strict upvote flip on the project.
    #[instrument(skip(self, caller))]
    pub async fn upvote(&self, caller: &Caller, id: ProjectId) -> DomainResult<Toggle> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let outcome = membership::toggle(&mut project.upvotes, user.id, Utc::now());
        self.projects.replace_upvotes(id, &project.upvotes).await?;
        Ok(outcome)
    }

    /// Idempotent upvote removal: succeeds even when no upvote exists.
    #[instrument(skip(self, caller))]
    pub async fn remove_upvote(&self, caller: &Caller, id: ProjectId) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        if membership::remove_if_present(&mut project.upvotes, user.id) {
            self.projects.replace_upvotes(id, &project.upvotes).await?;
        }
        Ok(())
    }

    /// Strict upvote flip on one comment of the project.
    #[instrument(skip(self, caller))]
    pub async fn upvote_comment(
        &self,
        caller: &Caller,
        id: ProjectId,
        comment_id: CommentId,
    ) -> DomainResult<Toggle> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        let outcome = comment::toggle_upvote(&mut project.comments, comment_id, user.id, Utc::now())?;
        self.projects.replace_comments(id, &project.comments).await?;
        Ok(outcome)
    }

    /// Idempotent removal of the caller's upvote from one comment.
    #[instrument(skip(self, caller))]
    pub async fn remove_comment_upvote(
        &self,
        caller: &Caller,
        id: ProjectId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        let user = self.identity.resolve_current_user(caller).await?;
        let mut project = self.load(id).await?;

        if comment::remove_upvote(&mut project.comments, comment_id, user.id)? {
            self.projects.replace_comments(id, &project.comments).await?;
        }
        Ok(())
    }

    /// Fetch one project by id.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProjectId) -> DomainResult<Project> {
        self.load(id).await
    }

    /// All projects of an event plus every user visible on the board.
    ///
    /// Needs no caller: an unknown event yields an empty board, not an error.
    #[instrument(skip(self))]
    pub async fn list_by_event(&self, event_id: HackathonEventId) -> DomainResult<ProjectBoard> {
        let projects = self.projects.list_by_event(event_id).await?;
        let ids = views::project_user_ids(&projects);
        let visible_users = self.users.get_many(&ids).await?;
        Ok(ProjectBoard {
            projects,
            visible_users,
        })
    }
}
