//! Fluent builders for constructing test entities.

use chrono::{DateTime, Utc};
use hackhub_domain::comment::Comment;
use hackhub_domain::event::{HackathonEvent, HackathonPhase};
use hackhub_domain::finalized::{AssignedUser, FinalizedProject, InterestedUser};
use hackhub_domain::identifiers::{
    CommentId, FinalizedProjectId, HackathonEventId, ProjectId, UserId,
};
use hackhub_domain::membership::{Membership, Upvote};
use hackhub_domain::project::Project;
use hackhub_domain::user::{User, UserRole};

use crate::fixtures::test_subject;

/// Builder for `User` test instances.
#[derive(Clone)]
pub struct UserBuilder {
    id: UserId,
    subject: String,
    first_name: String,
    last_name: String,
    avatar_url: Option<String>,
    role: UserRole,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            id: UserId::new(),
            subject: test_subject(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            avatar_url: None,
            role: UserRole::User,
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn admin(mut self) -> Self {
        self.role = UserRole::Admin;
        self
    }

    pub fn build(self) -> User {
        User {
            id: self.id,
            subject: self.subject,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar_url: self.avatar_url,
            role: self.role,
            created_at: Utc::now(),
        }
    }
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Project` test instances.
#[derive(Clone)]
pub struct ProjectBuilder {
    id: ProjectId,
    hackathon_event_id: HackathonEventId,
    creator_user_id: UserId,
    title: String,
    description: String,
    comments: Vec<Comment>,
    upvotes: Vec<Upvote>,
    created_at: DateTime<Utc>,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            id: ProjectId::new(),
            hackathon_event_id: HackathonEventId::new(),
            creator_user_id: UserId::new(),
            title: "Test Project".to_string(),
            description: "A project under test".to_string(),
            comments: vec![],
            upvotes: vec![],
            created_at: Utc::now(),
        }
    }

    pub fn with_id(mut self, id: ProjectId) -> Self {
        self.id = id;
        self
    }

    pub fn with_event(mut self, event_id: HackathonEventId) -> Self {
        self.hackathon_event_id = event_id;
        self
    }

    pub fn with_creator(mut self, creator: UserId) -> Self {
        self.creator_user_id = creator;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn upvoted_by(mut self, user_id: UserId) -> Self {
        self.upvotes.push(Upvote::joined(user_id, Utc::now()));
        self
    }

    pub fn build(self) -> Project {
        Project {
            id: self.id,
            hackathon_event_id: self.hackathon_event_id,
            creator_user_id: self.creator_user_id,
            title: self.title,
            description: self.description,
            comments: self.comments,
            upvotes: self.upvotes,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `FinalizedProject` test instances.
#[derive(Clone)]
pub struct FinalizedProjectBuilder {
    id: FinalizedProjectId,
    hackathon_event_id: HackathonEventId,
    title: String,
    description: String,
    comments: Vec<Comment>,
    interested_users: Vec<InterestedUser>,
    assigned_users: Vec<AssignedUser>,
}

impl FinalizedProjectBuilder {
    pub fn new() -> Self {
        Self {
            id: FinalizedProjectId::new(),
            hackathon_event_id: HackathonEventId::new(),
            title: "Finalized Project".to_string(),
            description: "A finalized project under test".to_string(),
            comments: vec![],
            interested_users: vec![],
            assigned_users: vec![],
        }
    }

    pub fn with_id(mut self, id: FinalizedProjectId) -> Self {
        self.id = id;
        self
    }

    pub fn with_event(mut self, event_id: HackathonEventId) -> Self {
        self.hackathon_event_id = event_id;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    pub fn with_interested(mut self, user_id: UserId) -> Self {
        self.interested_users
            .push(InterestedUser::joined(user_id, Utc::now()));
        self
    }

    pub fn with_assigned(mut self, user_id: UserId) -> Self {
        self.assigned_users
            .push(AssignedUser::joined(user_id, Utc::now()));
        self
    }

    pub fn build(self) -> FinalizedProject {
        let now = Utc::now();
        FinalizedProject {
            id: self.id,
            hackathon_event_id: self.hackathon_event_id,
            title: self.title,
            description: self.description,
            comments: self.comments,
            interested_users: self.interested_users,
            assigned_users: self.assigned_users,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for FinalizedProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `HackathonEvent` test instances.
#[derive(Clone)]
pub struct HackathonEventBuilder {
    id: HackathonEventId,
    name: String,
    current_phase: HackathonPhase,
}

impl HackathonEventBuilder {
    pub fn new() -> Self {
        Self {
            id: HackathonEventId::new(),
            name: "Test Hackathon".to_string(),
            current_phase: HackathonPhase::ProjectSubmission,
        }
    }

    pub fn with_id(mut self, id: HackathonEventId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn in_phase(mut self, phase: HackathonPhase) -> Self {
        self.current_phase = phase;
        self
    }

    pub fn build(self) -> HackathonEvent {
        HackathonEvent {
            id: self.id,
            name: self.name,
            current_phase: self.current_phase,
            created_at: Utc::now(),
        }
    }
}

impl Default for HackathonEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Comment` test instances.
#[derive(Clone)]
pub struct CommentBuilder {
    id: CommentId,
    author_id: UserId,
    text: String,
    upvotes: Vec<Upvote>,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: CommentId::new(),
            author_id: UserId::new(),
            text: "A test comment".to_string(),
            upvotes: vec![],
        }
    }

    pub fn with_author(mut self, author: UserId) -> Self {
        self.author_id = author;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn upvoted_by(mut self, user_id: UserId) -> Self {
        self.upvotes.push(Upvote::joined(user_id, Utc::now()));
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            author_id: self.author_id,
            created_at: Utc::now(),
            text: self.text,
            upvotes: self.upvotes,
        }
    }
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
