//! Fixtures generating domain entities with realistic randomized data.

use chrono::Utc;
use fake::{
    faker::company::en::Buzzword,
    faker::lorem::en::{Paragraph, Sentence},
    faker::name::en::{FirstName, LastName},
    Fake,
};
use hackhub_domain::comment::Comment;
use hackhub_domain::event::{HackathonEvent, HackathonPhase};
use hackhub_domain::finalized::FinalizedProject;
use hackhub_domain::identifiers::{
    CommentId, FinalizedProjectId, HackathonEventId, ProjectId, UserId,
};
use hackhub_domain::project::Project;
use hackhub_domain::user::{User, UserRole};

/// A random identity-provider subject string.
pub fn test_subject() -> String {
    format!("auth0|{}", uuid::Uuid::new_v4().simple())
}

/// Create a test user with the default participant role.
pub fn test_user() -> User {
    test_user_with_role(UserRole::User)
}

/// Create a test user with a specific role.
pub fn test_user_with_role(role: UserRole) -> User {
    User {
        id: UserId::new(),
        subject: test_subject(),
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        avatar_url: None,
        role,
        created_at: Utc::now(),
    }
}

/// Create a test administrator.
pub fn test_admin() -> User {
    test_user_with_role(UserRole::Admin)
}

/// Create a test hackathon event in the submission phase.
pub fn test_event() -> HackathonEvent {
    test_event_in_phase(HackathonPhase::ProjectSubmission)
}

/// Create a test hackathon event in a specific phase.
pub fn test_event_in_phase(phase: HackathonPhase) -> HackathonEvent {
    HackathonEvent {
        id: HackathonEventId::new(),
        name: format!("{} Hackathon", Buzzword().fake::<&str>()),
        current_phase: phase,
        created_at: Utc::now(),
    }
}

/// Create a test project submitted by `creator` to `event_id`.
pub fn test_project(event_id: HackathonEventId, creator: UserId) -> Project {
    let now = Utc::now();
    Project {
        id: ProjectId::new(),
        hackathon_event_id: event_id,
        creator_user_id: creator,
        title: Sentence(2..5).fake(),
        description: Paragraph(1..3).fake(),
        comments: vec![],
        upvotes: vec![],
        created_at: now,
        updated_at: now,
    }
}

/// Create a test finalized project for `event_id`.
pub fn test_finalized_project(event_id: HackathonEventId) -> FinalizedProject {
    let now = Utc::now();
    FinalizedProject {
        id: FinalizedProjectId::new(),
        hackathon_event_id: event_id,
        title: Sentence(2..5).fake(),
        description: Paragraph(1..3).fake(),
        comments: vec![],
        interested_users: vec![],
        assigned_users: vec![],
        created_at: now,
        updated_at: now,
    }
}

/// Create a test comment authored by `author`.
pub fn test_comment(author: UserId) -> Comment {
    Comment {
        id: CommentId::new(),
        author_id: author,
        created_at: Utc::now(),
        text: Sentence(3..8).fake(),
        upvotes: vec![],
    }
}
