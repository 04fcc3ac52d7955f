//! Scenario tests for the user, project and hackathon-event services.

mod common;

use common::Harness;
use hackhub_application::identity::{Caller, UserRepositoryPort};
use hackhub_application::validation::{
    CommentRequest, CreateEventRequest, CreateProjectRequest, SetPhaseRequest,
    UpdateProjectRequest, UpsertUserRequest,
};
use hackhub_domain::event::HackathonPhase;
use hackhub_domain::identifiers::{CommentId, HackathonEventId, ProjectId, UserId};
use hackhub_domain::membership::Toggle;
use hackhub_domain::user::UserRole;
use hackhub_testing::fixtures::test_user;

fn upsert_request() -> UpsertUserRequest {
    UpsertUserRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        avatar_url: None,
    }
}

fn project_request(event_id: HackathonEventId) -> CreateProjectRequest {
    CreateProjectRequest {
        title: "Analytical Engine".to_string(),
        description: "A machine for general computation".to_string(),
        hackathon_event_id: event_id,
    }
}

#[tokio::test]
async fn test_upsert_registers_once_and_patches_after() {
    let h = Harness::new();
    let caller = Caller::with_subject("auth0|ada");

    let id = h
        .user_service
        .upsert_user(&caller, upsert_request())
        .await
        .unwrap();

    // Second sign-in with a changed profile patches the same record.
    let mut changed = upsert_request();
    changed.avatar_url = Some("https://example.com/ada.png".to_string());
    let id_again = h.user_service.upsert_user(&caller, changed).await.unwrap();
    assert_eq!(id, id_again);

    let user = h.user_service.get_current_user(&caller).await.unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/ada.png"));
    assert_eq!(user.role, UserRole::User);
    assert_eq!(h.users.find_by_subject("auth0|ada").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_anonymous_caller_is_unauthenticated() {
    let h = Harness::new();
    let err = h
        .user_service
        .get_current_user(&Caller::anonymous())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHENTICATED");

    let err = h
        .project_service
        .create(&Caller::anonymous(), project_request(HackathonEventId::new()))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_signed_in_but_unregistered_is_user_not_found() {
    let h = Harness::new();
    let caller = Caller::with_subject("auth0|stranger");

    let err = h.user_service.get_current_user(&caller).await.unwrap_err();
    assert_eq!(err.code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_broken_subject_index_is_not_unique() {
    let h = Harness::new();
    let mut first = test_user();
    first.subject = "auth0|dup".to_string();
    let mut second = test_user();
    second.subject = "auth0|dup".to_string();
    h.users.insert(&first).await.unwrap();
    h.users.insert(&second).await.unwrap();

    let caller = Caller::with_subject("auth0|dup");
    let err = h.user_service.get_current_user(&caller).await.unwrap_err();
    assert_eq!(err.code(), "NOT_UNIQUE");
}

#[tokio::test]
async fn test_unknown_user_lookup_is_not_found() {
    let h = Harness::new();
    let err = h
        .user_service
        .get_user_by_id(UserId::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_project_update_is_creator_only() {
    let h = Harness::new();
    let (_creator, creator_caller) = h.register(UserRole::User).await;
    let (_other, other_caller) = h.register(UserRole::User).await;
    let (_admin, admin_caller) = h.register(UserRole::Admin).await;

    let project = h
        .project_service
        .create(&creator_caller, project_request(HackathonEventId::new()))
        .await
        .unwrap();

    let patch = UpdateProjectRequest {
        title: Some("Difference Engine".to_string()),
        description: None,
    };
    let updated = h
        .project_service
        .update(&creator_caller, project.id, patch.clone())
        .await
        .unwrap();
    assert_eq!(updated.title, "Difference Engine");
    assert_eq!(updated.description, project.description);

    let err = h
        .project_service
        .update(&other_caller, project.id, patch.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");

    // Admin role grants no override on project ownership.
    let err = h
        .project_service
        .update(&admin_caller, project.id, patch)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_project_delete_and_missing_project() {
    let h = Harness::new();
    let (_creator, caller) = h.register(UserRole::User).await;

    let project = h
        .project_service
        .create(&caller, project_request(HackathonEventId::new()))
        .await
        .unwrap();

    h.project_service.delete(&caller, project.id).await.unwrap();

    let err = h
        .project_service
        .delete(&caller, project.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "PROJECT_NOT_FOUND");

    let err = h
        .project_service
        .get_by_id(ProjectId::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "PROJECT_NOT_FOUND");
}

#[tokio::test]
async fn test_comment_lifecycle_and_two_principal_deletion() {
    let h = Harness::new();
    let (_creator, creator_caller) = h.register(UserRole::User).await;
    let (_author, author_caller) = h.register(UserRole::User).await;
    let (_bystander, bystander_caller) = h.register(UserRole::User).await;

    let project = h
        .project_service
        .create(&creator_caller, project_request(HackathonEventId::new()))
        .await
        .unwrap();

    let text = CommentRequest {
        text: "Would love to help".to_string(),
    };
    let comment_id = h
        .project_service
        .add_comment(&author_caller, project.id, text)
        .await
        .unwrap();

    // Only the author can edit.
    let edit = CommentRequest {
        text: "Edited".to_string(),
    };
    let err = h
        .project_service
        .update_comment(&creator_caller, project.id, comment_id, edit.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");

    h.project_service
        .update_comment(&author_caller, project.id, comment_id, edit)
        .await
        .unwrap();

    let stored = h.project_service.get_by_id(project.id).await.unwrap();
    assert_eq!(stored.comments[0].text, "Edited");

    // A bystander cannot delete; the project creator can.
    let err = h
        .project_service
        .delete_comment(&bystander_caller, project.id, comment_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");

    h.project_service
        .delete_comment(&creator_caller, project.id, comment_id)
        .await
        .unwrap();

    let err = h
        .project_service
        .delete_comment(&creator_caller, project.id, comment_id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_project_upvote_toggles_and_removal_is_idempotent() {
    let h = Harness::new();
    let (_creator, creator_caller) = h.register(UserRole::User).await;
    let (voter, voter_caller) = h.register(UserRole::User).await;

    let project = h
        .project_service
        .create(&creator_caller, project_request(HackathonEventId::new()))
        .await
        .unwrap();

    assert_eq!(
        h.project_service.upvote(&voter_caller, project.id).await.unwrap(),
        Toggle::Added
    );
    assert_eq!(
        h.project_service.upvote(&voter_caller, project.id).await.unwrap(),
        Toggle::Removed
    );

    // Removal when no upvote exists is a successful no-op.
    h.project_service
        .remove_upvote(&voter_caller, project.id)
        .await
        .unwrap();

    h.project_service.upvote(&voter_caller, project.id).await.unwrap();
    h.project_service
        .remove_upvote(&voter_caller, project.id)
        .await
        .unwrap();

    let stored = h.project_service.get_by_id(project.id).await.unwrap();
    assert!(stored.upvotes.iter().all(|u| u.user_id != voter.id));
}

#[tokio::test]
async fn test_comment_upvote_toggle() {
    let h = Harness::new();
    let (_creator, creator_caller) = h.register(UserRole::User).await;
    let (_voter, voter_caller) = h.register(UserRole::User).await;

    let project = h
        .project_service
        .create(&creator_caller, project_request(HackathonEventId::new()))
        .await
        .unwrap();
    let comment_id = h
        .project_service
        .add_comment(
            &creator_caller,
            project.id,
            CommentRequest {
                text: "self-comment".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(
        h.project_service
            .upvote_comment(&voter_caller, project.id, comment_id)
            .await
            .unwrap(),
        Toggle::Added
    );
    h.project_service
        .remove_comment_upvote(&voter_caller, project.id, comment_id)
        .await
        .unwrap();

    let stored = h.project_service.get_by_id(project.id).await.unwrap();
    assert!(stored.comments[0].upvotes.is_empty());

    let err = h
        .project_service
        .upvote_comment(&voter_caller, project.id, CommentId::new())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "COMMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_board_lists_projects_with_visible_users() {
    let h = Harness::new();
    let (creator, creator_caller) = h.register(UserRole::User).await;
    let (voter, voter_caller) = h.register(UserRole::User).await;
    let event_id = HackathonEventId::new();

    let project = h
        .project_service
        .create(&creator_caller, project_request(event_id))
        .await
        .unwrap();
    h.project_service.upvote(&voter_caller, project.id).await.unwrap();
    h.project_service
        .add_comment(
            &voter_caller,
            project.id,
            CommentRequest {
                text: "count me once".to_string(),
            },
        )
        .await
        .unwrap();

    let board = h.project_service.list_by_event(event_id).await.unwrap();
    assert_eq!(board.projects.len(), 1);
    let mut visible: Vec<UserId> = board.visible_users.iter().map(|u| u.id).collect();
    visible.sort_by_key(|id| id.to_string());
    let mut expected = vec![creator.id, voter.id];
    expected.sort_by_key(|id| id.to_string());
    assert_eq!(visible, expected);

    // Unknown event yields an empty board, not an error.
    let board = h
        .project_service
        .list_by_event(HackathonEventId::new())
        .await
        .unwrap();
    assert!(board.projects.is_empty());
    assert!(board.visible_users.is_empty());
}

#[tokio::test]
async fn test_event_creation_is_admin_only() {
    let h = Harness::new();
    let (_member, member_caller) = h.register(UserRole::User).await;
    let (_admin, admin_caller) = h.register(UserRole::Admin).await;

    let request = CreateEventRequest {
        name: "Spring Hackathon".to_string(),
    };
    let err = h
        .event_service
        .create(&member_caller, request.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");

    let event = h.event_service.create(&admin_caller, request).await.unwrap();
    assert_eq!(event.current_phase, HackathonPhase::ProjectSubmission);

    let phase = SetPhaseRequest {
        phase: HackathonPhase::ProjectVoting,
    };
    let err = h
        .event_service
        .set_phase(&member_caller, event.id, phase.clone())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNAUTHORIZED");

    let updated = h
        .event_service
        .set_phase(&admin_caller, event.id, phase)
        .await
        .unwrap();
    assert_eq!(updated.current_phase, HackathonPhase::ProjectVoting);
}

#[tokio::test]
async fn test_latest_event_selection() {
    let h = Harness::new();
    let err = h.event_service.latest().await.unwrap_err();
    assert_eq!(err.code(), "HACKATHON_EVENT_NOT_FOUND");

    let (_admin, admin_caller) = h.register(UserRole::Admin).await;
    h.event_service
        .create(
            &admin_caller,
            CreateEventRequest {
                name: "First".to_string(),
            },
        )
        .await
        .unwrap();
    let second = h
        .event_service
        .create(
            &admin_caller,
            CreateEventRequest {
                name: "Second".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(h.event_service.latest().await.unwrap().id, second.id);
}

#[tokio::test]
async fn test_invalid_arguments_are_unexpected_error() {
    let h = Harness::new();
    let (_user, caller) = h.register(UserRole::User).await;

    let err = h
        .project_service
        .create(
            &caller,
            CreateProjectRequest {
                title: String::new(),
                description: "d".to_string(),
                hackathon_event_id: HackathonEventId::new(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "UNEXPECTED_ERROR");
    assert!(err.to_string().contains("title"));
}
