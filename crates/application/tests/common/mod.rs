//! Shared harness wiring services to the in-memory repositories.

use hackhub_application::authorization::RolePolicy;
use hackhub_application::identity::{Caller, UserRepositoryPort};
use hackhub_application::services::{
    FinalizedProjectService, HackathonEventService, NoOpEventPublisher, ProjectService,
    UserService,
};
use hackhub_domain::user::{User, UserRole};
use hackhub_infrastructure::{
    MemoryFinalizedProjectRepository, MemoryHackathonEventRepository, MemoryProjectRepository,
    MemoryUserRepository,
};
use hackhub_testing::fixtures::test_user_with_role;
use std::sync::Arc;

pub type TestProjectService =
    ProjectService<MemoryProjectRepository, MemoryUserRepository, RolePolicy, NoOpEventPublisher>;
pub type TestFinalizedService = FinalizedProjectService<
    MemoryFinalizedProjectRepository,
    MemoryUserRepository,
    RolePolicy,
    NoOpEventPublisher,
>;
pub type TestEventService = HackathonEventService<
    MemoryHackathonEventRepository,
    MemoryUserRepository,
    RolePolicy,
    NoOpEventPublisher,
>;
pub type TestUserService = UserService<MemoryUserRepository, NoOpEventPublisher>;

pub struct Harness {
    pub users: Arc<MemoryUserRepository>,
    pub projects: Arc<MemoryProjectRepository>,
    pub finalized: Arc<MemoryFinalizedProjectRepository>,
    pub events: Arc<MemoryHackathonEventRepository>,
    pub project_service: TestProjectService,
    pub finalized_service: TestFinalizedService,
    pub event_service: TestEventService,
    pub user_service: TestUserService,
}

impl Harness {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUserRepository::new());
        let projects = Arc::new(MemoryProjectRepository::new());
        let finalized = Arc::new(MemoryFinalizedProjectRepository::new());
        let events = Arc::new(MemoryHackathonEventRepository::new());
        let policy = Arc::new(RolePolicy);
        let publisher = Arc::new(NoOpEventPublisher);

        Self {
            project_service: ProjectService::new(
                Arc::clone(&projects),
                Arc::clone(&users),
                Arc::clone(&policy),
                Arc::clone(&publisher),
            ),
            finalized_service: FinalizedProjectService::new(
                Arc::clone(&finalized),
                Arc::clone(&users),
                Arc::clone(&policy),
                Arc::clone(&publisher),
            ),
            event_service: HackathonEventService::new(
                Arc::clone(&events),
                Arc::clone(&users),
                Arc::clone(&policy),
                Arc::clone(&publisher),
            ),
            user_service: UserService::new(Arc::clone(&users), Arc::clone(&publisher)),
            users,
            projects,
            finalized,
            events,
        }
    }

    /// Store a registered user and return it with a caller for its subject.
    pub async fn register(&self, role: UserRole) -> (User, Caller) {
        let user = test_user_with_role(role);
        self.users.insert(&user).await.unwrap();
        let caller = Caller::with_subject(user.subject.clone());
        (user, caller)
    }
}
