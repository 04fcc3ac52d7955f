//! Application state and dependency wiring.
//!
//! The state carries the four application services, each wired to the
//! in-process document store. Handlers reach them through Axum's state
//! extraction.

use crate::config::ApiConfig;
use hackhub_application::{
    FinalizedProjectService, HackathonEventService, NoOpEventPublisher, ProjectService,
    RolePolicy, UserService,
};
use hackhub_infrastructure::{
    MemoryFinalizedProjectRepository, MemoryHackathonEventRepository, MemoryProjectRepository,
    MemoryUserRepository,
};
use std::sync::Arc;

pub type RestUserService = UserService<MemoryUserRepository, NoOpEventPublisher>;
pub type RestProjectService =
    ProjectService<MemoryProjectRepository, MemoryUserRepository, RolePolicy, NoOpEventPublisher>;
pub type RestFinalizedService = FinalizedProjectService<
    MemoryFinalizedProjectRepository,
    MemoryUserRepository,
    RolePolicy,
    NoOpEventPublisher,
>;
pub type RestEventService = HackathonEventService<
    MemoryHackathonEventRepository,
    MemoryUserRepository,
    RolePolicy,
    NoOpEventPublisher,
>;

/// Application state shared across all requests.
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// User store, also the identity lookup for every other service.
    /// Exposed so embedders can seed accounts directly.
    pub users: Arc<MemoryUserRepository>,

    pub user_service: Arc<RestUserService>,
    pub project_service: Arc<RestProjectService>,
    pub finalized_service: Arc<RestFinalizedService>,
    pub event_service: Arc<RestEventService>,
}

impl AppState {
    /// Create application state backed by fresh in-memory repositories.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_repositories(
            config,
            Arc::new(MemoryUserRepository::new()),
            Arc::new(MemoryProjectRepository::new()),
            Arc::new(MemoryFinalizedProjectRepository::new()),
            Arc::new(MemoryHackathonEventRepository::new()),
        )
    }

    /// Create application state over existing repositories.
    pub fn with_repositories(
        config: ApiConfig,
        users: Arc<MemoryUserRepository>,
        projects: Arc<MemoryProjectRepository>,
        finalized: Arc<MemoryFinalizedProjectRepository>,
        events: Arc<MemoryHackathonEventRepository>,
    ) -> Self {
        let policy = Arc::new(RolePolicy);
        let publisher = Arc::new(NoOpEventPublisher);

        Self {
            config: Arc::new(config),
            user_service: Arc::new(UserService::new(
                Arc::clone(&users),
                Arc::clone(&publisher),
            )),
            project_service: Arc::new(ProjectService::new(
                projects,
                Arc::clone(&users),
                Arc::clone(&policy),
                Arc::clone(&publisher),
            )),
            finalized_service: Arc::new(FinalizedProjectService::new(
                finalized,
                Arc::clone(&users),
                Arc::clone(&policy),
                Arc::clone(&publisher),
            )),
            event_service: Arc::new(HackathonEventService::new(
                events,
                Arc::clone(&users),
                policy,
                publisher,
            )),
            users,
        }
    }
}
