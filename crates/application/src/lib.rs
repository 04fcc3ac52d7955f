//! Application layer for HackHub
//!
//! This crate orchestrates the domain mutation/query operations: it resolves
//! the caller's identity, runs every guarded mutation through a single
//! authorization gate, applies the embedded-collection algorithms from the
//! domain crate, and persists through repository ports implemented by the
//! infrastructure layer.
//!
//! ## Modules
//!
//! - `identity` - maps an external authenticated subject to a user record
//! - `authorization` - the `(caller, action) -> allow/deny` policy gate
//! - `services` - aggregate services exposing every RPC operation
//! - `validation` - argument-object schema validation
//! - `views` - composite read views (`{items, visible_users}`)

pub mod authorization;
pub mod identity;
pub mod services;
pub mod validation;
pub mod views;

pub use authorization::{AccessDecision, Action, AuthorizationPolicy, RolePolicy};
pub use identity::{Caller, IdentityResolver, UserRepositoryPort};
pub use services::{
    EventPublisher, FinalizedProjectPatch, FinalizedProjectRepositoryPort,
    FinalizedProjectService, HackathonEventRepositoryPort, HackathonEventService,
    NoOpEventPublisher, ProjectPatch, ProjectRepositoryPort, ProjectService, ServiceEvent,
    UserService,
};
pub use validation::{Validatable, ValidationResult};
pub use views::{FinalizedBoard, ProjectBoard};
