//! Domain layer for HackHub
//!
//! This crate contains the pure domain model of the hackathon coordination
//! service: entities, strongly-typed identifiers, the error taxonomy with its
//! transport envelope, and the algorithms that operate on embedded
//! sub-entity collections (comments, upvotes, interest and assignment
//! records).
//!
//! Nothing in this crate performs I/O. Persistence and identity resolution
//! live behind ports in the application layer.

pub mod comment;
pub mod errors;
pub mod event;
pub mod finalized;
pub mod identifiers;
pub mod membership;
pub mod project;
pub mod user;

pub use comment::Comment;
pub use errors::{DomainError, DomainResult, EntityKind, Envelope, ErrorBody};
pub use event::{HackathonEvent, HackathonPhase};
pub use finalized::{AssignedUser, FinalizedProject, InterestedUser};
pub use identifiers::{CommentId, FinalizedProjectId, HackathonEventId, ProjectId, UserId};
pub use membership::Upvote;
pub use project::Project;
pub use user::{User, UserRole};
