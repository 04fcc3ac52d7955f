//! Repository implementations over the in-process document store.
//!
//! Every repository stores raw JSON bodies and decodes them against the
//! domain schema on read, so stored documents written by older versions of
//! the system (or corrupted out of band) surface through the normal error
//! taxonomy instead of failing loudly.

mod event_repository;
mod finalized_repository;
mod project_repository;
mod user_repository;

pub use event_repository::MemoryHackathonEventRepository;
pub use finalized_repository::MemoryFinalizedProjectRepository;
pub use project_repository::MemoryProjectRepository;
pub use user_repository::MemoryUserRepository;
