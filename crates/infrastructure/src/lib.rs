//! Infrastructure layer for HackHub
//!
//! Concrete implementations of the application layer's repository ports,
//! backed by an in-process JSON document store. Documents are held as raw
//! JSON and validated against the domain schema on every read; embedded
//! sub-entity lists are written back wholesale, matching the transactional
//! granularity of the document store this process fronts.

pub mod repositories;
pub mod store;

pub use repositories::{
    MemoryFinalizedProjectRepository, MemoryHackathonEventRepository, MemoryProjectRepository,
    MemoryUserRepository,
};
pub use store::DocumentCollection;
