//! Testing utilities for HackHub
//!
//! Fixtures with randomized realistic data and fluent builders for the
//! domain entities, shared by the unit and integration test suites.
//!
//! # Examples
//!
//! ```
//! use hackhub_testing::{builders::*, fixtures::*};
//!
//! let admin = test_admin();
//! let project = ProjectBuilder::new()
//!     .with_creator(admin.id)
//!     .with_title("Realtime leaderboard")
//!     .build();
//! assert!(project.is_created_by(admin.id));
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
