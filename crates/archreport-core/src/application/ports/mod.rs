//! Traits the application needs the outside world to implement.
//!
//! Only driven ports exist; the CLI calls the services directly.

pub mod output;

pub use output::BookmarkStore;

#[cfg(test)]
pub use output::MockBookmarkStore;
