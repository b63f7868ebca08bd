//! hirepipe - terminal dashboard for a recruiting pipeline
//!
//! The library exposes the domain model, directory loaders and the
//! scheduling wizard state machine so they can be exercised without a
//! terminal.

pub mod config;
pub mod directory;
pub mod scheduling;
pub mod types;
