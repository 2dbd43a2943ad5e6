//! Business logic services for the application layer.

pub mod deletion_service;

pub use deletion_service::{DEFAULT_WORKERS, DeletionService};
