//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (update intents, users, short URLs)
//! - [`repositories`] - Storage trait definitions implemented by the infrastructure layer
//!
//! The domain layer has no dependencies on infrastructure or transport code.

pub mod entities;
pub mod repositories;
