//! Application layer: the deletion pipeline and the services built on it.
//!
//! # Modules
//!
//! - [`pipeline`] - Generator, fan-out and fan-in stages of the deletion pipeline
//! - [`services`] - Service orchestration consumed by transport and CLI layers

pub mod pipeline;
pub mod services;
