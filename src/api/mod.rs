//! HTTP boundary for batch URL deletion.
//!
//! Routing and serving are left to the embedding application; this layer
//! only provides the handler, its request body and the user extractor.
//!
//! - [`dto`] - Request bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authenticated user extraction

pub mod dto;
pub mod handlers;
pub mod middleware;
