//! HTTP request handlers for API endpoints.

pub mod user_urls;

pub use user_urls::delete_user_urls_handler;
