//! Data Transfer Objects for API requests.

pub mod delete_urls;

pub use delete_urls::DeleteUrlsRequest;
