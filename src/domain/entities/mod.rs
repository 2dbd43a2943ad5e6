//! Domain entities.

pub mod short_url;
pub mod update_intent;
pub mod user;

pub use short_url::ShortUrl;
pub use update_intent::UpdateIntent;
pub use user::UserId;
