use std::sync::Arc;

use crate::application::services::DeletionService;
use crate::domain::repositories::UrlRepository;

/// Shared state handed to request handlers.
#[derive(Clone)]
pub struct AppState {
    pub deletion_service: Arc<DeletionService<dyn UrlRepository>>,
}

impl AppState {
    pub fn new(deletion_service: DeletionService<dyn UrlRepository>) -> Self {
        Self {
            deletion_service: Arc::new(deletion_service),
        }
    }
}
