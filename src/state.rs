//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Application state cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
}

impl AppState {
    /// Builds state around an explicitly constructed store handle.
    pub fn new(link_repository: Arc<dyn LinkRepository>, generation_attempts: usize) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository, generation_attempts)),
        }
    }
}
