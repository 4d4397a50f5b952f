use std::sync::Arc;

use crate::application::ports::ContentClient;
use crate::application::services::{ContentService, Materializer};

pub struct AppState<C>
where
    C: ContentClient,
{
    pub content_service: Arc<ContentService<C>>,
    pub materializer: Arc<Materializer>,
}

impl<C> Clone for AppState<C>
where
    C: ContentClient,
{
    fn clone(&self) -> Self {
        Self {
            content_service: Arc::clone(&self.content_service),
            materializer: Arc::clone(&self.materializer),
        }
    }
}
