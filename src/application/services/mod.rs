mod content_service;
mod materializer;

pub use content_service::{ContentError, ContentService, PollPolicy};
pub use materializer::{ArtifactEntry, ArtifactLayout, MaterializeError, Materializer};
