mod audio_fetcher;
mod content_client;
mod result_cache;
mod transcoder;

pub use audio_fetcher::{AudioFetcher, DownloadError};
pub use content_client::{ContentClient, ContentClientError, SubmissionReceipt};
pub use result_cache::{CacheError, ResultCache};
pub use transcoder::{TranscodeError, Transcoder};
