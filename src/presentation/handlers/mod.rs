mod content_status;
mod convert;
mod create_content;
mod download_audio;
mod health;
mod library;

pub use content_status::content_status_handler;
pub use convert::convert_to_mp3_handler;
pub use create_content::create_content_handler;
pub use download_audio::download_audio_handler;
pub use health::health_handler;
pub use library::{
    list_podcasts_handler, list_study_guides_handler, mp3_file_handler, podcast_file_handler,
    study_guide_handler,
};
