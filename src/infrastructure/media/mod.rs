mod ffmpeg_transcoder;
mod http_audio_fetcher;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use http_audio_fetcher::HttpAudioFetcher;
