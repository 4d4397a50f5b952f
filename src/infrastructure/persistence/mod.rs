mod json_file_cache;

pub use json_file_cache::JsonFileCache;
