mod settings;

pub use settings::{PollSettings, RemoteSettings, ServerSettings, Settings, StorageSettings};
