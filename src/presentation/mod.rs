pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{PollSettings, RemoteSettings, ServerSettings, Settings, StorageSettings};
pub use router::create_router;
pub use state::AppState;
