mod autocontent_client;

pub use autocontent_client::AutoContentClient;
