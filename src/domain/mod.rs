mod content_request;
mod fingerprint;
mod job_record;
mod status_snapshot;

pub use content_request::{ContentRequest, OutputType, Resource, ResourceKind};
pub use fingerprint::RequestFingerprint;
pub use job_record::JobRecord;
pub use status_snapshot::{StatusSnapshot, Terminality};
