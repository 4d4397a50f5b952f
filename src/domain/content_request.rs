use serde::{Deserialize, Serialize};

/// A single source document the remote service should draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Text,
    Youtube,
    Website,
    Pdf,
}

/// The kind of artifact the remote service should produce. Everything
/// other than `Audio` comes back as a rich-text body; the value is
/// forwarded to the remote service unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputType {
    Audio,
    Text,
    Faq,
    StudyGuide,
    Timeline,
    BriefingDoc,
}

/// A content-generation request as submitted by the caller. Immutable once
/// accepted; its canonical serialization doubles as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub text: String,
    pub output_type: OutputType,
    /// Only meaningful for `OutputType::Text`; forwarded unchanged for
    /// every other output type.
    #[serde(default)]
    pub include_citations: bool,
}
