use serde::{Deserialize, Serialize};

use super::ContentRequest;

/// Canonical, order-independent serialization of a request, used as the
/// memoization key. Object keys are sorted lexicographically at every
/// nesting level, so two logically equal requests always map to the same
/// cache entry regardless of how their fields were ordered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestFingerprint(String);

impl RequestFingerprint {
    pub fn compute(request: &ContentRequest) -> Result<Self, serde_json::Error> {
        // serde_json's Value maps are BTreeMap-backed, so round-tripping
        // through Value yields sorted keys.
        let value = serde_json::to_value(request)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
