use serde::{Deserialize, Serialize};
use std::fmt;

/// API token entered by the user. Never validated locally.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Projects as returned by the service. Records are kept as raw JSON.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ProjectList(pub Vec<serde_json::Value>);

impl ProjectList {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ProjectList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[derive(Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}
