//! Result records handed back to the caller

use serde::{Deserialize, Serialize};

use crate::{Result, State};

/// Result of a successful reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Whether a write or removal happened (or would have, in check mode)
    pub changed: bool,
    /// The banner file that was targeted
    pub path: String,
    /// The requested presence
    pub state: State,
    /// Checksum of the composed content, for `present`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl Outcome {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of a failed invocation.
///
/// Once a failure is emitted no other result field is meaningful; `changed`
/// is always false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl Failure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            changed: false,
            msg: msg.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
