//! The raw argument record supplied by the caller

use serde::{Deserialize, Deserializer, Serialize};

fn default_state() -> String {
    "present".to_string()
}

/// Task arguments as delivered, before validation.
///
/// `when` and `state` stay strings here so that out-of-domain values reach
/// [`crate::DesiredState::from_args`] and fail there with a typed error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleArgs {
    /// Banner body
    pub text: String,
    /// `before` or `after`
    pub when: String,
    /// `present` or `absent`
    #[serde(default = "default_state")]
    pub state: String,
    /// Append a `Server: <fqdn>` line
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub fqdn: bool,
    /// Check-mode marker an orchestrator may embed in the document
    #[serde(
        default,
        rename = "_ansible_check_mode",
        alias = "check_mode",
        deserialize_with = "deserialize_flag",
        skip_serializing
    )]
    pub check_mode: bool,
}

impl ModuleArgs {
    /// Arguments with `state` and `fqdn` at their defaults.
    pub fn new(text: impl Into<String>, when: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            when: when.into(),
            state: default_state(),
            fqdn: false,
            check_mode: false,
        }
    }
}

/// Accepts a native boolean or one of the usual string spellings.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(1) => Ok(true),
        Flag::Int(0) => Ok(false),
        Flag::Int(n) => Err(serde::de::Error::custom(format!(
            "{n} is not a valid boolean"
        ))),
        Flag::Text(s) => match s.to_lowercase().as_str() {
            "yes" | "y" | "true" | "t" | "on" | "1" => Ok(true),
            "no" | "n" | "false" | "f" | "off" | "0" => Ok(false),
            _ => Err(serde::de::Error::custom(format!(
                "{s:?} is not a valid boolean"
            ))),
        },
    }
}
