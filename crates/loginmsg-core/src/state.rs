//! Banner selectors, presence and the validated desired state

use std::fmt;
use std::str::FromStr;

use loginmsg_fs::BannerFile;
use serde::{Deserialize, Serialize};

use crate::{Error, ModuleArgs, Result};

/// Which banner a task manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    /// Shown before login
    Before,
    /// Shown after login
    After,
}

impl When {
    /// Every selector, pre-login first.
    pub const ALL: [When; 2] = [When::Before, When::After];

    /// The banner file this selector manages.
    pub fn banner(&self) -> BannerFile {
        match self {
            When::Before => BannerFile::Issue,
            When::After => BannerFile::Motd,
        }
    }
}

impl FromStr for When {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "before" => Ok(When::Before),
            "after" => Ok(When::After),
            _ => Err(Error::InvalidSelector {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            When::Before => write!(f, "before"),
            When::After => write!(f, "after"),
        }
    }
}

/// Whether the banner should exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "present" => Ok(State::Present),
            "absent" => Ok(State::Absent),
            _ => Err(Error::InvalidPresence {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Present => write!(f, "present"),
            State::Absent => write!(f, "absent"),
        }
    }
}

/// A validated banner request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredState {
    pub selector: When,
    pub content: String,
    pub presence: State,
    pub include_host_identity: bool,
    /// Predict the outcome without touching the filesystem
    pub dry_run: bool,
}

impl DesiredState {
    /// Validate raw arguments.
    ///
    /// The selector is checked before the presence so that a record with both
    /// fields invalid always reports [`Error::InvalidSelector`].
    pub fn from_args(args: &ModuleArgs, check_mode: bool) -> Result<Self> {
        let selector: When = args.when.parse()?;
        let presence: State = args.state.parse()?;

        Ok(Self {
            selector,
            content: args.text.clone(),
            presence,
            include_host_identity: args.fqdn,
            dry_run: check_mode || args.check_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_map_to_distinct_banners() {
        assert_eq!(When::Before.banner(), BannerFile::Issue);
        assert_eq!(When::After.banner(), BannerFile::Motd);
    }

    #[test]
    fn all_selectors_parse_from_their_display() {
        for when in When::ALL {
            assert_eq!(when.to_string().parse::<When>().unwrap(), when);
        }
        assert_ne!(When::ALL[0].banner(), When::ALL[1].banner());
    }

    #[test]
    fn selector_parsing_is_exact() {
        assert_eq!("before".parse::<When>().unwrap(), When::Before);
        assert!(matches!(
            "Before".parse::<When>(),
            Err(Error::InvalidSelector { value }) if value == "Before"
        ));
        assert!("".parse::<When>().is_err());
    }

    #[test]
    fn presence_round_trips_through_display() {
        for state in [State::Present, State::Absent] {
            assert_eq!(state.to_string().parse::<State>().unwrap(), state);
        }
        assert!(matches!(
            "gone".parse::<State>(),
            Err(Error::InvalidPresence { .. })
        ));
    }

    #[test]
    fn selector_is_validated_before_presence() {
        let mut args = ModuleArgs::new("x", "sometime");
        args.state = "maybe".into();

        let err = DesiredState::from_args(&args, false).unwrap_err();
        assert!(matches!(err, Error::InvalidSelector { .. }));
    }

    #[test]
    fn document_check_mode_marker_enables_dry_run() {
        let mut args = ModuleArgs::new("x", "after");
        args.check_mode = true;

        let desired = DesiredState::from_args(&args, false).unwrap();
        assert!(desired.dry_run);
        assert_eq!(desired.presence, State::Present);
    }
}
