//! View context tags
//!
//! A view context identifies which admin tab is rendering a grid and therefore
//! which column schema is active.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::ConfigError;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ViewContext {
    /// Incoming childcare applications
    Admissions,
    /// Daily care timetables
    Timetables,
    /// Children placed in units and groups
    Placements,
    /// Outstanding fee debts
    Debts,
    /// Staff user roles
    Roles,
    /// Daily attendance markings
    Attendance,
}

impl ViewContext {
    /// Parse a tag as sent by the host router (e.g. `"admissions"`).
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        tag.trim()
            .parse::<Self>()
            .map_err(|_| ConfigError::UnknownContext(tag.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
