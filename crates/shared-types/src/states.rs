//! The fixed state and year domain covered by the dashboard.

use crate::errors::DashboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Years present in the generated datasets
pub const YEARS: [i32; 6] = [2019, 2020, 2021, 2022, 2023, 2024];

/// States covered by the dashboard.
///
/// Variants are declared in display-name order so that the derived `Ord`
/// matches the alphabetical grouping order used for summaries and charts.
/// The discriminant doubles as the stable integer id used to seed sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UsState {
    Arizona,
    California,
    Colorado,
    Florida,
    Georgia,
    Illinois,
    Iowa,
    Kansas,
    Minnesota,
    Nevada,
    #[serde(rename = "New Mexico")]
    NewMexico,
    #[serde(rename = "North Carolina")]
    NorthCarolina,
    #[serde(rename = "North Dakota")]
    NorthDakota,
    Oklahoma,
    Texas,
}

impl UsState {
    pub const ALL: [UsState; 15] = [
        UsState::Arizona,
        UsState::California,
        UsState::Colorado,
        UsState::Florida,
        UsState::Georgia,
        UsState::Illinois,
        UsState::Iowa,
        UsState::Kansas,
        UsState::Minnesota,
        UsState::Nevada,
        UsState::NewMexico,
        UsState::NorthCarolina,
        UsState::NorthDakota,
        UsState::Oklahoma,
        UsState::Texas,
    ];

    /// Stable integer id
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            UsState::Arizona => "Arizona",
            UsState::California => "California",
            UsState::Colorado => "Colorado",
            UsState::Florida => "Florida",
            UsState::Georgia => "Georgia",
            UsState::Illinois => "Illinois",
            UsState::Iowa => "Iowa",
            UsState::Kansas => "Kansas",
            UsState::Minnesota => "Minnesota",
            UsState::Nevada => "Nevada",
            UsState::NewMexico => "New Mexico",
            UsState::NorthCarolina => "North Carolina",
            UsState::NorthDakota => "North Dakota",
            UsState::Oklahoma => "Oklahoma",
            UsState::Texas => "Texas",
        }
    }

    /// Lowercase, dash-separated form used in layer ids
    pub fn slug(self) -> String {
        self.name().to_lowercase().replace(' ', "-")
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|state| state.name() == name)
    }
}

impl fmt::Display for UsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UsState {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DashboardError::InvalidSelection {
            message: format!("unknown state `{s}`"),
        })
    }
}
