//! UI control state and the visibility it resolves to

use crate::errors::DashboardError;
use crate::states::UsState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the dropdown entry that clears the state filter
pub const ALL_STATES_LABEL: &str = "All";

/// Which family of map layers the buttons currently show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerMode {
    #[default]
    BothPlants,
    SolarOnly,
    WindOnly,
    SolarAccumulation,
    WindAccumulation,
}

impl LayerMode {
    pub const ALL: [LayerMode; 5] = [
        LayerMode::BothPlants,
        LayerMode::SolarOnly,
        LayerMode::WindOnly,
        LayerMode::SolarAccumulation,
        LayerMode::WindAccumulation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerMode::BothPlants => "both_plants",
            LayerMode::SolarOnly => "solar_only",
            LayerMode::WindOnly => "wind_only",
            LayerMode::SolarAccumulation => "solar_accumulation",
            LayerMode::WindAccumulation => "wind_accumulation",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            LayerMode::BothPlants => "Both Plants",
            LayerMode::SolarOnly => "Solar Plants Only",
            LayerMode::WindOnly => "Wind Plants Only",
            LayerMode::SolarAccumulation => "Solar Energy Accumulation",
            LayerMode::WindAccumulation => "Wind Energy Accumulation",
        }
    }
}

impl fmt::Display for LayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LayerMode {
    type Err = DashboardError;

    /// Accepts either the snake_case key or the button caption
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s || mode.label() == s)
            .ok_or_else(|| DashboardError::InvalidSelection {
                message: format!("unknown layer mode `{s}`"),
            })
    }
}

/// State dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StateFilter {
    #[default]
    All,
    State(UsState),
}

impl StateFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StateFilter::All => ALL_STATES_LABEL,
            StateFilter::State(state) => state.name(),
        }
    }

    pub fn state(&self) -> Option<UsState> {
        match self {
            StateFilter::All => None,
            StateFilter::State(state) => Some(*state),
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StateFilter {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == ALL_STATES_LABEL {
            return Ok(StateFilter::All);
        }
        s.parse::<UsState>().map(StateFilter::State)
    }
}

impl From<StateFilter> for String {
    fn from(filter: StateFilter) -> Self {
        filter.label().to_string()
    }
}

impl TryFrom<String> for StateFilter {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<UsState> for StateFilter {
    fn from(state: UsState) -> Self {
        StateFilter::State(state)
    }
}

/// The current UI control state, passed by value into the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VisibilitySelection {
    pub state: StateFilter,
    pub mode: LayerMode,
}

impl VisibilitySelection {
    pub fn new(state: impl Into<StateFilter>, mode: LayerMode) -> Self {
        Self {
            state: state.into(),
            mode,
        }
    }

    /// Selection matching the dashboard's initial view
    pub fn initial() -> Self {
        Self::default()
    }

    /// Key under which the document looks up this selection's vector
    pub fn key(&self) -> String {
        format!("{}|{}", self.state.label(), self.mode.as_str())
    }
}

/// Per-layer visibility aligned with catalog order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityVector(Vec<bool>);

impl VisibilityVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn visible_count(&self) -> usize {
        self.0.iter().filter(|v| **v).count()
    }

    /// Indices of the visible layers
    pub fn visible_indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl FromIterator<bool> for VisibilityVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for VisibilityVector {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}
