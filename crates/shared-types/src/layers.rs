//! Layer types: the named, categorized traces the dashboard can show

use crate::states::UsState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a dashboard layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerCategory {
    SolarPlant,
    WindPlant,
    SolarCloud,
    WindCloud,
    Bubble,
    Line,
    Bar,
}

impl LayerCategory {
    pub const ALL: [LayerCategory; 7] = [
        LayerCategory::SolarPlant,
        LayerCategory::WindPlant,
        LayerCategory::SolarCloud,
        LayerCategory::WindCloud,
        LayerCategory::Bubble,
        LayerCategory::Line,
        LayerCategory::Bar,
    ];

    /// Stable integer id, mixed into sampling seeds
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayerCategory::SolarPlant => "solar_plant",
            LayerCategory::WindPlant => "wind_plant",
            LayerCategory::SolarCloud => "solar_cloud",
            LayerCategory::WindCloud => "wind_cloud",
            LayerCategory::Bubble => "bubble",
            LayerCategory::Line => "line",
            LayerCategory::Bar => "bar",
        }
    }

    /// Prefix of the human readable trace label
    pub fn display_name(&self) -> &'static str {
        match self {
            LayerCategory::SolarPlant => "Solar Plants",
            LayerCategory::WindPlant => "Wind Plants",
            LayerCategory::SolarCloud => "Solar Clouds",
            LayerCategory::WindCloud => "Wind Clouds",
            LayerCategory::Bubble => "Bubble",
            LayerCategory::Line => "Line",
            LayerCategory::Bar => "Power",
        }
    }

    /// Whether layers of this category are drawn on the map
    pub fn is_geographic(&self) -> bool {
        matches!(
            self,
            LayerCategory::SolarPlant
                | LayerCategory::WindPlant
                | LayerCategory::SolarCloud
                | LayerCategory::WindCloud
        )
    }

    /// Energy source drawn by this category, `None` for the mixed charts
    pub fn source(&self) -> Option<EnergySource> {
        match self {
            LayerCategory::SolarPlant | LayerCategory::SolarCloud => Some(EnergySource::Solar),
            LayerCategory::WindPlant | LayerCategory::WindCloud => Some(EnergySource::Wind),
            LayerCategory::Bubble | LayerCategory::Line | LayerCategory::Bar => None,
        }
    }

    /// Visibility a freshly built layer of this category starts with
    pub fn default_visible(&self) -> bool {
        match self {
            LayerCategory::SolarPlant
            | LayerCategory::WindPlant
            | LayerCategory::Bubble
            | LayerCategory::Bar => true,
            LayerCategory::SolarCloud | LayerCategory::WindCloud | LayerCategory::Line => false,
        }
    }
}

impl fmt::Display for LayerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Energy source drawn by a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergySource {
    Solar,
    Wind,
}

impl EnergySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergySource::Solar => "solar",
            EnergySource::Wind => "wind",
        }
    }
}

/// A named, categorized visual unit of the dashboard.
///
/// Layers only track what they are and how many points they carry; the
/// coordinates and values they draw are attached by the assembler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    pub label: String,
    pub category: LayerCategory,
    /// `None` for the global bar layers
    pub owner: Option<UsState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EnergySource>,
    pub default_visible: bool,
    pub point_count: u32,
}

impl Layer {
    /// Layer owned by a single state
    pub fn for_state(category: LayerCategory, state: UsState, point_count: u32) -> Self {
        Self {
            id: format!("{}/{}", category.as_str(), state.slug()),
            label: format!("{} - {}", category.display_name(), state.name()),
            category,
            owner: Some(state),
            source: category.source(),
            default_visible: category.default_visible(),
            point_count,
        }
    }

    /// Global bar layer for one energy source
    pub fn bar(source: EnergySource, point_count: u32) -> Self {
        let label = match source {
            EnergySource::Solar => "Solar Power (M MWh)",
            EnergySource::Wind => "Wind Power (M MWh)",
        };
        Self {
            id: format!("{}/{}", LayerCategory::Bar.as_str(), source.as_str()),
            label: label.to_string(),
            category: LayerCategory::Bar,
            owner: None,
            source: Some(source),
            default_visible: LayerCategory::Bar.default_visible(),
            point_count,
        }
    }

    pub fn is_owned_by(&self, state: UsState) -> bool {
        self.owner == Some(state)
    }
}

/// Scaling from generated energy to generation-cloud point counts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudScale {
    pub points_per_mwh: f64,
    pub min_points: u32,
    pub max_points: u32,
}

impl Default for CloudScale {
    fn default() -> Self {
        Self {
            points_per_mwh: 0.05,
            min_points: 10,
            max_points: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_layer_naming() {
        let layer = Layer::for_state(LayerCategory::SolarPlant, UsState::NewMexico, 12);
        assert_eq!(layer.id, "solar_plant/new-mexico");
        assert_eq!(layer.label, "Solar Plants - New Mexico");
        assert_eq!(layer.owner, Some(UsState::NewMexico));
        assert!(layer.default_visible);
        assert!(layer.is_owned_by(UsState::NewMexico));
        assert!(!layer.is_owned_by(UsState::Texas));
    }

    #[test]
    fn test_bar_layers_are_global() {
        let solar = Layer::bar(EnergySource::Solar, 15);
        let wind = Layer::bar(EnergySource::Wind, 15);
        assert_eq!(solar.owner, None);
        assert_ne!(solar.id, wind.id);
        assert!(solar.default_visible && wind.default_visible);
        assert_eq!(wind.label, "Wind Power (M MWh)");
        assert_eq!(wind.source, Some(EnergySource::Wind));
        assert_eq!(
            Layer::for_state(LayerCategory::Bubble, UsState::Iowa, 1).source,
            None
        );
    }

    #[test]
    fn test_default_visibility_by_category() {
        let visible: Vec<LayerCategory> = LayerCategory::ALL
            .into_iter()
            .filter(|c| c.default_visible())
            .collect();
        assert_eq!(
            visible,
            vec![
                LayerCategory::SolarPlant,
                LayerCategory::WindPlant,
                LayerCategory::Bubble,
                LayerCategory::Bar
            ]
        );
    }

    #[test]
    fn test_cloud_scale_default() {
        let scale = CloudScale::default();
        assert_eq!(scale.min_points, 10);
        assert_eq!(scale.max_points, 150);
        assert!((scale.points_per_mwh - 0.05).abs() < f64::EPSILON);
    }
}
