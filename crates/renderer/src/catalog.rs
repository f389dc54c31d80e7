//! The layer catalog: every trace the dashboard can show, in draw order
//!
//! Order: solar plants, wind plants, solar clouds, wind clouds, bubbles,
//! lines, then the two global bars. Visibility vectors index into this
//! order, so it never changes after `build`.

use energy_dashboard_shared::{
    CloudScale, EnergySource, Layer, LayerCategory, StateGeneration, StateSummary,
    UsState, VisibilityVector, YearlySales,
};
use std::collections::{BTreeMap, BTreeSet};

/// Split of a state's generation-cloud points between solar and wind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudSplit {
    pub total: u32,
    pub solar: u32,
    pub wind: u32,
}

impl CloudSplit {
    /// Returns `None` for an empty aggregate (no generation at all); such a
    /// state simply gets no cloud layers.
    pub fn compute(solar_mwh: f64, wind_mwh: f64, scale: &CloudScale) -> Option<Self> {
        let total_energy = solar_mwh + wind_mwh;
        if !(total_energy > 0.0) {
            return None;
        }

        // Bounds are ordered here, an unvalidated scale may have them inverted
        let lower = scale.min_points.min(scale.max_points);
        let upper = scale.min_points.max(scale.max_points);
        let total = (total_energy * scale.points_per_mwh)
            .round()
            .max(f64::from(lower))
            .min(f64::from(upper)) as u32;

        // Multiply before dividing so exact ratios stay exact
        let solar = ((f64::from(total) * solar_mwh) / total_energy).floor() as u32;
        let solar = solar.min(total);

        Some(Self {
            total,
            solar,
            wind: total - solar,
        })
    }
}

/// Plant markers drawn for a mean plant count
fn plant_marker_count(mean: f64) -> u32 {
    if mean > 0.0 {
        mean.trunc() as u32
    } else {
        0
    }
}

/// Ordered, immutable sequence of layers
#[derive(Debug, Clone, PartialEq)]
pub struct LayerCatalog {
    layers: Vec<Layer>,
}

impl LayerCatalog {
    /// Build the catalog from the aggregates
    pub fn build(
        summaries: &[StateSummary],
        yearly: &[YearlySales],
        generation: &[StateGeneration],
        scale: &CloudScale,
    ) -> Self {
        let mut layers = Vec::new();

        for summary in summaries {
            let count = plant_marker_count(summary.mean_solar_plants);
            if count > 0 {
                layers.push(Layer::for_state(
                    LayerCategory::SolarPlant,
                    summary.state,
                    count,
                ));
            }
        }

        for summary in summaries {
            let count = plant_marker_count(summary.mean_wind_plants);
            if count > 0 {
                layers.push(Layer::for_state(
                    LayerCategory::WindPlant,
                    summary.state,
                    count,
                ));
            }
        }

        let splits: Vec<(UsState, CloudSplit)> = generation
            .iter()
            .filter_map(|g| match CloudSplit::compute(g.solar_mwh, g.wind_mwh, scale) {
                Some(split) => Some((g.state, split)),
                None => {
                    log::debug!("{}: no generation, skipping cloud layers", g.state);
                    None
                }
            })
            .collect();

        for (state, split) in &splits {
            layers.push(Layer::for_state(
                LayerCategory::SolarCloud,
                *state,
                split.solar,
            ));
        }
        for (state, split) in &splits {
            layers.push(Layer::for_state(
                LayerCategory::WindCloud,
                *state,
                split.wind,
            ));
        }

        for summary in summaries {
            layers.push(Layer::for_state(LayerCategory::Bubble, summary.state, 1));
        }

        let mut years_per_state: BTreeMap<UsState, u32> = BTreeMap::new();
        for point in yearly {
            *years_per_state.entry(point.state).or_insert(0) += 1;
        }
        for (state, years) in years_per_state {
            layers.push(Layer::for_state(LayerCategory::Line, state, years));
        }

        let bar_points = generation.len() as u32;
        layers.push(Layer::bar(EnergySource::Solar, bar_points));
        layers.push(Layer::bar(EnergySource::Wind, bar_points));

        log::info!(
            "Built layer catalog: {} layers ({} cloud pairs)",
            layers.len(),
            splits.len()
        );

        Self { layers }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Position and layer with the given id
    pub fn find(&self, id: &str) -> Option<(usize, &Layer)> {
        self.layers.iter().enumerate().find(|(_, l)| l.id == id)
    }

    /// States owning at least one layer
    pub fn states(&self) -> BTreeSet<UsState> {
        self.layers.iter().filter_map(|l| l.owner).collect()
    }

    pub fn contains_state(&self, state: UsState) -> bool {
        self.layers.iter().any(|l| l.is_owned_by(state))
    }

    pub fn count(&self, category: LayerCategory) -> usize {
        self.layers.iter().filter(|l| l.category == category).count()
    }

    pub fn bar_indices(&self) -> Vec<usize> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, l)| l.category == LayerCategory::Bar)
            .map(|(i, _)| i)
            .collect()
    }

    /// Construction-time visibility flags, the dashboard's initial view
    pub fn default_visibility(&self) -> VisibilityVector {
        self.layers.iter().map(|l| l.default_visible).collect()
    }
}
