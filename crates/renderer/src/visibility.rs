//! Visibility resolution: (catalog, selection) -> one flag per layer

use crate::catalog::LayerCatalog;
use energy_dashboard_shared::{
    DashboardError, DashboardResult, Layer, LayerCategory, LayerMode, StateFilter,
    VisibilitySelection, VisibilityVector,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a mode shows layers of a category.
///
/// Lines have no mode of their own and stay hidden under every mode.
fn mode_shows(mode: LayerMode, category: LayerCategory) -> bool {
    use LayerCategory::*;

    match mode {
        LayerMode::BothPlants => matches!(category, SolarPlant | WindPlant | Bubble),
        LayerMode::SolarOnly => matches!(category, SolarPlant | Bubble),
        LayerMode::WindOnly => matches!(category, WindPlant | Bubble),
        LayerMode::SolarAccumulation => category == SolarCloud,
        LayerMode::WindAccumulation => category == WindCloud,
    }
}

fn layer_visible(layer: &Layer, selection: &VisibilitySelection) -> bool {
    if layer.category == LayerCategory::Bar {
        return true;
    }

    if let StateFilter::State(state) = selection.state {
        if !layer.is_owned_by(state) {
            return false;
        }
    }

    mode_shows(selection.mode, layer.category)
}

/// Pure resolver from UI selection to per-layer visibility
pub struct VisibilityResolver;

impl VisibilityResolver {
    /// Resolve a selection against a catalog.
    ///
    /// Fails with `InvalidSelection` when the selection names a state that
    /// owns no layer in the catalog.
    pub fn resolve(
        catalog: &LayerCatalog,
        selection: &VisibilitySelection,
    ) -> DashboardResult<VisibilityVector> {
        if let StateFilter::State(state) = selection.state {
            if !catalog.contains_state(state) {
                return Err(DashboardError::InvalidSelection {
                    message: format!("state `{state}` has no layers in the catalog"),
                });
            }
        }

        Ok(catalog
            .iter()
            .map(|layer| layer_visible(layer, selection))
            .collect())
    }

    /// Resolve from the dropdown and button labels
    pub fn resolve_labels(
        catalog: &LayerCatalog,
        state_label: &str,
        mode_label: &str,
    ) -> DashboardResult<VisibilityVector> {
        let selection = VisibilitySelection {
            state: state_label.parse()?,
            mode: mode_label.parse()?,
        };
        Self::resolve(catalog, &selection)
    }

    /// Every selection the dashboard controls can produce
    pub fn selections(catalog: &LayerCatalog) -> Vec<VisibilitySelection> {
        let filters: Vec<StateFilter> = std::iter::once(StateFilter::All)
            .chain(catalog.states().into_iter().map(StateFilter::State))
            .collect();

        filters
            .iter()
            .flat_map(|filter| {
                LayerMode::ALL
                    .into_iter()
                    .map(move |mode| VisibilitySelection::new(*filter, mode))
            })
            .collect()
    }

    /// Resolve every selection the controls can produce
    pub fn resolve_all(catalog: &LayerCatalog) -> DashboardResult<VisibilityTable> {
        let mut entries = BTreeMap::new();
        for selection in Self::selections(catalog) {
            let vector = Self::resolve(catalog, &selection)?;
            entries.insert(selection.key(), vector);
        }

        log::debug!("Resolved {} visibility selections", entries.len());
        Ok(VisibilityTable { entries })
    }
}

/// Precomputed vectors keyed by `VisibilitySelection::key`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityTable {
    entries: BTreeMap<String, VisibilityVector>,
}

impl VisibilityTable {
    pub fn get(&self, selection: &VisibilitySelection) -> Option<&VisibilityVector> {
        self.entries.get(&selection.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
