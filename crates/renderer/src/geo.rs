//! Synthetic map coordinates for plant markers and generation clouds
//!
//! Points are drawn uniformly inside an approximate bounding box per state.
//! Each (state, category) pair gets its own `ChaCha8Rng` stream seeded from
//! integer ids, so a rebuild always reproduces the same points.

use crate::catalog::LayerCatalog;
use energy_dashboard_shared::{LayerCategory, UsState};
use rand::distributions::Uniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Approximate bounding box of a state: center plus/minus a range in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateBounds {
    pub lat: f64,
    pub lon: f64,
    pub lat_range: f64,
    pub lon_range: f64,
}

impl StateBounds {
    pub const fn new(lat: f64, lon: f64, lat_range: f64, lon_range: f64) -> Self {
        Self {
            lat,
            lon,
            lat_range,
            lon_range,
        }
    }

    pub fn of(state: UsState) -> Self {
        match state {
            UsState::Arizona => Self::new(34.3, -111.7, 2.5, 3.0),
            UsState::California => Self::new(37.2, -119.7, 3.5, 4.0),
            UsState::Colorado => Self::new(39.0, -105.5, 2.5, 3.0),
            UsState::Florida => Self::new(28.6, -81.5, 3.0, 2.0),
            UsState::Georgia => Self::new(33.4, -83.3, 2.0, 2.5),
            UsState::Illinois => Self::new(40.0, -89.0, 2.0, 2.0),
            UsState::Iowa => Self::new(42.0, -93.2, 1.5, 2.5),
            UsState::Kansas => Self::new(38.5, -98.0, 2.0, 3.0),
            UsState::Minnesota => Self::new(46.0, -94.0, 2.0, 2.5),
            UsState::Nevada => Self::new(39.5, -116.5, 3.0, 3.5),
            UsState::NewMexico => Self::new(34.3, -106.0, 2.5, 3.0),
            UsState::NorthCarolina => Self::new(35.5, -79.0, 2.0, 2.0),
            UsState::NorthDakota => Self::new(47.5, -100.5, 2.0, 2.5),
            UsState::Oklahoma => Self::new(35.5, -97.5, 2.0, 2.5),
            UsState::Texas => Self::new(31.0, -99.0, 4.0, 5.0),
        }
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat - self.lat_range
            && lat <= self.lat + self.lat_range
            && lon >= self.lon - self.lon_range
            && lon <= self.lon + self.lon_range
    }
}

/// Sampled marker positions of one layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoints {
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
}

impl GeoPoints {
    pub fn len(&self) -> usize {
        self.lat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lat.is_empty()
    }
}

/// Seeded sampler keyed by (state id, category id)
#[derive(Debug, Clone, Copy)]
pub struct PointSampler {
    seed: u64,
}

impl PointSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    fn rng_for(&self, state: UsState, category: LayerCategory) -> ChaCha8Rng {
        let key = (u64::from(state.id()) << 8) | u64::from(category.id());
        ChaCha8Rng::seed_from_u64(self.seed ^ key.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }

    /// Draw `count` points inside the state's bounding box
    pub fn sample(&self, state: UsState, category: LayerCategory, count: u32) -> GeoPoints {
        let bounds = StateBounds::of(state);
        let mut rng = self.rng_for(state, category);

        let lat_dist = Uniform::new_inclusive(
            bounds.lat - bounds.lat_range,
            bounds.lat + bounds.lat_range,
        );
        let lon_dist = Uniform::new_inclusive(
            bounds.lon - bounds.lon_range,
            bounds.lon + bounds.lon_range,
        );

        let lat = (0..count).map(|_| rng.sample(lat_dist)).collect();
        let lon = (0..count).map(|_| rng.sample(lon_dist)).collect();
        GeoPoints { lat, lon }
    }
}

/// Sampled points for every geographic layer of a catalog, keyed by layer id
#[derive(Debug, Clone, Default)]
pub struct LayerGeometry {
    points: HashMap<String, GeoPoints>,
}

impl LayerGeometry {
    pub fn sample(catalog: &LayerCatalog, sampler: &PointSampler) -> Self {
        let points: HashMap<String, GeoPoints> = catalog
            .iter()
            .filter(|layer| layer.category.is_geographic())
            .filter_map(|layer| {
                let state = layer.owner?;
                Some((
                    layer.id.clone(),
                    sampler.sample(state, layer.category, layer.point_count),
                ))
            })
            .collect();

        log::debug!("Sampled coordinates for {} map layers", points.len());
        Self { points }
    }

    pub fn get(&self, layer_id: &str) -> Option<&GeoPoints> {
        self.points.get(layer_id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
