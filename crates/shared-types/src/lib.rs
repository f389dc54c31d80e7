//! Shared types for the renewable energy dashboard
//!
//! This crate contains the types passed between the data, renderer and
//! dashboard crates: input records and their aggregates, the layer model,
//! UI selections and the error taxonomy.

pub mod data_types;
pub mod errors;
pub mod layers;
pub mod selection;
pub mod states;

pub use data_types::{
    Aggregates, DashboardStats, GenerationRecord, SalesRecord, StateGeneration, StateSummary,
    YearlySales,
};
pub use errors::{DashboardError, DashboardResult};
pub use layers::{CloudScale, EnergySource, Layer, LayerCategory};
pub use selection::{
    LayerMode, StateFilter, VisibilitySelection, VisibilityVector, ALL_STATES_LABEL,
};
pub use states::{UsState, YEARS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates_lookup() {
        let aggregates = Aggregates {
            summaries: vec![StateSummary {
                state: UsState::Iowa,
                total_sales: 10.0,
                total_profit: 2.0,
                mean_solar_plants: 5.0,
                mean_wind_plants: 30.0,
                mean_discount: 0.2,
                total_plants: 35.0,
            }],
            yearly: vec![
                YearlySales {
                    year: 2019,
                    state: UsState::Iowa,
                    sales: 4.0,
                },
                YearlySales {
                    year: 2019,
                    state: UsState::Kansas,
                    sales: 9.0,
                },
                YearlySales {
                    year: 2020,
                    state: UsState::Iowa,
                    sales: 6.0,
                },
            ],
            stats: DashboardStats {
                total_sales: 10.0,
                total_profit: 2.0,
                mean_discount_pct: 20.0,
            },
        };

        assert!(aggregates.summary(UsState::Iowa).is_some());
        assert!(aggregates.summary(UsState::Texas).is_none());
        let years: Vec<i32> = aggregates.series_for(UsState::Iowa).map(|y| y.year).collect();
        assert_eq!(years, vec![2019, 2020]);
    }

    #[test]
    fn test_state_generation_total() {
        let generation = StateGeneration {
            state: UsState::Texas,
            solar_mwh: 4_000_000.0,
            wind_mwh: 1_000_000.0,
        };
        assert_eq!(generation.total_mwh(), 5_000_000.0);
    }
}
