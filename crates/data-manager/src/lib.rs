//! Data crate for the energy dashboard
//! Loads the sales and generation CSV files and reduces them into the
//! aggregates the layer catalog is built from.

pub mod aggregation;
pub mod parser;

pub use aggregation::{aggregate, aggregate_generation, round_to};
pub use parser::{CsvLoader, Observation, GENERATION_COLUMNS, SALES_COLUMNS};

use energy_dashboard_shared::{Aggregates, DashboardResult, StateGeneration};
use std::path::Path;

/// Everything loaded and aggregated from one pair of input files
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub aggregates: Aggregates,
    pub generation: Vec<StateGeneration>,
}

impl DashboardData {
    /// Load both inputs and aggregate them. Any missing or malformed input
    /// fails the whole load.
    pub fn load(
        sales_path: impl AsRef<Path>,
        generation_path: impl AsRef<Path>,
    ) -> DashboardResult<Self> {
        let sales = CsvLoader::load_sales(sales_path)?;
        let generation = CsvLoader::load_generation(generation_path)?;

        Ok(Self {
            aggregates: aggregate(&sales)?,
            generation: aggregate_generation(&generation)?,
        })
    }
}
