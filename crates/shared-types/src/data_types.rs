//! Input records and the aggregates derived from them

use crate::states::UsState;
use serde::{Deserialize, Serialize};

/// One row of `dataframe1.csv`: a single state and year observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "State")]
    pub state: UsState,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Sales")]
    pub sales: f64,
    #[serde(rename = "Profit")]
    pub profit: f64,
    /// Fraction in 0..=1
    #[serde(rename = "Discount")]
    pub discount: f64,
    #[serde(rename = "Solar_Plants")]
    pub solar_plants: u32,
    #[serde(rename = "Wind_Plants")]
    pub wind_plants: u32,
}

/// One row of `dataframe2.csv`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    #[serde(rename = "State")]
    pub state: UsState,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Solar_Generation_MWh")]
    pub solar_generation_mwh: f64,
    #[serde(rename = "Wind_Generation_MWh")]
    pub wind_generation_mwh: f64,
}

/// Per-state aggregate of all sales records
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSummary {
    pub state: UsState,
    pub total_sales: f64,
    pub total_profit: f64,
    pub mean_solar_plants: f64,
    pub mean_wind_plants: f64,
    pub mean_discount: f64,
    /// Mean solar plus mean wind, not the sum of the per-year totals
    pub total_plants: f64,
}

/// Total sales for one (year, state) pair, used by the line chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySales {
    pub year: i32,
    pub state: UsState,
    pub sales: f64,
}

/// Headline numbers shown above the charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_sales: f64,
    pub total_profit: f64,
    /// Mean discount as a percentage, rounded to one decimal
    pub mean_discount_pct: f64,
}

/// Generation summed over every year for one state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateGeneration {
    pub state: UsState,
    pub solar_mwh: f64,
    pub wind_mwh: f64,
}

impl StateGeneration {
    pub fn total_mwh(&self) -> f64 {
        self.solar_mwh + self.wind_mwh
    }
}

/// Everything the aggregator derives from the sales file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregates {
    pub summaries: Vec<StateSummary>,
    pub yearly: Vec<YearlySales>,
    pub stats: DashboardStats,
}

impl Aggregates {
    pub fn summary(&self, state: UsState) -> Option<&StateSummary> {
        self.summaries.iter().find(|s| s.state == state)
    }

    /// Yearly sales of one state, in year order
    pub fn series_for(&self, state: UsState) -> impl Iterator<Item = &YearlySales> + '_ {
        self.yearly.iter().filter(move |y| y.state == state)
    }
}
