//! Reduction of raw records into the summaries the dashboard draws
//!
//! Summaries come out sorted by state name and yearly series by
//! (year, state name), the order the charts list them in.

use energy_dashboard_shared::{
    Aggregates, DashboardError, DashboardResult, DashboardStats, GenerationRecord, SalesRecord,
    StateGeneration, StateSummary, UsState, YearlySales,
};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct StateAccumulator {
    rows: u32,
    sales: f64,
    profit: f64,
    solar_plants: f64,
    wind_plants: f64,
    discount: f64,
}

impl StateAccumulator {
    fn push(&mut self, record: &SalesRecord) {
        self.rows += 1;
        self.sales += record.sales;
        self.profit += record.profit;
        self.solar_plants += f64::from(record.solar_plants);
        self.wind_plants += f64::from(record.wind_plants);
        self.discount += record.discount;
    }

    fn finish(&self, state: UsState) -> StateSummary {
        let n = f64::from(self.rows);
        let mean_solar_plants = self.solar_plants / n;
        let mean_wind_plants = self.wind_plants / n;
        StateSummary {
            state,
            total_sales: self.sales,
            total_profit: self.profit,
            mean_solar_plants,
            mean_wind_plants,
            mean_discount: self.discount / n,
            total_plants: mean_solar_plants + mean_wind_plants,
        }
    }
}

/// Reduce sales records into per-state summaries, per-(year, state) sales
/// and the headline stats.
pub fn aggregate(records: &[SalesRecord]) -> DashboardResult<Aggregates> {
    if records.is_empty() {
        return Err(DashboardError::missing("sales records"));
    }

    let mut by_state: BTreeMap<UsState, StateAccumulator> = BTreeMap::new();
    let mut by_year_state: BTreeMap<(i32, UsState), f64> = BTreeMap::new();

    for record in records {
        by_state.entry(record.state).or_default().push(record);
        *by_year_state.entry((record.year, record.state)).or_insert(0.0) += record.sales;
    }

    let summaries: Vec<StateSummary> = by_state
        .iter()
        .map(|(state, acc)| acc.finish(*state))
        .collect();

    let yearly = by_year_state
        .into_iter()
        .map(|((year, state), sales)| YearlySales { year, state, sales })
        .collect();

    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let total_profit: f64 = records.iter().map(|r| r.profit).sum();
    let mean_discount = records.iter().map(|r| r.discount).sum::<f64>() / records.len() as f64;

    let stats = DashboardStats {
        total_sales,
        total_profit,
        mean_discount_pct: round_to(mean_discount * 100.0, 1),
    };

    log::debug!(
        "Aggregated {} records into {} state summaries",
        records.len(),
        summaries.len()
    );

    Ok(Aggregates {
        summaries,
        yearly,
        stats,
    })
}

/// Sum solar and wind generation per state across all years
pub fn aggregate_generation(records: &[GenerationRecord]) -> DashboardResult<Vec<StateGeneration>> {
    if records.is_empty() {
        return Err(DashboardError::missing("generation records"));
    }

    let mut by_state: BTreeMap<UsState, (f64, f64)> = BTreeMap::new();
    for record in records {
        let entry = by_state.entry(record.state).or_insert((0.0, 0.0));
        entry.0 += record.solar_generation_mwh;
        entry.1 += record.wind_generation_mwh;
    }

    Ok(by_state
        .into_iter()
        .map(|(state, (solar_mwh, wind_mwh))| StateGeneration {
            state,
            solar_mwh,
            wind_mwh,
        })
        .collect())
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
