//! CSV loading for the two dashboard input files

use energy_dashboard_shared::{
    DashboardError, DashboardResult, GenerationRecord, SalesRecord, UsState, YEARS,
};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Columns `dataframe1.csv` must carry. `Total_Plants` is recomputed from
/// the plant means, so it is not required.
pub const SALES_COLUMNS: [&str; 7] = [
    "State",
    "Year",
    "Sales",
    "Profit",
    "Discount",
    "Solar_Plants",
    "Wind_Plants",
];

/// Columns `dataframe2.csv` must carry
pub const GENERATION_COLUMNS: [&str; 4] = [
    "State",
    "Year",
    "Solar_Generation_MWh",
    "Wind_Generation_MWh",
];

/// A row that identifies one (state, year) observation
pub trait Observation: DeserializeOwned {
    fn key(&self) -> (UsState, i32);

    /// Range checks the type system cannot express
    fn check(&self) -> Result<(), String>;
}

impl Observation for SalesRecord {
    fn key(&self) -> (UsState, i32) {
        (self.state, self.year)
    }

    fn check(&self) -> Result<(), String> {
        if !self.sales.is_finite() || !self.profit.is_finite() {
            return Err("sales and profit must be finite".to_string());
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(format!(
                "discount {} is outside 0..=1",
                self.discount
            ));
        }
        Ok(())
    }
}

impl Observation for GenerationRecord {
    fn key(&self) -> (UsState, i32) {
        (self.state, self.year)
    }

    fn check(&self) -> Result<(), String> {
        for (name, value) in [
            ("Solar_Generation_MWh", self.solar_generation_mwh),
            ("Wind_Generation_MWh", self.wind_generation_mwh),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {value}"));
            }
        }
        Ok(())
    }
}

/// CSV loader for the dashboard inputs
pub struct CsvLoader;

impl CsvLoader {
    /// Load `dataframe1.csv`
    pub fn load_sales(path: impl AsRef<Path>) -> DashboardResult<Vec<SalesRecord>> {
        Self::load(path.as_ref(), &SALES_COLUMNS)
    }

    /// Load `dataframe2.csv`
    pub fn load_generation(path: impl AsRef<Path>) -> DashboardResult<Vec<GenerationRecord>> {
        Self::load(path.as_ref(), &GENERATION_COLUMNS)
    }

    fn load<T: Observation>(path: &Path, required: &[&str]) -> DashboardResult<Vec<T>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DashboardError::missing(format!(
                "file not found: {}",
                path.display()
            )),
            _ => DashboardError::missing(format!("cannot open {}: {e}", path.display())),
        })?;

        let records = Self::read(file, &path.display().to_string(), required)?;
        log::info!("Loaded {} rows from {}", records.len(), path.display());
        Ok(records)
    }

    /// Parse rows from any reader. `source` names the input in error messages.
    pub fn read<T: Observation, R: Read>(
        reader: R,
        source: &str,
        required: &[&str],
    ) -> DashboardResult<Vec<T>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| parse_error(source, &e))?
            .clone();

        for column in required {
            if !headers.iter().any(|h| h == *column) {
                return Err(DashboardError::missing(format!(
                    "column `{column}` in {source}"
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for row in reader.records() {
            let row = row.map_err(|e| parse_error(source, &e))?;
            let line = row.position().map(|p| p.line());

            let record: T = row
                .deserialize(Some(&headers))
                .map_err(|e| DashboardError::DataParse {
                    path: source.to_string(),
                    line,
                    message: e.to_string(),
                })?;

            record.check().map_err(|message| DashboardError::DataParse {
                path: source.to_string(),
                line,
                message,
            })?;

            let (state, year) = record.key();
            if !seen.insert((state, year)) {
                return Err(DashboardError::DuplicateObservation {
                    path: source.to_string(),
                    state: state.name().to_string(),
                    year,
                });
            }
            if !YEARS.contains(&year) {
                log::warn!("{source}: {state} has data for unexpected year {year}");
            }

            records.push(record);
        }

        log::debug!("{source}: parsed {} rows", records.len());
        Ok(records)
    }
}

fn parse_error(source: &str, err: &csv::Error) -> DashboardError {
    DashboardError::DataParse {
        path: source.to_string(),
        line: err.position().map(|p| p.line()),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALES_HEADER: &str =
        "State,Year,Sales,Profit,Discount,Solar_Plants,Wind_Plants,Total_Plants";

    fn read_sales(body: &str) -> DashboardResult<Vec<SalesRecord>> {
        let input = format!("{SALES_HEADER}\n{body}");
        CsvLoader::read(input.as_bytes(), "dataframe1.csv", &SALES_COLUMNS)
    }

    #[test]
    fn test_reads_sales_rows() {
        let records = read_sales(
            "Texas,2019,120000,15000,0.25,20,30,50\nNew Mexico,2019,80000,9000,0.4,12,14,26\n",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].state, UsState::Texas);
        assert_eq!(records[0].solar_plants, 20);
        assert_eq!(records[1].state, UsState::NewMexico);
        assert!((records[1].discount - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_total_plants_column_is_optional() {
        let input = "State,Year,Sales,Profit,Discount,Solar_Plants,Wind_Plants\nIowa,2020,1,1,0.1,5,25\n";
        let records: Vec<SalesRecord> =
            CsvLoader::read(input.as_bytes(), "dataframe1.csv", &SALES_COLUMNS).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_missing_column_is_missing_data() {
        let input = "State,Year,Sales,Profit,Solar_Plants,Wind_Plants\nIowa,2020,1,1,5,25\n";
        let err = CsvLoader::read::<SalesRecord, _>(input.as_bytes(), "dataframe1.csv", &SALES_COLUMNS)
            .unwrap_err();
        match err {
            DashboardError::MissingData { resource } => assert!(resource.contains("Discount")),
            other => panic!("Wrong error variant: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_state_reports_line() {
        let err = read_sales("Texas,2019,1,1,0.1,1,1,2\nOregon,2019,1,1,0.1,1,1,2\n").unwrap_err();
        match err {
            DashboardError::DataParse { line, .. } => assert_eq!(line, Some(3)),
            other => panic!("Wrong error variant: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_observation_rejected() {
        let err = read_sales("Texas,2019,1,1,0.1,1,1,2\nTexas,2019,2,2,0.2,2,2,4\n").unwrap_err();
        assert!(matches!(
            err,
            DashboardError::DuplicateObservation { year: 2019, .. }
        ));
    }

    #[test]
    fn test_discount_out_of_range_rejected() {
        let err = read_sales("Texas,2019,1,1,1.5,1,1,2\n").unwrap_err();
        assert!(matches!(err, DashboardError::DataParse { .. }));
    }

    #[test]
    fn test_negative_generation_rejected() {
        let input = "State,Year,Solar_Generation_MWh,Wind_Generation_MWh\nKansas,2021,-5,100\n";
        let err = CsvLoader::read::<GenerationRecord, _>(
            input.as_bytes(),
            "dataframe2.csv",
            &GENERATION_COLUMNS,
        )
        .unwrap_err();
        match err {
            DashboardError::DataParse { message, .. } => {
                assert!(message.contains("Solar_Generation_MWh"))
            }
            other => panic!("Wrong error variant: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_missing_data() {
        let err = CsvLoader::load_sales("/definitely/not/here/dataframe1.csv").unwrap_err();
        match err {
            DashboardError::MissingData { resource } => {
                assert!(resource.contains("dataframe1.csv"))
            }
            other => panic!("Wrong error variant: {other:?}"),
        }
    }
}
