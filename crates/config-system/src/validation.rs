//! Configuration validation utilities

use crate::{ConfigError, DashboardConfig, InputConfig, OutputConfig, Result};
use energy_dashboard_shared::CloudScale;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &DashboardConfig) -> Result<()> {
        Self::validate_input(&config.input)?;
        Self::validate_output(&config.output)?;
        Self::validate_clouds(&config.clouds)?;
        Ok(())
    }

    fn validate_input(input: &InputConfig) -> Result<()> {
        if input.sales_path.as_os_str().is_empty() || input.generation_path.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "Input paths cannot be empty".to_string(),
            ));
        }

        if input.sales_path == input.generation_path {
            return Err(ConfigError::Validation(format!(
                "Sales and generation inputs point at the same file: {}",
                input.sales_path.display()
            )));
        }

        Ok(())
    }

    fn validate_output(output: &OutputConfig) -> Result<()> {
        if output.html_path.file_name().is_none() {
            return Err(ConfigError::Validation(format!(
                "Output path must name a file: {}",
                output.html_path.display()
            )));
        }

        if output.plotly_js_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Plotly script URL cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_clouds(clouds: &CloudScale) -> Result<()> {
        if !clouds.points_per_mwh.is_finite() || clouds.points_per_mwh <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "Invalid points_per_mwh: {}. Must be a positive number",
                clouds.points_per_mwh
            )));
        }

        if clouds.min_points == 0 {
            return Err(ConfigError::Validation(
                "Cloud min_points must be at least 1".to_string(),
            ));
        }

        if clouds.min_points > clouds.max_points {
            return Err(ConfigError::Validation(format!(
                "Cloud min_points ({}) exceeds max_points ({})",
                clouds.min_points, clouds.max_points
            )));
        }

        if clouds.max_points > 10_000 {
            return Err(ConfigError::Validation(format!(
                "Cloud max_points too high: {}. Maximum is 10000",
                clouds.max_points
            )));
        }

        Ok(())
    }
}
