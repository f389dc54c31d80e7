//! End-to-end dashboard build: load, aggregate, catalog, resolve, render.

use anyhow::{Context, Result};
use energy_dashboard_config::{ConfigValidator, DashboardConfig};
use energy_dashboard_data::DashboardData;
use energy_dashboard_renderer::{
    AssemblyInput, DashboardAssembler, HtmlWriter, LayerCatalog, LayerGeometry, PointSampler,
    RenderSpec, VisibilityResolver,
};
use energy_dashboard_shared::{DashboardError, VisibilitySelection};
use std::path::PathBuf;
use tracing::{debug, info};

/// Rendered document, not yet written
#[derive(Debug, Clone)]
pub struct RenderedDashboard {
    pub spec: RenderSpec,
    pub html: String,
}

/// What a successful build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub layers: usize,
    pub states: usize,
    pub bytes: usize,
}

/// Build the document in memory
pub fn render_dashboard(config: &DashboardConfig) -> Result<RenderedDashboard> {
    ConfigValidator::validate(config).context("invalid dashboard configuration")?;

    let input = &config.input;
    info!(
        "Loading {} and {}",
        input.sales_path.display(),
        input.generation_path.display()
    );
    let data = DashboardData::load(&input.sales_path, &input.generation_path)
        .context("failed to load dashboard inputs")?;

    let aggregates = &data.aggregates;
    let catalog = LayerCatalog::build(
        &aggregates.summaries,
        &aggregates.yearly,
        &data.generation,
        &config.clouds,
    );
    let geometry = LayerGeometry::sample(&catalog, &PointSampler::new(config.sampling.seed));
    debug!("Sampled {} map layers", geometry.len());

    let initial = VisibilityResolver::resolve(&catalog, &VisibilitySelection::initial())
        .context("failed to resolve the initial view")?;
    let table =
        VisibilityResolver::resolve_all(&catalog).context("failed to resolve visibility table")?;

    let spec = DashboardAssembler::new(config.output.title.as_str())
        .assemble(AssemblyInput {
            catalog: &catalog,
            initial_visibility: &initial,
            aggregates,
            generation: &data.generation,
            geometry: &geometry,
            visibility: table,
        })
        .context("failed to assemble dashboard")?;

    let html = HtmlWriter::render(&spec, &config.output.plotly_js_url)
        .context("failed to render dashboard")?;

    Ok(RenderedDashboard { spec, html })
}

/// Build the document and write it to the configured output path
pub fn build_dashboard(config: &DashboardConfig) -> Result<BuildSummary> {
    let rendered = render_dashboard(config)?;
    let output = config.output.html_path.clone();

    HtmlWriter::write(&output, &rendered.html)?;

    Ok(BuildSummary {
        layers: rendered.spec.traces.len(),
        states: rendered.spec.controls.states.len().saturating_sub(1),
        bytes: rendered.html.len(),
        output,
    })
}

/// One-line report for a failed build. Input data problems are called out
/// as such, everything else is reported as a build error.
pub fn error_message(err: &anyhow::Error) -> String {
    let data_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<DashboardError>())
        .any(DashboardError::is_data_error);

    if data_error {
        format!("input data error: {err:#}")
    } else {
        format!("error: {err:#}")
    }
}
