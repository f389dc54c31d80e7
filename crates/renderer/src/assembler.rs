//! Packaging of catalog, data and visibility into a serializable render
//! description. No aggregation or resolution happens here.

use crate::catalog::LayerCatalog;
use crate::geo::LayerGeometry;
use crate::visibility::VisibilityTable;
use energy_dashboard_shared::{
    Aggregates, DashboardError, DashboardResult, DashboardStats, EnergySource, Layer,
    LayerCategory, LayerMode, StateFilter, StateGeneration, UsState, VisibilitySelection,
    VisibilityVector,
};
use serde::{Deserialize, Serialize};

const MWH_PER_MILLION: f64 = 1_000_000.0;

/// Everything the document needs to draw the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSpec {
    pub title: String,
    pub stats: DashboardStats,
    pub traces: Vec<TraceSpec>,
    pub controls: ControlSpec,
    pub initial_selection: VisibilitySelection,
    pub visibility: VisibilityTable,
}

impl RenderSpec {
    pub fn initial_visibility(&self) -> VisibilityVector {
        self.traces.iter().map(|t| t.visible).collect()
    }
}

/// One layer with its payload and initial visibility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceSpec {
    pub layer: Layer,
    pub data: TraceData,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceData {
    Geo {
        lat: Vec<f64>,
        lon: Vec<f64>,
        hover: String,
    },
    Bubble {
        sales: f64,
        profit: f64,
        discount: f64,
        total_plants: f64,
    },
    Line {
        years: Vec<i32>,
        sales: Vec<f64>,
    },
    Bar {
        source: EnergySource,
        states: Vec<UsState>,
        /// Million MWh
        values: Vec<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSpec {
    /// Dropdown entries, `All` first
    pub states: Vec<StateFilter>,
    pub modes: Vec<ModeButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeButton {
    pub mode: LayerMode,
    pub label: String,
}

impl ControlSpec {
    pub fn for_catalog(catalog: &LayerCatalog) -> Self {
        let states = std::iter::once(StateFilter::All)
            .chain(catalog.states().into_iter().map(StateFilter::State))
            .collect();
        let modes = LayerMode::ALL
            .into_iter()
            .map(|mode| ModeButton {
                mode,
                label: mode.label().to_string(),
            })
            .collect();
        Self { states, modes }
    }
}

/// Inputs of a single assembly, all computed upstream
pub struct AssemblyInput<'a> {
    pub catalog: &'a LayerCatalog,
    pub initial_visibility: &'a VisibilityVector,
    pub aggregates: &'a Aggregates,
    pub generation: &'a [StateGeneration],
    pub geometry: &'a LayerGeometry,
    pub visibility: VisibilityTable,
}

pub struct DashboardAssembler {
    title: String,
}

impl DashboardAssembler {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn assemble(&self, input: AssemblyInput<'_>) -> DashboardResult<RenderSpec> {
        let catalog = input.catalog;
        if input.initial_visibility.len() != catalog.len() {
            return Err(DashboardError::InvalidSelection {
                message: format!(
                    "visibility vector has {} entries for {} layers",
                    input.initial_visibility.len(),
                    catalog.len()
                ),
            });
        }

        let traces = catalog
            .iter()
            .zip(input.initial_visibility.iter())
            .map(|(layer, visible)| {
                Ok(TraceSpec {
                    layer: layer.clone(),
                    data: Self::trace_data(layer, &input)?,
                    visible,
                })
            })
            .collect::<DashboardResult<Vec<_>>>()?;

        log::info!("Assembled render description with {} traces", traces.len());

        Ok(RenderSpec {
            title: self.title.clone(),
            stats: input.aggregates.stats,
            traces,
            controls: ControlSpec::for_catalog(catalog),
            initial_selection: VisibilitySelection::initial(),
            visibility: input.visibility,
        })
    }

    fn trace_data(layer: &Layer, input: &AssemblyInput<'_>) -> DashboardResult<TraceData> {
        let missing = || DashboardError::missing(format!("data for layer `{}`", layer.id));

        if layer.category == LayerCategory::Bar {
            let source = layer.source.ok_or_else(missing)?;
            let values = input
                .generation
                .iter()
                .map(|g| match source {
                    EnergySource::Solar => g.solar_mwh / MWH_PER_MILLION,
                    EnergySource::Wind => g.wind_mwh / MWH_PER_MILLION,
                })
                .collect();
            return Ok(TraceData::Bar {
                source,
                states: input.generation.iter().map(|g| g.state).collect(),
                values,
            });
        }

        let state = layer.owner.ok_or_else(missing)?;

        match layer.category {
            LayerCategory::SolarPlant
            | LayerCategory::WindPlant
            | LayerCategory::SolarCloud
            | LayerCategory::WindCloud => {
                let points = input.geometry.get(&layer.id).ok_or_else(missing)?;
                Ok(TraceData::Geo {
                    lat: points.lat.clone(),
                    lon: points.lon.clone(),
                    hover: Self::geo_hover(layer.category, state, input.generation),
                })
            }
            LayerCategory::Bubble => {
                let summary = input.aggregates.summary(state).ok_or_else(missing)?;
                Ok(TraceData::Bubble {
                    sales: summary.total_sales,
                    profit: summary.total_profit,
                    discount: summary.mean_discount,
                    total_plants: summary.total_plants,
                })
            }
            LayerCategory::Line => {
                let (years, sales): (Vec<i32>, Vec<f64>) = input
                    .aggregates
                    .series_for(state)
                    .map(|point| (point.year, point.sales))
                    .unzip();
                if years.is_empty() {
                    return Err(missing());
                }
                Ok(TraceData::Line { years, sales })
            }
            LayerCategory::Bar => Err(missing()),
        }
    }

    fn geo_hover(category: LayerCategory, state: UsState, generation: &[StateGeneration]) -> String {
        let entry = generation.iter().find(|g| g.state == state);

        match category {
            LayerCategory::SolarPlant => format!("{state} - Solar Plant"),
            LayerCategory::WindPlant => format!("{state} - Wind Plant"),
            LayerCategory::SolarCloud => format!(
                "{state} - Solar Generation Cloud<br>Energy: {} MWh",
                group_thousands(entry.map_or(0.0, |g| g.solar_mwh))
            ),
            LayerCategory::WindCloud => format!(
                "{state} - Wind Generation Cloud<br>Energy: {} MWh",
                group_thousands(entry.map_or(0.0, |g| g.wind_mwh))
            ),
            _ => state.to_string(),
        }
    }
}

/// `1234567.4` -> `"1,234,567"`
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value.is_sign_negative() && digits != "0" {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::PointSampler;
    use crate::visibility::VisibilityResolver;
    use energy_dashboard_shared::{CloudScale, StateSummary, YearlySales};

    fn fixture() -> (Aggregates, Vec<StateGeneration>) {
        let aggregates = Aggregates {
            summaries: vec![StateSummary {
                state: UsState::Colorado,
                total_sales: 8200.0,
                total_profit: 940.0,
                mean_solar_plants: 6.5,
                mean_wind_plants: 11.0,
                mean_discount: 0.2,
                total_plants: 17.5,
            }],
            yearly: vec![
                YearlySales {
                    year: 2019,
                    state: UsState::Colorado,
                    sales: 4000.0,
                },
                YearlySales {
                    year: 2020,
                    state: UsState::Colorado,
                    sales: 4200.0,
                },
            ],
            stats: DashboardStats {
                total_sales: 8200.0,
                total_profit: 940.0,
                mean_discount_pct: 20.0,
            },
        };
        let generation = vec![StateGeneration {
            state: UsState::Colorado,
            solar_mwh: 1_500_000.0,
            wind_mwh: 3_000_000.0,
        }];
        (aggregates, generation)
    }

    fn assemble(aggregates: &Aggregates, generation: &[StateGeneration]) -> DashboardResult<RenderSpec> {
        let catalog = LayerCatalog::build(
            &aggregates.summaries,
            &aggregates.yearly,
            generation,
            &CloudScale::default(),
        );
        let geometry = LayerGeometry::sample(&catalog, &PointSampler::new(42));
        let initial = catalog.default_visibility();
        let table = VisibilityResolver::resolve_all(&catalog)?;

        DashboardAssembler::new("Test Dashboard").assemble(AssemblyInput {
            catalog: &catalog,
            initial_visibility: &initial,
            aggregates,
            generation,
            geometry: &geometry,
            visibility: table,
        })
    }

    #[test]
    fn test_one_trace_per_layer_in_order() {
        let (aggregates, generation) = fixture();
        let spec = assemble(&aggregates, &generation).unwrap();

        let ids: Vec<&str> = spec.traces.iter().map(|t| t.layer.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "solar_plant/colorado",
                "wind_plant/colorado",
                "solar_cloud/colorado",
                "wind_cloud/colorado",
                "bubble/colorado",
                "line/colorado",
                "bar/solar",
                "bar/wind",
            ]
        );
        assert_eq!(spec.title, "Test Dashboard");
        assert_eq!(spec.initial_selection, VisibilitySelection::initial());
    }

    #[test]
    fn test_payloads() {
        let (aggregates, generation) = fixture();
        let spec = assemble(&aggregates, &generation).unwrap();

        match &spec.traces[0].data {
            TraceData::Geo { lat, lon, hover } => {
                assert_eq!(lat.len(), 6);
                assert_eq!(lon.len(), 6);
                assert_eq!(hover, "Colorado - Solar Plant");
            }
            other => panic!("unexpected payload {other:?}"),
        }

        match &spec.traces[2].data {
            TraceData::Geo { hover, lat, .. } => {
                assert_eq!(lat.len(), 50);
                assert!(hover.contains("1,500,000 MWh"));
            }
            other => panic!("unexpected payload {other:?}"),
        }

        assert_eq!(
            spec.traces[5].data,
            TraceData::Line {
                years: vec![2019, 2020],
                sales: vec![4000.0, 4200.0]
            }
        );

        match &spec.traces[7].data {
            TraceData::Bar {
                source,
                states,
                values,
            } => {
                assert_eq!(*source, EnergySource::Wind);
                assert_eq!(states, &vec![UsState::Colorado]);
                assert_eq!(values, &vec![3.0]);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_controls() {
        let (aggregates, generation) = fixture();
        let spec = assemble(&aggregates, &generation).unwrap();
        assert_eq!(
            spec.controls.states,
            vec![StateFilter::All, StateFilter::State(UsState::Colorado)]
        );
        assert_eq!(spec.controls.modes.len(), 5);
        assert_eq!(spec.controls.modes[3].label, "Solar Energy Accumulation");
        assert_eq!(spec.visibility.len(), 10);
    }

    #[test]
    fn test_initial_visibility_carried_through() {
        let (aggregates, generation) = fixture();
        let spec = assemble(&aggregates, &generation).unwrap();
        let visible: Vec<bool> = spec.initial_visibility().iter().collect();
        assert_eq!(visible, vec![true, true, false, false, true, false, true, true]);
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let (aggregates, generation) = fixture();
        let catalog = LayerCatalog::build(
            &aggregates.summaries,
            &aggregates.yearly,
            &generation,
            &CloudScale::default(),
        );
        let geometry = LayerGeometry::sample(&catalog, &PointSampler::new(42));
        let short: VisibilityVector = vec![true; 3].into_iter().collect();

        let err = DashboardAssembler::new("x")
            .assemble(AssemblyInput {
                catalog: &catalog,
                initial_visibility: &short,
                aggregates: &aggregates,
                generation: &generation,
                geometry: &geometry,
                visibility: VisibilityTable::default(),
            })
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidSelection { .. }));
    }

    #[test]
    fn test_missing_geometry_is_missing_data() {
        let (aggregates, generation) = fixture();
        let catalog = LayerCatalog::build(
            &aggregates.summaries,
            &aggregates.yearly,
            &generation,
            &CloudScale::default(),
        );
        let initial = catalog.default_visibility();

        let err = DashboardAssembler::new("x")
            .assemble(AssemblyInput {
                catalog: &catalog,
                initial_visibility: &initial,
                aggregates: &aggregates,
                generation: &generation,
                geometry: &LayerGeometry::default(),
                visibility: VisibilityTable::default(),
            })
            .unwrap_err();
        assert!(matches!(err, DashboardError::MissingData { .. }));
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.4), "1,234,567");
    }
}
