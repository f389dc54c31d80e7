//! Dashboard rendering core
//!
//! Turns aggregated data into the layer catalog, resolves which layers a
//! UI selection shows, and packages the result into a self-contained HTML
//! document:
//!
//! ```text
//! summaries + generation -> LayerCatalog -> VisibilityResolver
//!                                 |                 |
//!                          LayerGeometry     VisibilityTable
//!                                 \                 /
//!                               DashboardAssembler -> HtmlWriter
//! ```

pub mod assembler;
pub mod catalog;
pub mod geo;
pub mod html;
pub mod visibility;

pub use assembler::{
    AssemblyInput, ControlSpec, DashboardAssembler, ModeButton, RenderSpec, TraceData, TraceSpec,
};
pub use catalog::{CloudSplit, LayerCatalog};
pub use geo::{GeoPoints, LayerGeometry, PointSampler, StateBounds};
pub use html::HtmlWriter;
pub use visibility::{VisibilityResolver, VisibilityTable};
