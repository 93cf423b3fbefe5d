//! Stacked horizontal bar chart for client usage data.
//!
//! Layout is pure: a dataset and a series legend go in, an immutable
//! [`scene::Scene`] of shape descriptors comes out. Drawing surfaces (the
//! [`svg`] writer here, the Dioxus component in `cuv-chart-ui`) only read the
//! scene and the current [`hover::HoverState`].

pub mod config;
pub mod error;
pub mod hover;
pub mod label;
pub mod loader;
pub mod model;
pub mod renderer;
pub mod scale;
pub mod scene;
pub mod stack;
pub mod svg;

pub use config::{ChartConfig, Margin, PercentBase};
pub use error::{ChartError, Result};
pub use hover::{HoverState, TargetKind, TooltipTarget};
pub use model::{DataPoint, LegendEntry};
pub use renderer::StackedBarRenderer;
pub use scene::Scene;
