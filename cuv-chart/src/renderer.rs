//! Stateful wrapper tying a scene to its hover state.

use log::debug;
use serde_json::Value;

use crate::config::ChartConfig;
use crate::error::Result;
use crate::hover::HoverState;
use crate::model::{self, DataPoint, LegendEntry};
use crate::scene::Scene;
use crate::svg;

/// Holds the current scene and hover state for one chart.
///
/// Each [`render`](Self::render) replaces the scene wholesale and resets
/// the hover state.
#[derive(Debug, Clone, Default)]
pub struct StackedBarRenderer {
    config: ChartConfig,
    scene: Option<Scene>,
    hover: HoverState,
}

impl StackedBarRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            scene: None,
            hover: HoverState::default(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Lay out `points`. On error the previous scene is discarded.
    pub fn render(&mut self, points: &[DataPoint], legend: &[LegendEntry]) -> Result<&Scene> {
        self.hover.clear();
        self.scene = None;
        let scene = Scene::build(points, legend, &self.config)?;
        debug!("Rendered {} bars", scene.bars.len());
        Ok(&*self.scene.insert(scene))
    }

    /// Parse JSON records with an optional label key, then render.
    pub fn render_records(
        &mut self,
        records: &[Value],
        legend: &[LegendEntry],
        label_key: Option<&str>,
    ) -> Result<&Scene> {
        let points = model::from_records(records, label_key)?;
        self.render(&points, legend)
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn hover_row(&mut self, row: usize) {
        match &self.scene {
            Some(scene) => self.hover.enter_row(scene, row),
            None => self.hover.clear(),
        }
    }

    pub fn hover_label(&mut self, row: usize) {
        match &self.scene {
            Some(scene) => self.hover.enter_label(scene, row),
            None => self.hover.clear(),
        }
    }

    pub fn leave(&mut self) {
        self.hover.leave();
    }

    /// Current scene as SVG, with the hovered row highlighted.
    pub fn to_svg(&self) -> Option<String> {
        self.scene.as_ref().map(|scene| svg::to_svg(scene, &self.hover))
    }
}
