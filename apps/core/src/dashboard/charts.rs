//! Static pipeline charts.
//!
//! The dashboard shows how many ideas sit in each stage as a bar chart and a
//! doughnut chart. The data is fixed; drawing is left to whatever
//! [`ChartRenderer`] the front end provides.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;

pub const STAGE_LABELS: [&str; 3] = ["Idea", "Pilot", "Scaled"];
pub const STAGE_COUNTS: [u32; 3] = [3, 2, 3];
pub const PALETTE: [&str; 3] = ["#d4af37", "#c8b16a", "#072e21"];
const BAR_BORDERS: [&str; 3] = ["#b8942f", "#b8a46a", "#051a14"];
const DOUGHNUT_BORDER: &str = "#ffffff";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Doughnut,
}

/// Border colour: one per bar, or a single colour for every slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderColor {
    PerItem(Vec<String>),
    Uniform(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<u32>,
    pub background_color: Vec<String>,
    pub border_color: BorderColor,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl ChartSpec {
    /// Stage counts as bars, one border colour per bar.
    pub fn pipeline_bar() -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels: strings(&STAGE_LABELS),
                datasets: vec![Dataset {
                    label: Some("Ideas".to_string()),
                    data: STAGE_COUNTS.to_vec(),
                    background_color: strings(&PALETTE),
                    border_color: BorderColor::PerItem(strings(&BAR_BORDERS)),
                    border_width: 2,
                }],
            },
        }
    }

    /// Stage share as a doughnut with white slice borders.
    pub fn pipeline_doughnut() -> Self {
        Self {
            kind: ChartKind::Doughnut,
            data: ChartData {
                labels: strings(&STAGE_LABELS),
                datasets: vec![Dataset {
                    label: None,
                    data: STAGE_COUNTS.to_vec(),
                    background_color: strings(&PALETTE),
                    border_color: BorderColor::Uniform(DOUGHNUT_BORDER.to_string()),
                    border_width: 3,
                }],
            },
        }
    }
}

/// Both dashboard charts, bar first.
pub fn static_charts() -> [ChartSpec; 2] {
    [ChartSpec::pipeline_bar(), ChartSpec::pipeline_doughnut()]
}

/// Charting capability supplied by the front end.
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartSpec) -> Result<(), AppError>;
}

/// Renders the fixed dashboard charts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    /// Hands each chart to the renderer, stopping at the first failure.
    pub fn render<R: ChartRenderer + ?Sized>(&self, renderer: &mut R) -> Result<(), AppError> {
        for chart in static_charts() {
            renderer.render(&chart)?;
        }
        info!("Dashboard charts rendered");
        Ok(())
    }

    /// The chart specs as a JSON array.
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(&static_charts())?)
    }
}
