//! Fixture cases and their replay.

use std::path::Path;

use anyhow::{Context, Result};
use flyout_api::{Coordinate, EdgeInset, GeometrySnapshot, ViewportMetrics};
use flyout_kernel::{PositionConfig, Side, place};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub name: String,
    pub snapshot: GeometrySnapshot,
    pub metrics: ViewportMetrics,
    /// Falls back to the config's inset.
    #[serde(default)]
    pub inset: Option<EdgeInset>,
    #[serde(default)]
    pub expected: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub side: Side,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub result: CaseResult,
    /// `None` when the case has no expectation.
    pub matches: Option<bool>,
}

pub fn load_cases(path: &Path) -> Result<Vec<Case>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixtures: {}", path.display()))?;
    parse_cases(&text).with_context(|| format!("Invalid fixtures: {}", path.display()))
}

pub fn parse_cases(json: &str) -> Result<Vec<Case>> {
    Ok(serde_json::from_str(json)?)
}

pub fn replay(config: &PositionConfig, cases: &[Case]) -> Vec<Outcome> {
    cases
        .iter()
        .map(|case| {
            let inset = case.inset.unwrap_or(config.inset);
            let placement = place(config, &case.snapshot, &case.metrics, &inset);
            let matches = case.expected.map(|expected| expected == placement.coordinate);
            if matches == Some(false) {
                tracing::warn!(
                    case = %case.name,
                    expected = ?case.expected,
                    actual = ?placement.coordinate,
                    "fixture diverged"
                );
            }
            Outcome {
                result: CaseResult {
                    name: case.name.clone(),
                    x: placement.coordinate.x,
                    y: placement.coordinate.y,
                    side: placement.side,
                },
                matches,
            }
        })
        .collect()
}
