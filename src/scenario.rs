use std::error::Error;
use std::fs;
use std::path::Path;

use contour_map::{EditOutcome, Fill, MapConfig, StencilShape, Vec2, VoxelMap};
use serde::Deserialize;

/// A scripted editing session: optional map sizing plus an ordered edit list.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub map: Option<MapConfig>,
    #[serde(default)]
    pub edits: Vec<EditSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct EditSpec {
    /// World-space `[x, y]`.
    pub point: [f32; 2],
    #[serde(default)]
    pub shape: StencilShape,
    #[serde(default = "default_fill")]
    pub fill: Fill,
    #[serde(default)]
    pub radius: u32,
}

fn default_fill() -> Fill {
    Fill::Filled
}

impl EditSpec {
    #[inline]
    pub fn point(&self) -> Vec2 {
        Vec2::new(self.point[0], self.point[1])
    }
}

impl Scenario {
    /// Runs every edit in order, returning one outcome per edit.
    pub fn run(&self, map: &mut VoxelMap) -> Vec<EditOutcome> {
        self.edits
            .iter()
            .map(|e| map.edit(e.point(), e.shape, e.fill, e.radius))
            .collect()
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let scenario: Scenario = toml::from_str(&s)?;
    Ok(scenario)
}
