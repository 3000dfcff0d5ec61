//! JSON polygon files.
//!
//! Input:  `{"vertices": [[x, y], ...]}`
//! Output: `{"parts": [[[x, y], ...], ...], "input_area": a, "parts_area": b, "area_defect": b - a}`

use anyhow::{Context, Result};
use bayazit::api::area_defect;
use bayazit::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct PolygonFile {
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PartsFile {
    pub parts: Vec<Vec<[f64; 2]>>,
    pub input_area: f64,
    pub parts_area: f64,
    pub area_defect: f64,
}

impl From<&Polygon> for PolygonFile {
    fn from(p: &Polygon) -> Self {
        Self {
            vertices: to_pairs(p),
        }
    }
}

impl PolygonFile {
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(
            self.vertices
                .iter()
                .map(|&[x, y]| Point::new(x, y))
                .collect(),
        )
    }
}

impl PartsFile {
    pub fn new(input: &Polygon, parts: &[Polygon]) -> Self {
        let input_area = input.area();
        let defect = area_defect(input, parts);
        Self {
            parts: parts.iter().map(to_pairs).collect(),
            input_area,
            parts_area: input_area + defect,
            area_defect: defect,
        }
    }
}

fn to_pairs(p: &Polygon) -> Vec<[f64; 2]> {
    p.iter().map(|v| [v.x, v.y]).collect()
}

pub fn read_polygon(path: &Path) -> Result<Polygon> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: PolygonFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing polygon JSON {}", path.display()))?;
    Ok(file.to_polygon())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
