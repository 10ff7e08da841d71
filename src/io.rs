//! JSON grid files.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ecc_grid::{AxisCoord, LabelledGrid};

/// On-disk form of a [`LabelledGrid`]: row-major data plus its shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridFile {
    pub variable: String,
    pub units: String,
    pub shape: Vec<usize>,
    pub axis_dim: usize,
    pub axis: AxisCoord,
    pub data: Vec<f64>,
}

impl GridFile {
    /// Converts into a validated grid.
    pub fn into_grid(self) -> Result<LabelledGrid> {
        let grid = LabelledGrid::from_flat(
            self.variable,
            self.units,
            &self.shape,
            self.data,
            self.axis,
            self.axis_dim,
        )?;
        Ok(grid)
    }

    /// Captures `grid` in row-major order.
    pub fn from_grid(grid: &LabelledGrid) -> Self {
        Self {
            variable: grid.variable().to_string(),
            units: grid.units().to_string(),
            shape: grid.shape().to_vec(),
            axis_dim: grid.axis_dim(),
            axis: grid.axis().clone(),
            data: grid.data().iter().copied().collect(),
        }
    }
}

/// Reads a grid from a JSON file.
pub fn read_grid(path: &Path) -> Result<LabelledGrid> {
    let file =
        File::open(path).with_context(|| format!("failed to open grid: {}", path.display()))?;
    let grid_file: GridFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse grid JSON: {}", path.display()))?;
    grid_file
        .into_grid()
        .with_context(|| format!("invalid grid in {}", path.display()))
}

/// Writes a grid to a JSON file.
pub fn write_grid(path: &Path, grid: &LabelledGrid) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &GridFile::from_grid(grid))
        .with_context(|| format!("failed to write grid JSON: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
