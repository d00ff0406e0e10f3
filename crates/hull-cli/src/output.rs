use crate::error::{CliError, Result};
use kimhull::workflows::hull::HullDiagram;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes `value` as pretty JSON to `path`, or to standard output when no
/// path is given.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| output_error(path, e.into()))?;
            serde_json::to_writer_pretty(file, value)
                .map_err(|e| output_error(path, e.into()))?;
            info!(path = %path.display(), "wrote JSON report");
        }
        None => {
            let stdout = io::stdout();
            serde_json::to_writer_pretty(stdout.lock(), value)
                .map_err(|e| CliError::Other(e.into()))?;
            println!();
        }
    }
    Ok(())
}

/// Writes the diagram's composition points as CSV rows for external plotting.
///
/// One row per input record: its index, prototype label, mole fraction of the
/// second species, per-atom formation energy, and whether the point sits on
/// the lower hull.
pub fn write_points_csv(diagram: &HullDiagram, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| output_error(path, e.into()))?;
            write_csv_to(diagram, file).map_err(|e| output_error(path, e))?;
            info!(path = %path.display(), "wrote CSV points");
        }
        None => {
            let stdout = io::stdout();
            write_csv_to(diagram, stdout.lock()).map_err(CliError::Other)?;
        }
    }
    Ok(())
}

fn write_csv_to(diagram: &HullDiagram, writer: impl Write) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "index",
        "prototype_label",
        "mole_fraction",
        "formation_energy_per_atom",
        "on_lower_hull",
    ])?;

    for (index, (label, point)) in diagram.labels.iter().zip(&diagram.points).enumerate() {
        let (fraction, energy) = point
            .binary_xy()
            .ok_or_else(|| anyhow::anyhow!("diagram point {index} is not binary"))?;
        csv_writer.write_record([
            index.to_string(),
            label.clone(),
            fraction.to_string(),
            energy.to_string(),
            diagram.lower_hull.contains(&index).to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn output_error(path: &Path, source: anyhow::Error) -> CliError {
    CliError::Output {
        path: PathBuf::from(path),
        source,
    }
}
