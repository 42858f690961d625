use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::filter::ScatterPoint;

/// Row layout of an exported selection; headers match the input CSV so an
/// export can be loaded back as a dataset.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'a str,
}

/// Write `points` as CSV to any writer.
pub fn write_points<W: Write>(points: &[ScatterPoint], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for p in points {
        writer
            .serialize(ExportRow {
                launch_site: &p.launch_site,
                payload_mass: p.payload_mass,
                class: p.outcome.class_value(),
                booster_category: &p.booster_category,
            })
            .context("serializing export row")?;
    }
    writer.flush().context("flushing CSV export")?;
    Ok(())
}

/// Write `points` to a CSV file at `path`.
pub fn export_csv(points: &[ScatterPoint], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_points(points, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::scatter_filter;
    use crate::data::loader::load_csv;
    use crate::data::model::tests::record;
    use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

    #[test]
    fn test_write_points_header_and_rows() {
        let ds = LaunchDataset::from_records(vec![record("KSC LC-39A", 2490.0, 1, "FT")]);
        let chart = scatter_filter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 1e4));

        let mut buf = Vec::new();
        write_points(&chart.points, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
             KSC LC-39A,2490.0,1,FT\n"
        );
    }

    #[test]
    fn test_export_loads_back() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 100.0, 1, "FT"),
            record("A", 5000.0, 0, "v1.1"),
            record("B", 7000.0, 1, "B5"),
        ]);
        let chart = scatter_filter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 6000.0));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.csv");
        export_csv(&chart.points, &path).unwrap();

        let reloaded = load_csv(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.records(), &ds.records()[..2]);
    }
}
