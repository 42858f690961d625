use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{
    LaunchDataset, LaunchRecord, Outcome, COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("row {row}: '{value}' is not a valid payload mass")]
    InvalidPayload { row: usize, value: String },
    #[error("row {row}: class must be 0 or 1, got '{value}'")]
    InvalidClass { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch records CSV at `path`.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, DatasetError> {
    let file = std::fs::File::open(path).map_err(|source| DatasetError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_csv(file)
}

/// CSV layout: header row with column names, one launch per row.
///
/// Required columns are `Launch Site`, `Payload Mass (kg)`, `class` and
/// `Booster Version Category`; they may appear in any order and any other
/// column is ignored. A blank (or `NaN`) payload cell loads as a launch without payload
/// mass; a non-numeric or negative one is an error.
pub fn read_csv<R: Read>(input: R) -> Result<LaunchDataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(DatasetError::MissingColumn(name))
    };

    let site_idx = column(COL_LAUNCH_SITE)?;
    let payload_idx = column(COL_PAYLOAD_MASS)?;
    let class_idx = column(COL_CLASS)?;
    let booster_idx = column(COL_BOOSTER_CATEGORY)?;

    let mut records = Vec::new();
    let mut blank_payloads = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result?;

        let payload_raw = record.get(payload_idx).unwrap_or("");
        let payload_mass = if payload_raw.is_empty() || payload_raw.eq_ignore_ascii_case("nan") {
            blank_payloads += 1;
            None
        } else {
            let mass = parse_payload(payload_raw).ok_or_else(|| DatasetError::InvalidPayload {
                row,
                value: payload_raw.to_string(),
            })?;
            Some(mass)
        };

        let class_raw = record.get(class_idx).unwrap_or("");
        let outcome = parse_class(class_raw).ok_or_else(|| DatasetError::InvalidClass {
            row,
            value: class_raw.to_string(),
        })?;

        records.push(LaunchRecord {
            launch_site: record.get(site_idx).unwrap_or("").to_string(),
            payload_mass,
            outcome,
            booster_category: record.get(booster_idx).unwrap_or("").to_string(),
        });
    }

    if blank_payloads > 0 {
        log::warn!("{blank_payloads} launches have no payload mass; they are left off the scatter");
    }

    Ok(LaunchDataset::from_records(records))
}

// -- Cell parsers --

fn parse_payload(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}

/// Accepts integer (`1`) and float-formatted (`1.0`) class cells.
fn parse_class(s: &str) -> Option<Outcome> {
    if let Ok(i) = s.parse::<u8>() {
        return Outcome::from_class(i);
    }
    match s.parse::<f64>() {
        Ok(v) if v == 0.0 => Some(Outcome::Failure),
        Ok(v) if v == 1.0 => Some(Outcome::Success),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
3,VAFB SLC-4E,1,9600,F9 FT B1029.1,FT
4,KSC LC-39A,1,2490,F9 FT B1031.1,FT
";

    #[test]
    fn test_read_sample_with_extra_columns() {
        let ds = read_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites().len(), 3);
        assert_eq!(ds.min_payload(), Some(0.0));
        assert_eq!(ds.max_payload(), Some(9600.0));

        let third = &ds.records()[2];
        assert_eq!(third.launch_site, "VAFB SLC-4E");
        assert_eq!(third.payload_mass, Some(9600.0));
        assert_eq!(third.outcome, Outcome::Success);
        assert_eq!(third.booster_category, "FT");
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "Launch Site,class,Booster Version Category\nA,1,FT\n";
        let err = read_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("Payload Mass (kg)")));
    }

    #[test]
    fn test_invalid_class_reports_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   A,100,1,FT\n\
                   A,200,2,FT\n";
        match read_csv(csv.as_bytes()) {
            Err(DatasetError::InvalidClass { row, value }) => {
                assert_eq!(row, 2);
                assert_eq!(value, "2");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_payload_reports_row() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   A,heavy,1,FT\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(DatasetError::InvalidPayload { row: 1, .. })
        ));

        let negative = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                        A,-5,1,FT\n";
        assert!(read_csv(negative.as_bytes()).is_err());
    }

    #[test]
    fn test_blank_payload_loads_without_mass() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
                   A,,1,FT\n\
                   B,NaN,0,v1.1\n\
                   A,2500,0,FT\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records()[0].payload_mass, None);
        assert_eq!(ds.records()[1].payload_mass, None);
        assert_eq!(ds.min_payload(), Some(2500.0));
        assert_eq!(ds.max_payload(), Some(2500.0));
    }

    #[test]
    fn test_float_formatted_class() {
        assert_eq!(parse_class("1.0"), Some(Outcome::Success));
        assert_eq!(parse_class("0"), Some(Outcome::Failure));
        assert_eq!(parse_class("0.5"), None);
        assert_eq!(parse_class(""), None);
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn test_missing_file() {
        let err = load_csv(Path::new("/nonexistent/spacex.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
    }
}
