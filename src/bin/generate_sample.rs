use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Deterministic splitmix64 stream, so the sample file is reproducible.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

#[derive(Serialize)]
struct Row<'a> {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'a str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'a str,
}

/// Booster generations in flight order: (category, payload ceiling kg, success rate).
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.2),
    ("v1.1", 4500.0, 0.35),
    ("FT", 9600.0, 0.75),
    ("B4", 9600.0, 0.7),
    ("B5", 9600.0, 0.95),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Write `flights_per_booster` launches per booster generation as CSV;
/// returns the number of rows written.
fn write_sample<W: Write>(out: W, seed: u64, flights_per_booster: u32) -> Result<u32> {
    let mut rng = SampleRng(seed);
    let mut writer = csv::Writer::from_writer(out);

    let mut flight_number = 0;
    for (category, ceiling, success_rate) in BOOSTERS {
        for _ in 0..flights_per_booster {
            flight_number += 1;
            let payload_mass = (rng.unit() * ceiling).round();
            let class = u8::from(rng.unit() < success_rate);
            writer
                .serialize(Row {
                    flight_number,
                    launch_site: *rng.pick(&SITES),
                    class,
                    payload_mass,
                    booster_category: category,
                })
                .context("writing sample row")?;
        }
    }
    writer.flush().context("flushing sample CSV")?;
    Ok(flight_number)
}

fn main() -> Result<()> {
    let output_path = "sample_launches.csv";
    let file = File::create(output_path).with_context(|| format!("creating {output_path}"))?;
    let written = write_sample(file, 42, 12)?;

    println!("Wrote {written} launches to {output_path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_file_rows_and_columns() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let written = write_sample(File::create(file.path()).unwrap(), 42, 3).unwrap();
        assert_eq!(written, 15);

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        let headers = reader.headers().unwrap().clone();
        for column in ["Launch Site", "Payload Mass (kg)", "class", "Booster Version Category"] {
            assert!(headers.iter().any(|h| h == column), "missing {column}");
        }

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 15);
        for row in &rows {
            assert!(SITES.contains(&&row[1]));
            assert!(row[2] == *"0" || row[2] == *"1");
            let payload: f64 = row[3].parse().unwrap();
            assert!((0.0..=9600.0).contains(&payload));
        }
    }

    #[test]
    fn test_same_seed_same_file() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write_sample(&mut a, 7, 4).unwrap();
        write_sample(&mut b, 7, 4).unwrap();
        assert_eq!(a, b);
    }
}
