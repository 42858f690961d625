use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Scatter chart data: launches passing the site + payload filters
// ---------------------------------------------------------------------------

/// One launch on the payload/outcome scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// x: payload mass in kg.
    pub payload_mass: f64,
    /// y: outcome class.
    pub outcome: Outcome,
    /// Colour key.
    pub booster_category: String,
    /// Hover data.
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    /// Matching launches in dataset order.
    pub points: Vec<ScatterPoint>,
}

impl ScatterChart {
    /// Group points by booster category (sorted) for one series per legend entry.
    pub fn by_booster(&self) -> BTreeMap<&str, Vec<&ScatterPoint>> {
        let mut series: BTreeMap<&str, Vec<&ScatterPoint>> = BTreeMap::new();
        for p in &self.points {
            series.entry(p.booster_category.as_str()).or_default().push(p);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Return the launches whose payload lies in `range` (inclusive) and whose
/// site passes `selection`.
///
/// Launches without a payload mass never match. A range that misses the
/// data, or has `low > high`, yields no points.
pub fn scatter_filter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = dataset
        .records()
        .iter()
        .filter(|rec| selection.matches(&rec.launch_site))
        .filter_map(|rec| {
            let mass = rec.payload_mass.filter(|m| range.contains(*m))?;
            Some(ScatterPoint {
                payload_mass: mass,
                outcome: rec.outcome,
                booster_category: rec.booster_category.clone(),
                launch_site: rec.launch_site.clone(),
            })
        })
        .collect();

    ScatterChart {
        title: format!("Payload vs Success Rate ({selection})"),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 0.0, 0, "v1.0"),
            record("CCAFS LC-40", 2500.0, 1, "FT"),
            record("KSC LC-39A", 5300.0, 1, "FT"),
            record("VAFB SLC-4E", 9600.0, 0, "B4"),
        ])
    }

    #[test]
    fn test_full_range_all_sites_returns_everything() {
        let ds = dataset();
        let chart = scatter_filter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(chart.len(), ds.len());
        assert_eq!(chart.title, "Payload vs Success Rate (All Sites)");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let chart = scatter_filter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(2500.0, 5300.0),
        );
        let masses: Vec<f64> = chart.points.iter().map(|p| p.payload_mass).collect();
        assert_eq!(masses, vec![2500.0, 5300.0]);
    }

    #[test]
    fn test_site_and_range_combine() {
        let chart = scatter_filter(
            &dataset(),
            &SiteSelection::Site("CCAFS LC-40".into()),
            PayloadRange::new(1000.0, 10000.0),
        );
        assert_eq!(chart.title, "Payload vs Success Rate (CCAFS LC-40)");
        assert_eq!(chart.len(), 1);
        let p = &chart.points[0];
        assert_eq!(p.payload_mass, 2500.0);
        assert_eq!(p.outcome, Outcome::Success);
        assert_eq!(p.booster_category, "FT");
        assert_eq!(p.launch_site, "CCAFS LC-40");
    }

    #[test]
    fn test_low_above_max_payload_is_empty() {
        let ds = dataset();
        let above = ds.max_payload().unwrap() + 1.0;
        let chart = scatter_filter(&ds, &SiteSelection::All, PayloadRange::new(above, 10000.0));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let chart = scatter_filter(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(6000.0, 1000.0),
        );
        assert!(chart.is_empty());
    }

    #[test]
    fn test_blank_payload_never_on_scatter() {
        let mut blank = record("KSC LC-39A", 0.0, 1, "FT");
        blank.payload_mass = None;
        let ds = LaunchDataset::from_records(vec![blank, record("KSC LC-39A", 300.0, 0, "FT")]);
        let chart = scatter_filter(&ds, &SiteSelection::All, PayloadRange::new(0.0, 10000.0));
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.points[0].payload_mass, 300.0);
    }

    #[test]
    fn test_by_booster_groups_sorted() {
        let chart = scatter_filter(&dataset(), &SiteSelection::All, PayloadRange::new(0.0, 1e4));
        let series = chart.by_booster();
        assert_eq!(series.keys().copied().collect::<Vec<_>>(), vec!["B4", "FT", "v1.0"]);
        assert_eq!(series["FT"].len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let ds = dataset();
        let sel = SiteSelection::Site("KSC LC-39A".into());
        let range = PayloadRange::new(0.0, 6000.0);
        assert_eq!(
            scatter_filter(&ds, &sel, range),
            scatter_filter(&ds, &sel, range)
        );
    }
}
