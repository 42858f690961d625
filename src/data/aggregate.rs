use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Pie chart data
// ---------------------------------------------------------------------------

/// What a pie slice stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceKey {
    /// Per-site success rate (all sites view); the label is the site name.
    Site,
    /// Outcome count for a single site.
    Outcome(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub key: SliceKey,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Share of the whole pie for each slice, in slice order.
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        if total <= 0.0 {
            return vec![0.0; self.slices.len()];
        }
        self.slices.iter().map(|s| s.value / total).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Build the success pie for the current site selection.
///
/// * `All` – one slice per site, sized by the mean `class` value of its
///   launches (its success rate), ordered by site name.
/// * `Site(s)` – one slice per outcome present at `s`, sized by launch count,
///   failure before success.
///
/// A selection with no matching launches yields a pie with no slices.
pub fn pie_aggregation(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => {
            // site → (sum of class, launches)
            let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
            for rec in dataset.records() {
                let entry = groups.entry(rec.launch_site.as_str()).or_default();
                entry.0 += rec.outcome.as_f64();
                entry.1 += 1;
            }

            let slices = groups
                .into_iter()
                .map(|(site, (sum, n))| PieSlice {
                    key: SliceKey::Site,
                    label: site.to_string(),
                    value: sum / n as f64,
                })
                .collect();

            PieChart {
                title: "Success Rate by Launch Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
            for rec in dataset.records().iter().filter(|r| &r.launch_site == site) {
                *counts.entry(rec.outcome).or_default() += 1;
            }

            let slices = counts
                .into_iter()
                .map(|(outcome, n)| PieSlice {
                    key: SliceKey::Outcome(outcome),
                    label: outcome.to_string(),
                    value: n as f64,
                })
                .collect();

            PieChart {
                title: format!("Success vs Failure at {site}"),
                slices,
            }
        }
    }
}
