use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::{pie_aggregation, PieChart};
use crate::data::filter::{scatter_filter, ScatterChart};
use crate::data::model::{LaunchDataset, PayloadRange, SiteSelection};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset; replaced wholesale when another file is opened.
    pub dataset: LaunchDataset,

    /// Current dropdown value.
    pub site: SiteSelection,

    /// Current payload range selection.
    pub range: PayloadRange,

    /// Derived chart data for the current controls (cached).
    pub pie: PieChart,
    pub scatter: ScatterChart,

    /// Colours of the booster categories of `dataset`.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, dataset: LaunchDataset) -> Self {
        let site = SiteSelection::All;
        let range = dataset.full_payload_range();
        let pie = pie_aggregation(&dataset, &site);
        let scatter = scatter_filter(&dataset, &site, range);
        let booster_colors = ColorMap::new(dataset.booster_categories());

        Self {
            config,
            dataset,
            site,
            range,
            pie,
            scatter,
            booster_colors,
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset: reset the controls and recompute.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.booster_colors = ColorMap::new(dataset.booster_categories());
        self.range = dataset.full_payload_range();
        self.site = SiteSelection::All;
        self.dataset = dataset;
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Dropdown changed: both charts depend on the site.
    pub fn select_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Lower slider moved; drags the upper bound along so `low <= high`.
    pub fn set_range_low(&mut self, low: f64) {
        let high = self.range.high.max(low);
        self.set_range(PayloadRange::new(low, high));
    }

    /// Upper slider moved; drags the lower bound along so `low <= high`.
    pub fn set_range_high(&mut self, high: f64) {
        let low = self.range.low.min(high);
        self.set_range(PayloadRange::new(low, high));
    }

    /// Range changed: only the scatter depends on it.
    pub fn set_range(&mut self, range: PayloadRange) {
        if range == self.range {
            return;
        }
        self.range = range;
        self.refresh_scatter();
    }

    /// Put the range back to the observed payload bounds.
    pub fn reset_range(&mut self) {
        self.set_range(self.dataset.full_payload_range());
    }

    fn refresh_pie(&mut self) {
        self.pie = pie_aggregation(&self.dataset, &self.site);
        log::debug!("pie for {}: {} slices", self.site, self.pie.slices.len());
    }

    fn refresh_scatter(&mut self) {
        self.scatter = scatter_filter(&self.dataset, &self.site, self.range);
        log::debug!(
            "scatter for {} in [{}, {}]: {} points",
            self.site,
            self.range.low,
            self.range.high,
            self.scatter.len()
        );
    }
}
