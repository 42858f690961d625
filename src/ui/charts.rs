use std::f64::consts::TAU;

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::{outcome_color, sequential_blues, ColorMap};
use crate::data::aggregate::{PieChart, SliceKey};
use crate::data::filter::ScatterChart;

/// Wedges wider than this are split so every polygon stays convex.
const MAX_WEDGE_ANGLE: f64 = TAU / 4.0;
const ARC_STEP: f64 = TAU / 180.0;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Points of the wedge from `start` to `end` (radians) of the unit circle.
fn wedge(start: f64, end: f64) -> Vec<[f64; 2]> {
    let steps = ((end - start) / ARC_STEP).ceil().max(1.0) as usize;
    let mut pts = Vec::with_capacity(steps + 2);
    pts.push([0.0, 0.0]);
    for i in 0..=steps {
        let a = start + (end - start) * i as f64 / steps as f64;
        pts.push([a.cos(), a.sin()]);
    }
    pts
}

/// Text shown instead of the pie when there is nothing to draw.
fn pie_placeholder(pie: &PieChart) -> Option<&'static str> {
    if pie.is_empty() {
        Some("No launches for this selection")
    } else if pie.total() <= 0.0 {
        // Every site has a zero success rate.
        Some("No successful launches")
    } else {
        None
    }
}

/// Render the success pie.
pub fn pie_chart(ui: &mut Ui, pie: &PieChart) {
    ui.label(RichText::new(&pie.title).strong().size(16.0));

    if let Some(message) = pie_placeholder(pie) {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(message);
        });
        return;
    }

    let blues = sequential_blues(pie.slices.len());
    let fractions = pie.fractions();

    Plot::new("success_pie")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            // Clockwise from twelve o'clock.
            let mut angle = TAU / 4.0;
            for (i, (slice, fraction)) in pie.slices.iter().zip(&fractions).enumerate() {
                let color = match &slice.key {
                    SliceKey::Site => blues[i],
                    SliceKey::Outcome(outcome) => outcome_color(*outcome),
                };
                let end = angle - fraction * TAU;

                let mut from = angle;
                while from > end {
                    let to = (from - MAX_WEDGE_ANGLE).max(end);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::from(wedge(to, from)))
                            .name(&slice.label)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, color)),
                    );
                    from = to;
                }

                if *fraction >= 0.03 {
                    let mid = (angle + end) / 2.0;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                            RichText::new(format!("{:.1}%", fraction * 100.0))
                                .color(Color32::WHITE)
                                .strong(),
                        )
                        .name(&slice.label),
                    );
                }
                angle = end;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart (payload vs outcome)
// ---------------------------------------------------------------------------

/// Render the payload/outcome scatter, one series per booster category.
pub fn scatter_chart(ui: &mut Ui, scatter: &ScatterChart, colors: &ColorMap) {
    ui.label(RichText::new(&scatter.title).strong().size(16.0));

    let series = scatter.by_booster();

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            if name.is_empty() {
                return String::new();
            }
            // Site is hover data: find the launches under the cursor.
            let sites: Vec<&str> = scatter
                .points
                .iter()
                .filter(|p| {
                    p.booster_category == name
                        && p.payload_mass == value.x
                        && p.outcome.as_f64() == value.y
                })
                .map(|p| p.launch_site.as_str())
                .collect();
            format!(
                "{name}\npayload: {:.0} kg\nclass: {}\nsite: {}",
                value.x,
                value.y,
                sites.join(", ")
            )
        })
        .show(ui, |plot_ui| {
            for (booster, points) in &series {
                let coords: PlotPoints = points
                    .iter()
                    .map(|p| [p.payload_mass, p.outcome.as_f64()])
                    .collect();
                plot_ui.points(
                    Points::new(coords)
                        .name(*booster)
                        .color(colors.color_for(booster))
                        .radius(4.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::pie_aggregation;
    use crate::data::model::tests::record;
    use crate::data::model::{LaunchDataset, SiteSelection};

    #[test]
    fn test_placeholder_distinguishes_empty_from_all_failures() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 100.0, 0, "FT"),
            record("B", 200.0, 0, "FT"),
        ]);
        let all = pie_aggregation(&ds, &SiteSelection::All);
        assert_eq!(all.slices.len(), 2);
        assert_eq!(pie_placeholder(&all), Some("No successful launches"));

        let unknown = pie_aggregation(&ds, &SiteSelection::Site("Mars".into()));
        assert_eq!(pie_placeholder(&unknown), Some("No launches for this selection"));

        // A single site with only failures still draws its failure slice.
        let site_a = pie_aggregation(&ds, &SiteSelection::Site("A".into()));
        assert_eq!(pie_placeholder(&site_a), None);
    }

    #[test]
    fn test_wedge_starts_at_center_and_stays_on_circle() {
        let pts = wedge(0.0, TAU / 8.0);
        assert_eq!(pts[0], [0.0, 0.0]);
        for p in &pts[1..] {
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!((r - 1.0).abs() < 1e-12);
        }
        let last = pts[pts.len() - 1];
        assert!((last[0] - (TAU / 8.0).cos()).abs() < 1e-12);
    }
}
