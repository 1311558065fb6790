use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::config::CHART_HEIGHT;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Charts (central panel, above the recipe list)
// ---------------------------------------------------------------------------

/// Render the diet distribution and cooking-time histogram side by side.
pub fn charts(ui: &mut Ui, state: &AppState) {
    let chart = &state.output.chart;
    let y_max = chart.max_count().max(1) as f64;

    ui.columns(2, |cols| {
        cols[0].strong("Diet distribution");
        if chart.category_distribution.is_empty() {
            cols[0].weak("No diet information for the current selection.");
        } else {
            let labels: Vec<String> = chart
                .category_distribution
                .iter()
                .map(|(name, _)| name.clone())
                .collect();
            let bars = chart
                .category_distribution
                .iter()
                .enumerate()
                .map(|(i, (name, count))| {
                    Bar::new(i as f64, *count as f64)
                        .name(name)
                        .fill(state.color_map.color_for(name))
                })
                .collect();
            bar_plot(&mut cols[0], "diet_chart", BarChart::new(bars), labels, y_max);
        }

        cols[1].strong("Cooking time");
        let labels: Vec<String> = chart
            .time_histogram
            .iter()
            .map(|(label, _)| label.to_string())
            .collect();
        let bars = chart
            .time_histogram
            .iter()
            .enumerate()
            .map(|(i, (label, count))| Bar::new(i as f64, *count as f64).name(label))
            .collect();
        bar_plot(
            &mut cols[1],
            "time_chart",
            BarChart::new(bars).color(Color32::LIGHT_BLUE),
            labels,
            y_max,
        );
    });
}

fn bar_plot(ui: &mut Ui, id: &str, chart: BarChart, labels: Vec<String>, y_max: f64) {
    let n = labels.len() as f64;
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .include_x(-0.6)
        .include_x(n - 0.4)
        .include_y(0.0)
        .include_y(y_max * 1.1)
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > f64::EPSILON || i < 0.0 {
                return String::new();
            }
            labels.get(i as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}
