use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::provider::FileProvider;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filters and summary cards
// ---------------------------------------------------------------------------

/// Render the left panel: search box, cuisine selector, stat cards.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut query = state.criteria.query.clone();
    ui.add(
        egui::TextEdit::singleline(&mut query)
            .hint_text("Search recipes...")
            .desired_width(f32::INFINITY),
    );
    state.set_query(&query);

    ui.add_space(6.0);
    ui.label("Filter by Cuisine:");
    let current = state.criteria.cuisine.clone();
    let selected_text = if current.is_empty() {
        "All Cuisines"
    } else {
        current.as_str()
    };
    let mut chosen: Option<String> = None;
    egui::ComboBox::from_id_salt("cuisine_select")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_empty(), "All Cuisines").clicked() {
                chosen = Some(String::new());
            }
            for option in state.cuisine_options() {
                if ui.selectable_label(current == option, option.as_str()).clicked() {
                    chosen = Some(option);
                }
            }
        });
    if let Some(cuisine) = chosen {
        state.set_cuisine(&cuisine);
    }

    ui.add_space(12.0);
    ui.heading("Summary");
    ui.separator();

    let stats = &state.output.stats;
    stat_card(ui, "Total Recipes", &stats.total_records.to_string());
    stat_card(ui, "Avg. Cooking Time", &stats.average_label());
    stat_card(ui, "Most Common Diet", stats.most_common_diet());

    if state.catalog.is_some() {
        ui.add_space(4.0);
        ui.weak(format!(
            "{} of {} recipes match",
            stats.total_records, state.output.catalog_stats.total_records
        ));
    }
}

fn stat_card(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).small());
        ui.label(RichText::new(value).heading().strong());
    });
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.has_provider(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if state.loading {
            ui.spinner();
            ui.label("Loading recipes...");
        } else if let Some(catalog) = &state.catalog {
            ui.label(format!(
                "{} recipes loaded, {} visible",
                catalog.len(),
                state.output.visible.len()
            ));
            if catalog.excluded() > 0 {
                ui.label(
                    RichText::new(format!("{} malformed skipped", catalog.excluded()))
                        .color(Color32::YELLOW),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open recipe catalog")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening catalog {}", path.display());
        state.set_provider(Arc::new(FileProvider::new(path)));
    }
}
