use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::config::DETAIL_IMAGE_HEIGHT;
use crate::data::model::{RecipeDetail, RecipeId};
use crate::sanitize::html_to_text;
use crate::state::{AppState, DetailState};

/// Render the detail view for one recipe.
pub fn detail_view(ui: &mut Ui, state: &mut AppState, id: RecipeId) {
    if ui.button("← Back to recipes").clicked() {
        state.back_to_list();
        return;
    }
    ui.separator();

    match &state.detail {
        None | Some(DetailState::Loading) => {
            ui.horizontal(|ui: &mut Ui| {
                ui.spinner();
                ui.label(format!("Loading recipe {id}..."));
            });
        }
        Some(DetailState::Failed(msg)) => {
            ui.label(RichText::new(format!("Error: {msg}")).color(Color32::RED));
        }
        Some(DetailState::Loaded(detail)) => {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| recipe_body(ui, detail));
        }
    }
}

fn recipe_body(ui: &mut Ui, detail: &RecipeDetail) {
    ui.heading(detail.title.as_str());

    if let Some(url) = &detail.image {
        ui.add(
            egui::Image::from_uri(url.as_str())
                .max_width(ui.available_width())
                .max_height(DETAIL_IMAGE_HEIGHT)
                .rounding(4.0),
        );
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        if let Some(m) = detail.ready_in_minutes {
            ui.label(format!("Ready in: {m} minutes"));
        }
        if let Some(s) = detail.servings {
            ui.label(format!("Servings: {s}"));
        }
        if let Some(h) = detail.health_score {
            ui.label(format!("Health score: {h:.0}"));
        }
    });

    let flags = detail.diet_flags();
    if !flags.is_empty() {
        ui.label(RichText::new(flags.join(" · ")).color(Color32::LIGHT_GREEN));
    }
    if !detail.cuisines.is_empty() {
        ui.label(format!("Cuisines: {}", detail.cuisines.join(", ")));
    }
    if !detail.diets.is_empty() {
        ui.label(format!("Diets: {}", detail.diets.join(", ")));
    }
    if let Some(url) = &detail.source_url {
        ui.hyperlink_to("Original recipe", url);
    }

    if let Some(summary) = &detail.summary {
        ui.add_space(8.0);
        ui.strong("Summary");
        ui.label(html_to_text(summary));
    }

    if !detail.extended_ingredients.is_empty() {
        ui.add_space(8.0);
        ui.strong("Ingredients");
        for ingredient in &detail.extended_ingredients {
            let line = if ingredient.original.is_empty() {
                ingredient.name.clone().unwrap_or_default()
            } else {
                ingredient.original.clone()
            };
            ui.label(format!("• {line}"));
        }
    }

    if let Some(instructions) = &detail.instructions {
        ui.add_space(8.0);
        ui.strong("Instructions");
        ui.label(html_to_text(instructions));
    }
}
