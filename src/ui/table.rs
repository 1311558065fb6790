use eframe::egui::{self, Sense, Ui};
use egui_extras::{Column, TableBuilder};

use crate::config::{TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT, THUMBNAIL_WIDTH};
use crate::data::model::RecipeId;
use crate::state::AppState;

/// Render the filtered recipe list. Clicking a row opens its detail view.
pub fn recipe_table(ui: &mut Ui, state: &mut AppState) {
    let empty_message = match &state.catalog {
        Some(catalog) if catalog.is_empty() => Some("The catalog contains no recipes."),
        Some(_) if state.output.visible.is_empty() => {
            Some("No recipes found matching your criteria.")
        }
        _ => None,
    };
    if let Some(message) = empty_message {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(message);
        });
        return;
    }

    let mut clicked: Option<RecipeId> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .column(Column::exact(THUMBNAIL_WIDTH))
        .column(Column::remainder().at_least(200.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder().at_least(140.0))
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            header.col(|_| {});
            header.col(|ui| {
                ui.strong("Title");
            });
            header.col(|ui| {
                ui.strong("Ready in");
            });
            header.col(|ui| {
                ui.strong("Cuisines");
            });
            header.col(|ui| {
                ui.strong("Diets");
            });
        })
        .body(|mut body| {
            for recipe in state.visible_recipes() {
                body.row(TABLE_ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        if let Some(url) = &recipe.image {
                            ui.add(
                                egui::Image::from_uri(url.as_str())
                                    .max_width(THUMBNAIL_WIDTH)
                                    .max_height(TABLE_ROW_HEIGHT)
                                    .rounding(4.0),
                            );
                        }
                    });
                    row.col(|ui| {
                        ui.label(recipe.title.as_str());
                    });
                    row.col(|ui| {
                        ui.label(match recipe.ready_in_minutes {
                            Some(m) => format!("{m} minutes"),
                            None => "N/A".to_string(),
                        });
                    });
                    row.col(|ui| {
                        ui.label(recipe.cuisines.join(", "));
                    });
                    row.col(|ui| {
                        ui.label(recipe.diets.join(", "));
                    });
                    if row.response().clicked() {
                        clicked = Some(recipe.id);
                    }
                });
            }
        });

    if let Some(id) = clicked {
        state.open_detail(id);
    }
}
