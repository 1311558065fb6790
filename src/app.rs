use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;

use crate::data::provider::FileProvider;
use crate::data::retrieval::Retriever;
use crate::state::{AppState, View};
use crate::ui::{detail, panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RecipeDashApp {
    pub state: AppState,
}

impl RecipeDashApp {
    /// Wire retrieval wake-ups to the UI and optionally start loading a
    /// catalog right away.
    pub fn new(ctx: &egui::Context, startup_catalog: Option<PathBuf>) -> Self {
        let repaint = ctx.clone();
        let retriever = Retriever::default().with_notify(move || repaint.request_repaint());
        let mut state = AppState::new(retriever);
        if let Some(path) = startup_catalog {
            log::info!("Loading startup catalog {}", path.display());
            state.set_provider(Arc::new(FileProvider::new(path)));
        }
        Self { state }
    }
}

impl eframe::App for RecipeDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters + stats ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts + list, or detail ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Detail(id) => detail::detail_view(ui, &mut self.state, id),
            View::List => {
                if self.state.catalog.is_none() {
                    ui.centered_and_justified(|ui| {
                        if self.state.loading {
                            ui.spinner();
                        } else {
                            ui.heading("Open a recipe catalog to begin  (File → Open…)");
                        }
                    });
                    return;
                }
                plot::charts(ui, &self.state);
                ui.separator();
                table::recipe_table(ui, &mut self.state);
            }
        });
    }
}
