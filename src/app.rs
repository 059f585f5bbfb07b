use eframe::egui;

use crate::data::model::Catalog;
use crate::state::{AppState, Screen};
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct WayfinderApp {
    pub state: AppState,
}

impl WayfinderApp {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: AppState::new(catalog),
        }
    }
}

impl eframe::App for WayfinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the current wizard question, or the results ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.screen {
            Screen::Results => results::results_panel(ui, &mut self.state),
            _ => panels::wizard_panel(ui, &mut self.state),
        });
    }
}
