use eframe::egui;

use crate::state::AppState;
use crate::ui::screens;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct ChartWizApp {
    pub state: AppState,
}

impl eframe::App for ChartWizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: app name, dataset summary, errors ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            screens::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the current wizard screen ----
        egui::CentralPanel::default().show(ctx, |ui| {
            screens::central_panel(ui, &mut self.state);
        });
    }
}
