use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, ScrollArea, TextEdit, Ui};

use crate::color::ColumnColors;
use crate::data::model::TableData;
use crate::state::{AppState, ChartSpec, GraphKind, PickVariablesView, Screen, Selection};
use crate::ui::chart;

// ---------------------------------------------------------------------------
// Wizard screens
// ---------------------------------------------------------------------------

/// What a screen asked the wizard to do this frame. Screens render and emit;
/// transitions are applied in exactly one place.
enum Action {
    Load(PathBuf),
    ChooseCount(usize),
    ConfirmVariables,
    ChooseGraph(GraphKind),
    RepickVariables,
    Restart,
}

/// Render the screen matching the wizard's current state and apply whatever
/// transition the user triggered.
pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    let mut action = None;

    match &mut state.screen {
        Screen::Load { path_input } => action = load_screen(ui, path_input),
        Screen::PickCount => action = pick_count_screen(ui),
        Screen::NoUsableColumns => action = no_columns_screen(ui),
        Screen::PickVariables(view) => action = pick_variables_screen(ui, view, &state.colors),
        Screen::PickGraphType(selection) => action = pick_graph_screen(ui, selection),
        Screen::Render { chart: spec, .. } => {
            if let Some(table) = &state.table {
                action = render_screen(ui, table, spec, &state.colors);
            }
        }
    }

    if let Some(action) = action {
        apply(state, action);
    }
}

fn apply(state: &mut AppState, action: Action) {
    match action {
        Action::Load(path) => state.load_from_path(&path),
        Action::ChooseCount(n) => state.choose_count(n),
        Action::ConfirmVariables => state.confirm_variables(),
        Action::ChooseGraph(kind) => state.choose_graph(kind),
        Action::RepickVariables => state.repick_variables(),
        Action::Restart => state.restart(),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// App name, dataset summary, restart, and the error line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    let mut restart = false;

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("ChartWiz");

        if let (Some(name), Some(table)) = (&state.source_name, &state.table) {
            ui.separator();
            ui.label(format!("{name}, {} rows", table.len()));
            ui.separator();
            if ui.button("Restart").clicked() {
                restart = true;
            }
        }

        if let Some(msg) = &state.status {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });

    if restart {
        state.restart();
    }
}

// ---------------------------------------------------------------------------
// Screen 1: load data
// ---------------------------------------------------------------------------

fn load_screen(ui: &mut Ui, path_input: &mut String) -> Option<Action> {
    let mut action = None;

    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Load a dataset");
        ui.add_space(4.0);
        ui.label("Delimited text with a header row (.csv, .tsv).");
    });

    ui.add_space(16.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label("File:");
        ui.add(TextEdit::singleline(path_input).desired_width(320.0));
        if ui.button("Load").clicked() {
            action = Some(Action::Load(PathBuf::from(path_input.trim())));
        }
        if ui.button("Browse…").clicked() {
            if let Some(path) = pick_file_dialog() {
                action = Some(Action::Load(path));
            }
        }
    });

    action
}

fn pick_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open delimited data")
        .add_filter("Delimited text", &["csv", "tsv", "tab"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .pick_file()
}

// ---------------------------------------------------------------------------
// Screen 2: how many variables
// ---------------------------------------------------------------------------

fn pick_count_screen(ui: &mut Ui) -> Option<Action> {
    let mut action = None;

    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("How many variables do you want?");
        ui.add_space(16.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("1 variable").clicked() {
                action = Some(Action::ChooseCount(1));
            }
            if ui.button("2 variables").clicked() {
                action = Some(Action::ChooseCount(2));
            }
            if ui.button("3 variables").clicked() {
                action = Some(Action::ChooseCount(3));
            }
        });
    });

    action
}

// ---------------------------------------------------------------------------
// Dead end: nothing to plot in this dataset
// ---------------------------------------------------------------------------

fn no_columns_screen(ui: &mut Ui) -> Option<Action> {
    let mut action = None;

    ui.add_space(32.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("No numeric columns detected in this dataset.")
                .color(Color32::RED)
                .size(16.0),
        );
        ui.add_space(4.0);
        ui.label("A column qualifies only when every sampled value parses as a number.");
        ui.add_space(16.0);
        if ui.button("Load a different file").clicked() {
            action = Some(Action::Restart);
        }
    });

    action
}

// ---------------------------------------------------------------------------
// Screen 3: pick X/Y/Z variables
// ---------------------------------------------------------------------------

fn pick_variables_screen(
    ui: &mut Ui,
    view: &mut PickVariablesView,
    colors: &ColumnColors,
) -> Option<Action> {
    let mut action = None;

    ui.add_space(12.0);
    ui.heading(format!("Select {} variable(s)", view.wanted));
    ui.add_space(8.0);
    ui.label("Numeric columns:");

    ScrollArea::vertical()
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            for (i, name) in view.candidates.iter().enumerate() {
                ui.label(
                    RichText::new(format!("{}. {name}", i + 1)).color(colors.color_for(name)),
                );
            }
        });

    ui.separator();

    index_entry(ui, "X index:", &mut view.x_input);
    if view.wanted >= 2 {
        index_entry(ui, "Y index:", &mut view.y_input);
    }
    if view.wanted == 3 {
        index_entry(ui, "Z index:", &mut view.z_input);
    }

    ui.add_space(8.0);
    if ui.button("Confirm").clicked() {
        action = Some(Action::ConfirmVariables);
    }

    action
}

fn index_entry(ui: &mut Ui, label: &str, buffer: &mut String) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        ui.add(TextEdit::singleline(buffer).desired_width(48.0));
    });
}

// ---------------------------------------------------------------------------
// Screen 4: choose graph type
// ---------------------------------------------------------------------------

fn pick_graph_screen(ui: &mut Ui, selection: &Selection) -> Option<Action> {
    let mut action = None;

    ui.add_space(24.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Choose graph type");
        ui.add_space(4.0);
        ui.label(selection_summary(selection));
        ui.add_space(16.0);
        ui.horizontal(|ui: &mut Ui| {
            if ui.button("Line (index vs X)").clicked() {
                action = Some(Action::ChooseGraph(GraphKind::Line));
            }
            if selection.y.is_some() && ui.button("Scatter (X vs Y)").clicked() {
                action = Some(Action::ChooseGraph(GraphKind::Scatter));
            }
        });
    });

    action
}

fn selection_summary(selection: &Selection) -> String {
    let mut summary = format!("X: {}", selection.x);
    if let Some(y) = &selection.y {
        summary.push_str(&format!(", Y: {y}"));
    }
    if let Some(z) = &selection.z {
        summary.push_str(&format!(", Z: {z}"));
    }
    summary
}

// ---------------------------------------------------------------------------
// Screen 5: the chart
// ---------------------------------------------------------------------------

fn render_screen(
    ui: &mut Ui,
    table: &TableData,
    spec: &ChartSpec,
    colors: &ColumnColors,
) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Change variables").clicked() {
            action = Some(Action::RepickVariables);
        }
    });

    // An empty extraction is painted as an error in the chart area; the
    // button above is the way back to a different selection.
    let _ = chart::draw_chart(ui, table, spec, colors);

    action
}
