use std::path::Path;

use crate::color::ColumnColors;
use crate::data::classify::{classify, CLASSIFY_WINDOW};
use crate::data::loader;
use crate::data::model::TableData;
use crate::data::select::resolve_index;

// ---------------------------------------------------------------------------
// Wizard screens
// ---------------------------------------------------------------------------

/// Which chart the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Line,
    Scatter,
}

/// Text buffers and candidate list for the variable-selection screen.
#[derive(Debug, Clone, Default)]
pub struct PickVariablesView {
    /// Numeric column candidates, in header order. 1-based indices shown in
    /// the UI refer to positions in this list.
    pub candidates: Vec<String>,
    /// How many variables the user asked for (1..=3).
    pub wanted: usize,
    pub x_input: String,
    pub y_input: String,
    pub z_input: String,
}

/// Columns the user confirmed. `y`/`z` are filled according to `wanted`;
/// no graph type consumes `z`, it is carried for the selection summary only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub wanted: usize,
    pub x: String,
    pub y: Option<String>,
    pub z: Option<String>,
}

/// The geometry request the render screen draws every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSpec {
    Line { column: String },
    Scatter { x: String, y: String },
}

/// The wizard's current screen, with each screen's data held explicitly.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Filename entry / browse / load.
    Load { path_input: String },
    /// "How many variables?" (1–3).
    PickCount,
    /// Classification found nothing usable; only way out is new data.
    NoUsableColumns,
    /// Numbered candidate list plus X/Y/Z index entries.
    PickVariables(PickVariablesView),
    /// Line always offered; Scatter only when two or more variables.
    PickGraphType(Selection),
    /// Chart is drawn from the request every frame.
    Render {
        selection: Selection,
        chart: ChartSpec,
    },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Load {
            path_input: "sample.csv".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state and transitions
// ---------------------------------------------------------------------------

/// The full wizard state, independent of rendering. One transition method
/// per user action; screens never mutate each other's data directly.
#[derive(Default)]
pub struct AppState {
    pub screen: Screen,

    /// Loaded dataset (None until a file loads successfully).
    pub table: Option<TableData>,

    /// Display name of the loaded file, for the top bar.
    pub source_name: Option<String>,

    /// Stable color per numeric candidate column.
    pub colors: ColumnColors,

    /// Status / error message shown in the top bar.
    pub status: Option<String>,
}

impl AppState {
    /// Load a file and, on success, advance to the variable-count screen.
    /// On failure the wizard stays put and the error lands in the status
    /// line, never swallowed.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(table) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                log::info!("Loaded {} rows from {name}", table.len());

                self.status = None;
                self.source_name = Some(name);
                self.table = Some(table);
                self.colors = ColumnColors::default();
                self.screen = Screen::PickCount;
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Record how many variables the user wants and classify the dataset.
    /// Candidates are computed fresh from the current table snapshot.
    pub fn choose_count(&mut self, wanted: usize) {
        let Some(table) = &self.table else {
            return;
        };

        match classify(table, CLASSIFY_WINDOW) {
            Ok(candidates) => {
                self.colors = ColumnColors::new(&candidates);
                self.status = None;
                self.screen = Screen::PickVariables(PickVariablesView {
                    candidates,
                    wanted,
                    ..Default::default()
                });
            }
            Err(e) => {
                self.status = Some(format!("Error: {e}"));
                self.screen = Screen::NoUsableColumns;
            }
        }
    }

    /// Validate the typed X/Y/Z indices against the candidate list. Any
    /// rejection re-prompts via the status line; the candidates stand.
    pub fn confirm_variables(&mut self) {
        let Screen::PickVariables(view) = &self.screen else {
            return;
        };

        let count = view.candidates.len();
        let x = match resolve_index(&view.x_input, count) {
            Ok(i) => view.candidates[i].clone(),
            Err(e) => {
                self.status = Some(format!("X: {e}"));
                return;
            }
        };

        let y = if view.wanted >= 2 {
            match resolve_index(&view.y_input, count) {
                Ok(i) => Some(view.candidates[i].clone()),
                Err(e) => {
                    self.status = Some(format!("Y: {e}"));
                    return;
                }
            }
        } else {
            None
        };

        let z = if view.wanted == 3 {
            match resolve_index(&view.z_input, count) {
                Ok(i) => Some(view.candidates[i].clone()),
                Err(e) => {
                    self.status = Some(format!("Z: {e}"));
                    return;
                }
            }
        } else {
            None
        };

        self.status = None;
        self.screen = Screen::PickGraphType(Selection {
            wanted: view.wanted,
            x,
            y,
            z,
        });
    }

    /// Pick the chart type and move on to rendering.
    pub fn choose_graph(&mut self, kind: GraphKind) {
        let Screen::PickGraphType(selection) = &self.screen else {
            return;
        };
        let chart = match kind {
            GraphKind::Line => ChartSpec::Line {
                column: selection.x.clone(),
            },
            // Scatter needs a Y column; the UI only offers it when one exists.
            GraphKind::Scatter => match &selection.y {
                Some(y) => ChartSpec::Scatter {
                    x: selection.x.clone(),
                    y: y.clone(),
                },
                None => return,
            },
        };
        self.screen = Screen::Render {
            selection: selection.clone(),
            chart,
        };
    }

    /// Back to variable selection with the same dataset, e.g. after an
    /// extraction came up empty. Inputs start blank; candidates are
    /// recomputed from the snapshot (same table → same candidates).
    pub fn repick_variables(&mut self) {
        let wanted = match &self.screen {
            Screen::PickGraphType(sel) | Screen::Render { selection: sel, .. } => sel.wanted,
            _ => return,
        };
        self.choose_count(wanted);
    }

    /// Drop everything downstream of the load screen.
    pub fn restart(&mut self) {
        *self = AppState::default();
    }
}
