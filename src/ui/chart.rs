use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Sense, Stroke, Ui};

use crate::color::ColumnColors;
use crate::data::error::PlotError;
use crate::data::model::TableData;
use crate::data::series::{self, Viewport, MAX_LINE_POINTS, MAX_SCATTER_PAIRS};
use crate::state::ChartSpec;

// ---------------------------------------------------------------------------
// Chart rendering (central panel)
// ---------------------------------------------------------------------------

// Space between the allocated rect and the plot viewport, for labels.
const MARGIN_LEFT: f32 = 64.0;
const MARGIN_RIGHT: f32 = 28.0;
const MARGIN_TOP: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 44.0;

const MARKER_RADIUS: f32 = 2.5;

/// Theme-derived colours for frame text and axis strokes.
#[derive(Clone, Copy)]
struct LabelColors {
    text: Color32,
    weak: Color32,
}

/// Draw the requested chart into the remaining panel space.
///
/// All coordinate mapping happens in the data layer; this function only
/// places the returned pixel geometry, the axes, and the labels. An empty
/// extraction is painted as an explicit error message, never as a blank
/// chart, and the error is handed back so the caller can offer a way out.
pub fn draw_chart(
    ui: &mut Ui,
    table: &TableData,
    chart: &ChartSpec,
    colors: &ColumnColors,
) -> Result<(), PlotError> {
    let labels = LabelColors {
        text: ui.visuals().text_color(),
        weak: ui.visuals().weak_text_color(),
    };

    let (response, painter) = ui.allocate_painter(ui.available_size_before_wrap(), Sense::hover());
    let rect = response.rect;
    if rect.width() < MARGIN_LEFT + MARGIN_RIGHT + 1.0
        || rect.height() < MARGIN_TOP + MARGIN_BOTTOM + 1.0
    {
        return Ok(());
    }

    let view = Viewport {
        left: (rect.left() + MARGIN_LEFT) as f64,
        top: (rect.top() + MARGIN_TOP) as f64,
        right: (rect.right() - MARGIN_RIGHT) as f64,
        bottom: (rect.bottom() - MARGIN_BOTTOM) as f64,
    };

    let result = match chart {
        ChartSpec::Line { column } => draw_line(&painter, table, column, &view, colors, labels),
        ChartSpec::Scatter { x, y } => draw_scatter(&painter, table, x, y, &view, colors, labels),
    };

    if let Err(e) = &result {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            format!("ERROR: {e}"),
            FontId::proportional(16.0),
            Color32::RED,
        );
    }
    result
}

fn draw_line(
    painter: &Painter,
    table: &TableData,
    column: &str,
    view: &Viewport,
    colors: &ColumnColors,
    labels: LabelColors,
) -> Result<(), PlotError> {
    let geometry = series::line_chart(table, column, view, MAX_LINE_POINTS)?;

    // Axis frame first, marks on top.
    draw_frame(painter, view, &format!("Line using {column}"), column, column, labels);
    y_span_labels(painter, view, geometry.span, labels.weak);
    // The horizontal axis is the record index, 1-based like the UI.
    x_axis_labels(
        painter,
        view,
        "1",
        &geometry.values.len().to_string(),
        labels.weak,
    );

    let color = colors.color_for(column);
    let points: Vec<Pos2> = geometry
        .points
        .iter()
        .map(|p| Pos2::new(p.x as f32, p.y as f32))
        .collect();

    for pair in points.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(1.5, color));
    }
    // Markers as well, so a single-point series is still visible.
    for &p in &points {
        painter.circle_filled(p, MARKER_RADIUS, color);
    }
    Ok(())
}

fn draw_scatter(
    painter: &Painter,
    table: &TableData,
    x_column: &str,
    y_column: &str,
    view: &Viewport,
    colors: &ColumnColors,
    labels: LabelColors,
) -> Result<(), PlotError> {
    let geometry = series::scatter_chart(table, x_column, y_column, view, MAX_SCATTER_PAIRS)?;

    draw_frame(
        painter,
        view,
        &format!("Scatter using {x_column} vs {y_column}"),
        x_column,
        y_column,
        labels,
    );
    y_span_labels(painter, view, geometry.y_span, labels.weak);
    x_axis_labels(
        painter,
        view,
        &tick_label(geometry.x_span.0),
        &tick_label(geometry.x_span.1),
        labels.weak,
    );

    // Unconnected markers only.
    let color = colors.color_for(y_column);
    for p in &geometry.points {
        painter.circle_filled(Pos2::new(p.x as f32, p.y as f32), MARKER_RADIUS, color);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Frame and labels
// ---------------------------------------------------------------------------

fn draw_frame(
    painter: &Painter,
    view: &Viewport,
    title: &str,
    x_label: &str,
    y_label: &str,
    labels: LabelColors,
) {
    let left = view.left as f32;
    let right = view.right as f32;
    let top = view.top as f32;
    let bottom = view.bottom as f32;

    let axis = Stroke::new(1.0, labels.weak);
    painter.line_segment([Pos2::new(left, bottom), Pos2::new(right, bottom)], axis);
    painter.line_segment([Pos2::new(left, bottom), Pos2::new(left, top)], axis);

    painter.text(
        Pos2::new((left + right) / 2.0, top - 20.0),
        Align2::CENTER_BOTTOM,
        title,
        FontId::proportional(16.0),
        labels.text,
    );
    painter.text(
        Pos2::new((left + right) / 2.0, bottom + 24.0),
        Align2::CENTER_TOP,
        x_label,
        FontId::proportional(13.0),
        labels.text,
    );
    painter.text(
        Pos2::new(left - 4.0, top - 4.0),
        Align2::LEFT_BOTTOM,
        y_label,
        FontId::proportional(13.0),
        labels.text,
    );
}

fn y_span_labels(painter: &Painter, view: &Viewport, (vmin, vmax): (f64, f64), color: Color32) {
    let font = FontId::proportional(11.0);
    painter.text(
        Pos2::new(view.left as f32 - 6.0, view.bottom as f32),
        Align2::RIGHT_CENTER,
        tick_label(vmin),
        font.clone(),
        color,
    );
    painter.text(
        Pos2::new(view.left as f32 - 6.0, view.top as f32),
        Align2::RIGHT_CENTER,
        tick_label(vmax),
        font,
        color,
    );
}

fn x_axis_labels(painter: &Painter, view: &Viewport, first: &str, last: &str, color: Color32) {
    let font = FontId::proportional(11.0);
    painter.text(
        Pos2::new(view.left as f32, view.bottom as f32 + 6.0),
        Align2::CENTER_TOP,
        first,
        font.clone(),
        color,
    );
    painter.text(
        Pos2::new(view.right as f32, view.bottom as f32 + 6.0),
        Align2::CENTER_TOP,
        last,
        font,
        color,
    );
}

fn tick_label(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e12 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}
