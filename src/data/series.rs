use super::error::PlotError;
use super::model::{numeric_cell, TableData};

// ---------------------------------------------------------------------------
// Extraction – records → capped float series
// ---------------------------------------------------------------------------

/// Cap on points kept for a line chart.
pub const MAX_LINE_POINTS: usize = 50;
/// Cap on pairs kept for a scatter chart.
pub const MAX_SCATTER_PAIRS: usize = 100;

/// Pull a capped float series out of one column.
///
/// Scans every record in file order (not just the classifier's sample
/// window), skips records whose value is missing, blank, or unparseable,
/// and stops once `max_points` values have been kept. The output is a
/// filtered projection: skipped rows leave no gaps.
pub fn extract_series(table: &TableData, column: &str, max_points: usize) -> Vec<f64> {
    let mut values = Vec::new();
    for record in &table.records {
        if values.len() >= max_points {
            break;
        }
        if let Some(v) = numeric_cell(record, column) {
            values.push(v);
        }
    }
    values
}

/// Pull two equal-length float series out of a column pair.
///
/// Paired filter: a record contributes only when BOTH columns yield a usable
/// value, so a row failing on either side is dropped from both outputs.
pub fn extract_pairs(
    table: &TableData,
    x_column: &str,
    y_column: &str,
    max_pairs: usize,
) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for record in &table.records {
        if xs.len() >= max_pairs {
            break;
        }
        let (Some(x), Some(y)) = (
            numeric_cell(record, x_column),
            numeric_cell(record, y_column),
        ) else {
            continue;
        };
        xs.push(x);
        ys.push(y);
    }
    (xs, ys)
}

// ---------------------------------------------------------------------------
// Normalization – value ranges → viewport pixels
// ---------------------------------------------------------------------------

/// The pixel rectangle a chart is mapped into. Pixel y grows downward, so
/// `top < bottom` and larger data values land closer to `top`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// An (x, y) position in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Observed `(min, max)` of a non-empty series, widened by exactly 1.0 on
/// each side when the range is degenerate (all values identical, including
/// the single-value case) so mapping never divides by zero and a constant
/// series renders on the midline.
fn value_span(values: &[f64]) -> (f64, f64) {
    let mut vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if vmin == vmax {
        vmin -= 1.0;
        vmax += 1.0;
    }
    (vmin, vmax)
}

/// Map a value from `[vmin, vmax]` onto the vertical pixel span, inverted
/// so that `vmax` lands on `top`.
fn map_y(v: f64, (vmin, vmax): (f64, f64), viewport: &Viewport) -> f64 {
    viewport.bottom - (v - vmin) / (vmax - vmin) * (viewport.bottom - viewport.top)
}

/// Map a value from `[vmin, vmax]` onto the horizontal pixel span.
fn map_x(v: f64, (vmin, vmax): (f64, f64), viewport: &Viewport) -> f64 {
    viewport.left + (v - vmin) / (vmax - vmin) * (viewport.right - viewport.left)
}

// ---------------------------------------------------------------------------
// Chart geometry
// ---------------------------------------------------------------------------

/// Geometry for a single-series line chart. The renderer marks every point
/// and connects consecutive points with straight segments, so a one-point
/// series is still visible.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    /// The extracted values, in record order.
    pub values: Vec<f64>,
    /// Value span the y axis was normalized against (after widening).
    pub span: (f64, f64),
    /// One pixel position per value.
    pub points: Vec<PixelPoint>,
}

/// Geometry for a two-series scatter chart: unconnected markers only.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Axis spans after widening, x then y.
    pub x_span: (f64, f64),
    pub y_span: (f64, f64),
    pub points: Vec<PixelPoint>,
}

/// Build line-chart geometry for one column.
///
/// Horizontal position is by index: with `n` points, index 0 maps exactly to
/// `viewport.left` and index `n - 1` exactly to `viewport.right` (a single
/// point sits at `left`). Vertical position interpolates the value against
/// the observed span.
pub fn line_chart(
    table: &TableData,
    column: &str,
    viewport: &Viewport,
    max_points: usize,
) -> Result<LineChart, PlotError> {
    let values = extract_series(table, column, max_points);
    if values.is_empty() {
        return Err(PlotError::EmptySeries(column.to_string()));
    }

    let span = value_span(&values);
    let n = values.len();
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n == 1 {
                viewport.left
            } else {
                viewport.left + (viewport.right - viewport.left) * i as f64 / (n - 1) as f64
            };
            PixelPoint {
                x,
                y: map_y(v, span, viewport),
            }
        })
        .collect();

    Ok(LineChart {
        values,
        span,
        points,
    })
}

/// Build scatter-chart geometry for a column pair. Each axis interpolates
/// against its own independently widened span.
pub fn scatter_chart(
    table: &TableData,
    x_column: &str,
    y_column: &str,
    viewport: &Viewport,
    max_pairs: usize,
) -> Result<ScatterChart, PlotError> {
    let (xs, ys) = extract_pairs(table, x_column, y_column, max_pairs);
    if xs.is_empty() {
        return Err(PlotError::EmptyPairs(
            x_column.to_string(),
            y_column.to_string(),
        ));
    }

    let x_span = value_span(&xs);
    let y_span = value_span(&ys);
    let points = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| PixelPoint {
            x: map_x(x, x_span, viewport),
            y: map_y(y, y_span, viewport),
        })
        .collect();

    Ok(ScatterChart {
        xs,
        ys,
        x_span,
        y_span,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    const VIEW: Viewport = Viewport {
        left: 60.0,
        top: 40.0,
        right: 460.0,
        bottom: 260.0,
    };

    fn table(headers: &[&str], rows: &[&[(&str, &str)]]) -> TableData {
        let records: Vec<Record> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect();
        TableData::new(headers.iter().map(|h| h.to_string()).collect(), records)
    }

    fn column_a(values: &[&str]) -> TableData {
        let rows: Vec<Vec<(&str, &str)>> = values.iter().map(|v| vec![("a", *v)]).collect();
        let refs: Vec<&[(&str, &str)]> = rows.iter().map(|r| r.as_slice()).collect();
        table(&["a"], &refs)
    }

    #[test]
    fn extraction_skips_blank_and_unparseable_rows() {
        let t = column_a(&["1", "2", "", "x", "4"]);

        assert_eq!(extract_series(&t, "a", MAX_LINE_POINTS), [1.0, 2.0, 4.0]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let t = column_a(&["3", "bad", "1", "", "2"]);

        let first = extract_series(&t, "a", MAX_LINE_POINTS);
        let second = extract_series(&t, "a", MAX_LINE_POINTS);
        assert_eq!(first, second);
        assert_eq!(first, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn extraction_respects_the_cap() {
        let values: Vec<String> = (0..80).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = values.iter().map(|s| s.as_str()).collect();
        let t = column_a(&refs);

        let series = extract_series(&t, "a", 50);
        assert_eq!(series.len(), 50);
        assert_eq!(series[49], 49.0);
    }

    #[test]
    fn pairs_drop_rows_failing_either_side() {
        let t = table(
            &["x", "y"],
            &[
                &[("x", "1"), ("y", "2")],
                &[("x", "3"), ("y", "")],
                &[("x", "5"), ("y", "6")],
            ],
        );

        let (xs, ys) = extract_pairs(&t, "x", "y", MAX_SCATTER_PAIRS);
        assert_eq!(xs, [1.0, 5.0]);
        assert_eq!(ys, [2.0, 6.0]);
    }

    #[test]
    fn pairs_always_have_equal_length() {
        let t = table(
            &["x", "y"],
            &[
                &[("x", "1")],
                &[("y", "2")],
                &[("x", "3"), ("y", "4")],
                &[("x", "bad"), ("y", "5")],
            ],
        );

        let (xs, ys) = extract_pairs(&t, "x", "y", 2);
        assert_eq!(xs.len(), ys.len());
        assert_eq!(xs, [3.0]);
        assert_eq!(ys, [4.0]);
    }

    #[test]
    fn line_endpoints_hit_viewport_edges_exactly() {
        let t = column_a(&["1", "2", "3", "4"]);

        let chart = line_chart(&t, "a", &VIEW, MAX_LINE_POINTS).unwrap();
        assert_eq!(chart.points.first().unwrap().x, VIEW.left);
        assert_eq!(chart.points.last().unwrap().x, VIEW.right);

        // Extremes of the value range hit the vertical edges too.
        assert_eq!(chart.points[0].y, VIEW.bottom);
        assert_eq!(chart.points[3].y, VIEW.top);
    }

    #[test]
    fn constant_series_renders_on_the_midline() {
        let t = column_a(&["5", "5", "5"]);

        let chart = line_chart(&t, "a", &VIEW, MAX_LINE_POINTS).unwrap();
        assert_eq!(chart.span, (4.0, 6.0));
        let midline = (VIEW.top + VIEW.bottom) / 2.0;
        for p in &chart.points {
            assert_eq!(p.y, midline);
        }
    }

    #[test]
    fn single_point_sits_at_left_on_the_midline() {
        let t = column_a(&["5"]);

        let chart = line_chart(&t, "a", &VIEW, MAX_LINE_POINTS).unwrap();
        assert_eq!(chart.points.len(), 1);
        assert_eq!(chart.points[0].x, VIEW.left);
        assert_eq!(chart.points[0].y, (VIEW.top + VIEW.bottom) / 2.0);
    }

    #[test]
    fn line_chart_reports_empty_series() {
        let t = column_a(&["", "nope"]);

        assert_eq!(
            line_chart(&t, "a", &VIEW, MAX_LINE_POINTS),
            Err(PlotError::EmptySeries("a".to_string()))
        );
    }

    #[test]
    fn scatter_axes_normalize_independently() {
        let t = table(
            &["x", "y"],
            &[
                &[("x", "0"), ("y", "10")],
                &[("x", "10"), ("y", "10")],
                &[("x", "5"), ("y", "10")],
            ],
        );

        let chart = scatter_chart(&t, "x", "y", &VIEW, MAX_SCATTER_PAIRS).unwrap();
        assert_eq!(chart.x_span, (0.0, 10.0));
        // Constant y column gets the degenerate-range widening.
        assert_eq!(chart.y_span, (9.0, 11.0));

        assert_eq!(chart.points[0].x, VIEW.left);
        assert_eq!(chart.points[1].x, VIEW.right);
        assert_eq!(chart.points[2].x, (VIEW.left + VIEW.right) / 2.0);
        let midline = (VIEW.top + VIEW.bottom) / 2.0;
        for p in &chart.points {
            assert_eq!(p.y, midline);
        }
    }

    #[test]
    fn scatter_chart_reports_empty_pairing() {
        // Both columns numeric, but never usable on the same row.
        let t = table(&["x", "y"], &[&[("x", "1")], &[("y", "2")]]);

        assert_eq!(
            scatter_chart(&t, "x", "y", &VIEW, MAX_SCATTER_PAIRS),
            Err(PlotError::EmptyPairs("x".to_string(), "y".to_string()))
        );
    }

    #[test]
    fn geometry_is_idempotent() {
        let t = column_a(&["2", "7", "4"]);

        let first = line_chart(&t, "a", &VIEW, MAX_LINE_POINTS).unwrap();
        let second = line_chart(&t, "a", &VIEW, MAX_LINE_POINTS).unwrap();
        assert_eq!(first, second);
    }
}
