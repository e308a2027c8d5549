use std::iter;

use crate::prelude::{Real, INF};

/// Markers used for successive curves in a line plot.
pub const MARKERS: [char; 6] = ['*', '+', 'o', 'x', '#', '@'];

/// Rasterized line plot. Rows are ordered top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub rows: Vec<String>,
    pub x_range: (Real, Real),
    pub y_range: (Real, Real),
}

/// ASCII plot of a list of curves of (x, y) points in a width x height grid.
///
/// Each curve is drawn with its own marker from MARKERS; later curves overwrite
/// earlier ones where they share a cell. Non-finite points are skipped. Return
/// None if there is no finite point to draw.
pub fn plot_lines(curves: &[&[(Real, Real)]], width: usize, height: usize) -> Option<LinePlot> {
    let (mut x0, mut x1, mut y0, mut y1) = (INF, -INF, INF, -INF);
    for (x, y) in curves.iter().flat_map(|c| c.iter()) {
        if x.is_finite() && y.is_finite() {
            x0 = x0.min(*x);
            x1 = x1.max(*x);
            y0 = y0.min(*y);
            y1 = y1.max(*y);
        }
    }
    if x0 > x1 {
        return None;
    }

    let width = width.max(2);
    let height = height.max(2);
    let mut grid = vec![vec![' '; width]; height];
    for (k, curve) in curves.iter().enumerate() {
        let marker = MARKERS[k % MARKERS.len()];
        for (x, y) in curve.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            let col = scale(*x, x0, x1, width);
            let row = height - 1 - scale(*y, y0, y1, height);
            grid[row][col] = marker;
        }
    }

    Some(LinePlot {
        rows: grid.into_iter().map(|r| r.into_iter().collect()).collect(),
        x_range: (x0, x1),
        y_range: (y0, y1),
    })
}

/// Map v in [lo, hi] to a cell in 0..n.
fn scale(v: Real, lo: Real, hi: Real, n: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let pos = ((v - lo) / (hi - lo) * (n - 1) as Real).round() as usize;
    pos.min(n - 1)
}

/// ASCII plot of a sequence of positive values horizontally.
///
/// Draw each is a row filled with '='s up to the maximum width. Negative and
/// non-finite values produce an empty bar.
pub fn plot_hbars(values: &[Real], width: usize) -> Vec<String> {
    if values.is_empty() {
        return vec![];
    }
    let max = values
        .iter()
        .cloned()
        .filter(|x| x.is_finite())
        .fold(-INF, |x, y| x.max(y));
    let step = max / width as Real;

    values
        .iter()
        .map(|&x| {
            let n = if step > 0.0 && x.is_finite() && x > 0.0 {
                (x / step).round() as usize
            } else {
                0
            };
            let mut ln = String::with_capacity(n + 1);
            ln.push('|');
            ln.extend(iter::repeat('=').take(n));
            ln
        })
        .collect()
}
