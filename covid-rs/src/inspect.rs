//! Diagnostic views of a frame: columns, preview rows, missing-value counts,
//! column types and a numeric summary. Nothing here mutates the frame.
use crate::{
    error::Result,
    frame::{names, ColumnKind},
    prelude::Real,
    utils::{PointStats, PointStatsAcc, Stats},
};
use polars::prelude::*;
use std::io::Write;

/// Write every diagnostic section to out.
pub fn inspect(table: &DataFrame, head_rows: usize, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", render_columns(table))?;
    writeln!(out, "\nPreview of data:")?;
    write!(out, "{}", render_head(table, head_rows))?;
    writeln!(out, "\nMissing values per column:")?;
    write!(out, "{}", render_pairs(&missing_counts(table)))?;
    writeln!(out, "\nData types of columns:")?;
    write!(out, "{}", render_pairs(&column_types(table)))?;
    writeln!(out, "\nSummary of numeric columns:")?;
    write!(out, "{}", render_summary(&numeric_summary(table)?))?;
    Ok(())
}

/// One-line list of column names.
pub fn render_columns(table: &DataFrame) -> String {
    format!("Columns: [{}]", names(table).join(", "))
}

/// The first n rows as printed by the frame itself, followed by the full
/// shape when rows were left out.
pub fn render_head(table: &DataFrame, n: usize) -> String {
    let mut data = format!("{}\n", table.head(Some(n)));
    if table.height() > n {
        data.push_str(&format!("[{} rows x {} columns]\n", table.height(), table.width()));
    }
    return data;
}

/// Count missing cells in each column, in frame order.
pub fn missing_counts(table: &DataFrame) -> Vec<(String, usize)> {
    table
        .get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.null_count()))
        .collect()
}

/// Storage type of each column.
pub fn column_types(table: &DataFrame) -> Vec<(String, DataType)> {
    table
        .get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.dtype().clone()))
        .collect()
}

/// Count, mean, std, min and max of the present cells of each numeric column.
pub fn numeric_summary(table: &DataFrame) -> Result<Vec<(String, PointStats)>> {
    let mut summary = vec![];
    for column in table.get_columns() {
        if ColumnKind::of(column.dtype()) == ColumnKind::Numeric {
            let acc = PointStatsAcc::from_present(column.f64()?.into_iter());
            summary.push((column.name().to_string(), acc.stats()));
        }
    }
    Ok(summary)
}

pub fn render_summary(summary: &[(String, PointStats)]) -> String {
    let mut grid = vec![["", "count", "mean", "std", "min", "max"]
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()];
    for (name, st) in summary {
        grid.push(vec![
            name.clone(),
            st.count().to_string(),
            number(st.mean()),
            number(st.std()),
            number(st.min()),
            number(st.max()),
        ]);
    }
    render_grid(&grid)
}

fn render_pairs<T: ToString>(pairs: &[(String, T)]) -> String {
    let grid: Vec<Vec<String>> = pairs
        .iter()
        .map(|(name, x)| vec![name.clone(), x.to_string()])
        .collect();
    render_grid(&grid)
}

/// Left-align the first column and right-align the others.
fn render_grid(grid: &[Vec<String>]) -> String {
    let ncols = grid.iter().map(|r| r.len()).max().unwrap_or(0);
    let mut widths = vec![0; ncols];
    for row in grid {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.chars().count());
        }
    }

    let mut data = String::new();
    for row in grid {
        let mut ln = String::new();
        for (j, cell) in row.iter().enumerate() {
            if j == 0 {
                ln.push_str(&format!("{:<w$}", cell, w = widths[j]));
            } else {
                ln.push_str(&format!("  {:>w$}", cell, w = widths[j]));
            }
        }
        data.push_str(ln.trim_end());
        data.push('\n');
    }
    return data;
}

fn number(x: Real) -> String {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x)
    } else {
        format!("{:.4}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::read_table;

    fn table() -> DataFrame {
        let data = "location,total_cases\nKenya,10\nIndia,\nAtlantis,30\n";
        read_table(data.as_bytes(), b',').unwrap()
    }

    #[test]
    fn head_preview() {
        let head = render_head(&table(), 2);
        assert!(head.contains("location"));
        assert!(head.contains("Kenya"));
        assert!(head.contains("India"));
        assert!(!head.contains("Atlantis"));
        assert!(head.ends_with("[3 rows x 2 columns]\n"));
        assert!(!render_head(&table(), 5).contains("rows x"));
    }

    #[test]
    fn missing_and_types() {
        let table = table();
        assert_eq!(
            missing_counts(&table),
            vec![("location".to_string(), 0), ("total_cases".to_string(), 1)]
        );
        assert_eq!(
            column_types(&table),
            vec![
                ("location".to_string(), DataType::String),
                ("total_cases".to_string(), DataType::Float64)
            ]
        );
        assert_eq!(render_columns(&table), "Columns: [location, total_cases]");
    }

    #[test]
    fn summary_ignores_text_columns() {
        let summary = numeric_summary(&table()).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].1.count(), 2);
        assert_eq!(summary[0].1.mean(), 20.0);
    }

    #[test]
    fn full_report() {
        let mut out: Vec<u8> = vec![];
        inspect(&table(), 5, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Columns: [location, total_cases]\n"));
        assert!(text.contains("Missing values per column:\nlocation     0\ntotal_cases  1\n"));
        assert!(text.contains("Data types of columns:"));
        assert!(text.contains("Summary of numeric columns:"));
    }
}
