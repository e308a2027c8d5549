//! Typed access to the columns of a [`DataFrame`].
//!
//! The loader normalizes every frame to three kinds of columns: `f64` numbers,
//! text and, once the cleaner ran, dates. Lookups here turn polars errors on
//! absent or mistyped columns into the crate's own errors.
use crate::error::{Error, Result};
use polars::prelude::*;
use std::fmt;

/// Kind of a column as seen by the report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Text,
    Date,
}

impl ColumnKind {
    pub fn of(dtype: &DataType) -> Self {
        match dtype {
            DataType::Date => ColumnKind::Date,
            dt if dt.is_numeric() => ColumnKind::Numeric,
            _ => ColumnKind::Text,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_index(name).is_some()
}

pub fn kind(df: &DataFrame, name: &str) -> Option<ColumnKind> {
    df.column(name).ok().map(|c| ColumnKind::of(c.dtype()))
}

/// Column names in frame order.
pub fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|n| n.to_string()).collect()
}

pub fn require<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::MissingColumn(name.to_string()))
}

pub fn numeric<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Float64Chunked> {
    require(df, name)?.f64().map_err(|_| mistyped(name, ColumnKind::Numeric))
}

pub fn text<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringChunked> {
    require(df, name)?.str().map_err(|_| mistyped(name, ColumnKind::Text))
}

pub fn dates<'a>(df: &'a DataFrame, name: &str) -> Result<&'a DateChunked> {
    require(df, name)?.date().map_err(|_| mistyped(name, ColumnKind::Date))
}

fn mistyped(name: &str, expected: ColumnKind) -> Error {
    Error::ColumnType {
        column: name.to_string(),
        expected: expected.name(),
    }
}

/// Cast the named columns to text. Absent columns are skipped.
pub fn as_text(df: &mut DataFrame, columns: &[&str]) -> Result<()> {
    let frame: &DataFrame = df;
    let exprs: Vec<Expr> = columns
        .iter()
        .filter(|name| kind(frame, name).map_or(false, |k| k != ColumnKind::Text))
        .map(|name| col(*name).cast(DataType::String))
        .collect();
    if !exprs.is_empty() {
        *df = df.clone().lazy().with_columns(exprs).collect()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn frame() -> DataFrame {
        df!(
            "location" => &["Kenya", "India"],
            "total_cases" => &[Some(1.0), None],
        )
        .unwrap()
    }

    #[test]
    fn typed_lookups() {
        let df = frame();
        assert_eq!(kind(&df, "location"), Some(ColumnKind::Text));
        assert_eq!(kind(&df, "total_cases"), Some(ColumnKind::Numeric));
        assert_eq!(kind(&df, "nope"), None);
        assert_eq!(numeric(&df, "total_cases").unwrap().get(0), Some(1.0));
        assert_eq!(text(&df, "location").unwrap().get(1), Some("India"));
        assert_eq!(names(&df), vec!["location", "total_cases"]);
    }

    #[test]
    fn lookup_errors() {
        let df = frame();
        assert!(matches!(numeric(&df, "nope"), Err(Error::MissingColumn(c)) if c == "nope"));
        match text(&df, "total_cases") {
            Err(Error::ColumnType { column, expected }) => {
                assert_eq!(column, "total_cases");
                assert_eq!(expected, "text");
            }
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
        assert!(dates(&df, "location").is_err());
    }

    #[test]
    fn cast_to_text() {
        let mut df = frame();
        as_text(&mut df, &["total_cases", "absent"]).unwrap();
        assert_eq!(kind(&df, "total_cases"), Some(ColumnKind::Text));
        assert_eq!(text(&df, "total_cases").unwrap().get(1), None);
    }
}
