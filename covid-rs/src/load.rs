//! Reading a delimited file into a [`DataFrame`].
//!
//! Column types come from the CSV reader's schema inference over the whole
//! file. Integer columns are widened to `f64` and a column without any present
//! cell is numeric. Dates stay text until the cleaner parses them.
use crate::{
    constants::{MISSING_MARKERS, REQUIRED_COLUMNS},
    error::{Error, Result},
    frame::has_column,
};
use log::*;
use polars::prelude::*;
use std::{
    fs::File,
    io::{Cursor, Read},
    path::Path,
};

/// Load a delimited file and check that the required columns are present.
pub fn load_table(path: impl AsRef<Path>, delimiter: u8) -> Result<DataFrame> {
    let path = path.as_ref();
    info!("loading {}", path.display());
    let file = File::open(path)?;
    let table = read_table(file, delimiter)?;
    verify_required_columns(&table, &REQUIRED_COLUMNS)?;
    info!(
        "loaded {} rows x {} columns from {}",
        table.height(),
        table.width(),
        path.display()
    );
    Ok(table)
}

/// Read delimited data with a header row from any reader.
///
/// Rows with more fields than the header are an error. Cells holding one of
/// the missing-value markers are read as nulls.
pub fn read_table<R: Read>(mut reader: R, delimiter: u8) -> Result<DataFrame> {
    let mut data = vec![];
    reader.read_to_end(&mut data)?;

    let null_values = NullValues::AllColumns(
        MISSING_MARKERS
            .iter()
            .filter(|m| !m.is_empty())
            .map(|m| (*m).into())
            .collect(),
    );
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(delimiter)
                .with_null_values(Some(null_values)),
        )
        .into_reader_with_file_handle(Cursor::new(data))
        .finish()?;
    normalize_types(df)
}

/// Fail with the first required column that is absent from the frame.
pub fn verify_required_columns(table: &DataFrame, required: &[&str]) -> Result<()> {
    for &column in required {
        if !has_column(table, column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn normalize_types(df: DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(normalize_column)
        .collect::<PolarsResult<Vec<_>>>()?;
    Ok(DataFrame::new(columns)?)
}

/// Numbers become f64, flags become text and a column with no present cell
/// is numeric.
fn normalize_column(column: &Column) -> PolarsResult<Column> {
    let dtype = column.dtype();
    if column.null_count() == column.len() || dtype.is_numeric() {
        column.cast(&DataType::Float64)
    } else if dtype == &DataType::Boolean {
        column.cast(&DataType::String)
    } else {
        Ok(column.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{kind, numeric, require, ColumnKind};

    const DATA: &str = "\
location,date,total_cases,note
Kenya,2021-01-01,10,
Kenya,2021-01-02,,ok
India,not a date,NaN,x
";

    #[test]
    fn infers_column_types() {
        let table = read_table(DATA.as_bytes(), b',').unwrap();
        assert_eq!(table.height(), 3);
        assert_eq!(kind(&table, "location"), Some(ColumnKind::Text));
        assert_eq!(kind(&table, "date"), Some(ColumnKind::Text));
        assert_eq!(kind(&table, "total_cases"), Some(ColumnKind::Numeric));
        let cases: Vec<_> = numeric(&table, "total_cases").unwrap().into_iter().collect();
        assert_eq!(cases, vec![Some(10.0), None, None]);
        assert_eq!(require(&table, "note").unwrap().null_count(), 1);
    }

    #[test]
    fn all_missing_column_is_numeric() {
        let table = read_table("a,b\nx,\ny,NA\n".as_bytes(), b',').unwrap();
        assert_eq!(kind(&table, "b"), Some(ColumnKind::Numeric));
        assert_eq!(require(&table, "b").unwrap().null_count(), 2);
    }

    #[test]
    fn header_only_file() {
        let table = read_table("location,date,total_cases\n".as_bytes(), b',').unwrap();
        assert_eq!(table.height(), 0);
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn other_delimiters() {
        let table = read_table("a;b\n1;2\n".as_bytes(), b';').unwrap();
        assert_eq!(numeric(&table, "b").unwrap().get(0), Some(2.0));
    }

    #[test]
    fn ragged_rows_are_fatal() {
        let res = read_table("a,b\n1,2\n3,4,5\n".as_bytes(), b',');
        assert!(matches!(res, Err(Error::Polars(_))));
    }

    #[test]
    fn missing_file_is_fatal() {
        let res = load_table("/definitely/not/here.csv", b',');
        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn required_columns() {
        let table = read_table(DATA.as_bytes(), b',').unwrap();
        let res = verify_required_columns(&table, &REQUIRED_COLUMNS);
        match res {
            Err(Error::MissingColumn(name)) => assert_eq!(name, "total_deaths"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(verify_required_columns(&table, &["location", "date"]).is_ok());
    }
}
