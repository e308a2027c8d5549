//! Cleaning policy.
//!
//! Missing numeric cells take the mean of the present cells of their column,
//! missing text cells take a placeholder label. The date column is then parsed
//! leniently and rows without a valid date are dropped.
use crate::{
    config::Config,
    error::Result,
    frame::{as_text, dates, require, ColumnKind},
    prelude::{Real, NAN},
};
use getset::{CopyGetters, Getters};
use log::*;
use polars::prelude::*;

/// What the cleaner changed. Only logged, never part of the console report.
#[derive(Debug, Clone, Default, PartialEq, Getters, CopyGetters)]
pub struct CleanReport {
    /// (column, number of imputed cells, value used)
    #[getset(get = "pub")]
    imputed: Vec<(String, usize, Real)>,
    /// (column, number of cells set to the placeholder)
    #[getset(get = "pub")]
    filled: Vec<(String, usize)>,
    #[getset(get_copy = "pub")]
    dropped_rows: usize,
}

/// Apply the full cleaning policy in place.
///
/// The entity and date columns are text whatever the loader inferred, so an
/// entity column without any value is filled like every other text column.
pub fn clean(table: &mut DataFrame, cfg: &Config) -> Result<CleanReport> {
    require(table, cfg.date_column())?;
    as_text(table, &[cfg.entity_column(), cfg.date_column()])?;

    let imputed = impute_means(table)?;
    let filled = fill_missing_text(table, cfg.placeholder())?;
    parse_date_column(table, cfg.date_column(), cfg.date_formats())?;
    let dropped_rows = drop_missing_dates(table, cfg.date_column())?;

    for (name, n, mean) in imputed.iter().filter(|x| x.1 > 0) {
        debug!("{}: imputed {} cells with mean {}", name, n, mean);
    }
    for (name, n) in filled.iter().filter(|x| x.1 > 0) {
        debug!("{}: filled {} cells with {:?}", name, n, cfg.placeholder());
    }
    debug!("dropped {} rows without a valid date", dropped_rows);

    Ok(CleanReport {
        imputed,
        filled,
        dropped_rows,
    })
}

/// Replace missing cells of every numeric column by the mean of its present
/// cells.
///
/// A column without any present cell has no mean: its cells become NaN, which
/// is present but non-finite.
pub fn impute_means(table: &mut DataFrame) -> Result<Vec<(String, usize, Real)>> {
    let mut out = vec![];
    let mut exprs = vec![];
    for column in table.get_columns() {
        if ColumnKind::of(column.dtype()) != ColumnKind::Numeric {
            continue;
        }
        let name = column.name().as_str();
        let mean = column.f64()?.mean().unwrap_or(NAN);
        exprs.push(col(name).fill_null(lit(mean)));
        out.push((name.to_string(), column.null_count(), mean));
    }
    if !exprs.is_empty() {
        *table = table.clone().lazy().with_columns(exprs).collect()?;
    }
    Ok(out)
}

/// Replace missing cells of every text column by the placeholder.
pub fn fill_missing_text(table: &mut DataFrame, placeholder: &str) -> Result<Vec<(String, usize)>> {
    let mut out = vec![];
    let mut exprs = vec![];
    for column in table.get_columns() {
        if ColumnKind::of(column.dtype()) != ColumnKind::Text {
            continue;
        }
        let name = column.name().as_str();
        exprs.push(col(name).fill_null(lit(placeholder)));
        out.push((name.to_string(), column.null_count()));
    }
    if !exprs.is_empty() {
        *table = table.clone().lazy().with_columns(exprs).collect()?;
    }
    Ok(out)
}

/// Expression parsing a text column with the first matching format.
/// Formats carrying a time of day keep only the date; cells matching no
/// format become null.
pub fn lenient_date(name: &str, formats: &[String]) -> Expr {
    let text = col(name).cast(DataType::String);
    let parse = |fmt: &String| {
        let options = StrptimeOptions {
            format: Some(fmt.as_str().into()),
            strict: false,
            ..Default::default()
        };
        if fmt.contains("%H") {
            text.clone()
                .str()
                .to_datetime(None, None, options, lit("raise"))
                .cast(DataType::Date)
        } else {
            text.clone().str().to_date(options)
        }
    };
    let mut parsed = formats.iter().map(parse);
    match parsed.next() {
        Some(first) => parsed.fold(first, |acc, e| acc.fill_null(e)),
        None => text.clone().str().to_date(StrptimeOptions {
            strict: false,
            ..Default::default()
        }),
    }
}

/// Convert the named column into a date column. Unparseable cells become
/// missing. Return the number of cells that failed to parse.
pub fn parse_date_column(table: &mut DataFrame, name: &str, formats: &[String]) -> Result<usize> {
    if require(table, name)?.dtype() != &DataType::Date {
        *table = table
            .clone()
            .lazy()
            .with_column(lenient_date(name, formats).alias(name))
            .collect()?;
    }
    Ok(dates(table, name)?.null_count())
}

/// Drop rows whose date is missing. Return the number of dropped rows.
pub fn drop_missing_dates(table: &mut DataFrame, name: &str) -> Result<usize> {
    dates(table, name)?;
    let before = table.height();
    *table = table
        .clone()
        .lazy()
        .filter(col(name).is_not_null())
        .collect()?;
    Ok(before - table.height())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        frame::{kind, numeric, text},
        load::read_table,
        prelude::NaiveDate,
    };
    use assert_approx_eq::assert_approx_eq;

    const DATA: &str = "\
iso_code,location,date,total_cases,empty
KEN,Kenya,2021-01-01,10,
,Kenya,2021/01/02,,
IND,,01/03/2021,30,
IND,India,garbage,40,
USA,,,50,
";

    fn raw() -> DataFrame {
        read_table(DATA.as_bytes(), b',').unwrap()
    }

    fn cleaned() -> (DataFrame, CleanReport) {
        let mut table = raw();
        let report = clean(&mut table, &Config::default()).unwrap();
        (table, report)
    }

    fn parsed_dates(table: &DataFrame) -> Vec<Option<NaiveDate>> {
        dates(table, "date").unwrap().as_date_iter().collect()
    }

    #[test]
    fn numeric_cells_take_the_column_mean() {
        let mut table = raw();
        let imputed = impute_means(&mut table).unwrap();
        let cells = numeric(&table, "total_cases").unwrap();
        assert_eq!(cells.null_count(), 0);
        assert_approx_eq!(cells.get(1).unwrap(), 32.5);
        assert_eq!(imputed[0], ("total_cases".to_string(), 1, 32.5));
    }

    #[test]
    fn all_missing_numeric_column_becomes_nan() {
        let mut table = raw();
        impute_means(&mut table).unwrap();
        let cells = numeric(&table, "empty").unwrap();
        assert!(cells.into_iter().all(|c| c.map_or(false, |x| x.is_nan())));
    }

    #[test]
    fn text_cells_take_the_placeholder() {
        let mut table = raw();
        let filled = fill_missing_text(&mut table, "Unknown").unwrap();
        let locations = text(&table, "location").unwrap();
        assert_eq!(locations.get(2), Some("Unknown"));
        assert_eq!(locations.get(4), Some("Unknown"));
        assert_eq!(text(&table, "iso_code").unwrap().get(1), Some("Unknown"));
        assert!(filled.contains(&("location".to_string(), 2)));
    }

    #[test]
    fn lenient_dates() {
        let data = "date\n2021-01-01\n2021/01/01\n01/01/2021\n2021-01-01T10:30:00\n2021-02-30\nUnknown\n";
        let mut table = read_table(data.as_bytes(), b',').unwrap();
        let failed = parse_date_column(&mut table, "date", Config::default().date_formats()).unwrap();
        let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1);
        assert_eq!(failed, 2);
        assert_eq!(
            parsed_dates(&table),
            vec![jan1, jan1, jan1, jan1, None, None]
        );
    }

    #[test]
    fn rows_without_dates_are_dropped() {
        let (table, report) = cleaned();
        assert_eq!(report.dropped_rows(), 2);
        assert_eq!(table.height(), 3);
        assert_eq!(kind(&table, "date"), Some(ColumnKind::Date));
        let parsed = parsed_dates(&table);
        assert!(parsed.iter().all(|d| d.is_some()));
        assert_eq!(parsed[2], NaiveDate::from_ymd_opt(2021, 1, 3));
    }

    #[test]
    fn nothing_is_missing_after_cleaning() {
        let (table, _) = cleaned();
        for column in table.get_columns() {
            assert_eq!(column.null_count(), 0, "column {}", column.name());
        }
    }

    #[test]
    fn empty_entity_column_is_text() {
        let data = "location,date,total_cases\n,2021-01-01,1\n,2021-01-02,2\n";
        let mut table = read_table(data.as_bytes(), b',').unwrap();
        assert_eq!(kind(&table, "location"), Some(ColumnKind::Numeric));
        clean(&mut table, &Config::default()).unwrap();
        let locations: Vec<_> = text(&table, "location").unwrap().into_iter().collect();
        assert_eq!(locations, vec![Some("Unknown"), Some("Unknown")]);
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let mut table = read_table("a\n1\n".as_bytes(), b',').unwrap();
        let res = clean(&mut table, &Config::default());
        assert!(matches!(res, Err(Error::MissingColumn(_))));
    }
}
