use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading and processing a dataset. Everything that is
/// not an error (missing cells, bad dates, absent optional columns) is
/// absorbed by the cleaning policy instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("data frame error: {0}")]
    Polars(#[from] PolarsError),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("column {column} is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
