//! Aggregations behind the charts: per-entity time series, a cross-entity
//! ranking and derived ratio columns.
use crate::{
    chart::Series,
    error::Result,
    filter::DateIndexed,
    frame::{numeric, require, text},
    prelude::{Labeled, Point, NAN},
};
use polars::prelude::*;

/// Build one series of (date, value) points per entity, ordered by date.
///
/// Rows sharing the same date keep their relative order. An entity without
/// rows produces an empty series.
pub fn entity_series(
    subset: &DateIndexed,
    entity_column: &str,
    entities: &[String],
    column: &str,
) -> Result<Vec<Series>> {
    let values = numeric(subset.frame(), column)?;
    let names = text(subset.frame(), entity_column)?;

    let series = entities
        .iter()
        .map(|entity| {
            let mut points: Vec<Point> = subset
                .index()
                .iter()
                .zip(names.into_iter().zip(values.into_iter()))
                .filter(|(_, (name, _))| *name == Some(entity.as_str()))
                .map(|(date, (_, value))| (*date, value.unwrap_or(NAN)))
                .collect();
            points.sort_by_key(|p| p.0);
            Series::new(entity.as_str(), points)
        })
        .collect();
    Ok(series)
}

/// Group the frame by entity, take the maximum value of each group and return
/// the n largest, in descending order. Ties are broken by entity name.
///
/// NaN cells are ignored by the maximum; a group with only NaN ranks last.
pub fn top_entities(
    table: &DataFrame,
    entity_column: &str,
    value_column: &str,
    n: usize,
) -> Result<Vec<Labeled>> {
    require(table, entity_column)?;
    numeric(table, value_column)?;

    let value = || col(value_column);
    let ranked = table
        .clone()
        .lazy()
        .filter(col(entity_column).is_not_null())
        .group_by([col(entity_column).cast(DataType::String)])
        .agg([value().filter(value().is_not_nan()).max()])
        .sort_by_exprs(
            [value(), col(entity_column)],
            SortMultipleOptions::default()
                .with_order_descending_multi([true, false])
                .with_nulls_last(true),
        )
        .collect()?;

    let names = text(&ranked, entity_column)?;
    let maxima = numeric(&ranked, value_column)?;
    let ranking = names
        .into_iter()
        .zip(maxima.into_iter())
        .take(n)
        .map(|(name, max)| (name.unwrap_or_default().to_string(), max.unwrap_or(NAN)))
        .collect();
    Ok(ranking)
}

/// Append a column with the row-wise ratio numerator / denominator.
///
/// The division is not guarded: a zero denominator gives an infinite value, or
/// NaN when the numerator is also zero. Missing cells stay missing.
pub fn add_ratio_column(
    subset: &mut DateIndexed,
    name: &str,
    numerator: &str,
    denominator: &str,
) -> Result<()> {
    numeric(subset.frame(), numerator)?;
    numeric(subset.frame(), denominator)?;
    subset.with_column((col(numerator) / col(denominator)).alias(name))
}
