//! Selection of the entities of interest and date indexing.
use crate::{
    config::Config,
    error::Result,
    frame::{dates, has_column, text},
    prelude::NaiveDate,
};
use getset::Getters;
use log::*;
use polars::prelude::*;

/// A frame whose date column was moved out into a row index.
///
/// Several rows may share the same date (e.g. one per entity, or duplicated
/// observations for one entity); all of them are kept.
#[derive(Debug, Clone, Default, Getters)]
pub struct DateIndexed {
    #[getset(get = "pub")]
    index: Vec<NaiveDate>,
    #[getset(get = "pub")]
    frame: DataFrame,
}

impl DateIndexed {
    /// Move the date column of a cleaned frame into the index. Rows without a
    /// date are dropped.
    pub fn from_frame(frame: DataFrame, date_column: &str) -> Result<Self> {
        let missing = dates(&frame, date_column)?.null_count();
        let frame = if missing > 0 {
            warn!("dropping rows without {} while indexing", date_column);
            frame.lazy().filter(col(date_column).is_not_null()).collect()?
        } else {
            frame
        };
        let index = dates(&frame, date_column)?.as_date_iter().flatten().collect();
        let frame = frame.drop(date_column)?;
        Ok(DateIndexed { index, frame })
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        has_column(&self.frame, name)
    }

    /// Append (or replace) a column computed from the indexed rows.
    pub fn with_column(&mut self, expr: Expr) -> Result<()> {
        self.frame = self.frame.clone().lazy().with_column(expr).collect()?;
        Ok(())
    }
}

/// Keep only the rows whose entity is one of the given names, in their
/// original order.
pub fn filter_entities(table: &DataFrame, entity_column: &str, entities: &[String]) -> Result<DataFrame> {
    text(table, entity_column)?;
    let names = Series::new("entities".into(), entities);
    let subset = table
        .clone()
        .lazy()
        .filter(col(entity_column).is_in(lit(names)))
        .collect()?;
    Ok(subset)
}

/// Filter the configured entities and index the result by date.
pub fn select(table: &DataFrame, cfg: &Config) -> Result<DateIndexed> {
    let subset = filter_entities(table, cfg.entity_column(), cfg.entities())?;
    info!(
        "selected {} of {} rows for {}",
        subset.height(),
        table.height(),
        cfg.entities().join(", ")
    );
    DateIndexed::from_frame(subset, cfg.date_column())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clean::clean, frame::numeric, load::read_table};

    const DATA: &str = "\
location,date,total_cases
Kenya,2021-01-01,1
France,2021-01-01,2
India,2021-01-02,3
Kenya,2021-01-01,4
Kenyan,2021-01-03,5
";

    fn cleaned() -> DataFrame {
        let mut table = read_table(DATA.as_bytes(), b',').unwrap();
        clean(&mut table, &Config::default()).unwrap();
        table
    }

    #[test]
    fn only_configured_entities_remain() {
        let mut cfg = Config::default();
        cfg.set_entities(vec!["Kenya".into(), "India".into()]);
        let subset = select(&cleaned(), &cfg).unwrap();
        let locations = text(subset.frame(), "location").unwrap();
        assert_eq!(locations.len(), 3);
        assert!(locations
            .into_iter()
            .all(|l| cfg.entities().iter().any(|e| Some(e.as_str()) == l)));
    }

    #[test]
    fn date_moves_to_index_and_duplicates_are_kept() {
        let mut cfg = Config::default();
        cfg.set_entities(vec!["Kenya".into()]);
        let subset = select(&cleaned(), &cfg).unwrap();
        assert!(!subset.has_column("date"));
        let jan1 = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
        assert_eq!(subset.index(), &vec![jan1, jan1]);
        let cases: Vec<_> = numeric(subset.frame(), "total_cases").unwrap().into_iter().collect();
        assert_eq!(cases, vec![Some(1.0), Some(4.0)]);
    }

    #[test]
    fn no_match_gives_empty_subset() {
        let mut cfg = Config::default();
        cfg.set_entities(vec!["Atlantis".into()]);
        let subset = select(&cleaned(), &cfg).unwrap();
        assert!(subset.is_empty());
        assert!(subset.has_column("total_cases"));
    }
}
