//! Region map data.
//!
//! Drawing a choropleth needs a map renderer and region geometry fetched over
//! the network, neither of which is part of this crate. What lives here is the
//! data side: the latest value per ISO region, handed to the canvases as a
//! ranked bar chart when the map is enabled in the configuration.
use crate::{
    aggregate::top_entities,
    chart::BarChart,
    constants::{ISO_CODE, TOTAL_CASES},
    error::Result,
    prelude::Labeled,
};
use polars::prelude::DataFrame;
use std::io::Write;

pub const TITLE: &str = "Total COVID-19 Cases by Country (Latest)";

pub const NOTES: [&str; 2] = [
    "Note: Building a choropleth map requires a map renderer and internet connectivity to fetch map data.",
    "Set `choropleth = true` in the configuration to export the per-region values for an external map tool.",
];

/// Maximum of value_column per region, largest first.
pub fn latest_by_region(table: &DataFrame, region_column: &str, value_column: &str) -> Result<Vec<Labeled>> {
    top_entities(table, region_column, value_column, usize::MAX)
}

/// Chart of the latest total cases per ISO code.
pub fn region_chart(table: &DataFrame) -> Result<BarChart> {
    let regions = latest_by_region(table, ISO_CODE, TOTAL_CASES)?;
    Ok(BarChart::new(TITLE, "Total Cases", ISO_CODE, regions))
}

pub fn write_notes(out: &mut impl Write) -> std::io::Result<()> {
    for note in NOTES.iter() {
        writeln!(out, "{}", note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clean::clean, config::Config, load::read_table};

    #[test]
    fn regions_ranked_by_latest_value() {
        let data = "\
iso_code,location,date,total_cases
KEN,Kenya,2021-01-01,5
KEN,Kenya,2021-01-02,7
IND,India,2021-01-01,9
,Somewhere,2021-01-01,1
";
        let mut table = read_table(data.as_bytes(), b',').unwrap();
        clean(&mut table, &Config::default()).unwrap();
        let chart = region_chart(&table).unwrap();
        assert_eq!(
            chart.bars(),
            &vec![
                ("IND".to_string(), 9.0),
                ("KEN".to_string(), 7.0),
                ("Unknown".to_string(), 1.0)
            ]
        );
    }

    #[test]
    fn notes() {
        let mut out: Vec<u8> = vec![];
        write_notes(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
