//! The report, from loading the file to the closing summary.
use crate::{
    aggregate::{add_ratio_column, entity_series, top_entities},
    chart::{BarChart, Canvas, LineChart},
    choropleth,
    clean::clean,
    config::Config,
    constants::*,
    error::Result,
    filter::{select, DateIndexed},
    frame::has_column,
    inspect::inspect,
    load::load_table,
    report::Summary,
};
use getset::CopyGetters;
use log::*;
use polars::prelude::DataFrame;
use std::io::Write;

/// (column, title, y label) of the case and death charts.
const EPIDEMIC_CHARTS: [(&str, &str, &str); 3] = [
    (TOTAL_CASES, "Total COVID-19 Cases Over Time", "Total Cases"),
    (TOTAL_DEATHS, "Total COVID-19 Deaths Over Time", "Total Deaths"),
    (NEW_CASES, "Daily New COVID-19 Cases", "Daily New Cases"),
];

pub const MISSING_SHARE_MESSAGE: &str =
    "'people_vaccinated_per_hundred' column not found. Cannot plot percentage vaccinated population.";

/// Counters of a finished run.
#[derive(Debug, Copy, Clone, Default, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Outcome {
    rows_loaded: usize,
    rows_cleaned: usize,
    rows_selected: usize,
    line_charts: usize,
    bar_charts: usize,
    vaccination_share_plotted: bool,
}

/// Load the configured file and produce the whole report.
pub fn run(cfg: &Config, out: &mut impl Write, canvas: &mut dyn Canvas) -> Result<Outcome> {
    let table = load_table(cfg.data_path(), cfg.delimiter_byte())?;
    analyze(table, cfg, out, canvas)
}

/// Produce the report for an already loaded table.
pub fn analyze(
    mut table: DataFrame,
    cfg: &Config,
    out: &mut impl Write,
    canvas: &mut dyn Canvas,
) -> Result<Outcome> {
    let mut outcome = Outcome {
        rows_loaded: table.height(),
        ..Outcome::default()
    };

    inspect(&table, cfg.head_rows(), out)?;

    clean(&mut table, cfg)?;
    outcome.rows_cleaned = table.height();
    info!("cleaned table has {} rows", table.height());

    let mut subset = select(&table, cfg)?;
    outcome.rows_selected = subset.len();

    writeln!(out, "\n--- Exploratory Data Analysis ---")?;
    for (column, title, y_label) in EPIDEMIC_CHARTS.iter() {
        canvas.line_chart(&line_chart(&subset, cfg, column, title, y_label)?)?;
        outcome.line_charts += 1;
    }

    add_ratio_column(&mut subset, DEATH_RATE, TOTAL_DEATHS, TOTAL_CASES)?;
    let chart = line_chart(
        &subset,
        cfg,
        DEATH_RATE,
        "COVID-19 Death Rate Over Time",
        "Death Rate (Total Deaths / Total Cases)",
    )?;
    canvas.line_chart(&chart)?;
    outcome.line_charts += 1;

    let top = top_entities(&table, cfg.entity_column(), TOTAL_CASES, cfg.top_n())?;
    let title = format!("Top {} Countries by Total COVID-19 Cases (Latest)", cfg.top_n());
    canvas.bar_chart(&BarChart::new(&title, "Total Cases", "Country", top))?;
    outcome.bar_charts += 1;

    writeln!(out, "\n--- Visualizing Vaccination Progress ---")?;
    let chart = line_chart(
        &subset,
        cfg,
        TOTAL_VACCINATIONS,
        "Cumulative COVID-19 Vaccinations Over Time",
        "Total Vaccinations",
    )?;
    canvas.line_chart(&chart)?;
    outcome.line_charts += 1;

    outcome.vaccination_share_plotted = vaccination_share_chart(&subset, cfg, out, canvas)?;
    if outcome.vaccination_share_plotted {
        outcome.line_charts += 1;
    }

    writeln!(out, "\n--- Optional: Choropleth Map Visualization ---")?;
    choropleth::write_notes(out)?;
    if cfg.choropleth() {
        if has_column(&table, ISO_CODE) {
            canvas.bar_chart(&choropleth::region_chart(&table)?)?;
            outcome.bar_charts += 1;
        } else {
            writeln!(out, "'{}' column not found. Cannot build region data.", ISO_CODE)?;
        }
    }

    write!(out, "{}", Summary::default().render())?;
    out.flush()?;
    Ok(outcome)
}

/// Line chart of one column with a line per configured entity.
pub fn line_chart(
    subset: &DateIndexed,
    cfg: &Config,
    column: &str,
    title: &str,
    y_label: &str,
) -> Result<LineChart> {
    let series = entity_series(subset, cfg.entity_column(), cfg.entities(), column)?;
    for s in series.iter().filter(|s| s.is_empty()) {
        debug!("{}: no rows for {}", title, s.label());
    }
    Ok(LineChart::new(title, "Date", y_label, series))
}

/// Draw the share of vaccinated population if the column exists, otherwise
/// write a message in its place. Return true if the chart was drawn.
pub fn vaccination_share_chart(
    subset: &DateIndexed,
    cfg: &Config,
    out: &mut impl Write,
    canvas: &mut dyn Canvas,
) -> Result<bool> {
    if !subset.has_column(PEOPLE_VACCINATED_PER_HUNDRED) {
        writeln!(out, "\n{}", MISSING_SHARE_MESSAGE)?;
        return Ok(false);
    }
    let chart = line_chart(
        subset,
        cfg,
        PEOPLE_VACCINATED_PER_HUNDRED,
        "Percentage of Population Vaccinated Over Time",
        "Percentage of Population Vaccinated",
    )?;
    canvas.line_chart(&chart)?;
    Ok(true)
}
