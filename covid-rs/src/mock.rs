//! Synthetic datasets in the OWID layout.
//!
//! Used to run the report without the real file and to build reproducible
//! inputs for tests. Curves are cumulative and noisy; a fraction of the cells
//! is left empty and a fraction of the dates is corrupted on purpose.
use crate::{constants, error::Result, prelude::{NaiveDate, Real}};
use chrono::Duration;
use getset::{CopyGetters, Getters, Setters};
use log::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, path::Path};

/// (iso_code, location, population)
pub type Country = (String, String, Real);

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
#[serde(default)]
pub struct MockSettings {
    #[getset(get = "pub", set = "pub")]
    countries: Vec<Country>,
    #[getset(get_copy = "pub", set = "pub")]
    start: NaiveDate,
    #[getset(get_copy = "pub", set = "pub")]
    days: usize,
    /// Probability of leaving a numeric cell empty.
    #[getset(get_copy = "pub", set = "pub")]
    missing_rate: Real,
    /// Probability of writing an unparseable date.
    #[getset(get_copy = "pub", set = "pub")]
    bad_date_rate: Real,
    /// Day at which vaccination starts.
    #[getset(get_copy = "pub", set = "pub")]
    vaccination_start: usize,
    #[getset(get_copy = "pub", set = "pub")]
    vaccination_share: bool,
}

impl Default for MockSettings {
    fn default() -> Self {
        let countries = [
            ("KEN", "Kenya", 54e6),
            ("USA", "United States", 331e6),
            ("IND", "India", 1380e6),
            ("BRA", "Brazil", 212e6),
            ("FRA", "France", 67e6),
            ("DEU", "Germany", 83e6),
            ("ZAF", "South Africa", 59e6),
            ("JPN", "Japan", 126e6),
            ("NGA", "Nigeria", 206e6),
            ("ITA", "Italy", 60e6),
            ("MEX", "Mexico", 128e6),
            ("GBR", "United Kingdom", 67e6),
        ];
        MockSettings {
            countries: countries
                .iter()
                .map(|(iso, name, pop)| (iso.to_string(), name.to_string(), *pop))
                .collect(),
            start: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap_or(NaiveDate::MIN),
            days: 720,
            missing_rate: 0.02,
            bad_date_rate: 0.001,
            vaccination_start: 290,
            vaccination_share: true,
        }
    }
}

/// Counters describing a generated file.
#[derive(Debug, Copy, Clone, Default, PartialEq, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct MockSummary {
    rows: usize,
    missing_cells: usize,
    bad_dates: usize,
}

/// Write a synthetic dataset to path.
pub fn generate_mock_data(
    path: impl AsRef<Path>,
    settings: &MockSettings,
    rng: &mut impl Rng,
) -> Result<MockSummary> {
    let path = path.as_ref();
    let mut wrt = csv::Writer::from_path(path)?;
    let mut summary = MockSummary::default();

    let mut header = vec![
        constants::ISO_CODE,
        constants::LOCATION,
        constants::DATE,
        constants::TOTAL_CASES,
        constants::NEW_CASES,
        constants::TOTAL_DEATHS,
        constants::TOTAL_VACCINATIONS,
    ];
    if settings.vaccination_share {
        header.push(constants::PEOPLE_VACCINATED_PER_HUNDRED);
    }
    wrt.write_record(&header)?;

    for (iso, name, population) in &settings.countries {
        // Per-country shape of the epidemic waves.
        let attack = rng.gen_range(0.02..0.12) * population;
        let period = rng.gen_range(90.0..200.0);
        let phase = rng.gen_range(0.0..PI);
        let cfr = rng.gen_range(0.005..0.03);
        let pace = rng.gen_range(0.002..0.006);

        let (mut cases, mut deaths, mut vaccinated) = (0.0, 0.0, 0.0);
        for day in 0..settings.days {
            let t = day as Real;
            let wave = 1.0 + (2.0 * PI * t / period + phase).sin();
            let new = (attack / settings.days as Real * wave * rng.gen_range(0.7..1.3)).round();
            cases += new;
            deaths += (new * cfr * rng.gen_range(0.5..1.5)).round();
            if day >= settings.vaccination_start {
                vaccinated = (vaccinated + pace * population * rng.gen_range(0.5..1.5)).min(0.9 * population);
            }

            let date = settings.start + Duration::days(day as i64);
            let date = if rng.gen_bool(settings.bad_date_rate) {
                summary.bad_dates += 1;
                "not-a-date".to_string()
            } else {
                date.to_string()
            };

            let mut numbers = vec![cases, new, deaths, vaccinated * 1.8];
            if settings.vaccination_share {
                numbers.push((vaccinated / population * 100.0 * 100.0).round() / 100.0);
            }
            let mut record = vec![iso.clone(), name.clone(), date];
            for x in numbers {
                if rng.gen_bool(settings.missing_rate) {
                    summary.missing_cells += 1;
                    record.push(String::new());
                } else {
                    record.push(x.to_string());
                }
            }
            wrt.write_record(&record)?;
            summary.rows += 1;
        }
    }
    wrt.flush()?;
    info!(
        "generated {} rows ({} empty cells, {} bad dates) in {}",
        summary.rows,
        summary.missing_cells,
        summary.bad_dates,
        path.display()
    );
    Ok(summary)
}
