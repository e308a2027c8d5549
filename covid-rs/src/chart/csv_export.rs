use super::{BarChart, Canvas, LineChart};
use crate::error::Result;
use getset::Getters;
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write the data behind each chart as a CSV file in a directory.
///
/// Line charts are written in long format (`series,date,value`), bar charts as
/// `label,value`. File names are derived from chart titles.
#[derive(Debug, Clone, Getters)]
pub struct CsvExport {
    #[getset(get = "pub")]
    dir: PathBuf,
    #[getset(get = "pub")]
    written: Vec<PathBuf>,
}

impl CsvExport {
    /// Create the output directory if necessary.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(CsvExport {
            dir,
            written: vec![],
        })
    }

    fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", slug(title)))
    }
}

impl Canvas for CsvExport {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()> {
        let path = self.path_for(chart.title());
        let mut wrt = csv::Writer::from_path(&path)?;
        wrt.write_record(&["series", "date", chart.y_label().as_str()])?;
        for series in chart.series() {
            for (date, value) in series.points() {
                wrt.write_record(&[
                    series.label().clone(),
                    date.to_string(),
                    value.to_string(),
                ])?;
            }
        }
        wrt.flush()?;
        info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }

    fn bar_chart(&mut self, chart: &BarChart) -> Result<()> {
        let path = self.path_for(chart.title());
        let mut wrt = csv::Writer::from_path(&path)?;
        wrt.write_record(&[chart.y_label().as_str(), chart.x_label().as_str()])?;
        for (label, value) in chart.bars() {
            wrt.write_record(&[label.clone(), value.to_string()])?;
        }
        wrt.flush()?;
        info!("wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Lowercase ASCII alphanumerics joined by underscores.
pub fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chart::Series,
        prelude::{NaiveDate, Real},
    };

    #[test]
    fn slugs() {
        assert_eq!(slug("Total COVID-19 Cases Over Time"), "total_covid_19_cases_over_time");
        assert_eq!(slug("  Top 10 (Latest) "), "top_10_latest");
    }

    #[test]
    fn writes_one_file_per_chart() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = CsvExport::new(dir.path().join("charts")).unwrap();
        let d = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let line = LineChart::new(
            "Death Rate",
            "Date",
            "death_rate",
            vec![Series::new("Kenya", vec![(d, 0.5), (d, Real::INFINITY)])],
        );
        let bars = BarChart::new("Top", "Total Cases", "Country", vec![("C".into(), 200.0)]);
        canvas.line_chart(&line).unwrap();
        canvas.bar_chart(&bars).unwrap();

        assert_eq!(canvas.written().len(), 2);
        let data = fs::read_to_string(dir.path().join("charts/death_rate.csv")).unwrap();
        assert_eq!(data, "series,date,death_rate\nKenya,2021-03-01,0.5\nKenya,2021-03-01,inf\n");
        let data = fs::read_to_string(dir.path().join("charts/top.csv")).unwrap();
        assert_eq!(data, "Country,Total Cases\nC,200\n");
    }
}
