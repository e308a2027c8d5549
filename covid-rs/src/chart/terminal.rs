use super::{compact, BarChart, Canvas, LineChart};
use crate::{
    error::Result,
    prelude::{NaiveDate, Real},
    utils::{plot_hbars, plot_lines, MARKERS},
};
use chrono::Datelike;
use std::io::{self, Stdout, Write};

/// Draw charts as ASCII art on a text stream.
#[derive(Debug)]
pub struct Terminal<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl Terminal<Stdout> {
    pub fn stdout(width: usize, height: usize) -> Self {
        Terminal::new(io::stdout(), width, height)
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Terminal { out, width, height }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", title)
    }
}

impl<W: Write> Canvas for Terminal<W> {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()> {
        self.title(chart.title())?;

        let curves: Vec<Vec<(Real, Real)>> = chart
            .series()
            .iter()
            .map(|s| {
                s.points()
                    .iter()
                    .map(|(d, y)| (d.num_days_from_ce() as Real, *y))
                    .collect()
            })
            .collect();
        let refs: Vec<&[(Real, Real)]> = curves.iter().map(|c| c.as_slice()).collect();

        match plot_lines(&refs, self.width, self.height) {
            None => writeln!(self.out, "(no data to plot)")?,
            Some(plot) => {
                let (y0, y1) = (compact(plot.y_range.0), compact(plot.y_range.1));
                let pad = y0.len().max(y1.len());
                let last = plot.rows.len() - 1;
                for (i, row) in plot.rows.iter().enumerate() {
                    let tick = match i {
                        0 => y1.as_str(),
                        i if i == last => y0.as_str(),
                        _ => "",
                    };
                    writeln!(self.out, "{:>pad$} |{}", tick, row.trim_end(), pad = pad)?;
                }
                let width = plot.rows[0].chars().count();
                writeln!(self.out, "{:>pad$} +{}", "", "-".repeat(width), pad = pad)?;

                let (start, end) = (day(plot.x_range.0), day(plot.x_range.1));
                let gap = width.saturating_sub(start.len() + end.len()).max(1);
                writeln!(self.out, "{:>pad$}  {}{}{}", "", start, " ".repeat(gap), end, pad = pad)?;
            }
        }

        writeln!(self.out, "x: {}, y: {}", chart.x_label(), chart.y_label())?;
        let legend: Vec<String> = chart
            .series()
            .iter()
            .enumerate()
            .map(|(k, s)| format!("{} {}", MARKERS[k % MARKERS.len()], s.label()))
            .collect();
        writeln!(self.out, "legend: {}", legend.join("  "))?;
        self.out.flush()?;
        Ok(())
    }

    fn bar_chart(&mut self, chart: &BarChart) -> Result<()> {
        self.title(chart.title())?;
        if chart.bars().is_empty() {
            writeln!(self.out, "(no data to plot)")?;
        }

        let values: Vec<Real> = chart.bars().iter().map(|b| b.1).collect();
        let pad = chart
            .bars()
            .iter()
            .map(|b| b.0.chars().count())
            .max()
            .unwrap_or(0);
        for ((label, value), bar) in chart.bars().iter().zip(plot_hbars(&values, self.width)) {
            writeln!(self.out, "{:<pad$} {} {}", label, bar, compact(*value), pad = pad)?;
        }
        writeln!(self.out, "x: {}, y: {}", chart.x_label(), chart.y_label())?;
        self.out.flush()?;
        Ok(())
    }
}

fn day(x: Real) -> String {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Series;

    fn render_line(chart: &LineChart) -> String {
        let mut term = Terminal::new(Vec::<u8>::new(), 20, 4);
        term.line_chart(chart).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
    }

    #[test]
    fn line_chart_layout() {
        let chart = LineChart::new(
            "Cases",
            "Date",
            "Total Cases",
            vec![
                Series::new("A", vec![(date(1), 0.0), (date(31), 100.0)]),
                Series::new("B", vec![(date(15), Real::NAN)]),
            ],
        );
        let text = render_line(&chart);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "== Cases ==");
        assert_eq!(lines[2], "100 |                   *");
        assert_eq!(lines[5], "  0 |*");
        assert_eq!(lines[6], "    +--------------------");
        assert!(lines[7].contains("2021-01-01") && lines[7].ends_with("2021-01-31"));
        assert_eq!(lines[8], "x: Date, y: Total Cases");
        assert_eq!(lines[9], "legend: * A  + B");
    }

    #[test]
    fn empty_line_chart() {
        let chart = LineChart::new("Empty", "Date", "y", vec![Series::new("A", vec![])]);
        let text = render_line(&chart);
        assert!(text.contains("(no data to plot)"));
        assert!(text.contains("legend: * A"));
    }

    #[test]
    fn bar_chart_layout() {
        let chart = BarChart::new(
            "Top",
            "Total Cases",
            "Country",
            vec![("C".into(), 200.0), ("Abc".into(), 100.0)],
        );
        let mut term = Terminal::new(Vec::<u8>::new(), 10, 4);
        term.bar_chart(&chart).unwrap();
        let text = String::from_utf8(term.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[2], "C   |========== 200");
        assert_eq!(lines[3], "Abc |===== 100");
    }
}
