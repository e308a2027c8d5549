//! Chart descriptions and the canvases that draw them.
//!
//! Aggregation code builds [`LineChart`] and [`BarChart`] values; a [`Canvas`]
//! decides how they are shown. Several canvases can be combined in a
//! [`CanvasList`].
mod csv_export;
mod terminal;

pub use csv_export::*;
pub use terminal::*;

use crate::{
    error::Result,
    prelude::{Labeled, Point, Real},
};
use getset::Getters;

/// A labeled sequence of (date, value) points.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
#[getset(get = "pub")]
pub struct Series {
    label: String,
    points: Vec<Point>,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<Point>) -> Self {
        Series {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Values of the series, in date order.
    pub fn values(&self) -> impl Iterator<Item = Real> + '_ {
        self.points.iter().map(|p| p.1)
    }
}

/// Time-series chart with one line per series.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
#[getset(get = "pub")]
pub struct LineChart {
    title: String,
    x_label: String,
    y_label: String,
    series: Vec<Series>,
}

impl LineChart {
    pub fn new(title: &str, x_label: &str, y_label: &str, series: Vec<Series>) -> Self {
        LineChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            series,
        }
    }
}

/// Horizontal bar chart. Bars are drawn top to bottom in the given order.
#[derive(Debug, Clone, PartialEq, Default, Getters)]
#[getset(get = "pub")]
pub struct BarChart {
    title: String,
    x_label: String,
    y_label: String,
    bars: Vec<Labeled>,
}

impl BarChart {
    pub fn new(title: &str, x_label: &str, y_label: &str, bars: Vec<Labeled>) -> Self {
        BarChart {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars,
        }
    }
}

/// Something that can display charts.
pub trait Canvas {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()>;
    fn bar_chart(&mut self, chart: &BarChart) -> Result<()>;
}

pub type CanvasList = Vec<Box<dyn Canvas>>;

impl Canvas for CanvasList {
    fn line_chart(&mut self, chart: &LineChart) -> Result<()> {
        for canvas in self.iter_mut() {
            canvas.line_chart(chart)?;
        }
        Ok(())
    }

    fn bar_chart(&mut self, chart: &BarChart) -> Result<()> {
        for canvas in self.iter_mut() {
            canvas.bar_chart(chart)?;
        }
        Ok(())
    }
}

impl Canvas for () {
    fn line_chart(&mut self, _chart: &LineChart) -> Result<()> {
        Ok(())
    }

    fn bar_chart(&mut self, _chart: &BarChart) -> Result<()> {
        Ok(())
    }
}

/// Short human representation of a value, e.g. 1.5M or 0.021.
pub fn compact(x: Real) -> String {
    let a = x.abs();
    if !x.is_finite() {
        format!("{}", x)
    } else if a >= 1e9 {
        format!("{:.1}B", x / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", x / 1e6)
    } else if a >= 1e4 {
        format!("{:.1}k", x / 1e3)
    } else if x.fract() == 0.0 {
        format!("{}", x)
    } else {
        format!("{:.3}", x)
    }
}
