pub use crate::chart::{BarChart, Canvas, CanvasList, LineChart, Series};
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::frame::ColumnKind;
pub use polars::prelude::DataFrame;
pub use chrono::NaiveDate;

/// Base Real type used by this crate. Uses an alias to easily change precision
/// if necessary.
pub type Real = f64;
pub(crate) const INF: Real = Real::INFINITY;
pub(crate) const NAN: Real = Real::NAN;

/// A labeled numeric observation, used for rankings and bar charts.
pub type Labeled = (String, Real);

/// A point of a time series.
pub type Point = (NaiveDate, Real);
