pub mod ascii_plot;
pub mod stats;

pub use ascii_plot::*;
pub use stats::*;
