//! Exploratory report over the OWID COVID-19 dataset.
//!
//! The report is a linear pipeline: [`load`] a delimited file, [`inspect`] it,
//! [`clean`] missing values and dates, [`filter`] the entities of interest,
//! [`aggregate`] series and rankings, draw them on a [`chart::Canvas`] and
//! finish with the narrative [`report`]. [`pipeline::run`] wires everything
//! together.
pub mod aggregate;
pub mod chart;
pub mod choropleth;
pub mod clean;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod frame;
pub mod inspect;
pub mod load;
pub mod mock;
pub mod pipeline;
pub mod prelude;
pub mod report;
pub mod utils;

pub use error::{Error, Result};
