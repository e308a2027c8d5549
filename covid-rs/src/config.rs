//! Run configuration.
//!
//! Every constant the report depends on (entities of interest, placeholder
//! label, chart sizes, ...) lives in [`Config`] and is passed down to the
//! pipeline stages. Defaults reproduce the standard report; a TOML file can
//! override any subset of the fields.
use crate::{constants, error::Result};
use getset::{CopyGetters, Getters, Setters};
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Getters, CopyGetters, Setters)]
#[serde(default)]
pub struct Config {
    #[getset(get = "pub", set = "pub")]
    data_path: PathBuf,
    #[getset(get_copy = "pub", set = "pub")]
    delimiter: char,
    #[getset(get = "pub", set = "pub")]
    entity_column: String,
    #[getset(get = "pub", set = "pub")]
    date_column: String,
    #[getset(get = "pub", set = "pub")]
    entities: Vec<String>,
    #[getset(get = "pub", set = "pub")]
    placeholder: String,
    #[getset(get = "pub", set = "pub")]
    date_formats: Vec<String>,
    #[getset(get_copy = "pub", set = "pub")]
    head_rows: usize,
    #[getset(get_copy = "pub", set = "pub")]
    top_n: usize,
    #[getset(get_copy = "pub", set = "pub")]
    plot_width: usize,
    #[getset(get_copy = "pub", set = "pub")]
    plot_height: usize,
    #[getset(get = "pub", set = "pub")]
    output_dir: Option<PathBuf>,
    #[getset(get_copy = "pub", set = "pub")]
    choropleth: bool,
}

impl Config {
    /// Parse configuration from a TOML string. Missing keys take their default
    /// values.
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Read configuration from path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Config::from_toml(&data)
    }

    /// Read configuration from path if the file exists, otherwise return the
    /// default configuration.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            info!("reading configuration from {}", path.display());
            Config::load(path)
        } else {
            debug!("{} not found, using default configuration", path.display());
            Ok(Config::default())
        }
    }

    /// Byte used as field delimiter by the CSV reader.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            warn!("non-ASCII delimiter {:?}, using ','", self.delimiter);
            b','
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: constants::DATA_PATH.into(),
            delimiter: ',',
            entity_column: constants::LOCATION.into(),
            date_column: constants::DATE.into(),
            entities: constants::ENTITIES.iter().map(|s| s.to_string()).collect(),
            placeholder: constants::PLACEHOLDER.into(),
            date_formats: constants::DATE_FORMATS.iter().map(|s| s.to_string()).collect(),
            head_rows: constants::HEAD_ROWS,
            top_n: constants::TOP_N,
            plot_width: constants::PLOT_WIDTH,
            plot_height: constants::PLOT_HEIGHT,
            output_dir: None,
            choropleth: false,
        }
    }
}
