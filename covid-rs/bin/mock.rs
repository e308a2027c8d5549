use covid_eda::{
    constants::DATA_PATH,
    mock::{generate_mock_data, MockSettings},
    prelude::*,
};
use log::*;
use rand::{rngs::SmallRng, SeedableRng};
use simple_logger::SimpleLogger;
use std::{env, fs, process};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("cannot initialize logger: {}", err);
    }

    // Optional arguments: output path and a TOML file with MockSettings.
    let path = env::args().nth(1).unwrap_or_else(|| DATA_PATH.to_string());
    let settings = match env::args().nth(2) {
        Some(cfg) => match read_settings(&cfg) {
            Ok(settings) => settings,
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        },
        None => MockSettings::default(),
    };

    let mut rng = SmallRng::from_entropy();
    match generate_mock_data(&path, &settings, &mut rng) {
        Ok(summary) => println!("Generated {} records in {}", summary.rows(), path),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

fn read_settings(path: &str) -> Result<MockSettings> {
    let data = fs::read_to_string(path)?;
    Ok(toml::from_str(&data)?)
}
