use covid_eda::{
    chart::{CanvasList, CsvExport, Terminal},
    constants::CONFIG_PATH,
    pipeline,
    prelude::*,
};
use log::*;
use simple_logger::SimpleLogger;
use std::{env, io, process};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).init() {
        eprintln!("cannot initialize logger: {}", err);
    }

    if let Err(err) = report() {
        error!("{}", err);
        process::exit(1);
    }
}

fn report() -> Result<()> {
    let mut cfg = Config::load_or_default(CONFIG_PATH)?;
    if let Some(path) = env::args().nth(1) {
        cfg.set_data_path(path.into());
    }

    let mut canvas: CanvasList = vec![Box::new(Terminal::stdout(cfg.plot_width(), cfg.plot_height()))];
    if let Some(dir) = cfg.output_dir() {
        canvas.push(Box::new(CsvExport::new(dir)?));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = pipeline::run(&cfg, &mut out, &mut canvas)?;
    info!(
        "done: {} rows loaded, {} after cleaning, {} selected, {} charts",
        outcome.rows_loaded(),
        outcome.rows_cleaned(),
        outcome.rows_selected(),
        outcome.line_charts() + outcome.bar_charts()
    );
    Ok(())
}
