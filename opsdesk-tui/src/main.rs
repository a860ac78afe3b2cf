mod records;
mod session;
mod store;
mod ui;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("opsdesk-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = ui::run() {
        eprintln!("Error: {}", e);
    }
}
