mod app;
mod config;
mod error;
mod renderer;

use config::WindowConfig;
use std::process;

fn main() {
    env_logger::init();

    if let Err(err) = app::run(WindowConfig::default()) {
        log::error!("{}", err);
        process::exit(err.exit_code());
    }

    log::info!("closed");
}
