mod logger;
mod reader;
mod summation;

use std::io;
use std::process;

use owo_colors::OwoColorize;
use shared::TokenScanner;

use logger::init_logger;
use reader::{AdderConfig, read_config, resolve_args};
use summation::RunError;

fn main() {
    let args = resolve_args();

    let (config, config_error) = match read_config(args.config.as_deref()) {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (AdderConfig::default(), Some(e)),
    };

    init_logger(args.log_level(&config), config.color);

    if let Some(e) = config_error {
        log::warn!("ignoring config file: {e}");
    }
    log::debug!("{:?}", &args);

    let result = {
        // stdin 的鎖在這個區塊結束時釋放
        let mut scanner = TokenScanner::new(io::stdin().lock());
        let mut stdout = io::stdout().lock();
        summation::run(&mut scanner, &mut stdout)
    };

    if let Err(e) = result {
        report_error(&e, config.color);
        process::exit(1);
    }
}

fn report_error(error: &RunError, color: bool) {
    let message = format!("error: {error}");
    if color {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{message}");
    }
}
