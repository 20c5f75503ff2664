pub mod scanner;

use anyhow::Context;
use std::{env, path::PathBuf};

pub use scanner::{ScanError, TokenScanner};

pub const CONFIG_FILE_NAME: &str = "config.yaml";

pub fn get_exe_dir() -> anyhow::Result<PathBuf> {
    if cfg!(debug_assertions) {
        // debug
        env::current_dir().context("Failed to read the current directory")
    } else {
        // release
        let exe_path = env::current_exe().context("Failed to locate the executable")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get exe directory")?;
        Ok(exe_dir.to_path_buf())
    }
}

pub fn get_config_path() -> anyhow::Result<PathBuf> {
    Ok(get_exe_dir()?.join(CONFIG_FILE_NAME))
}
