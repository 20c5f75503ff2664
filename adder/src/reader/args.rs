use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use super::AdderConfig;

/// Adder - reads two integers and prints their sum
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file (optional).
    /// If not provided, config.yaml next to the executable is used when it exists.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose mode to print debug logs on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_level(&self, config: &AdderConfig) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            config.log_level.unwrap_or(LevelFilter::Warn)
        }
    }
}

pub fn resolve_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["adder"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from(["adder", "-v", "--config", "adder.yaml"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.config, Some(PathBuf::from("adder.yaml")));
    }

    #[test]
    fn test_positional_rejected() {
        assert!(Args::try_parse_from(["adder", "2", "3"]).is_err());
    }

    #[test]
    fn test_log_level_priority() {
        let quiet = Args::try_parse_from(["adder"]).unwrap();
        let verbose = Args::try_parse_from(["adder", "--verbose"]).unwrap();
        let config = AdderConfig {
            log_level: Some(LevelFilter::Error),
            ..AdderConfig::default()
        };

        assert_eq!(quiet.log_level(&AdderConfig::default()), LevelFilter::Warn);
        assert_eq!(quiet.log_level(&config), LevelFilter::Error);
        assert_eq!(verbose.log_level(&config), LevelFilter::Debug);
    }
}
