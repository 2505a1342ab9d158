use color_eyre::Result;
use log::LevelFilter;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use crate::config::{Config, LogConfig};

/// Routes `log` output to a file so it never draws over the terminal UI.
///
/// The configured level is the default; `RUST_LOG` directives override it.
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::new()
        .filter_level(parse_level(&config.level))
        .filter_module("arboard", LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    Ok(path)
}

pub fn log_path() -> Result<PathBuf> {
    Ok(Config::project_dirs()?
        .data_local_dir()
        .join("termfolio.log"))
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
