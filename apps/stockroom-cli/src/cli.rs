//! Command line flags.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Interactive product inventory.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stockroom", author, version, about)]
pub struct Args {
    /// Config file (defaults to stockroom.toml in the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,stockroom=trace`
    #[arg(short = 'l', long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Do not write a log file
    #[arg(long)]
    pub no_log_file: bool,
}

impl Args {
    /// Flags win over file and environment settings, `RUST_LOG` included.
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_log_file {
            config.logging.enabled = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args =
            Args::try_parse_from(["stockroom", "--config", "s.toml", "-l", "debug", "--no-log-file"])
                .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("s.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.no_log_file);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = AppConfig::default();
        Args {
            log_level: Some("warn".to_string()),
            no_log_file: true,
            ..Args::default()
        }
        .apply_to(&mut config);

        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_log_level_flag_beats_rust_log() {
        use tracing_subscriber::filter::LevelFilter;

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| {
            (key == crate::config::ENV_RUST_LOG).then(|| "trace".to_string())
        });
        assert_eq!(config.logging.level, "trace");

        Args::try_parse_from(["stockroom", "-l", "info"]).unwrap().apply_to(&mut config);
        assert_eq!(config.logging.level, "info");

        let filter = crate::logging::build_filter(&config.logging.level).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let mut config = AppConfig::default();
        Args::try_parse_from(["stockroom"]).unwrap().apply_to(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
