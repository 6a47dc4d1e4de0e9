//! Logger setup for the `draw_complex` binary
//!
//! The library itself only emits through the `log` facade. Binaries call
//! `init_logging` once; a logger installed by someone else (a test harness,
//! an embedding application) is left in place.

use log::LevelFilter;

/// GPU crates are chatty at info; keep them to warnings
const GPU_QUIET: &str = "wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter (e.g. "debug", "tda_draw_complex=debug");
    /// takes precedence over `RUST_LOG`
    pub filter: Option<String>,
    /// Level used when neither `filter` nor `RUST_LOG` is set
    pub default_level: LevelFilter,
    /// Prefix records with a timestamp
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: LevelFilter::Info,
            timestamps: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Build the logger for `config`; `rust_log` is the value of `RUST_LOG`
fn builder(config: &LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    match config.filter.clone().or(rust_log) {
        Some(filter) => {
            builder.parse_filters(&filter);
        }
        None => {
            builder.filter_level(config.default_level);
            builder.parse_filters(GPU_QUIET);
        }
    }

    if !config.timestamps {
        builder.format_timestamp(None);
    }
    builder.write_style(config.write_style);
    builder
}

/// Install the global logger
///
/// Returns `false` when a logger was already installed; the existing one
/// stays active.
pub fn init_logging(config: LoggingConfig) -> bool {
    let rust_log = std::env::var("RUST_LOG").ok();
    match builder(&config, rust_log).try_init() {
        Ok(()) => {
            log::debug!("logging initialized");
            true
        }
        Err(e) => {
            log::debug!("keeping existing logger: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter_wins() {
        let config = LoggingConfig {
            filter: Some("debug".to_string()),
            ..LoggingConfig::default()
        };
        let logger = builder(&config, Some("error".to_string())).build();
        assert_eq!(logger.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_rust_log_then_default_level() {
        let config = LoggingConfig::default();

        let logger = builder(&config, Some("warn".to_string())).build();
        assert_eq!(logger.filter(), LevelFilter::Warn);

        let logger = builder(&config, None).build();
        assert_eq!(logger.filter(), LevelFilter::Info);
    }

    #[test]
    fn test_second_install_is_ignored() {
        init_logging(LoggingConfig::default());
        assert!(!init_logging(LoggingConfig::default()));
    }
}
