//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Install the global subscriber.
///
/// The filter comes from `level_override` if given, then `RUST_LOG`, then the
/// configured level. Logs go to stderr so command output on stdout stays
/// machine-readable.
pub fn init_tracing(cfg: &LoggingConfig, level_override: Option<&str>) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(cfg, level_override))
        .with_writer(std::io::stderr);

    match cfg.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

fn env_filter(cfg: &LoggingConfig, level_override: Option<&str>) -> EnvFilter {
    match level_override {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_beats_env_and_config() {
        let cfg = LoggingConfig {
            level: "warn".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(env_filter(&cfg, Some("debug")).to_string(), "debug");
    }
}
