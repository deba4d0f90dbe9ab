//! Subscriber setup.
//!
//! The subscriber is installed before the config file is read so the
//! loader's own events are not lost. The config's level is applied
//! afterwards through a reload handle.

use supportchat_config::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Where the active filter came from. `RUST_LOG` wins, then
/// `--log-level`, then the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    Env,
    Cli(String),
    Config,
}

impl FilterSource {
    pub fn detect(cli_directive: Option<&str>) -> Self {
        if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
            FilterSource::Env
        } else if let Some(directive) = cli_directive {
            FilterSource::Cli(directive.to_string())
        } else {
            FilterSource::Config
        }
    }

    /// Whether a later config level may replace the filter.
    pub fn follows_config(&self) -> bool {
        matches!(self, FilterSource::Config)
    }
}

/// Filter to start with, before any config has been read.
fn initial_filter(source: &FilterSource) -> EnvFilter {
    let fallback = LogLevel::default().directive();
    match source {
        FilterSource::Env => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
        }
        FilterSource::Cli(directive) => EnvFilter::new(directive),
        FilterSource::Config => EnvFilter::new(fallback),
    }
}

pub struct LogControl {
    source: FilterSource,
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogControl {
    /// Switch to the config's level unless `RUST_LOG` or `--log-level`
    /// already chose one.
    pub fn apply_config_level(&self, level: LogLevel) {
        if !self.source.follows_config() {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level.directive())) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
}

/// Install the global subscriber, writing to stderr so logs do not
/// interleave with the transcript.
pub fn init(cli_directive: Option<&str>) -> LogControl {
    let source = FilterSource::detect(cli_directive);
    let (filter, handle) = reload::Layer::new(initial_filter(&source));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    LogControl { source, handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_config_source_follows_config() {
        assert!(FilterSource::Config.follows_config());
        assert!(!FilterSource::Env.follows_config());
        assert!(!FilterSource::Cli("supportchat=debug".into()).follows_config());
    }

    #[test]
    fn reload_switches_filter_to_config_level() {
        let (filter, handle) = reload::Layer::new(initial_filter(&FilterSource::Config));
        let subscriber = tracing_subscriber::registry().with(filter);
        let control = LogControl {
            source: FilterSource::Config,
            handle,
        };

        tracing::subscriber::with_default(subscriber, || {
            control.apply_config_level(LogLevel::Debug);
            let current = control.handle.with_current(|f| f.to_string()).unwrap();
            assert_eq!(current, "supportchat=debug");
        });
    }

    #[test]
    fn cli_level_is_not_replaced_by_config() {
        let source = FilterSource::Cli("supportchat=error".into());
        let (filter, handle) = reload::Layer::new(initial_filter(&source));
        let subscriber = tracing_subscriber::registry().with(filter);
        let control = LogControl { source, handle };

        tracing::subscriber::with_default(subscriber, || {
            control.apply_config_level(LogLevel::Debug);
            let current = control.handle.with_current(|f| f.to_string()).unwrap();
            assert_eq!(current, "supportchat=error");
        });
    }
}
