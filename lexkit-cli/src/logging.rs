//! CLI logging setup
//!
//! A `tracing-subscriber` registry filtered per phase. Logs go to stderr so
//! they never mix with the token listing on stdout.

use std::io;
use std::path::Path;
use std::sync::Mutex;

use lexkit_config::Phase;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::config::LogConfig;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored multi-line output
    Pretty,
    Compact,
    /// For tool integration
    Json,
}

/// Filter with one target per phase plus the CLI's own target
pub fn targets(log_config: &LogConfig) -> Targets {
    Phase::ALL
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, phase| {
            targets.with_target(phase.target(), log_config.level_for(phase))
        })
        .with_target("lexkit::cli", log_config.global)
}

/// Installs the global subscriber, also appending to `file` when given
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = targets(log_config);
    let console = create_format_layer(format, io::stderr).with_filter(targets.clone());

    match file {
        Some(path) => {
            let file_handle = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file_handle))
                .with_filter(targets);
            tracing_subscriber::registry()
                .with(console)
                .with(file_layer)
                .init();
        }
        None => {
            tracing_subscriber::registry().with(console).init();
        }
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(
    format: LogFormat,
    make_writer: F,
) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    #[test]
    fn test_targets_follow_phase_levels() {
        let mut config = LogConfig::default();
        config.set(Phase::Scanner, Level::TRACE);
        let targets = targets(&config);
        assert!(targets.would_enable("lexkit::scanner", &Level::TRACE));
        assert!(!targets.would_enable("lexkit::tokenizer", &Level::DEBUG));
        assert!(targets.would_enable("lexkit::cli", &Level::WARN));
    }
}
