//! CLI configuration
//!
//! The project profile (`lexkit.json`) names the entry file, the lexer to
//! build and how to print the result. Log levels are derived from it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexkit_config::{LexerProfile, Phase};
use serde::Deserialize;
use tracing::Level;

use crate::logging::LogFormat;
use crate::CliError;

/// Project profile file
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectProfile {
    /// Source file, relative to the profile's directory
    pub entry: String,
    #[serde(default)]
    pub lexer: LexerProfile,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_source: bool,
    pub show_spans: bool,
    /// "silent", "error", "warn", "info", "debug" or "trace"
    pub log_level: Option<String>,
    /// Per-phase overrides keyed by phase name
    pub phase_log_levels: BTreeMap<String, String>,
    /// "pretty", "compact" or "json"
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ProjectProfile {
    /// Reads and validates a profile file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Err(CliError::MissingProfile(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|err| match err {
            CliError::Json { source, .. } => CliError::Json {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, CliError> {
        let profile: ProjectProfile =
            serde_json::from_str(content).map_err(|source| CliError::Json {
                path: PathBuf::new(),
                source,
            })?;
        if profile.entry.is_empty() {
            return Err(CliError::EmptyEntry);
        }
        Ok(profile)
    }

    /// Entry file path resolved against the profile's directory
    pub fn entry_path(&self, profile_path: &Path) -> PathBuf {
        let base_dir = profile_path.parent().unwrap_or(Path::new("."));
        base_dir.join(&self.entry)
    }
}

impl OutputConfig {
    pub fn log_config(&self) -> Result<LogConfig, CliError> {
        let mut config = LogConfig::default();
        if let Some(level) = &self.log_level {
            config.global = parse_log_level(level)?;
        }
        for (name, level) in &self.phase_log_levels {
            let phase =
                Phase::from_name(name).ok_or_else(|| CliError::UnknownPhase(name.clone()))?;
            config.set(phase, parse_log_level(level)?);
        }
        Ok(config)
    }

    pub fn log_format(&self) -> Result<LogFormat, CliError> {
        match self.log_format.as_deref() {
            None => Ok(LogFormat::Compact),
            Some(name) => match name.to_lowercase().as_str() {
                "pretty" => Ok(LogFormat::Pretty),
                "compact" => Ok(LogFormat::Compact),
                "json" => Ok(LogFormat::Json),
                _ => Err(CliError::BadLogFormat(name.to_string())),
            },
        }
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Result<Level, CliError> {
    match s.to_lowercase().as_str() {
        // silent = only errors
        "silent" | "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(CliError::BadLogLevel(s.to_string())),
    }
}

/// CLI log configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub tokenizer: Option<Level>,
    pub scanner: Option<Level>,
    pub lexer: Option<Level>,
    pub parser: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            tokenizer: None,
            scanner: None,
            lexer: None,
            parser: None,
        }
    }
}

impl LogConfig {
    pub fn set(&mut self, phase: Phase, level: Level) {
        let slot = match phase {
            Phase::Tokenizer => &mut self.tokenizer,
            Phase::Scanner => &mut self.scanner,
            Phase::Lexer => &mut self.lexer,
            Phase::Parser => &mut self.parser,
        };
        *slot = Some(level);
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> Level {
        match phase {
            Phase::Tokenizer => self.tokenizer,
            Phase::Scanner => self.scanner,
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
        }
        .unwrap_or(self.global)
    }
}
