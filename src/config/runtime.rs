// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether whitespace and comment tokens are kept in lexer output.
    /// Off by default: the shell layers only consume significant tokens.
    pub retain_trivia: bool,

    /// Whether to collect detailed token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to show position information in error messages
    pub include_position_in_errors: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            retain_trivia: env::var("CQL_FRONT_RETAIN_TRIVIA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            collect_detailed_metrics: env::var("CQL_FRONT_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_position_in_errors: env::var("CQL_FRONT_INCLUDE_POSITIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum severity emitted by the configured logger
    pub min_log_level: LogLevel,

    /// Whether to emit JSON events instead of human-readable lines
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: match env::var("CQL_FRONT_LOG_LEVEL").as_deref() {
                Ok("error") => LogLevel::Error,
                Ok("warning") => LogLevel::Warning,
                Ok("debug") => LogLevel::Debug,
                _ => LogLevel::Info,
            },
            use_structured_logging: env::var("CQL_FRONT_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

/// Top-level runtime preferences, loadable from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl Preferences {
    /// Parse preferences from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load preferences from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read preferences file {}: {}", path.display(), e))?;
        Self::from_toml_str(&text).map_err(|e| format!("Invalid preferences file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert!(!prefs.lexical.retain_trivia);
        assert!(prefs.lexical.include_position_in_errors);
    }

    #[test]
    fn test_from_toml_str() {
        let prefs = Preferences::from_toml_str(
            "[lexical]\nretain_trivia = true\ncollect_detailed_metrics = false\n\
             include_position_in_errors = true\n\
             [logging]\nmin_log_level = \"debug\"\nuse_structured_logging = true\n",
        )
        .unwrap();
        assert!(prefs.lexical.retain_trivia);
        assert!(!prefs.lexical.collect_detailed_metrics);
        assert_eq!(prefs.logging.min_log_level, LogLevel::Debug);
        assert!(prefs.logging.use_structured_logging);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[lexical]").unwrap();
        writeln!(file, "retain_trivia = true").unwrap();
        writeln!(file, "collect_detailed_metrics = true").unwrap();
        writeln!(file, "include_position_in_errors = false").unwrap();
        let prefs = Preferences::from_file(file.path()).unwrap();
        assert!(prefs.lexical.retain_trivia);
        assert!(!prefs.lexical.include_position_in_errors);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let prefs = Preferences::from_toml_str("").unwrap();
        assert!(!prefs.logging.use_structured_logging);
    }
}
