//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tick: TickConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timers: TimersConfig,
    #[serde(default)]
    pub presets: Vec<TimerPreset>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Periodic update settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickConfig {
    /// Milliseconds between two `Update` dispatches.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// chrono format string for the status bar clock.
    #[serde(default = "default_clock_format")]
    pub clock_format: String,
    #[serde(default = "default_true")]
    pub show_tenths: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            clock_format: default_clock_format(),
            show_tenths: true,
        }
    }
}

/// Limits applied when creating timers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimersConfig {
    #[serde(default = "default_max_name_len")]
    pub max_name_len: usize,
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            max_name_len: default_max_name_len(),
        }
    }
}

/// A timer created at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerPreset {
    pub name: String,
    #[serde(default)]
    pub start_running: bool,
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or `"timerdeck=debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_file: default_log_file(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_interval_ms() -> u64 {
    50
}
fn default_clock_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_max_name_len() -> usize {
    64
}
fn default_log_file() -> String {
    "~/.local/share/timerdeck/timerdeck.log".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.tick.interval_ms, 50);
        assert_eq!(cfg.ui.clock_format, "%H:%M:%S");
        assert!(cfg.ui.show_tenths);
        assert_eq!(cfg.timers.max_name_len, 64);
        assert!(cfg.presets.is_empty());
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections_and_presets() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [tick]
            interval_ms = 100

            [ui]
            show_tenths = false

            [[presets]]
            name = "Tea"

            [[presets]]
            name = "Laundry"
            start_running = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tick.interval_ms, 100);
        assert!(!cfg.ui.show_tenths);
        assert_eq!(cfg.ui.clock_format, "%H:%M:%S");
        assert_eq!(cfg.presets.len(), 2);
        assert_eq!(cfg.presets[0].name, "Tea");
        assert!(!cfg.presets[0].start_running);
        assert!(cfg.presets[1].start_running);
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.presets.push(TimerPreset {
            name: "Focus".into(),
            start_running: false,
        });
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.presets[0].name, "Focus");
        assert_eq!(back.logging.level, "info");
    }
}
