//! Runtime settings
//!
//! Read once from the page URL query string (`?seed=42&debug=1&log=debug`).
//! Nothing is stored; a reload without parameters gets the defaults back.

use serde::{Deserialize, Serialize};

/// Log verbosity selectable from the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Page settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed layout seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Show the position/velocity readout
    pub show_debug: bool,
    pub log_level: LogLevel,
}

impl Settings {
    /// Parse a query string, with or without the leading `?`.
    /// Unknown keys are ignored and bad values keep their defaults.
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "seed" => match value.parse::<u64>() {
                    Ok(seed) => settings.seed = Some(seed),
                    Err(_) => log::warn!("Ignoring invalid seed {:?}", value),
                },
                "debug" => settings.show_debug = parse_flag(value),
                "log" => match LogLevel::parse(value) {
                    Some(level) => settings.log_level = level,
                    None => log::warn!("Ignoring unknown log level {:?}", value),
                },
                _ => {}
            }
        }

        settings
    }

    /// Seed to lay out the scene with
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Read settings from the current page URL (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

/// `debug`, `debug=1`, `debug=true` and `debug=on` all enable a flag
fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "" | "1" | "true" | "on" | "yes")
}
