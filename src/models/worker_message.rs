//! Messages written by the command-line tool.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of one parameter in a `presets` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSummary {
    pub name: String,
    pub localized_name: String,
    pub spec: super::ParameterSpec,
}

/// Summary of one preset in a `presets` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetSummary {
    pub name: String,
    pub localized_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_order: Option<Vec<String>>,
    pub params: Vec<ParameterSummary>,
}

/// Messages sent on stdout, one JSON object per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkerMessage {
    /// Log message
    Log {
        level: String,
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// Error message
    Error {
        message: String,
    },

    /// Catalog listing
    Presets {
        presets: Vec<PresetSummary>,
    },

    /// Rendered filter
    Filter {
        preset: String,
        filter: String,
    },
}

impl WorkerMessage {
    /// Create a log message stamped with the current time.
    pub fn log(level: LogLevel, message: &str) -> Self {
        WorkerMessage::Log {
            level: level.as_str().to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Create an error message.
    pub fn error(message: &str) -> Self {
        WorkerMessage::Error {
            message: message.to_string(),
        }
    }

    pub fn presets(presets: Vec<PresetSummary>) -> Self {
        WorkerMessage::Presets { presets }
    }

    pub fn filter(preset: &str, filter: &str) -> Self {
        WorkerMessage::Filter {
            preset: preset.to_string(),
            filter: filter.to_string(),
        }
    }
}

/// Log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}
