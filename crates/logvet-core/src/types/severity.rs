//! Ordered log severity scale.
//!
//! Mirrors the zap-style scale the node emits. The node core logs a
//! custom `crit` level which ranks identically to `dpanic`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ClassifyError;

/// Log severity, ordered from least to most severe.
///
/// The derived `Ord` is the comparison the scanner uses against the
/// configured failing level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    /// `dpanic` in zap terms; the node's custom `crit` token maps here.
    #[serde(alias = "crit")]
    DPanic,
    Panic,
    Fatal,
}

impl LogLevel {
    /// Parse a severity token. The mapping is total: an unrecognized
    /// token is a hard error, never a silent default.
    pub fn parse(token: &str) -> Result<Self, ClassifyError> {
        match token {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            // "crit" is a custom node-core level ranked with dpanic
            "dpanic" | "crit" => Ok(Self::DPanic),
            "panic" => Ok(Self::Panic),
            "fatal" => Ok(Self::Fatal),
            _ => Err(ClassifyError::UnknownLevel {
                token: token.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::DPanic => "dpanic",
            Self::Panic => "panic",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_matches_conventional_severity() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::DPanic);
        assert!(LogLevel::DPanic < LogLevel::Panic);
        assert!(LogLevel::Panic < LogLevel::Fatal);
    }

    #[test]
    fn crit_ranks_identically_to_dpanic() {
        assert_eq!(LogLevel::parse("crit").unwrap(), LogLevel::DPanic);
        assert_eq!(
            LogLevel::parse("crit").unwrap(),
            LogLevel::parse("dpanic").unwrap()
        );
    }

    #[test]
    fn unknown_token_is_a_hard_error() {
        let err = LogLevel::parse("bogus").unwrap_err();
        assert!(matches!(err, ClassifyError::UnknownLevel { ref token } if token == "bogus"));
    }

    #[test]
    fn serde_accepts_crit_alias() {
        let level: LogLevel = serde_json::from_str("\"crit\"").unwrap();
        assert_eq!(level, LogLevel::DPanic);
        assert_eq!(serde_json::to_string(&level).unwrap(), "\"dpanic\"");
    }
}
