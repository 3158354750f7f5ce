//! Line classifier: one raw line → skip, fatal raw marker, or event.
//!
//! Detection of the raw crash marker is textual and happens before any
//! structured decoding: unstructured panic traces must never be silently
//! dropped, and they arrive outside the structured format by definition.

use logvet_core::constants::{FATAL_RAW_MARKER, STRUCTURED_RECORD_MARKER};
use logvet_core::errors::ClassifyError;
use logvet_core::types::collections::FxHashMap;
use logvet_core::types::severity::LogLevel;
use logvet_core::types::verdict::LogEvent;
use serde_json::Value;

/// Outcome of classifying one raw log line.
#[derive(Debug, Clone)]
pub enum Classification {
    /// Stray unstructured output (stdout noise); ignored.
    Skip,
    /// An unstructured crash marker; unconditionally fatal.
    FatalRaw,
    /// A decoded, leveled structured record.
    Event(LogEvent),
}

/// Classify a single raw log line.
///
/// Errors mean the logging format contract was violated: a structured-
/// looking line that fails to decode, a record without a level, a level
/// or message field of the wrong shape, or an unrecognized level token.
pub fn classify_line(raw: &str) -> Result<Classification, ClassifyError> {
    if !raw.starts_with(STRUCTURED_RECORD_MARKER) {
        if raw.starts_with(FATAL_RAW_MARKER) {
            return Ok(Classification::FatalRaw);
        }
        return Ok(Classification::Skip);
    }

    let mut attributes: FxHashMap<String, Value> =
        serde_json::from_str(raw).map_err(|err| ClassifyError::StructuralParse {
            line: raw.to_string(),
            reason: err.to_string(),
        })?;

    let level = match attributes.remove("level") {
        Some(Value::String(token)) => LogLevel::parse(&token)?,
        Some(_) => {
            return Err(ClassifyError::StructuralParse {
                line: raw.to_string(),
                reason: "level field is not textual".to_string(),
            })
        }
        None => {
            return Err(ClassifyError::MissingLevel {
                line: raw.to_string(),
            })
        }
    };

    // A record without a msg key still counts toward the threshold, but
    // can never match an allow-list entry; message stays None.
    let message = match attributes.remove("msg") {
        Some(Value::String(text)) => Some(text),
        Some(_) => {
            return Err(ClassifyError::StructuralParse {
                line: raw.to_string(),
                reason: "msg field is not textual".to_string(),
            })
        }
        None => None,
    };

    Ok(Classification::Event(LogEvent {
        level,
        message,
        raw: raw.to_string(),
        attributes,
    }))
}
