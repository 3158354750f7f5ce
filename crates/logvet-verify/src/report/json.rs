//! JSON reporter — structured machine-readable output.

use serde_json::json;

use logvet_core::errors::ReportError;
use logvet_core::types::resources::ResourcesSummary;
use logvet_core::types::verdict::AggregateVerdict;

use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(
        &self,
        verdict: &AggregateVerdict,
        resources: Option<&ResourcesSummary>,
    ) -> Result<String, ReportError> {
        let sources: Vec<serde_json::Value> = verdict
            .per_source
            .iter()
            .map(|(source_id, v)| {
                json!({
                    "source": source_id,
                    "failed": v.failed,
                    "failure_count": v.failure_count,
                    "last_offending_line": v.last_offending_line,
                    "error": v.error,
                })
            })
            .collect();

        let output = json!({
            "overall_failed": verdict.overall_failed,
            "source_count": verdict.per_source.len(),
            "failed_sources": verdict.failed_sources(),
            "sources": sources,
            "resources": resources,
        });

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
