//! Property-based tests for verification invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - aggregate OR is commutative and order-independent
//!   - events strictly below the failing level never flip a verdict
//!   - the threshold boundary is exact: failed iff count >= threshold

use std::io::Cursor;

use proptest::prelude::*;

use logvet_core::config::VerifyConfig;
use logvet_core::events::VetEventHandler;
use logvet_core::types::severity::LogLevel;
use logvet_core::types::verdict::{AggregateVerdict, ScanVerdict};
use logvet_verify::allowlist::AllowList;
use logvet_verify::scanner::SourceScanner;

struct NoOpHandler;
impl VetEventHandler for NoOpHandler {}

fn scan_lines(config: &VerifyConfig, lines: &[String]) -> ScanVerdict {
    let allowlist = AllowList::with_defaults(&config.allowed_messages);
    let scanner = SourceScanner::new(config, &allowlist, &NoOpHandler);
    scanner.scan("prop-source", Cursor::new(lines.join("\n")))
}

fn level_token(index: usize) -> &'static str {
    ["trace", "debug", "info", "warn", "error", "dpanic", "crit", "panic", "fatal"][index % 9]
}

fn structured_line(level: &str, msg: &str) -> String {
    serde_json::json!({ "level": level, "msg": msg }).to_string()
}

proptest! {
    /// Aggregation OR is order-independent: any permutation of the same
    /// per-source verdicts yields the same overall flag and failed set.
    #[test]
    fn prop_aggregate_or_is_order_independent(
        flags in prop::collection::vec(any::<bool>(), 1..16),
        seed in any::<u64>(),
    ) {
        let verdicts: Vec<(String, ScanVerdict)> = flags
            .iter()
            .enumerate()
            .map(|(i, &failed)| {
                let verdict = if failed {
                    ScanVerdict::fail(1, format!("line-{i}"))
                } else {
                    ScanVerdict::pass(0)
                };
                (format!("source-{i}"), verdict)
            })
            .collect();

        let mut shuffled = verdicts.clone();
        // Cheap deterministic shuffle driven by the seed.
        for i in (1..shuffled.len()).rev() {
            let j = (seed as usize).wrapping_mul(i.wrapping_add(7)) % (i + 1);
            shuffled.swap(i, j);
        }

        let forward = AggregateVerdict::from_verdicts(verdicts);
        let permuted = AggregateVerdict::from_verdicts(shuffled);

        prop_assert_eq!(forward.overall_failed, flags.iter().any(|&f| f));
        prop_assert_eq!(forward.overall_failed, permuted.overall_failed);
        prop_assert_eq!(forward.failed_sources(), permuted.failed_sources());
    }

    /// Valid structured lines strictly below the failing level never
    /// increase the count or flip the verdict.
    #[test]
    fn prop_below_failing_level_never_fails(
        level_indices in prop::collection::vec(0usize..4, 0..64),
        msgs in prop::collection::vec("[a-zA-Z0-9 ]{0,40}", 0..64),
    ) {
        // Indices 0..4 map to trace/debug/info/warn, all below error.
        let lines: Vec<String> = level_indices
            .iter()
            .zip(msgs.iter().chain(std::iter::repeat(&String::new())))
            .map(|(&i, msg)| structured_line(level_token(i), msg))
            .collect();

        let config = VerifyConfig::default();
        let verdict = scan_lines(&config, &lines);
        prop_assert!(!verdict.failed);
        prop_assert_eq!(verdict.failure_count, 0);
        prop_assert!(verdict.error.is_none());
    }

    /// The threshold boundary is exact: with N qualifying unallowed
    /// events, the scan fails iff N >= threshold.
    #[test]
    fn prop_threshold_boundary_is_exact(
        qualifying in 0u32..12,
        threshold in 1u32..12,
    ) {
        let lines: Vec<String> = (0..qualifying)
            .map(|i| structured_line("error", &format!("unallowed failure {i}")))
            .collect();

        let config = VerifyConfig {
            failure_threshold: threshold,
            ..Default::default()
        };
        let verdict = scan_lines(&config, &lines);

        prop_assert_eq!(verdict.failed, qualifying >= threshold);
        if verdict.failed {
            prop_assert_eq!(verdict.failure_count, threshold);
            prop_assert!(verdict.last_offending_line.is_some());
        } else {
            prop_assert_eq!(verdict.failure_count, qualifying);
        }
    }

    /// A panic marker fails the scan wherever it appears and whatever
    /// the threshold is.
    #[test]
    fn prop_panic_marker_always_fails(
        clean_before in 0usize..10,
        clean_after in 0usize..10,
        threshold in 1u32..10,
    ) {
        let mut lines: Vec<String> = (0..clean_before)
            .map(|i| structured_line("info", &format!("fine {i}")))
            .collect();
        lines.push("panic: fatal concurrency bug".to_string());
        lines.extend((0..clean_after).map(|i| structured_line("info", &format!("after {i}"))));

        let config = VerifyConfig {
            failure_threshold: threshold,
            ..Default::default()
        };
        let verdict = scan_lines(&config, &lines);
        prop_assert!(verdict.failed);
        let error = verdict.error.expect("fatal marker error detail");
        prop_assert_eq!(error.code, "FATAL_MARKER");
    }
}
