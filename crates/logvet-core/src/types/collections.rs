//! Re-exports of collection types used across the engine.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::BTreeMap;
