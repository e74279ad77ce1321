//! Canonical rendering and fingerprinting of the constant table.
//!
//! The calculator's numbers are fixed at build time. To make a printed result
//! auditable we hash the canonical JSON form of [`RiskTable`]; two binaries that
//! report the same `table_hash` computed with the same epidemiological
//! assumptions.

use anyhow::{Context, Result};
use cfr_risk::RiskTable;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table_hash: String,
    pub canonical_json: String,
    pub table_json: Value,
}

/// Snapshot the published constants and fingerprint them.
pub fn load_published_table() -> Result<LoadedTable> {
    fingerprint(&RiskTable::published())
}

/// Canonicalize any serializable value and hash it.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<LoadedTable> {
    let table_json = serde_json::to_value(value).context("table -> json conversion failed")?;
    let canonical_json = canonicalize_json(&table_json)?;
    let table_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedTable {
        table_hash,
        canonical_json,
        table_json,
    })
}

/// Compact JSON with object keys in sorted order.
///
/// serde_json's `Map` is a BTreeMap unless `preserve_order` is enabled, so
/// re-serializing a `Value` sorts keys. Array order is kept as-is.
pub fn canonicalize_json(v: &Value) -> Result<String> {
    serde_json::to_string(v).context("canonical json serialize failed")
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
