//! `cfr --show-table`: dump the constant table and its fingerprint.

use anyhow::Result;

pub fn show_table() -> Result<()> {
    let loaded = cfr_config::load_published_table()?;
    println!("table_hash={}", loaded.table_hash);
    println!("{}", loaded.canonical_json);
    Ok(())
}
