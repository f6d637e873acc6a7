// src/process/mod.rs
pub mod convert;
pub mod date_parser;
pub mod trimming;
pub mod utils;

use tracing::{debug, instrument};

use crate::types::{FlatRecord, NormalizedRecord};

/// Data type whose values are amounts in CZK rather than counts.
pub const PENALTY_DATA_TYPE: &str = "Uložené pokuty v Kč";

/// Turn flat records into output rows:
/// 1. penalty values to `amount`, everything else to `count`
/// 2. trim every string field
/// 3. drop subtotal ("celkem") rows
/// 4. fix the "zjitěných" typo in the data type
/// 5. parse the period as a date
/// 6. remove "z toho: " from the offense
/// 7. parse count and amount as nullable integers
#[instrument(level = "info", skip(records), fields(records = records.len()))]
pub fn normalize(records: Vec<FlatRecord>) -> Vec<NormalizedRecord> {
    let total = records.len();
    let out: Vec<NormalizedRecord> = records.into_iter().filter_map(normalize_record).collect();
    debug!(kept = out.len(), dropped = total - out.len(), "normalized records");
    out
}

fn normalize_record(mut rec: FlatRecord) -> Option<NormalizedRecord> {
    // label compared as received, before trimming
    let is_penalty = rec.data_type == PENALTY_DATA_TYPE;
    trimming::apply_trimming(&mut rec);
    if rec.strings().any(utils::is_subtotal) {
        return None;
    }

    let value = convert::parse_integer(rec.value.as_ref());
    let (count, amount) = if is_penalty { (None, value) } else { (value, None) };
    Some(NormalizedRecord {
        period: date_parser::parse_period(&rec.period),
        data_type: utils::fix_typo(&rec.data_type),
        region: rec.region,
        category: rec.category,
        offense: rec.offense.as_deref().map(utils::strip_offense_marker),
        count,
        amount,
    })
}
