// src/flatten.rs

use tracing::{debug, instrument};

use crate::error::EtlError;
use crate::types::{FlatRecord, Node, RawDataset, Scalar};

/// Keys that must be mappings: root, period, region.
const BRANCH_LEVELS: usize = 3;
/// Period, region, data type, category, offense.
const MAX_KEYS: usize = 5;

/// Emit one record per leaf value of `raw`, padding missing category and
/// offense levels with `None`.
#[instrument(level = "info", skip(raw))]
pub fn flatten(raw: RawDataset) -> Result<Vec<FlatRecord>, EtlError> {
    let mut out = Vec::with_capacity(raw.root.leaf_count());
    let mut keys = Vec::with_capacity(MAX_KEYS);
    walk(raw.root, &mut keys, &mut out)?;
    debug!(records = out.len(), "flattened dataset");
    Ok(out)
}

fn walk(node: Node, keys: &mut Vec<String>, out: &mut Vec<FlatRecord>) -> Result<(), EtlError> {
    match node {
        Node::Leaf(_) if keys.len() < BRANCH_LEVELS => Err(EtlError::shape(
            keys,
            "expected a mapping, found a value",
        )),
        Node::Leaf(scalar) => {
            out.push(record(keys, scalar));
            Ok(())
        }
        Node::Branch(_) if keys.len() >= MAX_KEYS => Err(EtlError::shape(
            keys,
            "nested deeper than category / offense",
        )),
        // Each entry follows its own branch, so levels mixing values and
        // mappings are kept entry by entry.
        Node::Branch(entries) => {
            for (key, child) in entries {
                keys.push(key);
                walk(child, keys, out)?;
                keys.pop();
            }
            Ok(())
        }
    }
}

fn record(keys: &[String], scalar: Scalar) -> FlatRecord {
    let value = match scalar {
        Scalar::Null => None,
        other => Some(other),
    };
    FlatRecord {
        period: keys[0].clone(),
        region: keys[1].clone(),
        data_type: keys[2].clone(),
        category: keys.get(3).cloned(),
        offense: keys.get(4).cloned(),
        value,
    }
}
