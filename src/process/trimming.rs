use crate::types::{FlatRecord, Scalar};

/// Trim leading and trailing whitespace from every string field, including
/// a textual value.
pub fn apply_trimming(rec: &mut FlatRecord) {
    for s in [&mut rec.period, &mut rec.region, &mut rec.data_type] {
        trim_in_place(s);
    }
    for s in [&mut rec.category, &mut rec.offense].into_iter().flatten() {
        trim_in_place(s);
    }
    if let Some(Scalar::Text(s)) = &mut rec.value {
        trim_in_place(s);
    }
}

fn trim_in_place(s: &mut String) {
    let trimmed = s.trim();
    if trimmed.len() != s.len() {
        *s = trimmed.to_string();
    }
}
