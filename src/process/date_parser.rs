use chrono::NaiveDate;

/// Parse a `"MMYYYY"` period label into the first day of that month.
pub fn parse_period(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u32 = s[0..2].parse().ok()?;
    let year: i32 = s[2..6].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
