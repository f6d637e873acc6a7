// src/changelog.rs

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Label of the trailing "last updated" line.
pub const LAST_UPDATED_LABEL: &str = "Poslední aktualizace:";

/// Set the trailing "Poslední aktualizace: YYYY-MM-DD" line of the file at
/// `path`, logging instead of failing when the file cannot be updated.
pub fn touch_changelog<P: AsRef<Path>>(path: P, date: NaiveDate) {
    let path = path.as_ref();
    match update_changelog(path, date) {
        Ok(()) => info!(path = %path.display(), %date, "updated changelog"),
        Err(e) => warn!(path = %path.display(), error = %format!("{e:#}"), "failed to update changelog"),
    }
}

/// Replace the last line when it already carries the label, otherwise
/// append a new one. Earlier lines are left as they are.
pub fn update_changelog(path: &Path, date: NaiveDate) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let stamp = format!("{} {}", LAST_UPDATED_LABEL, date.format("%Y-%m-%d"));

    let mut lines: Vec<&str> = text.lines().collect();
    if lines.last().is_some_and(|l| l.starts_with(LAST_UPDATED_LABEL)) {
        lines.pop();
    }
    lines.push(stamp.as_str());

    let mut out = lines.join("\n");
    out.push('\n');
    fs::write(path, out).with_context(|| format!("writing {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_replaces_existing_line() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("README.md");
        fs::write(&path, "# Data\n\nSome text\nPoslední aktualizace: 2023-01-01\n")?;

        update_changelog(&path, june())?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "# Data\n\nSome text\nPoslední aktualizace: 2024-06-15\n"
        );
        Ok(())
    }

    #[test]
    fn test_appends_when_missing() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("README.md");
        fs::write(&path, "# Data\nSome text")?;

        update_changelog(&path, june())?;

        assert_eq!(
            fs::read_to_string(&path)?,
            "# Data\nSome text\nPoslední aktualizace: 2024-06-15\n"
        );
        Ok(())
    }

    #[test]
    fn test_empty_file_gets_the_line() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("README.md");
        fs::write(&path, "")?;

        update_changelog(&path, june())?;

        assert_eq!(fs::read_to_string(&path)?, "Poslední aktualizace: 2024-06-15\n");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_swallowed() -> Result<()> {
        let tmp = tempdir()?;
        let path = tmp.path().join("nope").join("README.md");

        assert!(update_changelog(&path, june()).is_err());
        touch_changelog(&path, june());
        assert!(!path.exists());
        Ok(())
    }
}
