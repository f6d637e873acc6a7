/// Marker of aggregate rows.
const SUBTOTAL_MARKER: &str = "celkem";
/// Misspelling published upstream, and its correction.
const TYPO: (&str, &str) = ("zjitěných", "zjištěných");
/// Drill-down marker in front of offense labels.
const OFFENSE_MARKER: &str = "z toho: ";

/// True when `s` contains "celkem" in any letter case.
pub fn is_subtotal(s: &str) -> bool {
    s.to_lowercase().contains(SUBTOTAL_MARKER)
}

/// Correct the upstream spelling of "zjištěných". Case-sensitive.
pub fn fix_typo(s: &str) -> String {
    s.replace(TYPO.0, TYPO.1)
}

/// Remove every occurrence of "z toho: ", wherever it appears.
pub fn strip_offense_marker(s: &str) -> String {
    s.replace(OFFENSE_MARKER, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subtotal() {
        assert!(is_subtotal("Celkem"));
        assert!(is_subtotal("Přestupky CELKEM"));
        assert!(is_subtotal("celkem za obvod"));
        assert!(!is_subtotal("Krádeže"));
    }

    #[test]
    fn test_fix_typo() {
        assert_eq!(fix_typo("X zjitěných Y"), "X zjištěných Y");
        assert_eq!(fix_typo("Počet zjištěných"), "Počet zjištěných");
        assert_eq!(fix_typo("ZJITĚNÝCH"), "ZJITĚNÝCH");
    }

    #[test]
    fn test_strip_offense_marker() {
        assert_eq!(strip_offense_marker("z toho: Pokuty"), "Pokuty");
        assert_eq!(strip_offense_marker("Pokuty"), "Pokuty");
        assert_eq!(strip_offense_marker("Jiné, z toho: Pokuty"), "Jiné, Pokuty");
    }
}
