//! ISO 639 language code handling: canonicalization for track matching and
//! English display names for labels.
//!
//! Broadcast streams tag tracks inconsistently ("en" vs "eng" vs "fre"), so
//! matching goes through the canonical 639-2/T form. Codes outside the table
//! fall back to case-insensitive comparison and render verbatim in labels.

struct LanguageEntry {
    /// Canonical ISO 639-2/T code.
    canonical: &'static str,
    /// Accepted spellings: 639-1 plus 639-2 bibliographic/terminological.
    codes: &'static [&'static str],
    name: &'static str,
}

const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry { canonical: "ara", codes: &["ar", "ara"], name: "Arabic" },
    LanguageEntry { canonical: "ces", codes: &["cs", "ces", "cze"], name: "Czech" },
    LanguageEntry { canonical: "dan", codes: &["da", "dan"], name: "Danish" },
    LanguageEntry { canonical: "deu", codes: &["de", "deu", "ger"], name: "German" },
    LanguageEntry { canonical: "ell", codes: &["el", "ell", "gre"], name: "Greek" },
    LanguageEntry { canonical: "eng", codes: &["en", "eng"], name: "English" },
    LanguageEntry { canonical: "fin", codes: &["fi", "fin"], name: "Finnish" },
    LanguageEntry { canonical: "fra", codes: &["fr", "fra", "fre"], name: "French" },
    LanguageEntry { canonical: "heb", codes: &["he", "heb"], name: "Hebrew" },
    LanguageEntry { canonical: "hin", codes: &["hi", "hin"], name: "Hindi" },
    LanguageEntry { canonical: "hun", codes: &["hu", "hun"], name: "Hungarian" },
    LanguageEntry { canonical: "ind", codes: &["id", "ind"], name: "Indonesian" },
    LanguageEntry { canonical: "ita", codes: &["it", "ita"], name: "Italian" },
    LanguageEntry { canonical: "jpn", codes: &["ja", "jpn"], name: "Japanese" },
    LanguageEntry { canonical: "kor", codes: &["ko", "kor"], name: "Korean" },
    LanguageEntry { canonical: "nld", codes: &["nl", "nld", "dut"], name: "Dutch" },
    LanguageEntry { canonical: "nor", codes: &["no", "nor"], name: "Norwegian" },
    LanguageEntry { canonical: "pol", codes: &["pl", "pol"], name: "Polish" },
    LanguageEntry { canonical: "por", codes: &["pt", "por"], name: "Portuguese" },
    LanguageEntry { canonical: "ron", codes: &["ro", "ron", "rum"], name: "Romanian" },
    LanguageEntry { canonical: "rus", codes: &["ru", "rus"], name: "Russian" },
    LanguageEntry { canonical: "spa", codes: &["es", "spa"], name: "Spanish" },
    LanguageEntry { canonical: "swe", codes: &["sv", "swe"], name: "Swedish" },
    LanguageEntry { canonical: "tha", codes: &["th", "tha"], name: "Thai" },
    LanguageEntry { canonical: "tur", codes: &["tr", "tur"], name: "Turkish" },
    LanguageEntry { canonical: "ukr", codes: &["uk", "ukr"], name: "Ukrainian" },
    LanguageEntry { canonical: "vie", codes: &["vi", "vie"], name: "Vietnamese" },
    LanguageEntry { canonical: "zho", codes: &["zh", "zho", "chi"], name: "Chinese" },
];

fn lookup(code: &str) -> Option<&'static LanguageEntry> {
    if code.is_empty() {
        return None;
    }
    LANGUAGES
        .iter()
        .find(|entry| entry.codes.iter().any(|c| c.eq_ignore_ascii_case(code)))
}

/// Canonical ISO 639-2/T code for any accepted spelling.
pub fn canonical(code: &str) -> Option<&'static str> {
    lookup(code).map(|entry| entry.canonical)
}

/// English display name for a known code.
pub fn display_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|entry| entry.name)
}

/// Whether two optional language codes denote the same language.
///
/// Both absent is a match, absent against present is not. Present codes
/// compare by canonical form so "en" matches "eng"; codes the table does not
/// know compare as plain case-insensitive strings.
pub fn is_same_language(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => match (canonical(a), canonical(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => a.eq_ignore_ascii_case(b),
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_all_spellings() {
        assert_eq!(canonical("en"), Some("eng"));
        assert_eq!(canonical("eng"), Some("eng"));
        assert_eq!(canonical("fre"), Some("fra"));
        assert_eq!(canonical("fra"), Some("fra"));
        assert_eq!(canonical("GER"), Some("deu"));
    }

    #[test]
    fn unknown_codes_have_no_canonical_form() {
        assert_eq!(canonical("abc"), None);
        assert_eq!(canonical("kr"), None);
        assert_eq!(canonical(""), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name("kor"), Some("Korean"));
        assert_eq!(display_name("ko"), Some("Korean"));
        assert_eq!(display_name("fre"), Some("French"));
        assert_eq!(display_name("abc"), None);
    }

    #[test]
    fn same_language_across_code_forms() {
        assert!(is_same_language(Some("en"), Some("eng")));
        assert!(is_same_language(Some("EN"), Some("eng")));
        assert!(is_same_language(Some("chi"), Some("zho")));
        assert!(!is_same_language(Some("en"), Some("fr")));
    }

    #[test]
    fn unknown_codes_compare_literally() {
        assert!(is_same_language(Some("kr"), Some("kr")));
        assert!(is_same_language(Some("kr"), Some("KR")));
        assert!(!is_same_language(Some("kr"), Some("ko")));
        assert!(!is_same_language(Some("abc"), Some("en")));
    }

    #[test]
    fn absence_only_matches_absence() {
        assert!(is_same_language(None, None));
        assert!(!is_same_language(None, Some("en")));
        assert!(!is_same_language(Some("en"), None));
    }
}
