// Heuristic stemmer for Croatian declensions
//
// Generates a finite set of word-form variants per token so that
// inflected forms of the same noun ("gljiva", "gljive", "gljivama")
// match each other. The rule list is deliberately approximate and
// tuned for the catalog vocabulary; it is a fixed algorithm, not a
// general stemmer, and the exact variant set is relied upon by the
// classifier and the ingredient extractor.

use std::collections::BTreeSet;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Generate the variant set for a normalized token.
///
/// The set contains: the token itself; the token minus a trailing
/// instrumental "om"; the token minus its final vowel (when vowel-final);
/// the vowel-stripped base (or the consonant-final token) with each of
/// the five vowels appended; the token with "om" and "u" case suffixes;
/// and the "ca"/"ac" final-pair swap (temeljca <-> temeljac).
pub fn variants(token: &str) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();
    if token.is_empty() {
        return stems;
    }
    stems.insert(token.to_string());

    if let Some(base) = token.strip_suffix("om") {
        stems.insert(base.to_string());
    }

    if ends_with_vowel(token) {
        let base = drop_last_char(token);
        stems.insert(base.clone());
        for v in VOWELS {
            stems.insert(format!("{base}{v}"));
        }
    } else {
        for v in VOWELS {
            stems.insert(format!("{token}{v}"));
        }
    }

    stems.insert(format!("{token}om"));
    stems.insert(format!("{token}u"));

    if let Some(base) = token.strip_suffix("ca") {
        stems.insert(format!("{base}ac"));
    }
    if let Some(base) = token.strip_suffix("ac") {
        stems.insert(format!("{base}ca"));
    }

    // single-letter tokens can produce an empty base
    stems.remove("");
    stems
}

/// Two normalized tokens match when their variant sets overlap or one
/// token is a substring of the other.
pub fn tokens_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.contains(b) || b.contains(a) {
        return true;
    }
    !variants(a).is_disjoint(&variants(b))
}

fn ends_with_vowel(token: &str) -> bool {
    token.chars().next_back().is_some_and(|c| VOWELS.contains(&c))
}

fn drop_last_char(token: &str) -> String {
    let mut chars = token.chars();
    chars.next_back();
    chars.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_replacement_variants() {
        // kave -> kava (genitive to nominative)
        let stems = variants("kave");
        assert!(stems.contains("kava"));
        assert!(stems.contains("kav"));
        assert!(stems.contains("kavu"));
    }

    #[test]
    fn test_instrumental_suffix_removal() {
        let stems = variants("cokoladom");
        assert!(stems.contains("cokolad"));
    }

    #[test]
    fn test_ca_ac_swap() {
        assert!(variants("temeljca").contains("temeljac"));
        assert!(variants("temeljac").contains("temeljca"));
        assert!(tokens_match("temeljca", "temeljac"));
    }

    #[test]
    fn test_consonant_final_gets_vowel_appends() {
        let stems = variants("sir");
        assert!(stems.contains("sira"));
        assert!(stems.contains("siru"));
        assert!(stems.contains("sirom"));
    }

    #[test]
    fn test_inflected_forms_match() {
        assert!(tokens_match("gljive", "gljiva"));
        assert!(tokens_match("gljivama", "gljiva"));
        assert!(tokens_match("cokoladom", "cokolada"));
        assert!(!tokens_match("gljiva", "panceta"));
    }

    #[test]
    fn test_empty_tokens_never_match() {
        assert!(!tokens_match("", "gljiva"));
        assert!(!tokens_match("gljiva", ""));
        assert!(variants("").is_empty());
    }
}
