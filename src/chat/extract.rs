// Ingredient entity extraction
//
// Four extraction rules, first non-empty result wins: an explicit
// possession-phrase list ("imam gljive i rajčicu"), a stem scan over the
// catalog vocabulary, a fixed keyword list with trailing-character
// capture, and generic preposition patterns. Everything compares on
// normalized (diacritic-free, lower-cased) text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Recipe;
use crate::text::{normalize, tokens, variants};

use super::intent::vocabulary;

static POSSESSION_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:imam|sa|s)\s+(.+)").expect("valid possession pattern"));

static LIST_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*,\s*|\s+i\s+").expect("valid list separator pattern"));

/// Filler words that follow a possession phrase but never name an
/// ingredient ("imam gljive, što mogu napraviti?").
const STOPWORDS: [&str; 14] = [
    "sto", "mogu", "napraviti", "kako", "koji", "koje", "nesto", "bih", "zelim", "daj", "mi", "me",
    "molim", "pa",
];

/// Fixed keyword fallback, covering short queries the catalog scan can
/// miss. Chocolate spellings canonicalize to "cokolad".
const INGREDIENT_KEYWORDS: [&str; 15] = [
    "cokolad",
    "čokolad",
    "sir",
    "cheese",
    "mascarpone",
    "parmezan",
    "parmez",
    "feta",
    "pancet",
    "panceta",
    "kava",
    "rajcic",
    "rajčic",
    "paradajz",
    "domat",
];

static KEYWORD_CAPTURES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    INGREDIENT_KEYWORDS
        .iter()
        .map(|kw| {
            let pattern = format!("(?i){}[a-z]*", regex::escape(kw));
            (*kw, Regex::new(&pattern).expect("valid keyword pattern"))
        })
        .collect()
});

static PREPOSITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"sa\s+(\w+)", r"s\s+(\w+)", r"imam\s+(\w+)", r"sadrži\s+(\w+)"]
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).expect("valid preposition pattern"))
        .collect()
});

/// Parse an explicit comma/conjunction-separated ingredient list after a
/// possession verb phrase. Returns normalized tokens, one per item, with
/// filler items dropped. Single-item phrases are left for the other
/// extraction rules so short queries keep their original routing.
pub(crate) fn possession_list(text: &str) -> Vec<String> {
    let norm = normalize(text);
    let Some(caps) = POSSESSION_PHRASE.captures(&norm) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for item in LIST_SEPARATOR.split(&caps[1]) {
        let Some(first) = tokens(item).into_iter().next() else {
            continue;
        };
        if first.chars().count() < 3 || STOPWORDS.contains(&first.as_str()) {
            continue;
        }
        if !items.contains(&first) {
            items.push(first);
        }
    }
    items
}

/// Extract the ingredient(s) the user named. Never empty: the normalized
/// input itself is the last resort.
pub fn extract_ingredients(text: &str, catalog: &[Recipe]) -> Vec<String> {
    let lower = text.to_lowercase();
    let norm = normalize(text);

    // (a) explicit list: "imam gljive i rajčicu"
    let list = possession_list(text);
    if list.len() >= 2 {
        return list;
    }

    // (b) catalog vocabulary stem scan
    for token in vocabulary(catalog) {
        for stem in variants(&token) {
            if norm.contains(&stem) || stem.contains(&norm) {
                return vec![stem];
            }
        }
    }

    // (c) fixed keywords with trailing-character capture
    for (keyword, pattern) in KEYWORD_CAPTURES.iter() {
        if !lower.contains(keyword) {
            continue;
        }
        if let Some(m) = pattern.find(&lower) {
            if *keyword == "cokolad" || *keyword == "čokolad" {
                return vec!["cokolad".to_string()];
            }
            return vec![normalize(m.as_str())];
        }
    }

    // (d) generic preposition patterns
    for pattern in PREPOSITION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&lower) {
            return vec![normalize(&caps[1])];
        }
    }

    vec![norm]
}

/// Does a recipe mention the extracted ingredient, by name or by any
/// ingredient line? Tokens match on stem-variant intersection.
pub fn ingredient_matches_recipe(ingredient: &str, recipe: &Recipe) -> bool {
    text_mentions(&recipe.name, ingredient)
        || recipe
            .ingredients
            .iter()
            .any(|line| text_mentions(line, ingredient))
}

fn text_mentions(text: &str, ingredient: &str) -> bool {
    let wanted = variants(ingredient);
    if wanted.is_empty() {
        return false;
    }
    tokens(&normalize(text))
        .iter()
        .filter(|t| t.chars().count() >= 2)
        .any(|t| !variants(t).is_disjoint(&wanted))
}
