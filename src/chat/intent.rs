// Intent classification
//
// One user message maps to exactly one intent. Classification runs in
// four stages: an explicit multi-ingredient possession phrase, the
// ordered static rule table, phrase-level negation heuristics, and a
// dynamic vocabulary fallback built from the live catalog. The static
// table order is a contract ("najnoviji desert" is Newest, not
// CategoryDessert) - rules are data, evaluated in a single pass.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::catalog::Recipe;
use crate::text::{normalize, tokens, variants};

use super::extract::possession_list;

/// The closed intent taxonomy. Exactly one per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Newest,
    BestRated,
    Vegan,
    GlutenFree,
    Vegetarian,
    LowCalorie,
    HighCalorie,
    LowProtein,
    HighProtein,
    LowCarbs,
    HighCarbs,
    LowFat,
    HighFat,
    Quick,
    CategoryDessert,
    CategoryPasta,
    CategoryMeat,
    CategoryFish,
    CategorySalad,
    CategoryRisotto,
    Help,
    Rate,
    Comment,
    Gallery,
    AllRecipes,
    Ingredient,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Newest => "newest",
            Intent::BestRated => "best_rated",
            Intent::Vegan => "vegan",
            Intent::GlutenFree => "gluten_free",
            Intent::Vegetarian => "vegetarian",
            Intent::LowCalorie => "low_calorie",
            Intent::HighCalorie => "high_calorie",
            Intent::LowProtein => "low_protein",
            Intent::HighProtein => "high_protein",
            Intent::LowCarbs => "low_carbs",
            Intent::HighCarbs => "high_carbs",
            Intent::LowFat => "low_fat",
            Intent::HighFat => "high_fat",
            Intent::Quick => "quick",
            Intent::CategoryDessert => "category_dessert",
            Intent::CategoryPasta => "category_pasta",
            Intent::CategoryMeat => "category_meat",
            Intent::CategoryFish => "category_fish",
            Intent::CategorySalad => "category_salad",
            Intent::CategoryRisotto => "category_risotto",
            Intent::Help => "help",
            Intent::Rate => "rate",
            Intent::Comment => "comment",
            Intent::Gallery => "gallery",
            Intent::AllRecipes => "all_recipes",
            Intent::Ingredient => "ingredient",
            Intent::Unknown => "unknown",
        }
    }
}

struct IntentRule {
    intent: Intent,
    pattern: Regex,
}

fn rule(intent: Intent, pattern: &str) -> IntentRule {
    IntentRule {
        intent,
        pattern: Regex::new(pattern).expect("valid intent pattern"),
    }
}

/// Ordered rule table; first match wins. The high_protein row also
/// matches generic fitness vocabulary ("teretana", "gym") - observed
/// behavior, kept as-is.
static INTENT_RULES: Lazy<Vec<IntentRule>> = Lazy::new(|| {
    vec![
        rule(
            Intent::Greeting,
            r"(?i)^(bok|hej|zdravo|pozdrav|hi|hello|cao|ćao|dobar dan)",
        ),
        rule(Intent::Newest, r"(?i)(najnovij|nov|zadnj|recent)"),
        rule(Intent::BestRated, r"(?i)(najbolj|ocjen|popularn|top)"),
        rule(
            Intent::Vegan,
            r"(?i)(vegan|vegansko|biljn[oa]|biljne|trava|ne.?zivotinsko|nezivotinsko)",
        ),
        rule(Intent::GlutenFree, r"(?i)(bez glutena|gluten.?free|bezglutensk)"),
        rule(
            Intent::Vegetarian,
            r"(?i)(vegetarijan|vegetarijansko|vegeterijansko|bez mesa)",
        ),
        rule(
            Intent::LowCalorie,
            r"(?i)(nisko.?kaloric|malo kalorij|bez kalorij|bez debljanja|lagan|dijeta|zdravo)",
        ),
        rule(
            Intent::HighCalorie,
            r"(?i)(puno.?kalorij|mnogo kalorij|bogato kalorij|energetski bogato)",
        ),
        rule(
            Intent::LowProtein,
            r"(?i)(malo protein|nisko protein|bez proteina)",
        ),
        rule(
            Intent::HighProtein,
            r"(?i)(protein|proteini|puno protein|masa|teretana|vjezba|vjzbanje|gym|fitnes|muskulac)",
        ),
        rule(
            Intent::LowCarbs,
            r"(?i)(malo.?ugljikohidrat|nisko.?ugljikohidrat|bez ugljikohidrat)",
        ),
        rule(
            Intent::HighCarbs,
            r"(?i)(puno.?ugljikohidrat|mnogo ugljikohidrat|bogato ugljikohidrat|ugljenik)",
        ),
        rule(Intent::LowFat, r"(?i)(malo.?masti|nisko.?masti|bez masti|odmast)"),
        rule(Intent::HighFat, r"(?i)(puno.?masti|mnogo masti|bogato masti|masno)"),
        rule(Intent::Quick, r"(?i)(brz|jednostavn|lak|kratko vrijeme|kratak)"),
        rule(
            Intent::CategoryDessert,
            r"(?i)(desert|dessert|kolač|kolac|slatko|slatk[oć]|brownie|tiramisu|palačink|palacink|cheesecake|cheescake)",
        ),
        rule(
            Intent::CategoryPasta,
            r"(?i)(pasta|pašta|tjestenin|testenin|testenine|špaget|špageti|spageti|spaghetti|spaget|carbonara|pesto)",
        ),
        rule(Intent::CategoryMeat, r"(?i)(meso|piletina|govedina|gulaš|panceta)"),
        rule(Intent::CategoryFish, r"(?i)(riba|losos|morsk)"),
        rule(
            Intent::CategorySalad,
            r"(?i)(salat[an]?o?|salatni|salatna|svjež|sveze|zeleno)",
        ),
        rule(Intent::CategoryRisotto, r"(?i)(riz[oa]t?o?|rižot|riža|gljiv)"),
        rule(Intent::Help, r"(?i)(pomoć|help|kako|što možeš|funkcij)"),
        rule(Intent::Rate, r"(?i)(ocijen|ocjen|zvjezdic)"),
        rule(Intent::Comment, r"(?i)(komentar|komentiraj)"),
        rule(Intent::Gallery, r"(?i)(galerij|slik|foto)"),
        rule(Intent::AllRecipes, r"(?i)(svi recept|sve recept|popis|lista)"),
        rule(
            Intent::Ingredient,
            r"(?i)(sa |s |imam |sadrži |sastojak|\b(sir|cheese|mascarpone|parmezan|parmez|feta|cokolad[a-z]*|čokolad[a-z]*)\b)",
        ),
    ]
});

/// Classify one message against a catalog snapshot.
pub fn classify(text: &str, catalog: &[Recipe]) -> Intent {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Intent::Unknown;
    }
    let lower = trimmed.to_lowercase();
    let norm = normalize(trimmed);

    // An explicit "imam X i Y" list names concrete ingredients; route it
    // to ingredient matching before any single-keyword rule can grab one
    // of the listed items.
    if possession_list(trimmed).len() >= 2 {
        return Intent::Ingredient;
    }

    for rule in INTENT_RULES.iter() {
        if rule.pattern.is_match(&lower) {
            return rule.intent;
        }
    }

    if let Some(intent) = phrase_heuristics(&norm) {
        return intent;
    }

    if dynamic_vocabulary_match(&norm, catalog) {
        return Intent::Ingredient;
    }

    Intent::Unknown
}

/// Multi-word restrictive dietary phrasing: a negation word combined
/// with a diet keyword, in normalized (diacritic-free) form.
fn phrase_heuristics(norm: &str) -> Option<Intent> {
    if !norm.contains("bez") && !norm.contains("nema") {
        return None;
    }
    if norm.contains("gluten") {
        return Some(Intent::GlutenFree);
    }
    if norm.contains("mes") {
        return Some(Intent::Vegetarian);
    }
    if norm.contains("zivotinj") {
        return Some(Intent::Vegan);
    }
    None
}

/// Normalized tokens (length >= 3) from every catalog name and
/// ingredient line. BTreeSet keeps iteration deterministic.
pub(crate) fn vocabulary(catalog: &[Recipe]) -> BTreeSet<String> {
    let mut set = BTreeSet::new();
    for recipe in catalog {
        for token in tokens(&normalize(&recipe.name)) {
            if token.chars().count() >= 3 {
                set.insert(token);
            }
        }
        for line in &recipe.ingredients {
            for token in tokens(&normalize(line)) {
                if token.chars().count() >= 3 {
                    set.insert(token);
                }
            }
        }
    }
    set
}

/// Last-chance classification: does any stem variant of any catalog
/// token appear in the input (or contain it)?
fn dynamic_vocabulary_match(norm: &str, catalog: &[Recipe]) -> bool {
    for token in vocabulary(catalog) {
        for stem in variants(&token) {
            if norm.contains(&stem) || stem.contains(norm) {
                return true;
            }
        }
    }
    false
}
