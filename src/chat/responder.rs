// Response generation
//
// Each intent maps to a deterministic catalog selection: a total order
// (stable sort, original catalog order breaks ties) plus a truncation
// cap, and fixed Croatian response text. No branch can fail - an empty
// selection degrades to guidance text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use crate::catalog::Recipe;
use crate::text::normalize;

use super::extract::{extract_ingredients, ingredient_matches_recipe};
use super::intent::Intent;

static PANCETA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)pancet|panceta").expect("valid regex"));
static PILETINA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)piletin|piletina").expect("valid regex"));
static GOVEDINA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)govedin|gulaš|gulas|gove(d|đ)").expect("valid regex"));
static RISOTTO_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"riz[oa]t?o?").expect("valid regex"));

/// Ingredient tokens that signal mushrooms, normalized.
const MUSHROOM_TOKENS: [&str; 8] = [
    "gljiv", "samp", "sampinj", "vrgan", "pecur", "porcini", "funghi", "mushroom",
];

/// Recipes grouped under one extracted ingredient (multi-ingredient
/// fallback only).
#[derive(Debug, Clone)]
pub struct IngredientGroup {
    pub ingredient: String,
    pub recipes: Vec<Recipe>,
}

/// What the assistant says back: one intent, literal text, an ordered
/// recipe subset, and - for the multi-ingredient fallback - per-ingredient
/// groups plus an optional cross-suggestion.
#[derive(Debug, Clone)]
pub struct Response {
    pub intent: Intent,
    pub text: String,
    pub recipes: Vec<Recipe>,
    pub groups: Vec<IngredientGroup>,
    pub suggestion: Option<Recipe>,
}

impl Response {
    fn text_only(intent: Intent, text: impl Into<String>) -> Self {
        Response {
            intent,
            text: text.into(),
            recipes: Vec::new(),
            groups: Vec::new(),
            suggestion: None,
        }
    }

    fn with_recipes(intent: Intent, text: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        Response {
            intent,
            text: text.into(),
            recipes,
            groups: Vec::new(),
            suggestion: None,
        }
    }
}

/// Generate the response for a classified message.
pub fn respond(intent: Intent, message: &str, catalog: &[Recipe]) -> Response {
    match intent {
        Intent::Greeting => Response::text_only(
            intent,
            "Bok! Drago mi je da si tu! Kako ti mogu pomoći danas?\n\nMogu ti preporučiti recepte po kategoriji, sastojcima ili prehrambenoj preferenciji. Samo pitaj!",
        ),
        Intent::Newest => {
            let sorted = sorted_by(catalog, |a, b| b.published.cmp(&a.published));
            Response::with_recipes(intent, "Evo najnovijih recepata:", take(sorted, 3))
        }
        Intent::BestRated => {
            let sorted = sorted_by_f64_desc(catalog, Recipe::average_rating);
            Response::with_recipes(intent, "Evo najbolje ocijenjenih recepata:", take(sorted, 3))
        }
        Intent::Vegan => {
            let vegan: Vec<Recipe> = catalog.iter().filter(|r| r.vegan).cloned().collect();
            if vegan.is_empty() {
                let fallback: Vec<Recipe> = catalog
                    .iter()
                    .filter(|r| r.has_category("vegetarijan") || r.vegan)
                    .cloned()
                    .collect();
                return Response::with_recipes(
                    intent,
                    "Nažalost, trenutno nemamo veganske recepte. Ali možeš probati vegetarijanske opcije!",
                    take(fallback, 5),
                );
            }
            Response::with_recipes(intent, "Evo veganskih recepata za tebe:", take(vegan, 5))
        }
        Intent::GlutenFree => {
            let matching: Vec<Recipe> = catalog.iter().filter(|r| r.gluten_free).cloned().collect();
            if matching.is_empty() {
                return Response::text_only(
                    intent,
                    "Nažalost, trenutno nemamo bezglutenskih recepata.",
                );
            }
            Response::with_recipes(intent, "Evo recepata bez glutena:", take(matching, 3))
        }
        Intent::Vegetarian => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| r.has_category("vegetarijan") || r.vegan)
                .cloned()
                .collect();
            if matching.is_empty() {
                return Response::text_only(
                    intent,
                    "Hmm, nisam pronašao vegetarijanske recepte. Možda probaj salate?",
                );
            }
            Response::with_recipes(intent, "Evo vegetarijanskih recepata:", take(matching, 3))
        }
        Intent::LowCalorie => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.calories,
            false,
            "Evo recepata s najmanje kalorija - savršeni za dijetu:",
        ),
        Intent::HighCalorie => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.calories,
            true,
            "Evo recepata s puno kalorija - energetski bogato:",
        ),
        Intent::LowProtein => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.protein,
            false,
            "Evo recepata s malo proteina:",
        ),
        Intent::HighProtein => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.protein,
            true,
            "Evo recepata bogatih proteinima:",
        ),
        Intent::LowCarbs => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.carbs,
            false,
            "Evo recepata s malo ugljikohidrata:",
        ),
        Intent::HighCarbs => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.carbs,
            true,
            "Evo recepata bogatih ugljikohidratima:",
        ),
        Intent::LowFat => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.fat,
            false,
            "Evo recepata s malo masti:",
        ),
        Intent::HighFat => nutrition_response(
            intent,
            catalog,
            |r| r.nutrition.fat,
            true,
            "Evo recepata bogatih mašću:",
        ),
        Intent::Quick => {
            let sorted = sorted_by(catalog, |a, b| a.total_minutes().cmp(&b.total_minutes()));
            Response::with_recipes(
                intent,
                "Evo najbržih recepata - idealno kad nemaš puno vremena:",
                take(sorted, 3),
            )
        }
        Intent::CategoryDessert => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| {
                    r.categories.iter().any(|k| {
                        ["deserti", "slatko", "čokoladno"].contains(&k.to_lowercase().as_str())
                    })
                })
                .cloned()
                .collect();
            Response::with_recipes(intent, "Mmm, deserti! Evo slatkih preporuka:", take(matching, 5))
        }
        Intent::CategoryPasta => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| {
                    r.has_category("pasta")
                        || r.name.to_lowercase().contains("tjestenina")
                        || r.name.to_lowercase().contains("špaget")
                })
                .cloned()
                .collect();
            Response::with_recipes(intent, "Pasta vrijeme! Evo preporuka:", take(matching, 3))
        }
        Intent::CategoryMeat => meat_response(message, catalog),
        Intent::CategoryFish => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| r.has_category("riba"))
                .cloned()
                .collect();
            if matching.is_empty() {
                return Response::text_only(
                    intent,
                    "Nemamo trenutno ribljih recepata, ali mogu preporučiti nešto drugo!",
                );
            }
            Response::with_recipes(intent, "Evo ribljih recepata:", take(matching, 3))
        }
        Intent::CategorySalad => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| r.has_category("salat"))
                .cloned()
                .collect();
            if matching.is_empty() {
                return Response::text_only(
                    intent,
                    "Nemamo trenutno salata, ali mogu preporučiti nešto lagano!",
                );
            }
            Response::with_recipes(intent, "Evo svježih salata:", take(matching, 3))
        }
        Intent::CategoryRisotto => {
            let matching: Vec<Recipe> = catalog
                .iter()
                .filter(|r| is_risotto_like(r))
                .cloned()
                .collect();
            Response::with_recipes(intent, "Evo rižota i recepata s gljivama:", take(matching, 5))
        }
        Intent::Ingredient => ingredient_response(message, catalog),
        Intent::Help => Response::text_only(
            intent,
            "Mogu ti pomoći na više načina:\n\nPretraživanje recepata:\n- po kategoriji (deserti, pasta, meso, riba, salate)\n- po prehrani (vegan, bez glutena, vegetarijansko)\n- po nutritivnim vrijednostima (niskokalorično, bogato proteinima)\n- po sastojku (\"Daj mi nešto s gljivama\")\n\nOcjenjivanje i komentari:\nOtvori bilo koji recept i ocijeni ga zvjezdicama.\n\nGalerija:\nPosjeti stranicu Galerija za pregled slika jela.\n\nSamo pitaj što te zanima!",
        ),
        Intent::Rate => Response::text_only(
            intent,
            "Za ocjenjivanje recepta, otvori stranicu recepta i klikni na zvjezdice! Tvoja ocjena će se automatski spremiti i prikazati prosjek svih ocjena.",
        ),
        Intent::Comment => Response::text_only(
            intent,
            "Za dodavanje komentara, otvori stranicu recepta i pronađi sekciju za komentare na dnu. Upiši svoje ime i komentar, pa klikni 'Dodaj komentar'!",
        ),
        Intent::Gallery => Response::text_only(
            intent,
            "Galeriju možeš pronaći u navigaciji na vrhu stranice. Tamo ćeš vidjeti slike naših jela.",
        ),
        Intent::AllRecipes => Response::with_recipes(
            intent,
            format!("Imamo ukupno {} recepata! Evo nekih popularnih:", catalog.len()),
            catalog.iter().take(4).cloned().collect(),
        ),
        Intent::Unknown => fallback_search(message, catalog),
    }
}

fn sorted_by<F>(catalog: &[Recipe], compare: F) -> Vec<Recipe>
where
    F: Fn(&Recipe, &Recipe) -> Ordering,
{
    let mut sorted: Vec<Recipe> = catalog.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

fn sorted_by_f64_desc<F>(catalog: &[Recipe], key: F) -> Vec<Recipe>
where
    F: Fn(&Recipe) -> f64,
{
    sorted_by(catalog, |a, b| {
        key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal)
    })
}

fn take(mut recipes: Vec<Recipe>, n: usize) -> Vec<Recipe> {
    recipes.truncate(n);
    recipes
}

fn nutrition_response<F>(
    intent: Intent,
    catalog: &[Recipe],
    key: F,
    descending: bool,
    text: &str,
) -> Response
where
    F: Fn(&Recipe) -> f64,
{
    let sorted = if descending {
        sorted_by_f64_desc(catalog, key)
    } else {
        sorted_by(catalog, |a, b| {
            key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal)
        })
    };
    Response::with_recipes(intent, text, take(sorted, 3))
}

/// Named meat sub-filters are checked in a fixed order; the first match
/// short-circuits, so a message naming two meats only ever resolves to
/// the first checked.
fn meat_response(message: &str, catalog: &[Recipe]) -> Response {
    let lower = message.to_lowercase();
    let intent = Intent::CategoryMeat;

    if PANCETA.is_match(&lower) {
        let matching: Vec<Recipe> = catalog
            .iter()
            .filter(|r| {
                r.ingredients.iter().any(|s| s.to_lowercase().contains("pancet"))
                    || r.name.to_lowercase().contains("pancet")
            })
            .cloned()
            .collect();
        return Response::with_recipes(intent, "Evo recepata s pancetom:", take(matching, 5));
    }

    if PILETINA.is_match(&lower) {
        let matching: Vec<Recipe> = catalog
            .iter()
            .filter(|r| {
                r.ingredients.iter().any(|s| s.to_lowercase().contains("piletin"))
                    || r.name.to_lowercase().contains("piletin")
            })
            .cloned()
            .collect();
        return Response::with_recipes(intent, "Evo recepata s piletinom:", take(matching, 5));
    }

    if GOVEDINA.is_match(&lower) {
        let matching: Vec<Recipe> = catalog
            .iter()
            .filter(|r| {
                r.ingredients.iter().any(|s| s.to_lowercase().contains("goved"))
                    || r.name.to_lowercase().contains("gula")
                    || r.has_category("meso")
            })
            .cloned()
            .collect();
        return Response::with_recipes(intent, "Evo recepata s govedinom:", take(matching, 5));
    }

    let matching: Vec<Recipe> = catalog
        .iter()
        .filter(|r| r.has_category("meso"))
        .cloned()
        .collect();
    Response::with_recipes(intent, "Evo mesnih recepata za tebe:", take(matching, 5))
}

fn is_risotto_like(recipe: &Recipe) -> bool {
    let name = normalize(&recipe.name);
    let cats = recipe
        .categories
        .iter()
        .map(|k| normalize(k))
        .collect::<Vec<_>>()
        .join(" ");
    let ings = recipe
        .ingredients
        .iter()
        .map(|s| normalize(s))
        .collect::<Vec<_>>()
        .join(" ");

    let is_risotto = RISOTTO_NAME.is_match(&name) || RISOTTO_NAME.is_match(&cats);
    let has_mushroom = MUSHROOM_TOKENS.iter().any(|t| ings.contains(t));
    is_risotto || has_mushroom
}

fn ingredient_response(message: &str, catalog: &[Recipe]) -> Response {
    let intent = Intent::Ingredient;
    let ingredients = extract_ingredients(message, catalog);

    // recipes matching every named ingredient
    let all_matches: Vec<Recipe> = catalog
        .iter()
        .filter(|r| ingredients.iter().all(|ing| ingredient_matches_recipe(ing, r)))
        .cloned()
        .collect();

    if !all_matches.is_empty() {
        let is_chocolate = ingredients.iter().any(|ing| ing.contains("cokolad"));
        let text = if is_chocolate {
            "Pronašao sam nešto čokoladno za tebe:".to_string()
        } else {
            format!("Evo recepata koji sadrže \"{}\":", ingredients.join(", "))
        };
        return Response::with_recipes(intent, text, take(all_matches, 3));
    }

    if ingredients.len() >= 2 {
        return grouped_ingredient_response(&ingredients, catalog);
    }

    Response::text_only(
        intent,
        format!(
            "Nažalost, nisam pronašao recepte s \"{}\". Probaj nešto drugo!",
            ingredients.join(", ")
        ),
    )
}

/// No recipe carries every named ingredient: degrade to per-ingredient
/// groups, plus the best partial match (>= 2 of the named ingredients)
/// as a cross-suggestion.
fn grouped_ingredient_response(ingredients: &[String], catalog: &[Recipe]) -> Response {
    let intent = Intent::Ingredient;

    let mut groups = Vec::new();
    for ingredient in ingredients {
        let matching: Vec<Recipe> = catalog
            .iter()
            .filter(|r| ingredient_matches_recipe(ingredient, r))
            .cloned()
            .collect();
        if !matching.is_empty() {
            groups.push(IngredientGroup {
                ingredient: ingredient.clone(),
                recipes: take(matching, 3),
            });
        }
    }

    if groups.is_empty() {
        return Response::text_only(
            intent,
            format!(
                "Nažalost, nisam pronašao recepte s \"{}\". Probaj nešto drugo!",
                ingredients.join(", ")
            ),
        );
    }

    let suggestion = catalog
        .iter()
        .map(|r| {
            let count = ingredients
                .iter()
                .filter(|ing| ingredient_matches_recipe(ing, r))
                .count();
            (r, count)
        })
        .filter(|(_, count)| *count >= 2)
        .max_by_key(|(_, count)| *count)
        .map(|(r, _)| r.clone());

    let mut combined: Vec<Recipe> = Vec::new();
    for group in &groups {
        for recipe in &group.recipes {
            if !combined.iter().any(|r| r.id == recipe.id) {
                combined.push(recipe.clone());
            }
        }
    }

    Response {
        intent,
        text: format!(
            "Nisam pronašao recept koji sadrži sve: {}. Evo što imam za pojedinačne sastojke:",
            ingredients.join(", ")
        ),
        recipes: combined,
        groups,
        suggestion,
    }
}

/// Default branch: plain substring search of the raw lower-cased message
/// over names, categories and ingredients.
fn fallback_search(message: &str, catalog: &[Recipe]) -> Response {
    let term = message.to_lowercase();
    let term = term.trim();
    let intent = Intent::Unknown;

    if !term.is_empty() {
        let found: Vec<Recipe> = catalog
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(term)
                    || r.categories.iter().any(|k| k.to_lowercase().contains(term))
                    || r.ingredients.iter().any(|s| s.to_lowercase().contains(term))
            })
            .cloned()
            .collect();
        if !found.is_empty() {
            return Response::with_recipes(intent, "Pronašao sam nešto za tebe:", take(found, 3));
        }
    }

    Response::text_only(
        intent,
        "Nisam siguran što tražiš.\n\nProbaj mi reći:\n- koju vrstu jela želiš (desert, pasta, meso...)\n- imaš li posebne prehrambene zahtjeve (vegan, bez glutena...)\n- ili jednostavno \"najnovije\" ili \"najbolje ocijenjeno\"!",
    )
}
