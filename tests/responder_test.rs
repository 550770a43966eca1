// Response selection rules over the fixture catalog

mod common;

use common::fixture_catalog;
use dijabeto::chat::{classify, respond, Intent};

fn ids(recipes: &[dijabeto::catalog::Recipe]) -> Vec<u32> {
    recipes.iter().map(|r| r.id).collect()
}

fn reply(message: &str) -> dijabeto::chat::Response {
    let catalog = fixture_catalog();
    let intent = classify(message, &catalog);
    respond(intent, message, &catalog)
}

#[test]
fn test_newest_orders_by_publish_date() {
    let response = reply("daj mi najnovije");
    assert_eq!(response.intent, Intent::Newest);
    // 2025-02-12, 2025-01-17, 2024-06-01
    assert_eq!(ids(&response.recipes), vec![2, 4, 5]);
}

#[test]
fn test_best_rated_ties_keep_catalog_order() {
    let response = reply("najbolje ocijenjeno");
    assert_eq!(response.intent, Intent::BestRated);
    // 2 and 3 tie at 4.67; 1 and 5 tie at 4.0
    assert_eq!(ids(&response.recipes), vec![2, 3, 1]);
}

#[test]
fn test_quick_sort_is_stable_on_equal_times() {
    let response = reply("nešto brzo");
    // recipes 2 and 5 both total 10 minutes; catalog order decides
    assert_eq!(ids(&response.recipes), vec![2, 5, 4]);
}

#[test]
fn test_vegan_uses_flag() {
    let response = reply("vegansko molim");
    assert_eq!(response.intent, Intent::Vegan);
    assert_eq!(ids(&response.recipes), vec![2]);
}

#[test]
fn test_gluten_free_without_matches_is_text_only() {
    let response = reply("bez glutena");
    assert_eq!(response.intent, Intent::GlutenFree);
    assert!(response.recipes.is_empty());
    assert!(!response.text.is_empty());
}

#[test]
fn test_vegetarian_accepts_category_or_vegan_flag() {
    let response = reply("nešto vegetarijansko");
    assert_eq!(ids(&response.recipes), vec![1, 2]);
}

#[test]
fn test_meat_goulash_subfilter() {
    let response = reply("želim gulaš");
    assert_eq!(response.intent, Intent::CategoryMeat);
    assert_eq!(ids(&response.recipes), vec![3]);
}

#[test]
fn test_risotto_includes_mushroom_recipes() {
    let response = reply("rižot");
    assert_eq!(response.intent, Intent::CategoryRisotto);
    assert_eq!(ids(&response.recipes), vec![1]);
}

#[test]
fn test_ingredient_conjunction_when_one_recipe_has_all() {
    let response = reply("imam jaja i čokoladu");
    assert_eq!(response.intent, Intent::Ingredient);
    assert_eq!(ids(&response.recipes), vec![4]);
    assert!(response.groups.is_empty());
    // chocolate gets its dedicated phrasing
    assert!(response.text.contains("čokoladno"));
}

#[test]
fn test_ingredient_fallback_groups_per_ingredient() {
    let response = reply("imam gljive i rajčicu");
    assert_eq!(response.intent, Intent::Ingredient);
    assert_eq!(response.groups.len(), 2);
    assert_eq!(ids(&response.groups[0].recipes), vec![1]);
    assert_eq!(ids(&response.groups[1].recipes), vec![2]);
    // no recipe covers two of the requested ingredients
    assert!(response.suggestion.is_none());
}

#[test]
fn test_ingredient_fallback_suggests_best_partial_match() {
    let response = reply("imam jaja, mlijeko i govedinu");
    assert_eq!(response.intent, Intent::Ingredient);
    assert_eq!(response.groups.len(), 3);
    // pancakes carry eggs and milk, two of the three requested
    let suggestion = response.suggestion.expect("partial match expected");
    assert_eq!(suggestion.id, 5);
}

#[test]
fn test_unknown_falls_back_to_substring_search() {
    let catalog = fixture_catalog();
    let intent = classify("glavna", &catalog);
    assert_eq!(intent, Intent::Unknown);
    let response = respond(intent, "glavna", &catalog);
    assert_eq!(ids(&response.recipes), vec![3]);
}

#[test]
fn test_unknown_without_hits_returns_guidance() {
    let response = reply("xyzqw");
    assert_eq!(response.intent, Intent::Unknown);
    assert!(response.recipes.is_empty());
    assert!(!response.text.is_empty());
}

#[test]
fn test_all_recipes_reports_count() {
    let response = reply("popis recepata");
    assert_eq!(response.intent, Intent::AllRecipes);
    assert!(response.text.contains('5'));
    assert_eq!(response.recipes.len(), 4);
}
