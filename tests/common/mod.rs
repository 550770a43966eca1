// Shared fixture catalog for integration tests

use chrono::NaiveDate;
use dijabeto::catalog::{Nutrition, Recipe};

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    categories: &[&str],
    ingredients: &[&str],
    nutrition: Nutrition,
    simplicity: u8,
    prep: u32,
    cook: u32,
    vegan: bool,
    ratings: &[u8],
    published: (i32, u32, u32),
) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        preparation: String::new(),
        nutrition,
        simplicity,
        prep_minutes: prep,
        cook_minutes: cook,
        servings: 2,
        vegan,
        gluten_free: false,
        ratings: ratings.to_vec(),
        comments: vec![],
        published: NaiveDate::from_ymd_opt(published.0, published.1, published.2).unwrap(),
    }
}

fn nutrition(calories: f64, fat: f64, carbs: f64, protein: f64) -> Nutrition {
    Nutrition {
        calories,
        fat,
        carbs,
        protein,
    }
}

/// Five recipes with known feature vectors, dates and rating averages.
/// Recipes 2 and 5 share a total time of 10 minutes, recipes 4 and 5
/// share an identical feature vector, and nothing is gluten-free.
pub fn fixture_catalog() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Rižot od gljiva",
            &["rižota", "vegetarijansko"],
            &["300g riže", "200g gljiva", "povrtni temeljac"],
            nutrition(420.0, 12.0, 60.0, 10.0),
            3,
            15,
            30,
            false,
            &[4, 4],
            (2023, 11, 2),
        ),
        recipe(
            2,
            "Salata od rajčice",
            &["salate", "vegan"],
            &["4 rajčice", "maslinovo ulje", "bosiljak"],
            nutrition(180.0, 14.0, 10.0, 3.0),
            5,
            10,
            0,
            true,
            &[5, 5, 4],
            (2025, 2, 12),
        ),
        recipe(
            3,
            "Gulaš",
            &["meso", "glavna jela"],
            &["500g govedine", "luk", "crvena paprika"],
            nutrition(650.0, 30.0, 25.0, 40.0),
            2,
            20,
            90,
            false,
            &[5, 4, 5],
            (2022, 9, 28),
        ),
        recipe(
            4,
            "Čokoladni kolač",
            &["deserti", "čokoladno"],
            &["200g čokolade", "100g maslaca", "3 jaja"],
            nutrition(480.0, 22.0, 55.0, 7.0),
            3,
            15,
            25,
            false,
            &[3, 4],
            (2025, 1, 17),
        ),
        recipe(
            5,
            "Palačinke",
            &["deserti"],
            &["2 jaja", "250ml mlijeka", "150g brašna"],
            nutrition(320.0, 10.0, 45.0, 12.0),
            4,
            5,
            5,
            false,
            &[4],
            (2024, 6, 1),
        ),
    ]
}
