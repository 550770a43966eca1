// Recipe feature extraction
//
// Every recipe maps to a fixed 5-axis vector in [0,1]^5. The thresholds
// are contractual constants; recommendation rankings are only comparable
// across builds because they never move.

use crate::catalog::Recipe;

/// Category tags that count as meat-free.
const VEGETARIAN_TAGS: [&str; 3] = ["vegetarijansko", "vegan", "bez mesa"];

/// Category tags that count as sweet desserts.
const DESSERT_TAGS: [&str; 3] = ["deserti", "slatko", "kolači"];

/// 5-axis numeric summary of a recipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeFeatures {
    pub vegetarian: f64,
    pub ease: f64,
    pub speed: f64,
    pub health: f64,
    pub sweetness: f64,
}

impl RecipeFeatures {
    /// Profile with no signal on any axis.
    pub const NEUTRAL: RecipeFeatures = RecipeFeatures {
        vegetarian: 0.5,
        ease: 0.5,
        speed: 0.5,
        health: 0.5,
        sweetness: 0.5,
    };

    /// Derive the feature vector for a recipe. Pure and deterministic.
    pub fn of(recipe: &Recipe) -> Self {
        let is_vegetarian = recipe
            .categories
            .iter()
            .any(|k| VEGETARIAN_TAGS.contains(&k.to_lowercase().as_str()));
        let is_sweet = recipe
            .categories
            .iter()
            .any(|k| DESSERT_TAGS.contains(&k.to_lowercase().as_str()));

        RecipeFeatures {
            vegetarian: if is_vegetarian { 0.9 } else { 0.1 },
            ease: if recipe.simplicity >= 3 { 0.8 } else { 0.3 },
            speed: if recipe.cook_minutes <= 30 {
                0.9
            } else if recipe.cook_minutes <= 60 {
                0.5
            } else {
                0.1
            },
            health: if recipe.nutrition.calories < 500.0 {
                0.8
            } else {
                0.4
            },
            sweetness: if is_sweet { 0.9 } else { 0.1 },
        }
    }

    pub fn as_array(&self) -> [f64; 5] {
        [
            self.vegetarian,
            self.ease,
            self.speed,
            self.health,
            self.sweetness,
        ]
    }

    pub fn from_array(axes: [f64; 5]) -> Self {
        RecipeFeatures {
            vegetarian: axes[0],
            ease: axes[1],
            speed: axes[2],
            health: axes[3],
            sweetness: axes[4],
        }
    }
}
