// Recipe record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Nutrition facts per serving, all non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

/// A reader comment. The comment list on a recipe is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub date: NaiveDate,
}

/// One recipe record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// Category tags, order-insignificant.
    pub categories: Vec<String>,
    pub ingredients: Vec<String>,
    pub preparation: String,
    pub nutrition: Nutrition,
    /// 1-5, 5 = easiest.
    pub simplicity: u8,
    pub prep_minutes: u32,
    pub cook_minutes: u32,
    pub servings: u32,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    /// Ratings 1-5, append-only.
    #[serde(default)]
    pub ratings: Vec<u8>,
    /// Append-only.
    #[serde(default)]
    pub comments: Vec<Comment>,
    pub published: NaiveDate,
}

impl Recipe {
    /// Arithmetic mean of the rating list, 0.0 when no ratings exist.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / self.ratings.len() as f64
    }

    /// Prep plus cook time.
    pub fn total_minutes(&self) -> u32 {
        self.prep_minutes + self.cook_minutes
    }

    /// Case-insensitive substring match against any category tag.
    pub fn has_category(&self, needle: &str) -> bool {
        self.categories
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_ratings(ratings: Vec<u8>) -> Recipe {
        Recipe {
            id: 1,
            name: "Test".to_string(),
            categories: vec!["deserti".to_string()],
            ingredients: vec![],
            preparation: String::new(),
            nutrition: Nutrition {
                calories: 100.0,
                fat: 1.0,
                carbs: 1.0,
                protein: 1.0,
            },
            simplicity: 3,
            prep_minutes: 5,
            cook_minutes: 10,
            servings: 2,
            vegan: false,
            gluten_free: false,
            ratings,
            comments: vec![],
            published: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(recipe_with_ratings(vec![]).average_rating(), 0.0);
        assert_eq!(recipe_with_ratings(vec![4, 5, 3]).average_rating(), 4.0);
    }

    #[test]
    fn test_total_minutes() {
        assert_eq!(recipe_with_ratings(vec![]).total_minutes(), 15);
    }

    #[test]
    fn test_has_category_is_substring_match() {
        let r = recipe_with_ratings(vec![]);
        assert!(r.has_category("desert"));
        assert!(!r.has_category("meso"));
    }
}
