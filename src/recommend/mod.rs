// Content-based recommendation module
// Public interface for feature extraction and similarity ranking

mod engine;
mod features;
mod similarity;

pub use engine::{
    profile_from_history, profile_from_report, recommend, recommend_from_report, similar_recipes,
    ScoredRecipe,
};
pub use features::RecipeFeatures;
pub use similarity::{cosine, weighted_profile};
