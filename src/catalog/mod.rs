// Recipe catalog module
// Public interface for recipe records and the backing store

mod recipe;
mod store;

pub use recipe::{Comment, Nutrition, Recipe};
pub use store::{add_comment, add_rating, JsonStore, MemoryStore, RecipeStore, SEED_CATALOG};
