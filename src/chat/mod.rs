// Conversational assistant module
// Public interface for classification, extraction and response generation

mod engine;
mod extract;
mod intent;
mod responder;

pub use engine::ChatEngine;
pub use extract::{extract_ingredients, ingredient_matches_recipe};
pub use intent::{classify, Intent};
pub use responder::{respond, IngredientGroup, Response};
