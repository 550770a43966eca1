// Chat engine
//
// Thin orchestrator over a recipe store: snapshot the catalog, classify,
// respond. A failed snapshot degrades to an empty catalog so the
// assistant still answers with guidance text instead of erroring out of
// the conversation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::RecipeStore;

use super::intent::classify;
use super::responder::{respond, Response};

pub struct ChatEngine {
    store: Arc<dyn RecipeStore>,
}

impl ChatEngine {
    pub fn new(store: Arc<dyn RecipeStore>) -> Self {
        ChatEngine { store }
    }

    /// Answer one user message against the current catalog snapshot.
    pub fn reply(&self, message: &str) -> Response {
        let catalog = self.store.get_all().unwrap_or_else(|e| {
            warn!("catalog snapshot failed, answering with empty catalog: {e:#}");
            Vec::new()
        });

        let intent = classify(message, &catalog);
        debug!(intent = intent.as_str(), "classified message");

        respond(intent, message, &catalog)
    }
}
