// Similarity ranking over the catalog

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::analytics::EngagementStats;
use crate::catalog::Recipe;

use super::features::RecipeFeatures;
use super::similarity::{cosine, weighted_profile};

/// A catalog item paired with its similarity to the reference vector.
#[derive(Debug, Clone)]
pub struct ScoredRecipe {
    pub recipe: Recipe,
    pub similarity: f64,
}

/// Rank all non-excluded catalog items by similarity to `reference`,
/// descending, truncated to `limit`. The sort is stable, so equal scores
/// keep original catalog order.
pub fn recommend(
    reference: &RecipeFeatures,
    catalog: &[Recipe],
    exclude: &[u32],
    limit: usize,
) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = catalog
        .iter()
        .filter(|r| !exclude.contains(&r.id))
        .map(|r| ScoredRecipe {
            similarity: cosine(reference, &RecipeFeatures::of(r)),
            recipe: r.clone(),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    scored.truncate(limit);
    scored
}

/// "Similar recipes" panel: rank against one recipe, excluding itself.
pub fn similar_recipes(recipe: &Recipe, catalog: &[Recipe], limit: usize) -> Vec<ScoredRecipe> {
    recommend(&RecipeFeatures::of(recipe), catalog, &[recipe.id], limit)
}

/// User profile from a locally stored view history: uniform average of the
/// viewed recipes' features, neutral when the history resolves to nothing.
pub fn profile_from_history(history: &[u32], catalog: &[Recipe]) -> RecipeFeatures {
    weighted_profile(
        history
            .iter()
            .filter_map(|id| catalog.iter().find(|r| r.id == *id))
            .map(|r| (RecipeFeatures::of(r), 1.0)),
    )
}

/// User profile from an aggregated behavioral report. Each recipe is
/// weighted by a saturating function of its view count (views/10, capped
/// at 1); recipes missing from the catalog are skipped.
pub fn profile_from_report(
    report: &BTreeMap<u32, EngagementStats>,
    catalog: &[Recipe],
) -> RecipeFeatures {
    weighted_profile(report.iter().filter_map(|(id, stats)| {
        let recipe = catalog.iter().find(|r| r.id == *id)?;
        let weight = (stats.views as f64 / 10.0).min(1.0);
        Some((RecipeFeatures::of(recipe), weight))
    }))
}

/// Recommendations driven by a behavioral report. Every id present in the
/// report is excluded so results are novel rather than re-surfacing what
/// was already seen.
pub fn recommend_from_report(
    report: &BTreeMap<u32, EngagementStats>,
    catalog: &[Recipe],
    limit: usize,
) -> Vec<ScoredRecipe> {
    let exclude: Vec<u32> = report.keys().copied().collect();
    let profile = profile_from_report(report, catalog);
    recommend(&profile, catalog, &exclude, limit)
}
