// Behavioral report reduction
//
// The analytics provider returns page-level rows (path, views, duration,
// engaged sessions, event count). Recommendation profiles only care about
// recipe detail pages, so the rows are reduced to a recipe-id keyed map by
// parsing the numeric id out of "/recept/<id>" paths and summing
// duplicates. Rows for other pages are ignored.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static RECIPE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/recept/(\d+)").expect("valid recipe path pattern"));

/// One raw report row as delivered by the analytics provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub page_path: String,
    #[serde(default)]
    pub page_title: String,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub engaged: u64,
    #[serde(default)]
    pub events: u64,
}

/// Per-recipe engagement totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngagementStats {
    pub views: u64,
    pub duration: f64,
    pub engaged: u64,
    pub events: u64,
}

/// Extract a recipe id from a detail-page path, e.g. "/recept/12".
pub fn recipe_id_from_path(path: &str) -> Option<u32> {
    let caps = RECIPE_PATH.captures(path)?;
    caps[1].parse().ok()
}

/// Reduce report rows to a recipe-id -> engagement map, summing rows that
/// hit the same recipe (e.g. with different query strings).
pub fn aggregate_recipe_views(rows: &[ReportRow]) -> BTreeMap<u32, EngagementStats> {
    let mut out: BTreeMap<u32, EngagementStats> = BTreeMap::new();

    for row in rows {
        let Some(id) = recipe_id_from_path(&row.page_path) else {
            continue;
        };
        let stats = out.entry(id).or_default();
        stats.views += row.views;
        stats.duration += row.duration;
        stats.engaged += row.engaged;
        stats.events += row.events;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(path: &str, views: u64) -> ReportRow {
        ReportRow {
            page_path: path.to_string(),
            page_title: String::new(),
            views,
            duration: 10.0,
            engaged: 1,
            events: 2,
        }
    }

    #[test]
    fn test_recipe_id_from_path() {
        assert_eq!(recipe_id_from_path("/recept/12"), Some(12));
        assert_eq!(recipe_id_from_path("/recept/3?utm=x"), Some(3));
        assert_eq!(recipe_id_from_path("/galerija"), None);
        assert_eq!(recipe_id_from_path("/recept/abc"), None);
    }

    #[test]
    fn test_aggregate_sums_duplicate_paths() {
        let rows = vec![
            row("/recept/5", 4),
            row("/recept/5?ref=chat", 6),
            row("/o-nama", 100),
        ];
        let agg = aggregate_recipe_views(&rows);
        assert_eq!(agg.len(), 1);
        let stats = agg[&5];
        assert_eq!(stats.views, 10);
        assert_eq!(stats.duration, 20.0);
        assert_eq!(stats.engaged, 2);
        assert_eq!(stats.events, 4);
    }

    #[test]
    fn test_non_recipe_pages_ignored() {
        let rows = vec![row("/", 50), row("/galerija", 20)];
        assert!(aggregate_recipe_views(&rows).is_empty());
    }
}
