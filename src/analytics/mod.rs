// Behavioral analytics module
// Public interface for reducing report rows to per-recipe engagement

mod report;

pub use report::{aggregate_recipe_views, recipe_id_from_path, EngagementStats, ReportRow};
