// Recipe store abstraction
//
// The chat and recommendation engines only ever see a catalog snapshot;
// mutation goes through `update`, which replaces a record by id and
// enforces the append-only invariant on ratings and comments.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::recipe::{Comment, Recipe};

/// Seed catalog shipped with the binary.
pub const SEED_CATALOG: &str = include_str!("../../data/recipes.json");

pub trait RecipeStore: Send + Sync {
    /// Snapshot of the full catalog.
    fn get_all(&self) -> Result<Vec<Recipe>>;

    /// Full replace by id. Ratings and comments may only grow.
    fn update(&self, recipe: Recipe) -> Result<()>;
}

/// Append a rating (1-5) to a recipe through the store.
pub fn add_rating(store: &dyn RecipeStore, id: u32, rating: u8) -> Result<()> {
    if !(1..=5).contains(&rating) {
        bail!("rating must be between 1 and 5, got {rating}");
    }
    let mut recipe = find_recipe(store, id)?;
    recipe.ratings.push(rating);
    store.update(recipe)
}

/// Append a comment to a recipe through the store.
pub fn add_comment(store: &dyn RecipeStore, id: u32, comment: Comment) -> Result<()> {
    let mut recipe = find_recipe(store, id)?;
    recipe.comments.push(comment);
    store.update(recipe)
}

fn find_recipe(store: &dyn RecipeStore, id: u32) -> Result<Recipe> {
    store
        .get_all()?
        .into_iter()
        .find(|r| r.id == id)
        .with_context(|| format!("no recipe with id {id}"))
}

fn check_append_only(old: &Recipe, new: &Recipe) -> Result<()> {
    if new.ratings.len() < old.ratings.len() || new.ratings[..old.ratings.len()] != old.ratings[..]
    {
        bail!("ratings are append-only for recipe {}", old.id);
    }
    if new.comments.len() < old.comments.len()
        || new.comments[..old.comments.len()] != old.comments[..]
    {
        bail!("comments are append-only for recipe {}", old.id);
    }
    Ok(())
}

fn replace_by_id(recipes: &mut [Recipe], updated: Recipe) -> Result<()> {
    let slot = recipes
        .iter_mut()
        .find(|r| r.id == updated.id)
        .with_context(|| format!("no recipe with id {}", updated.id))?;
    check_append_only(slot, &updated)?;
    *slot = updated;
    Ok(())
}

fn parse_catalog(contents: &str) -> Result<Vec<Recipe>> {
    serde_json::from_str(contents).context("Failed to parse recipe catalog JSON")
}

/// In-memory store over a seed vector. Default backing for the core.
pub struct MemoryStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: RwLock::new(recipes),
        }
    }

    /// Store seeded with the embedded catalog.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(parse_catalog(SEED_CATALOG)?))
    }
}

impl RecipeStore for MemoryStore {
    fn get_all(&self) -> Result<Vec<Recipe>> {
        let recipes = self
            .recipes
            .read()
            .map_err(|_| anyhow::anyhow!("recipe store lock poisoned"))?;
        Ok(recipes.clone())
    }

    fn update(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| anyhow::anyhow!("recipe store lock poisoned"))?;
        replace_by_id(&mut recipes, recipe)
    }
}

/// File-backed store: loads on open, persists the whole catalog on update.
pub struct JsonStore {
    path: PathBuf,
    recipes: RwLock<Vec<Recipe>>,
}

impl JsonStore {
    pub fn open(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            recipes: RwLock::new(parse_catalog(&contents)?),
        })
    }

    /// Create the file from the embedded seed catalog if it does not exist,
    /// then open it.
    pub fn open_or_seed(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, SEED_CATALOG)
                .with_context(|| format!("Failed to seed catalog file: {}", path.display()))?;
            tracing::info!(path = %path.display(), "seeded new catalog file");
        }
        Self::open(path)
    }

    fn persist(&self, recipes: &[Recipe]) -> Result<()> {
        let json = serde_json::to_string_pretty(recipes)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write catalog file: {}", self.path.display()))
    }
}

impl RecipeStore for JsonStore {
    fn get_all(&self) -> Result<Vec<Recipe>> {
        let recipes = self
            .recipes
            .read()
            .map_err(|_| anyhow::anyhow!("recipe store lock poisoned"))?;
        Ok(recipes.clone())
    }

    fn update(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self
            .recipes
            .write()
            .map_err(|_| anyhow::anyhow!("recipe store lock poisoned"))?;
        replace_by_id(&mut recipes, recipe)?;
        self.persist(&recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_seed_catalog_parses() {
        let store = MemoryStore::seeded().unwrap();
        let recipes = store.get_all().unwrap();
        assert!(!recipes.is_empty());
        // ids are unique
        let mut ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }

    #[test]
    fn test_add_rating_appends() {
        let store = MemoryStore::seeded().unwrap();
        let before = find_recipe(&store, 2).unwrap().ratings.len();
        add_rating(&store, 2, 5).unwrap();
        let after = find_recipe(&store, 2).unwrap();
        assert_eq!(after.ratings.len(), before + 1);
        assert_eq!(*after.ratings.last().unwrap(), 5);
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let store = MemoryStore::seeded().unwrap();
        assert!(add_rating(&store, 2, 0).is_err());
        assert!(add_rating(&store, 2, 6).is_err());
    }

    #[test]
    fn test_update_unknown_id_rejected() {
        let store = MemoryStore::seeded().unwrap();
        let mut recipe = find_recipe(&store, 1).unwrap();
        recipe.id = 999;
        assert!(store.update(recipe).is_err());
    }

    #[test]
    fn test_ratings_are_append_only() {
        let store = MemoryStore::seeded().unwrap();
        let mut recipe = find_recipe(&store, 1).unwrap();
        recipe.ratings.clear();
        assert!(store.update(recipe).is_err());

        let mut recipe = find_recipe(&store, 1).unwrap();
        if let Some(first) = recipe.ratings.first_mut() {
            *first = 1;
        }
        assert!(store.update(recipe).is_err());
    }

    #[test]
    fn test_add_comment_appends() {
        let store = MemoryStore::seeded().unwrap();
        let comment = Comment {
            author: "Iva".to_string(),
            text: "Odlično!".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        };
        add_comment(&store, 4, comment.clone()).unwrap();
        let recipe = find_recipe(&store, 4).unwrap();
        assert_eq!(recipe.comments.last(), Some(&comment));
    }

    #[test]
    fn test_json_store_persists_updates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let store = JsonStore::open_or_seed(&path).unwrap();
        add_rating(&store, 1, 4).unwrap();

        // A fresh store sees the persisted rating.
        let reopened = JsonStore::open(&path).unwrap();
        let recipe = find_recipe(&reopened, 1).unwrap();
        assert_eq!(*recipe.ratings.last().unwrap(), 4);
    }
}
