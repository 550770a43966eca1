// Interactive REPL

use anyhow::{Context, Result};
use chrono::Local;
use crossterm::{style::Stylize, terminal};
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use crate::catalog::{add_comment, add_rating, Comment, Recipe, RecipeStore};
use crate::chat::{ChatEngine, Response};
use crate::config::Settings;
use crate::recommend::{profile_from_history, recommend, similar_recipes, ScoredRecipe};

use super::commands::{format_help, Command};

/// Get current terminal width, or default to 80 if not a TTY
fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

pub struct Repl {
    store: Arc<dyn RecipeStore>,
    engine: ChatEngine,
    settings: Settings,
    // Recipe ids the user opened this session, oldest first.
    history: Vec<u32>,
    is_interactive: bool,
}

impl Repl {
    pub fn new(store: Arc<dyn RecipeStore>, settings: Settings) -> Self {
        let is_interactive = io::stdout().is_terminal();
        Self {
            engine: ChatEngine::new(store.clone()),
            store,
            settings,
            history: Vec::new(),
            is_interactive,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.is_interactive {
            let count = self.store.get_all().map(|r| r.len()).unwrap_or(0);
            println!("Dijabeto v{}", env!("CARGO_PKG_VERSION"));
            println!("Učitano {count} recepata ✓");
            println!();
            println!("Bok! Pitaj me za recepte, ili upiši /help za naredbe.");
        } else {
            eprintln!("# Dijabeto v{} - non-interactive mode", env!("CARGO_PKG_VERSION"));
        }

        loop {
            if self.is_interactive {
                println!();
                self.print_separator();
                print!("> ");
            }
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                break; // EOF
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            if self.is_interactive {
                self.print_separator();
                println!();
            }

            match Command::parse(input) {
                Ok(Some(Command::Quit)) => {
                    if self.is_interactive {
                        println!("Doviđenja!");
                    }
                    break;
                }
                Ok(Some(command)) => {
                    if let Err(e) = self.handle_command(command) {
                        eprintln!("Greška: {e:#}");
                    }
                }
                Ok(None) => {
                    let response = self.engine.reply(input);
                    self.print_response(&response);
                }
                Err(e) => eprintln!("Greška: {e:#}"),
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Help => println!("{}", format_help()),
            Command::Quit => {}
            Command::List => {
                let recipes = self.store.get_all()?;
                println!("Svi recepti ({}):", recipes.len());
                for recipe in &recipes {
                    println!("  {}", summary_line(recipe));
                }
            }
            Command::Show(id) => {
                let recipe = self.find(id)?;
                self.print_recipe_card(&recipe);
                self.record_view(id);
            }
            Command::Similar(id) => {
                let recipe = self.find(id)?;
                let catalog = self.store.get_all()?;
                let scored = similar_recipes(&recipe, &catalog, self.settings.recommend_limit);
                println!("Recepti slični \"{}\":", recipe.name);
                self.print_scored(&scored);
            }
            Command::Recommend => {
                if self.history.is_empty() {
                    println!("Još nisi pregledao nijedan recept. Otvori neki sa /recept <id>!");
                    return Ok(());
                }
                let catalog = self.store.get_all()?;
                let profile = profile_from_history(&self.history, &catalog);
                let scored = recommend(
                    &profile,
                    &catalog,
                    &self.history,
                    self.settings.recommend_limit,
                );
                println!("Preporuke na temelju pregledanih recepata:");
                self.print_scored(&scored);
            }
            Command::Rate(id, rating) => {
                add_rating(self.store.as_ref(), id, rating)?;
                let recipe = self.find(id)?;
                println!(
                    "Hvala na ocjeni! \"{}\" sada ima prosjek {:.1} ({} ocjena).",
                    recipe.name,
                    recipe.average_rating(),
                    recipe.ratings.len()
                );
            }
            Command::Comment(id, text) => {
                let comment = Comment {
                    author: "ja".to_string(),
                    text,
                    date: Local::now().date_naive(),
                };
                add_comment(self.store.as_ref(), id, comment)?;
                let recipe = self.find(id)?;
                println!("Komentar dodan na \"{}\".", recipe.name);
            }
        }
        Ok(())
    }

    fn find(&self, id: u32) -> Result<Recipe> {
        self.store
            .get_all()?
            .into_iter()
            .find(|r| r.id == id)
            .with_context(|| format!("nema recepta s id {id}"))
    }

    fn record_view(&mut self, id: u32) {
        self.history.push(id);
        let limit = self.settings.history_limit;
        if self.history.len() > limit {
            let excess = self.history.len() - limit;
            self.history.drain(..excess);
        }
    }

    fn print_response(&self, response: &Response) {
        println!("{}", response.text);

        for recipe in &response.recipes {
            println!("  {}", summary_line(recipe));
        }

        for group in &response.groups {
            println!();
            println!("S \"{}\":", group.ingredient);
            for recipe in &group.recipes {
                println!("  {}", summary_line(recipe));
            }
        }

        if let Some(suggestion) = &response.suggestion {
            println!();
            println!(
                "Možda te zanima: {} (sadrži više traženih sastojaka)",
                summary_line(suggestion)
            );
        }
    }

    fn print_scored(&self, scored: &[ScoredRecipe]) {
        if scored.is_empty() {
            println!("  (ništa za preporučiti)");
            return;
        }
        for entry in scored {
            if self.is_interactive {
                println!(
                    "  {} {}",
                    summary_line(&entry.recipe),
                    format!("(sličnost {:.2})", entry.similarity).dark_grey()
                );
            } else {
                println!(
                    "  {} (sličnost {:.2})",
                    summary_line(&entry.recipe),
                    entry.similarity
                );
            }
        }
    }

    fn print_recipe_card(&self, recipe: &Recipe) {
        self.print_separator();
        println!("#{} {}", recipe.id, recipe.name);
        println!("Kategorije: {}", recipe.categories.join(", "));
        println!(
            "Priprema: {} min | Kuhanje: {} min | Porcije: {}",
            recipe.prep_minutes, recipe.cook_minutes, recipe.servings
        );
        println!(
            "Kalorije: {:.0} | Masti: {:.0}g | UH: {:.0}g | Proteini: {:.0}g",
            recipe.nutrition.calories,
            recipe.nutrition.fat,
            recipe.nutrition.carbs,
            recipe.nutrition.protein
        );
        if !recipe.ratings.is_empty() {
            println!(
                "Ocjena: {:.1} ({} ocjena)",
                recipe.average_rating(),
                recipe.ratings.len()
            );
        }
        if recipe.vegan {
            println!("Vegansko ✓");
        }
        if recipe.gluten_free {
            println!("Bez glutena ✓");
        }
        println!();
        println!("Sastojci:");
        for line in &recipe.ingredients {
            println!("  - {line}");
        }
        println!();
        println!("Priprema:");
        for line in recipe.preparation.lines() {
            println!("  {line}");
        }
        if !recipe.comments.is_empty() {
            println!();
            println!("Komentari:");
            for comment in &recipe.comments {
                println!("  {} ({}): {}", comment.author, comment.date, comment.text);
            }
        }
        self.print_separator();
    }

    /// Print separator line that adapts to terminal width
    fn print_separator(&self) {
        if !self.is_interactive {
            return;
        }
        let width = terminal_width();
        println!("{}", "─".repeat(width));
    }
}

fn summary_line(recipe: &Recipe) -> String {
    format!(
        "#{} {} ({} min, {:.0} kcal)",
        recipe.id,
        recipe.name,
        recipe.total_minutes(),
        recipe.nutrition.calories
    )
}
