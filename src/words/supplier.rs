//! Word supply: the category word lists live outside the engine.
//!
//! `WordSupplier` is the seam. `CategoryDeck` is a small in-memory
//! implementation for callers that just have a few lists of words.

use log::debug;
use serde::{Deserialize, Serialize};

use super::options::answer_options;
use crate::core::GameRng;

/// Source of secret words and impostor answer options.
pub trait WordSupplier {
    /// Draw a word from a category.
    ///
    /// Returns `(category_name, word)`, or `None` when the category is
    /// unknown or has no words. Callers treat both as unknown.
    fn get_word(&mut self, category_id: &str) -> Option<(String, String)>;

    /// Build the impostor's multiple-choice options for `word`: up to
    /// `decoys` distinct decoys from the same category plus the word itself,
    /// in random order.
    fn answer_options(&mut self, category_id: &str, word: &str, decoys: usize) -> Vec<String>;
}

/// A named list of candidate words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub words: Vec<String>,
}

impl Category {
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: name.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// In-memory `WordSupplier` over a fixed set of categories.
///
/// ```
/// use lies_n_legends::words::{Category, CategoryDeck, WordSupplier};
///
/// let mut deck = CategoryDeck::new(7)
///     .with_category(Category::new("motown", "Motown", ["Prince", "Kem", "Al Green"]));
///
/// let (name, word) = deck.get_word("motown").unwrap();
/// assert_eq!(name, "Motown");
/// assert!(["Prince", "Kem", "Al Green"].contains(&word.as_str()));
/// assert!(deck.get_word("opera").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct CategoryDeck {
    categories: Vec<Category>,
    rng: GameRng,
}

impl CategoryDeck {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            categories: Vec::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Add a category. Lookups return the first category with a matching id.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    #[must_use]
    pub fn get(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

impl WordSupplier for CategoryDeck {
    fn get_word(&mut self, category_id: &str) -> Option<(String, String)> {
        let category = self.categories.iter().find(|c| c.id == category_id)?;
        let word = self.rng.choose(&category.words)?;
        debug!("Drew a word from '{}'", category.name);
        Some((category.name.clone(), word.clone()))
    }

    fn answer_options(&mut self, category_id: &str, word: &str, decoys: usize) -> Vec<String> {
        let pool = self
            .categories
            .iter()
            .find(|c| c.id == category_id)
            .map_or(&[][..], |c| c.words.as_slice());
        answer_options(pool, word, decoys, &mut self.rng)
    }
}
