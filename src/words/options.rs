//! Impostor answer options.

use rustc_hash::FxHashSet;

use crate::core::GameRng;

/// Build the impostor's multiple-choice options.
///
/// Draws up to `decoys` distinct words from `pool` (excluding `word` and
/// duplicates), adds `word`, and shuffles. Small pools yield fewer decoys.
///
/// ```
/// use lies_n_legends::core::GameRng;
/// use lies_n_legends::words::answer_options;
///
/// let pool: Vec<String> = ["Prince", "Kem", "Al Green", "Rick James", "Diana Ross", "Berry Gordy", "Marvin Gaye"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let options = answer_options(&pool, "Kem", 5, &mut GameRng::new(1));
/// assert_eq!(options.len(), 6);
/// assert_eq!(options.iter().filter(|o| *o == "Kem").count(), 1);
/// ```
#[must_use]
pub fn answer_options(pool: &[String], word: &str, decoys: usize, rng: &mut GameRng) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut candidates: Vec<&String> = pool
        .iter()
        .filter(|w| w.as_str() != word && seen.insert(w.as_str()))
        .collect();

    rng.shuffle(&mut candidates);

    let mut options: Vec<String> = candidates.into_iter().take(decoys).cloned().collect();
    options.push(word.to_string());
    rng.shuffle(&mut options);
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_five_decoys_plus_word() {
        let words = pool(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let options = answer_options(&words, "c", 5, &mut GameRng::new(4));

        assert_eq!(options.len(), 6);
        assert!(options.contains(&"c".to_string()));

        let mut unique = options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_duplicates_and_word_excluded_from_decoys() {
        let words = pool(&["a", "a", "b", "b", "word", "word"]);
        let mut options = answer_options(&words, "word", 5, &mut GameRng::new(4));

        options.sort();
        assert_eq!(options, pool(&["a", "b", "word"]));
    }

    #[test]
    fn test_word_missing_from_pool_still_offered() {
        let words = pool(&["a", "b"]);
        let options = answer_options(&words, "z", 5, &mut GameRng::new(4));

        assert!(options.contains(&"z".to_string()));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_zero_decoys() {
        let words = pool(&["a", "b"]);
        assert_eq!(answer_options(&words, "a", 0, &mut GameRng::new(4)), pool(&["a"]));
    }

    #[test]
    fn test_word_position_varies() {
        let words = pool(&["a", "b", "c", "d", "e", "f"]);
        let mut rng = GameRng::new(8);

        let positions: FxHashSet<usize> = (0..50)
            .filter_map(|_| answer_options(&words, "a", 5, &mut rng).iter().position(|o| o == "a"))
            .collect();

        assert!(positions.len() > 1);
    }
}
