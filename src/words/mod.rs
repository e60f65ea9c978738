//! Word supply boundary.
//!
//! - `WordSupplier`: category id -> (category name, secret word), plus the
//!   impostor's answer options
//! - `CategoryDeck`: in-memory supplier over fixed word lists
//! - `answer_options`: decoys + true word, shuffled

pub mod options;
pub mod supplier;

pub use options::answer_options;
pub use supplier::{Category, CategoryDeck, WordSupplier};
