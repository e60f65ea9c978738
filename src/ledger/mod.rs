//! Selection ledger: who suspects whom, and the impostor's word guess.

pub mod selections;

pub use selections::SelectionLedger;
