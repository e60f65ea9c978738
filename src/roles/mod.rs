//! Role assignment for each round.
//!
//! - `assign_roles`: one uniformly chosen impostor, everybody else legitimate
//! - `find_impostor`: look up the impostor in a roster snapshot

pub mod assigner;

pub use assigner::{assign_roles, find_impostor, RoleAssignment, MIN_ROLE_PLAYERS};
