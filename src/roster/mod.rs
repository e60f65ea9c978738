//! Roster management.
//!
//! - `PlayerRegistry`: add/remove/clear players, name uniqueness and
//!   roster-size bounds

pub mod registry;

pub use registry::PlayerRegistry;
