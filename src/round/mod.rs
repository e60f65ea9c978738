//! Round lifecycle: the session state machine and its read-only snapshots.
//!
//! - `GameSession`: owns roster, roles, ledger, scoring; every transition
//! - `Phase`: lifecycle states
//! - `SessionSnapshot`: immutable view for rendering

pub mod phase;
pub mod controller;
pub mod snapshot;

pub use phase::Phase;
pub use controller::GameSession;
pub use snapshot::SessionSnapshot;
