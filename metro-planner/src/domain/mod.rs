//! Domain types for the metro planner.
//!
//! Stations carry identity rather than value semantics: the network and the
//! planner compare stations by handle, never by name.

mod station;

pub use station::{Station, StationId};
