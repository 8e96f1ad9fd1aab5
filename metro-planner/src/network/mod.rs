//! The metro network as a directed graph of stations.
//!
//! [`StationGraph`] owns the adjacency mapping. Connection lists are only
//! ever handed out as immutable slices or copies; all changes go through
//! [`StationGraph::add_station`] and [`StationGraph::delete_station`].

mod graph;
mod sample;
mod shared;
mod snapshot;

pub use graph::StationGraph;
pub use sample::{SampleNetwork, bangalore_sample};
pub use shared::SharedStationGraph;
pub use snapshot::{NetworkSnapshot, SnapshotRow};
