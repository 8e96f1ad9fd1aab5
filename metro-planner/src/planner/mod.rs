//! Path search over a station graph.
//!
//! Two read-only traversals:
//! - [`shortest_path`]: breadth-first, fewest connections between two stations.
//! - [`longest_path_heuristic`]: memoised depth-first walk from one station.
//!
//! Neither mutates the graph, and neither treats an unknown station as an error.

mod bfs;
mod config;
mod dfs;
mod error;


pub use bfs::shortest_path;
pub use config::{CyclePolicy, PathConfig};
pub use dfs::longest_path_heuristic;
pub use error::PathError;
