//! Lock-guarded station graph for use across tasks.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::Station;
use crate::planner::{self, PathConfig, PathError};

use super::{NetworkSnapshot, StationGraph};

/// Thread-safe handle to a [`StationGraph`].
///
/// Mutations take the write lock; queries and traversals take the read lock,
/// so a traversal never sees a connection list mid-update.
#[derive(Clone, Default)]
pub struct SharedStationGraph {
    inner: Arc<RwLock<StationGraph>>,
}

impl SharedStationGraph {
    /// Wrap an existing graph.
    pub fn new(graph: StationGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Insert or replace the entry for `station`.
    pub async fn add_station(&self, station: Station, connections: Vec<Station>) {
        let mut guard = self.inner.write().await;
        guard.add_station(station, connections);
    }

    /// Remove `station` and scrub it from every connection list.
    pub async fn delete_station(&self, station: &Station) -> bool {
        let mut guard = self.inner.write().await;
        guard.delete_station(station)
    }

    /// Copy of the connection list for `station`.
    pub async fn connections(&self, station: &Station) -> Option<Vec<Station>> {
        let guard = self.inner.read().await;
        guard.connections(station).map(<[Station]>::to_vec)
    }

    /// Check whether `station` has an entry.
    pub async fn station_exists(&self, station: &Station) -> bool {
        let guard = self.inner.read().await;
        guard.station_exists(station)
    }

    /// Get the number of stations in the graph.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the graph is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }

    /// Display view of the current graph.
    pub async fn snapshot(&self) -> NetworkSnapshot {
        let guard = self.inner.read().await;
        guard.snapshot()
    }

    /// Run [`planner::shortest_path`] under the read lock.
    pub async fn shortest_path(&self, source: &Station, destination: &Station) -> Vec<Station> {
        let guard = self.inner.read().await;
        planner::shortest_path(&guard, source, destination)
    }

    /// Run [`planner::longest_path_heuristic`] under the read lock.
    pub async fn longest_path_heuristic(
        &self,
        source: &Station,
        config: &PathConfig,
    ) -> Result<Vec<Station>, PathError> {
        let guard = self.inner.read().await;
        planner::longest_path_heuristic(&guard, source, config)
    }
}
