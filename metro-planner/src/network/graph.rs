//! Adjacency mapping between stations.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::Station;

use super::snapshot::NetworkSnapshot;

/// Directed graph of stations and their outbound connections.
///
/// Each key owns an ordered connection list. Lists may mention stations that
/// have no entry of their own; those are simply dead ends for traversal.
/// Edges are not kept symmetric.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    adjacency: HashMap<Station, Vec<Station>>,
}

impl StationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `station` with the given connection list.
    ///
    /// An existing entry for the same station is replaced outright, not merged.
    pub fn add_station(&mut self, station: Station, connections: Vec<Station>) {
        debug!(
            station = %station,
            connections = connections.len(),
            "Adding station"
        );
        if let Some(previous) = self.adjacency.insert(station, connections) {
            debug!(replaced = previous.len(), "Replaced existing connection list");
        }
    }

    /// Remove `station` and every occurrence of it in other connection lists.
    ///
    /// Removing an absent station is a no-op for the key set, but connection
    /// lists are still scrubbed. Returns whether a key was removed.
    pub fn delete_station(&mut self, station: &Station) -> bool {
        let removed = self.adjacency.remove(station).is_some();

        let mut scrubbed = 0;
        for connections in self.adjacency.values_mut() {
            let before = connections.len();
            connections.retain(|s| s != station);
            scrubbed += before - connections.len();
        }

        debug!(station = %station, removed, scrubbed, "Deleted station");
        removed
    }

    /// Returns the ordered connections of `station`, or `None` if it has no entry.
    pub fn connections(&self, station: &Station) -> Option<&[Station]> {
        self.adjacency.get(station).map(Vec::as_slice)
    }

    /// Check whether `station` has an entry in the graph.
    pub fn station_exists(&self, station: &Station) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Iterate over all entries. Order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (&Station, &[Station])> {
        self.adjacency.iter().map(|(s, c)| (s, c.as_slice()))
    }

    /// All keyed stations carrying the given name.
    pub fn find_by_name(&self, name: &str) -> Vec<Station> {
        self.adjacency
            .keys()
            .filter(|s| s.name() == name)
            .cloned()
            .collect()
    }

    /// Returns the number of stations with an entry.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no entries.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Deterministic display view of the graph.
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::from_entries(self.entries())
    }
}
