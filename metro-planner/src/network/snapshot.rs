//! Read-only display view of a station graph.

use std::fmt;

use serde::Serialize;

use crate::domain::Station;

/// One adjacency row: a station name and the names of its connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRow {
    pub station: String,
    pub connections: Vec<String>,
}

/// Adjacency rows sorted by station name, then by station identity.
///
/// The graph itself has no meaningful iteration order, so anything printed for
/// people goes through a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NetworkSnapshot {
    pub rows: Vec<SnapshotRow>,
}

impl NetworkSnapshot {
    pub(crate) fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a Station, &'a [Station])>,
    {
        let mut keyed: Vec<(&Station, &[Station])> = entries.into_iter().collect();
        keyed.sort_by(|(a, _), (b, _)| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));

        let rows = keyed
            .into_iter()
            .map(|(station, connections)| SnapshotRow {
                station: station.name().to_string(),
                connections: connections.iter().map(|s| s.name().to_string()).collect(),
            })
            .collect();

        Self { rows }
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for NetworkSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} -> [{}]", row.station, row.connections.join(", "))?;
        }
        Ok(())
    }
}
