//! Station identity types.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STATION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a [`Station`].
///
/// Ids are allocated once per [`Station::new`] call and never reused within
/// a process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u64);

impl StationId {
    fn next() -> Self {
        StationId(NEXT_STATION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

/// A named node in the metro network.
///
/// Stations are identity-bearing: two stations constructed separately are
/// different keys even when they share a name. Cloning a `Station` copies the
/// handle, so the clone is the same station.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::Station;
///
/// let mg_road = Station::new("MG Road");
/// let same = mg_road.clone();
/// let other = Station::new("MG Road");
///
/// assert_eq!(mg_road, same);
/// assert_ne!(mg_road, other);
/// assert_eq!(other.name(), "MG Road");
/// ```
#[derive(Clone)]
pub struct Station {
    id: StationId,
    name: Arc<str>,
}

impl Station {
    /// Create a new station with a fresh identity.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: StationId::next(),
            name: name.into(),
        }
    }

    /// Returns the station's identity.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Returns the human-readable name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl std::hash::Hash for Station {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({}#{})", self.name, self.id.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
