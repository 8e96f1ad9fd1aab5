//! Fewest-hops route between two stations.
//!
//! Plain breadth-first search with parent pointers. The search stops as soon
//! as the destination shows up in the connection list being expanded, rather
//! than when it is dequeued; discovery order is monotonic in distance, so the
//! route is still minimal.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::StationGraph;

/// Find a route with the fewest connections from `source` to `destination`.
///
/// The result includes both ends. Ties go to whichever station was discovered
/// first in connection-list order. Returns an empty route when the destination
/// is never seen or `source` has no entry.
///
/// The destination test runs for every neighbour, visited or not. When
/// `source == destination` that means the route is `[source]` as soon as any
/// expanded station lists the source, and empty otherwise.
pub fn shortest_path(
    graph: &StationGraph,
    source: &Station,
    destination: &Station,
) -> Vec<Station> {
    let mut frontier: VecDeque<&Station> = VecDeque::new();
    let mut visited: HashSet<&Station> = HashSet::new();
    let mut parents: HashMap<&Station, &Station> = HashMap::new();

    frontier.push_back(source);
    visited.insert(source);

    while let Some(current) = frontier.pop_front() {
        let Some(connections) = graph.connections(current) else {
            continue;
        };

        trace!(
            station = %current,
            connections = connections.len(),
            "BFS expanding station"
        );

        for neighbour in connections {
            if visited.insert(neighbour) {
                parents.insert(neighbour, current);
                frontier.push_back(neighbour);
            }

            if neighbour == destination {
                let route = reconstruct(&parents, neighbour);
                debug!(
                    source = %source,
                    destination = %destination,
                    hops = route.len().saturating_sub(1),
                    "Shortest path found"
                );
                return route;
            }
        }
    }

    debug!(source = %source, destination = %destination, "No path found");
    Vec::new()
}

/// Walk parent pointers back from `end` until a station with no parent.
fn reconstruct(parents: &HashMap<&Station, &Station>, end: &Station) -> Vec<Station> {
    let mut route = vec![end.clone()];
    let mut current = end;
    while let Some(&parent) = parents.get(current) {
        route.push(parent.clone());
        current = parent;
    }
    route.reverse();
    route
}
