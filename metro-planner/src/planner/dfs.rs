//! Longest-path heuristic.
//!
//! This is not a longest-simple-path solver. It is a memoised depth-first walk
//! whose result is the station whose maximum improved last, followed by that
//! station's full connection list. Callers depend on that exact shape.
//!
//! Each station is memoised as `1 + distance(station)` when first reached as a
//! neighbour. The walk keeps a set of stations still being expanded; reaching
//! one of those again is where an unguarded walk would recurse forever.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::StationGraph;

use super::config::{CyclePolicy, PathConfig};
use super::error::PathError;

/// Mutable state shared across the recursion.
struct Walk<'a> {
    graph: &'a StationGraph,
    config: &'a PathConfig,
    distances: HashMap<&'a Station, usize>,
    in_progress: HashSet<&'a Station>,
    longest: Vec<Station>,
}

impl<'a> Walk<'a> {
    fn visit(&mut self, current: &'a Station, depth: usize) -> Result<usize, PathError> {
        let graph = self.graph;
        let Some(connections) = graph.connections(current) else {
            return Ok(0);
        };

        if depth > self.config.max_depth {
            return Err(PathError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        self.in_progress.insert(current);
        let mut max_distance = 0;

        for neighbour in connections {
            let memo = self.distances.get(neighbour).copied();
            let distance = match memo {
                Some(d) => d,
                None if self.in_progress.contains(neighbour) => match self.config.cycle_policy {
                    CyclePolicy::Fail => {
                        return Err(PathError::CycleDetected {
                            station: neighbour.clone(),
                        });
                    }
                    CyclePolicy::SkipInProgress => {
                        trace!(from = %current, to = %neighbour, "Skipping back edge");
                        continue;
                    }
                },
                None => {
                    let d = 1 + self.visit(neighbour, depth + 1)?;
                    self.distances.insert(neighbour, d);
                    d
                }
            };

            if distance > max_distance {
                max_distance = distance;
                self.longest.clear();
                self.longest.push(current.clone());
                self.longest.extend(connections.iter().cloned());
            }
        }

        self.in_progress.remove(current);
        Ok(max_distance)
    }
}

/// Run the longest-path heuristic from `source`.
///
/// Returns an empty result when `source` has no entry or no connections.
/// Fails when the walk meets a cycle under [`CyclePolicy::Fail`], or exceeds
/// [`PathConfig::max_depth`].
pub fn longest_path_heuristic(
    graph: &StationGraph,
    source: &Station,
    config: &PathConfig,
) -> Result<Vec<Station>, PathError> {
    let mut walk = Walk {
        graph,
        config,
        distances: HashMap::new(),
        in_progress: HashSet::new(),
        longest: Vec::new(),
    };

    let result = walk.visit(source, 0);

    match &result {
        Ok(distance) => debug!(
            source = %source,
            distance,
            memoised = walk.distances.len(),
            "Longest-path heuristic complete"
        ),
        Err(e) => debug!(source = %source, error = %e, "Longest-path heuristic failed"),
    }

    result.map(|_| walk.longest)
}
