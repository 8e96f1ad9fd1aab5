//! Path search error types.
//!
//! Absent stations and unreachable destinations are ordinary results, not
//! errors. Only the longest-path walk can fail.

use crate::domain::Station;

/// Errors from the longest-path heuristic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The walk reached a station that is still being expanded
    #[error("cycle detected at station {station}")]
    CycleDetected { station: Station },

    /// The walk went deeper than the configured limit
    #[error("longest-path walk exceeded depth limit of {limit}")]
    DepthExceeded { limit: usize },
}
