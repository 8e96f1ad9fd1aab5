//! Configuration for the longest-path heuristic.

/// What to do when the depth-first walk reaches a station that is still
/// being expanded further up the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Stop and report [`PathError::CycleDetected`](super::PathError::CycleDetected).
    #[default]
    Fail,

    /// Ignore the back edge. It contributes no distance and never resets
    /// the recorded path.
    SkipInProgress,
}

/// Configuration parameters for path search.
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// Maximum recursion depth of the longest-path walk.
    /// Deeper walks fail instead of exhausting the stack.
    pub max_depth: usize,

    /// Behaviour on edges back into in-progress stations.
    pub cycle_policy: CyclePolicy,
}

impl PathConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_depth: usize, cycle_policy: CyclePolicy) -> Self {
        Self {
            max_depth,
            cycle_policy,
        }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_depth: 2048,
            cycle_policy: CyclePolicy::Fail,
        }
    }
}
