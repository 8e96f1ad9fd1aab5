//! Metro network planner.
//!
//! Models a transit network as a directed graph of named stations and answers
//! two questions about it: the fewest-hops route between two stations, and a
//! heuristic "longest path" reachable from one station.

pub mod domain;
pub mod network;
pub mod planner;
