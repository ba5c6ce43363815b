//! Word adjacency graph library.
//!
//! This crate builds a weighted directed graph from word adjacency in text
//! and answers structural queries over it:
//! - Bridge-word lookup between two words
//! - Text regeneration with bridge words inserted
//! - Shortest path (fewest hops) between two words
//! - Random walks starting from a random vertex
//!
//! Randomized operations accept any `rand::Rng`, so callers can inject a
//! seeded source to make them reproducible.

/// Graph model, tokenizer and query results.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (line-oriented file reading).
pub mod io;

pub use error::{GraphError, Result};
pub use model::bridge::{BridgeStatus, BridgeWords};
pub use model::graph::{Edge, WordGraph};
pub use model::path::ShortestPath;
pub use model::walk::{RandomWalk, WalkInput};
