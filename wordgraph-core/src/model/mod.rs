//! Top-level module for the word graph engine.
//!
//! This module provides:
//! - Text tokenization shared by ingestion and queries (`tokenizer`)
//! - The adjacency graph itself (`WordGraph`)
//! - Per-word outgoing transitions (`Vertex`)
//! - Query results: bridge words, shortest paths, random walks
//! - Bridge-word text regeneration (`generator`)

/// Splits raw text into lowercase alphabetic tokens.
pub mod tokenizer;

/// Weighted directed graph over word tokens.
///
/// Handles line ingestion, vertex membership and edge rendering.
pub mod graph;

/// Internal representation of a single word and its successors.
///
/// Tracks outgoing edge weights and supports uniform successor sampling.
pub mod vertex;

/// Bridge-word lookup between two words.
pub mod bridge;

/// Text regeneration with bridge words inserted between adjacent tokens.
pub mod generator;

/// Breadth-first shortest path between two words.
pub mod path;

/// Random walks and their configuration (`WalkInput`).
pub mod walk;
