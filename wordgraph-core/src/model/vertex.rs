use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IteratorRandom;


/// Represents a word in the adjacency graph.
///
/// A `Vertex` corresponds to a single lowercase word (`word`) and stores
/// every observed transition from this word to the word that followed it.
///
/// Conceptually, this is a node in a directed multigraph where outgoing
/// edges are weighted by their number of observations.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during ingestion
/// - Pick a successor uniformly at random (weights are ignored)
///
/// ## Invariants
/// - All successors belong to the same `word`
/// - Each successor weight is strictly positive
/// - A vertex with no successors is a sink, which is valid
#[derive(Clone, Debug)]
pub struct Vertex {
	/// The word this vertex stands for.
	word: String,
	/// Outgoing edges indexed by the next word.
	/// The value represents how many times this adjacency was observed.
	/// Example: { "dog" => 2, "cat" => 1 }
	successors: BTreeMap<String, usize>,
}

impl Vertex {
	/// Creates a new vertex without successors.
	pub fn new(word: &str) -> Self {
		Self {
			word: word.to_owned(),
			successors: BTreeMap::new(),
		}
	}

	pub fn word(&self) -> &str {
		&self.word
	}

	/// Records an occurrence of an edge toward `next_word`.
	///
	/// - If the edge already exists, its weight is increased.
	/// - Otherwise, a new edge is created with an initial weight of 1.
	pub fn add_successor(&mut self, next_word: &str) {
		*self.successors.entry(next_word.to_owned()).or_insert(0) += 1;
	}

	/// Weight of the edge toward `next_word`, if any.
	pub fn weight(&self, next_word: &str) -> Option<usize> {
		self.successors.get(next_word).copied()
	}

	pub fn has_successor(&self, next_word: &str) -> bool {
		self.successors.contains_key(next_word)
	}

	/// Number of distinct successors.
	pub fn out_degree(&self) -> usize {
		self.successors.len()
	}

	/// Sum of all outgoing edge weights.
	pub fn total_weight(&self) -> usize {
		self.successors.values().sum()
	}

	/// Iterates over `(successor, weight)` pairs in lexical order.
	pub fn successors(&self) -> impl Iterator<Item = (&str, usize)> {
		self.successors.iter().map(|(word, weight)| (word.as_str(), *weight))
	}

	/// Picks a successor uniformly at random.
	///
	/// Each distinct successor is equally likely, whatever its weight.
	/// Returns `None` if the vertex is a sink.
	pub fn pick_successor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.successors.keys().choose(rng).map(String::as_str)
	}
}
