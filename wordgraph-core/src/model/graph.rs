use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use log::{debug, trace};
use serde::Serialize;

use super::tokenizer::{normalize_word, tokenize};
use super::vertex::Vertex;
use crate::error::{GraphError, Result};
use crate::io::read_lines;

/// A weighted edge, as returned by [`WordGraph::render`].
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
	pub source: String,
	pub target: String,
	pub weight: usize,
}

impl fmt::Display for Edge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} -> {}: {}", self.source, self.target, self.weight)
	}
}

/// Represents the word adjacency graph built from ingested text.
///
/// The `WordGraph` stores one vertex per distinct word and, for each
/// vertex, the number of times every other word immediately followed it.
///
/// # Responsibilities
/// - Build the graph line by line from raw text
/// - Register every token as a vertex, including words that only ever
///   appear at the end of a line
/// - Expose edges for display and vertices for the query algorithms
///
/// # Invariants
/// - Each entry in `vertices` is keyed by its own word
/// - All edge weights are >= 1
/// - Edges only link words from the same ingested line
/// - The graph only grows: nothing is ever removed
#[derive(Clone, Debug, Default)]
pub struct WordGraph {
	/// Mapping from a word to its vertex, ordered for deterministic output
	vertices: BTreeMap<String, Vertex>,
}

impl WordGraph {
	/// Creates a new empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one line of raw text to the graph.
	///
	/// Tokenizes the line and increments the edge weight of every pair of
	/// consecutive tokens. Words from different calls are never linked.
	///
	/// # Notes
	/// - A line with a single token still registers that word as a vertex.
	/// - A line with no token leaves the graph unchanged.
	pub fn ingest(&mut self, line: &str) {
		let tokens = tokenize(line);
		trace!("ingesting {} tokens", tokens.len());

		for token in &tokens {
			self.vertex_entry(token);
		}

		for pair in tokens.windows(2) {
			self.vertex_entry(&pair[0]).add_successor(&pair[1]);
		}
	}

	/// Adds several lines, each one ingested independently.
	pub fn ingest_lines<I, S>(&mut self, lines: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		for line in lines {
			self.ingest(line.as_ref());
		}
	}

	/// Loads a text file into the graph, one line at a time.
	///
	/// Returns the number of lines read.
	///
	/// # Errors
	/// Returns `GraphError::Io` if the file cannot be opened or a line
	/// cannot be read. Lines read before the failure stay in the graph.
	pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
		let path = path.as_ref();
		let io_error = |source| GraphError::Io { path: path.to_path_buf(), source };

		let mut count = 0;
		for line in read_lines(path).map_err(io_error)? {
			self.ingest(&line.map_err(io_error)?);
			count += 1;
		}

		debug!(
			"loaded {} lines from {}: {} vertices, {} edges",
			count,
			path.display(),
			self.vertex_count(),
			self.edge_count()
		);
		Ok(count)
	}

	/// Returns whether `word` is a vertex (case-insensitive).
	pub fn contains(&self, word: &str) -> bool {
		self.vertices.contains_key(&normalize_word(word))
	}

	/// Weight of the edge `from -> to` (case-insensitive), if present.
	pub fn weight(&self, from: &str, to: &str) -> Option<usize> {
		self.vertex(&normalize_word(from))?.weight(&normalize_word(to))
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of distinct directed edges.
	pub fn edge_count(&self) -> usize {
		self.vertices.values().map(Vertex::out_degree).sum()
	}

	/// Number of adjacent word pairs ingested so far.
	pub fn total_weight(&self) -> usize {
		self.vertices.values().map(Vertex::total_weight).sum()
	}

	/// Lists every edge as a `(source, target, weight)` triple.
	///
	/// Edges are ordered by source, then target.
	pub fn render(&self) -> Vec<Edge> {
		self.vertices
			.values()
			.flat_map(|vertex| {
				vertex.successors().map(move |(target, weight)| Edge {
					source: vertex.word().to_owned(),
					target: target.to_owned(),
					weight,
				})
			})
			.collect()
	}

	/// Looks up an already normalized word.
	pub(crate) fn vertex(&self, word: &str) -> Option<&Vertex> {
		self.vertices.get(word)
	}

	pub(crate) fn vertices(&self) -> impl Iterator<Item = &Vertex> {
		self.vertices.values()
	}

	fn vertex_entry(&mut self, word: &str) -> &mut Vertex {
		self.vertices
			.entry(word.to_owned())
			.or_insert_with(|| Vertex::new(word))
	}
}
