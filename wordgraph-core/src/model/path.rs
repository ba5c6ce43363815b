use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::debug;
use serde::Serialize;

use super::graph::WordGraph;
use super::tokenizer::normalize_word;

/// Result of [`WordGraph::shortest_path`].
///
/// `path` holds every word from `start` to `end` (both included) when a
/// path exists, and `None` otherwise.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
	pub start: String,
	pub end: String,
	path: Option<Vec<String>>,
}

impl ShortestPath {
	fn not_found(start: String, end: String) -> Self {
		Self { start, end, path: None }
	}

	pub fn found(&self) -> bool {
		self.path.is_some()
	}

	/// Words along the path, empty when no path was found.
	pub fn path(&self) -> &[String] {
		self.path.as_deref().unwrap_or_default()
	}

	/// Number of edges traversed, or `None` when no path was found.
	pub fn length(&self) -> Option<usize> {
		self.path.as_ref().map(|path| path.len() - 1)
	}
}

impl fmt::Display for ShortestPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.path {
			Some(path) => write!(
				f,
				"Shortest path from {} to {}: {}\nLength: {}",
				self.start,
				self.end,
				path.join(" -> "),
				path.len() - 1
			),
			None => write!(f, "No path from {} to {}!", self.start, self.end),
		}
	}
}

impl WordGraph {
	/// Shortest path from `start` to `end`, counted in hops.
	///
	/// Runs a breadth-first search where every edge costs 1, whatever its
	/// weight. Each vertex is visited at most once and remembers the vertex
	/// that discovered it; the search stops the first time `end` is dequeued.
	///
	/// Returns a not-found result if either word is absent or `end` is
	/// unreachable. When several shortest paths exist, the one found depends
	/// on neighbor iteration order.
	pub fn shortest_path(&self, start: &str, end: &str) -> ShortestPath {
		let start = normalize_word(start);
		let end = normalize_word(end);

		if self.vertex(&start).is_none() || self.vertex(&end).is_none() {
			debug!("shortest path {} -> {}: missing vertex", start, end);
			return ShortestPath::not_found(start, end);
		}

		// visited maps word → predecessor; the start word is its own predecessor
		let mut visited: HashMap<&str, &str> = HashMap::new();
		let mut queue: VecDeque<&str> = VecDeque::new();

		visited.insert(&start, &start);
		queue.push_back(&start);

		while let Some(current) = queue.pop_front() {
			if current == end {
				let path = reconstruct_path(&visited, &start, &end);
				debug!("shortest path {} -> {}: {} hops", start, end, path.len() - 1);
				return ShortestPath { start: start.clone(), end: end.clone(), path: Some(path) };
			}

			let Some(vertex) = self.vertex(current) else {
				continue;
			};
			for (next, _) in vertex.successors() {
				if !visited.contains_key(next) {
					visited.insert(next, current);
					queue.push_back(next);
				}
			}
		}

		debug!("shortest path {} -> {}: unreachable", start, end);
		ShortestPath::not_found(start, end)
	}
}

/// Walks predecessor links from `end` back to `start`.
fn reconstruct_path(visited: &HashMap<&str, &str>, start: &str, end: &str) -> Vec<String> {
	let mut path = vec![end.to_owned()];
	let mut current = end;

	while current != start {
		current = visited[current];
		path.push(current.to_owned());
	}

	path.reverse();
	path
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> WordGraph {
		let mut graph = WordGraph::new();
		graph.ingest("the dog chases the cat the dog barks");
		graph
	}

	#[test]
	fn finds_fewest_hops() {
		let graph = sample();
		let result = graph.shortest_path("The", "barks");

		assert!(result.found());
		assert_eq!(result.path(), ["the", "dog", "barks"]);
		assert_eq!(result.length(), Some(2));
		assert_eq!(result.to_string(), "Shortest path from the to barks: the -> dog -> barks\nLength: 2");
	}

	#[test]
	fn weights_do_not_shorten_paths() {
		let mut graph = WordGraph::new();
		for _ in 0..10 {
			graph.ingest("a b c d");
		}
		graph.ingest("a d");

		let result = graph.shortest_path("a", "d");
		assert_eq!(result.path(), ["a", "d"]);
		assert_eq!(result.length(), Some(1));
	}

	#[test]
	fn every_step_is_an_edge() {
		let mut graph = WordGraph::new();
		graph.ingest("one two three four five");
		graph.ingest("two four");
		graph.ingest("one six five");

		let result = graph.shortest_path("one", "five");
		assert_eq!(result.length(), Some(2));
		for pair in result.path().windows(2) {
			assert!(graph.weight(&pair[0], &pair[1]).is_some());
		}
	}

	#[test]
	fn unreachable_target() {
		let graph = sample();
		let result = graph.shortest_path("barks", "the");

		assert!(!result.found());
		assert!(result.path().is_empty());
		assert_eq!(result.length(), None);
		assert_eq!(result.to_string(), "No path from barks to the!");
	}

	#[test]
	fn missing_word_is_not_found() {
		let graph = sample();
		assert!(!graph.shortest_path("the", "unicorn").found());
		assert!(!graph.shortest_path("unicorn", "the").found());
		assert!(!WordGraph::new().shortest_path("a", "b").found());
	}

	#[test]
	fn same_word_is_zero_hops() {
		let graph = sample();
		let result = graph.shortest_path("dog", "dog");
		assert_eq!(result.path(), ["dog"]);
		assert_eq!(result.length(), Some(0));
	}

	#[test]
	fn walks_through_cycles() {
		let mut graph = WordGraph::new();
		graph.ingest("a b a c b d");

		let result = graph.shortest_path("c", "d");
		assert_eq!(result.path(), ["c", "b", "d"]);
	}
}
