use std::fmt;

use log::{debug, warn};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;

use super::graph::WordGraph;
use crate::error::{GraphError, Result};

/// Input parameters for a random walk.
///
/// # Responsibilities
/// - Track the optional step budget (`max_steps`)
///
/// # Invariants
/// - `max_steps`, when set, is strictly positive
///
/// The default walk is unbounded: it only stops on a vertex without
/// successors, so it may never end on a graph whose reachable part is a
/// cycle with no exit. Setting `max_steps` bounds it.
#[derive(Clone, Debug, Default)]
pub struct WalkInput {
	/// Maximum number of transitions before the walk is cut short.
	max_steps: Option<usize>,
}

impl WalkInput {
	/// Creates an unbounded walk configuration.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_steps(&self) -> Option<usize> {
		self.max_steps
	}

	/// Sets the maximum number of transitions (`None` for unbounded).
	///
	/// # Errors
	/// Returns an error if the budget is zero.
	pub fn set_max_steps(&mut self, max_steps: Option<usize>) -> Result<()> {
		if max_steps == Some(0) {
			return Err(GraphError::InvalidInput("max_steps must be greater than 0".to_owned()));
		}
		self.max_steps = max_steps;
		Ok(())
	}
}

/// Result of [`WordGraph::random_walk`]: the visited words, in order.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomWalk {
	pub vertices: Vec<String>,
	/// Set when the walk was stopped by `max_steps` rather than by a sink.
	pub truncated: bool,
}

impl RandomWalk {
	/// Number of transitions taken.
	pub fn steps(&self) -> usize {
		self.vertices.len().saturating_sub(1)
	}
}

impl fmt::Display for RandomWalk {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.vertices.join(" -> "))
	}
}

impl WordGraph {
	/// Random walk using the thread-local RNG.
	///
	/// See [`WordGraph::random_walk_with`].
	pub fn random_walk(&self, walk_input: &WalkInput) -> Result<RandomWalk> {
		self.random_walk_with(walk_input, &mut rand::rng())
	}

	/// Walks the graph from a uniformly chosen start vertex.
	///
	/// # Behavior
	/// - Picks the start among all vertices, sinks included.
	/// - At each step moves to a successor chosen uniformly among the
	///   distinct successors (edge weights are ignored).
	/// - Stops on a vertex without successors, or after `max_steps`
	///   transitions if the input sets a budget.
	///
	/// # Errors
	/// Returns `GraphError::EmptyGraph` if there is no vertex to start from.
	pub fn random_walk_with<R: Rng + ?Sized>(&self, walk_input: &WalkInput, rng: &mut R) -> Result<RandomWalk> {
		let mut current = self.vertices().choose(rng).ok_or(GraphError::EmptyGraph)?;
		let mut vertices = vec![current.word().to_owned()];

		loop {
			let Some(next) = current.pick_successor(rng) else {
				break;
			};

			// Only a walk that could still move counts as cut short
			if walk_input.max_steps.is_some_and(|max| vertices.len() > max) {
				warn!("random walk stopped after {} steps", vertices.len() - 1);
				return Ok(RandomWalk { vertices, truncated: true });
			}
			vertices.push(next.to_owned());

			// Should not fail: every successor is registered as a vertex
			current = match self.vertex(next) {
				Some(vertex) => vertex,
				None => break,
			};
		}

		debug!("random walk reached sink after {} steps", vertices.len() - 1);
		Ok(RandomWalk { vertices, truncated: false })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use std::collections::HashSet;

	#[test]
	fn empty_graph_is_an_error() {
		let graph = WordGraph::new();
		let err = graph.random_walk(&WalkInput::new()).unwrap_err();
		assert!(matches!(err, GraphError::EmptyGraph));
	}

	#[test]
	fn every_transition_is_an_edge() {
		let mut graph = WordGraph::new();
		graph.ingest("the dog chases the cat the dog barks");

		let mut rng = StdRng::seed_from_u64(3);
		for _ in 0..50 {
			let walk = graph.random_walk_with(&WalkInput::new(), &mut rng).unwrap();
			for pair in walk.vertices.windows(2) {
				assert!(graph.weight(&pair[0], &pair[1]).is_some());
			}
			// The only sink is "barks"
			assert_eq!(walk.vertices.last().map(String::as_str), Some("barks"));
			assert!(!walk.truncated);
		}
	}

	#[test]
	fn lone_word_walk_has_no_steps() {
		let mut graph = WordGraph::new();
		graph.ingest("hello");

		let walk = graph.random_walk(&WalkInput::new()).unwrap();
		assert_eq!(walk.vertices, vec!["hello"]);
		assert_eq!(walk.steps(), 0);
		assert_eq!(walk.to_string(), "hello");
	}

	#[test]
	fn step_budget_stops_endless_cycle() {
		let mut graph = WordGraph::new();
		graph.ingest("ping pong ping");

		let mut input = WalkInput::new();
		input.set_max_steps(Some(5)).unwrap();

		let walk = graph.random_walk(&input).unwrap();
		assert!(walk.truncated);
		assert_eq!(walk.steps(), 5);
	}

	#[test]
	fn dead_end_on_last_step_is_not_truncated() {
		let mut graph = WordGraph::new();
		graph.ingest("alpha omega");

		let mut input = WalkInput::new();
		input.set_max_steps(Some(1)).unwrap();

		let mut rng = StdRng::seed_from_u64(8);
		let mut started_at_alpha = false;
		for _ in 0..32 {
			let walk = graph.random_walk_with(&input, &mut rng).unwrap();
			assert!(!walk.truncated);
			assert_eq!(walk.vertices.last().map(String::as_str), Some("omega"));
			if walk.vertices == ["alpha", "omega"] {
				started_at_alpha = true;
			}
		}
		assert!(started_at_alpha);
	}

	#[test]
	fn start_covers_every_vertex() {
		let mut graph = WordGraph::new();
		graph.ingest("red green blue");
		graph.ingest("cyan magenta");
		graph.ingest("black");

		let mut rng = StdRng::seed_from_u64(21);
		let starts: HashSet<String> = (0..200)
			.map(|_| graph.random_walk_with(&WalkInput::new(), &mut rng).unwrap().vertices[0].clone())
			.collect();
		for word in ["red", "green", "blue", "cyan", "magenta", "black"] {
			assert!(starts.contains(word), "{} never started a walk", word);
		}
	}

	#[test]
	fn zero_budget_is_rejected() {
		let mut input = WalkInput::new();
		assert!(input.set_max_steps(Some(0)).is_err());
		assert_eq!(input.max_steps(), None);
	}

	#[test]
	fn seeded_walks_repeat() {
		let mut graph = WordGraph::new();
		graph.ingest("a b c a d e b f");

		let first = graph.random_walk_with(&WalkInput::new(), &mut StdRng::seed_from_u64(11)).unwrap();
		let second = graph.random_walk_with(&WalkInput::new(), &mut StdRng::seed_from_u64(11)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn display_joins_with_arrows() {
		let walk = RandomWalk { vertices: vec!["a".into(), "b".into(), "c".into()], truncated: false };
		assert_eq!(walk.to_string(), "a -> b -> c");
	}
}
