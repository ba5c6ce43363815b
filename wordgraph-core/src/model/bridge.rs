use std::collections::BTreeSet;

use log::debug;
use serde::Serialize;

use super::graph::WordGraph;
use super::tokenizer::normalize_word;

/// Outcome category of a bridge-word query.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeStatus {
	NoVertex,
	NoBridge,
	Found,
}

/// Result of [`WordGraph::bridge_words`].
///
/// # Variants
/// - `NoVertex`: at least one of the two words is not in the graph.
/// - `NoBridge`: both words exist but no word links them in two hops.
/// - `Found(words)`: every word `b` with edges `word1 -> b` and `b -> word2`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "status", content = "words", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeWords {
	NoVertex,
	NoBridge,
	Found(BTreeSet<String>),
}

impl BridgeWords {
	pub fn status(&self) -> BridgeStatus {
		match self {
			BridgeWords::NoVertex => BridgeStatus::NoVertex,
			BridgeWords::NoBridge => BridgeStatus::NoBridge,
			BridgeWords::Found(_) => BridgeStatus::Found,
		}
	}

	/// The bridge words found, empty unless the status is `Found`.
	pub fn words(&self) -> Vec<&str> {
		match self {
			BridgeWords::Found(words) => words.iter().map(String::as_str).collect(),
			_ => Vec::new(),
		}
	}

	/// Renders the outcome as a console sentence.
	pub fn describe(&self, word1: &str, word2: &str) -> String {
		match self {
			BridgeWords::NoVertex => "No word1 or word2 in the graph!".to_owned(),
			BridgeWords::NoBridge => format!("No bridge words from {} to {}!", word1, word2),
			BridgeWords::Found(words) => format!(
				"The bridge words from {} to {} are: {}",
				word1,
				word2,
				words.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
			),
		}
	}
}

impl WordGraph {
	/// Finds the bridge words from `word1` to `word2`.
	///
	/// A bridge word `b` is a direct successor of `word1` that has `word2`
	/// as a direct successor. Both inputs are case-folded first.
	///
	/// Absent words are reported as `BridgeWords::NoVertex`, never as an
	/// error. The graph is not modified.
	pub fn bridge_words(&self, word1: &str, word2: &str) -> BridgeWords {
		let word1 = normalize_word(word1);
		let word2 = normalize_word(word2);

		let source = match (self.vertex(&word1), self.vertex(&word2)) {
			(Some(source), Some(_)) => source,
			_ => {
				debug!("bridge query {} -> {}: missing vertex", word1, word2);
				return BridgeWords::NoVertex;
			}
		};

		let bridges: BTreeSet<String> = source
			.successors()
			.filter(|(candidate, _)| {
				self.vertex(candidate)
					.is_some_and(|middle| middle.has_successor(&word2))
			})
			.map(|(candidate, _)| candidate.to_owned())
			.collect();

		debug!("bridge query {} -> {}: {} found", word1, word2, bridges.len());
		if bridges.is_empty() {
			BridgeWords::NoBridge
		} else {
			BridgeWords::Found(bridges)
		}
	}
}
