use rand::Rng;
use rand::seq::IteratorRandom;

use super::bridge::BridgeWords;
use super::graph::WordGraph;
use super::tokenizer::tokenize;

impl WordGraph {
	/// Rewrites `input_text` with bridge words inserted, using the thread-local RNG.
	///
	/// See [`WordGraph::generate_text_with`].
	pub fn generate_text(&self, input_text: &str) -> String {
		self.generate_text_with(input_text, &mut rand::rng())
	}

	/// Rewrites `input_text` with bridge words inserted.
	///
	/// # Parameters
	/// - `input_text`: raw text, tokenized exactly like ingested lines.
	/// - `rng`: random source used to pick among several bridge words.
	///
	/// # Behavior
	/// - For each pair of consecutive tokens, emits the first token, then one
	///   bridge word drawn uniformly from the candidates, if there are any.
	/// - The last token is always emitted.
	/// - Tokens are joined with single spaces.
	///
	/// # Notes
	/// - No token produces an empty string; a single token is returned as is.
	/// - The graph is not modified.
	pub fn generate_text_with<R: Rng + ?Sized>(&self, input_text: &str, rng: &mut R) -> String {
		let words = tokenize(input_text);
		let Some(last) = words.last() else {
			return String::new();
		};

		let mut output: Vec<String> = Vec::with_capacity(words.len() * 2);
		for pair in words.windows(2) {
			output.push(pair[0].clone());
			if let BridgeWords::Found(bridges) = self.bridge_words(&pair[0], &pair[1]) {
				// `Found` always carries at least one word
				if let Some(bridge) = bridges.into_iter().choose(rng) {
					output.push(bridge);
				}
			}
		}
		output.push(last.clone());

		output.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn sample() -> WordGraph {
		let mut graph = WordGraph::new();
		graph.ingest("the dog chases the cat the dog barks");
		graph
	}

	#[test]
	fn inserts_bridge_between_words() {
		let graph = sample();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(graph.generate_text_with("The, chases!", &mut rng), "the dog chases");
	}

	#[test]
	fn keeps_pairs_without_bridge() {
		let graph = sample();
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(graph.generate_text_with("dog unicorn cat", &mut rng), "dog unicorn cat");
	}

	#[test]
	fn empty_and_single_token_inputs() {
		let graph = sample();
		assert_eq!(graph.generate_text(""), "");
		assert_eq!(graph.generate_text("  42 ?! "), "");
		assert_eq!(graph.generate_text("Cat"), "cat");
	}

	#[test]
	fn removing_bridges_restores_input() {
		let mut graph = WordGraph::new();
		graph.ingest("seek new life and new civilizations");
		graph.ingest("seek strange life");
		graph.ingest("explore strange new worlds");

		let input = "Seek life, explore new worlds and civilizations";
		let mut rng = StdRng::seed_from_u64(99);
		let output = graph.generate_text_with(input, &mut rng);
		let produced = tokenize(&output);
		let expected = tokenize(input);

		// Greedily match input tokens in order; every leftover must be a bridge
		let mut rest = expected.iter().peekable();
		let mut inserted = Vec::new();
		for word in &produced {
			if rest.peek() == Some(&word) {
				rest.next();
			} else {
				inserted.push(word.clone());
			}
		}
		assert!(rest.next().is_none());
		assert!(!inserted.is_empty());
		for word in inserted {
			assert!(["new", "strange"].contains(&word.as_str()));
		}
	}

	#[test]
	fn bridge_choice_covers_every_candidate() {
		let mut graph = WordGraph::new();
		graph.ingest("go left home");
		graph.ingest("go right home");

		let mut rng = StdRng::seed_from_u64(5);
		let outputs: std::collections::HashSet<String> =
			(0..64).map(|_| graph.generate_text_with("go home", &mut rng)).collect();
		assert!(outputs.contains("go left home"));
		assert!(outputs.contains("go right home"));
		assert_eq!(outputs.len(), 2);
	}
}
