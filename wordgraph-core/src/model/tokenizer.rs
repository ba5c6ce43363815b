/// Splits raw text into word tokens.
///
/// Every character that is not an ASCII letter acts as a separator,
/// letters are lowercased and empty tokens are discarded. Malformed
/// input simply produces fewer (or zero) tokens.
///
/// Example:
/// `"Hello, World! 42x"` → `["hello", "world", "x"]`
pub fn tokenize(text: &str) -> Vec<String> {
	text.split(|c: char| !c.is_ascii_alphabetic())
		.filter(|token| !token.is_empty())
		.map(|token| token.to_ascii_lowercase())
		.collect()
}

/// Case-folds a single query word so it matches stored vertices.
pub fn normalize_word(word: &str) -> String {
	word.trim().to_ascii_lowercase()
}
