use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the graph engine.
///
/// Missing words, bridges or paths are not errors: queries report them
/// through their result values. Only conditions the caller cannot express
/// as an answer end up here.
#[derive(Error, Debug)]
pub enum GraphError {
	/// The graph has no vertex to start from.
	#[error("the graph is empty")]
	EmptyGraph,

	/// A configuration value was rejected.
	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("failed to read {path:?}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type Result<T> = std::result::Result<T, GraphError>;
