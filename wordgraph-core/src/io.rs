use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// Opens a text file and returns a lazy iterator over its lines.
///
/// - Lines are yielded one at a time, never the whole file at once
/// - Splits on `\n` / `\r\n`
/// - A read failure surfaces as an `Err` item, after every line before it
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Lines<BufReader<File>>> {
	let file = File::open(filename)?;
	Ok(BufReader::new(file).lines())
}
