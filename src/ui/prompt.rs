//! Interactive yes/no gate

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Print `question` and read one line of answer from `input`.
///
/// EOF yields an empty answer, which `core::confirm` treats as a refusal.
pub fn ask<R: BufRead>(question: &str, mut input: R) -> io::Result<String> {
	print!("\n{} ", question.bright_yellow());
	io::stdout().flush()?;

	let mut answer = String::new();
	input.read_line(&mut answer)?;
	Ok(answer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_single_line() {
		let answer = ask("Proceed?", "yes\nextra\n".as_bytes()).unwrap();
		assert_eq!(answer, "yes\n");
	}

	#[test]
	fn eof_is_empty() {
		let answer = ask("Proceed?", "".as_bytes()).unwrap();
		assert!(answer.is_empty());
	}
}
