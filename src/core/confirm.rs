//! Confirmation answer parsing

use crate::config::CONFIRM_TOKENS;

/// Whether an already-read answer approves a destructive operation.
pub fn confirm(input: &str) -> bool {
	let answer = input.trim();
	CONFIRM_TOKENS.iter().any(|token| token.eq_ignore_ascii_case(answer))
}
