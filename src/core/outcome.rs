//! Result of an interactive command

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The command ran; holds the number of items touched
	Completed(usize),
	/// The user declined the confirmation prompt
	Aborted,
}

impl Outcome {
	pub fn is_aborted(&self) -> bool {
		matches!(self, Outcome::Aborted)
	}
}
