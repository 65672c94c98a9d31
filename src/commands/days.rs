//! Days command - day count since the reference date, copied to the clipboard

use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use crate::clipboard::Clipboard;
use crate::core::days_between;
use crate::ui;

/// Print the day count and try to copy it.
///
/// A clipboard failure is reported but never fails the command.
pub fn run(reference: NaiveDate, today: NaiveDate, clipboard: Option<&mut dyn Clipboard>) -> Result<i64> {
	let days = days_between(reference, today);
	let text = days.to_string();

	ui::debug(&format!("{} -> {}", reference, today));
	println!("{}", text.bright_white().bold());

	match clipboard {
		Some(clipboard) => match clipboard.write_text(&text) {
			Ok(()) => ui::success(&format!("{} days since {} copied to clipboard", days, reference)),
			Err(e) => ui::warn(&format!("Could not copy {} to clipboard: {}", days, e)),
		},
		None => ui::info(&format!("{} days since {}", days, reference)),
	}

	Ok(days)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::clipboard::ClipboardError;
	use crate::core::reference_date;

	#[derive(Default)]
	struct Recorder(Vec<String>);

	impl Clipboard for Recorder {
		fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
			self.0.push(text.to_string());
			Ok(())
		}
	}

	struct Broken;

	impl Clipboard for Broken {
		fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
			Err(ClipboardError::Unavailable("nothing".into()))
		}
	}

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn copies_decimal_count() {
		let mut clipboard = Recorder::default();
		let days = run(reference_date(), date(2000, 1, 2), Some(&mut clipboard)).unwrap();

		assert_eq!(days, 1);
		assert_eq!(clipboard.0, ["1"]);
	}

	#[test]
	fn clipboard_failure_is_not_fatal() {
		let days = run(reference_date(), date(2000, 3, 1), Some(&mut Broken)).unwrap();
		assert_eq!(days, 60);
	}

	#[test]
	fn runs_without_clipboard() {
		assert_eq!(run(date(2024, 1, 1), date(2024, 1, 31), None).unwrap(), 30);
	}
}
