//! Unified logging system

use colored::*;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);

const LOGO: &str = r#"
     _                   _                     _
 ___| |_ __ _  __ _  ___| |__   __ _ _ __   __| |
/ __| __/ _` |/ _` |/ _ \ '_ \ / _` | '_ \ / _` |
\__ \ || (_| | (_| |  __/ | | | (_| | | | | (_| |
|___/\__\__,_|\__, |\___|_| |_|\__,_|_| |_|\__,_|
              |___/                              "#;

const SLOGANS: &[&str] = &[
	"Sweeping the stage before curtain call",
	"Your staging server deserves better links",
	"rm -rf, but with manners",
	"Tracking params? Not on my watch",
	"Every href in its right place",
	"Counting days since the millennium bug didn't happen",
	"Publish early, sanitize often",
	"Leading slashes go home",
];

pub fn random_slogan() -> &'static str {
	SLOGANS[rand::random_range(0..SLOGANS.len())]
}

pub fn print_logo() {
	println!("{}", LOGO.bright_blue().bold());
	println!("{}", random_slogan().dimmed().italic());
}

/// Verbosity switch set once from `--verbose`
pub struct Log;

impl Log {
	pub fn set_verbose(enabled: bool) {
		VERBOSE.store(enabled, Ordering::Relaxed);
	}

	pub fn is_verbose() -> bool {
		VERBOSE.load(Ordering::Relaxed)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Info,
	Success,
	Warning,
	Error,
	Debug,
}

impl Level {
	fn icon(self) -> ColoredString {
		match self {
			Level::Info => "ℹ".bright_blue().bold(),
			Level::Success => "✓".bright_green().bold(),
			Level::Warning => "⚠".bright_yellow().bold(),
			Level::Error => "✗".bright_red().bold(),
			Level::Debug => "⚙".bright_black().bold(),
		}
	}

	fn is_shown(self) -> bool {
		self != Level::Debug || Log::is_verbose()
	}
}

/// One status line; debug lines only appear with `--verbose`
pub fn log(level: Level, msg: &str) {
	if !level.is_shown() {
		return;
	}
	let text = match level {
		Level::Debug => msg.dimmed(),
		_ => msg.bright_white(),
	};
	println!("{} {}", level.icon(), text);
}

pub fn info(msg: &str) {
	log(Level::Info, msg);
}

pub fn success(msg: &str) {
	log(Level::Success, msg);
}

pub fn warn(msg: &str) {
	log(Level::Warning, msg);
}

pub fn error(msg: &str) {
	log(Level::Error, msg);
}

pub fn debug(msg: &str) {
	log(Level::Debug, msg);
}

pub fn header(text: &str) {
	println!("\n{}", text.bright_blue().bold());
}

/// Progress line for a single removed or rewritten item
pub fn item(msg: &str) {
	println!("  {} {}", "•".bright_black(), msg);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_follows_verbose_flag() {
		Log::set_verbose(false);
		assert!(!Level::Debug.is_shown());
		assert!(Level::Error.is_shown());

		Log::set_verbose(true);
		assert!(Level::Debug.is_shown());
		Log::set_verbose(false);
	}

	#[test]
	fn slogan_comes_from_list() {
		assert!(SLOGANS.contains(&random_slogan()));
	}
}
