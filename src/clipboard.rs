//! System clipboard via platform helper programs
//!
//! No clipboard library is linked; text is piped into whichever helper the
//! platform provides (`pbcopy`, `clip`, `wl-copy`, `xclip`, `xsel`).

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
	#[error("no clipboard helper found (tried {0})")]
	Unavailable(String),
	#[error("{tool}: {source}")]
	Io {
		tool: &'static str,
		#[source]
		source: io::Error,
	},
	#[error("{tool} exited with {status}")]
	Failed { tool: &'static str, status: ExitStatus },
}

pub trait Clipboard {
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// A helper program and the arguments that make it read the clipboard text from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helper {
	pub program: &'static str,
	pub args: &'static [&'static str],
}

const PBCOPY: Helper = Helper { program: "pbcopy", args: &[] };
const CLIP: Helper = Helper { program: "clip", args: &[] };
const WL_COPY: Helper = Helper { program: "wl-copy", args: &[] };
const XCLIP: Helper = Helper { program: "xclip", args: &["-selection", "clipboard"] };
const XSEL: Helper = Helper { program: "xsel", args: &["--clipboard", "--input"] };

/// Helpers to try, in order, for the current platform
pub fn helpers() -> Vec<Helper> {
	if cfg!(target_os = "macos") {
		vec![PBCOPY]
	} else if cfg!(windows) {
		vec![CLIP]
	} else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
		vec![WL_COPY, XCLIP, XSEL]
	} else {
		vec![XCLIP, XSEL]
	}
}

#[derive(Debug)]
pub struct SystemClipboard {
	helpers: Vec<Helper>,
}

impl SystemClipboard {
	pub fn with_helpers(helpers: Vec<Helper>) -> Self {
		Self { helpers }
	}
}

impl Default for SystemClipboard {
	fn default() -> Self {
		Self::with_helpers(helpers())
	}
}

impl Clipboard for SystemClipboard {
	fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
		for helper in &self.helpers {
			match pipe_into(helper, text) {
				Err(ClipboardError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
					crate::ui::debug(&format!("{} not found", helper.program));
					continue;
				}
				result => return result,
			}
		}

		let tried = self.helpers.iter().map(|h| h.program).collect::<Vec<_>>().join(", ");
		Err(ClipboardError::Unavailable(tried))
	}
}

fn pipe_into(helper: &Helper, text: &str) -> Result<(), ClipboardError> {
	let tool = helper.program;
	let io_err = |source| ClipboardError::Io { tool, source };

	let mut child = Command::new(tool)
		.args(helper.args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()
		.map_err(io_err)?;

	// Dropping stdin closes the pipe so the helper sees EOF
	let written = match child.stdin.take() {
		Some(mut stdin) => stdin.write_all(text.as_bytes()),
		None => Ok(()),
	};

	// Reap the child even when the write failed; a helper that exits early
	// breaks the pipe, so its exit status is the more useful error
	let status = child.wait().map_err(io_err)?;
	if !status.success() {
		return Err(ClipboardError::Failed { tool, status });
	}
	written.map_err(io_err)
}
