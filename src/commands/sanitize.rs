//! Sanitize command - prepare generated HTML for staging

use anyhow::{bail, Result};
use std::io::BufRead;
use std::path::Path;

use crate::core::{confirm, Outcome};
use crate::processing::html;
use crate::ui;

pub fn run<R: BufRead>(dir: &Path, auto_confirm: bool, input: R) -> Result<Outcome> {
	ui::info("This command will prepare templates for publication in staging");

	if !dir.is_dir() {
		bail!("Problem with the path to process \"{}\"", dir.display());
	}
	ui::info(&format!("Folder \"{}\" located.", dir.display()));

	if !auto_confirm {
		let answer = ui::ask("Do you want to proceed? Press [Y(yes)] to confirm, or any other key to abort.", input)?;
		if !confirm(&answer) {
			ui::warn("Operation aborted by the user.");
			return Ok(Outcome::Aborted);
		}
	}

	let files = html::find_html_files(dir)?;
	ui::debug(&format!("{} HTML files found", files.len()));

	ui::header("─── Sanitizing ───");
	for file in &files {
		let report = html::sanitize_file(file)?;
		ui::item(&report.path.display().to_string());
		if report.anchors_rewritten > 0 {
			ui::debug(&format!("{} anchors rewritten", report.anchors_rewritten));
		}
	}

	ui::info(&dir.display().to_string());
	ui::success(&format!("Operation completed ({} files)", files.len()));
	Ok(Outcome::Completed(files.len()))
}
