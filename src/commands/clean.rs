//! Clean command - delete everything at the top level except the keep lists

use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

use crate::core::{confirm, ExcludeList, Outcome};
use crate::processing::cleanup::{self, Removed};
use crate::ui;

pub fn run<R: BufRead>(dir: &Path, excludes: &ExcludeList, auto_confirm: bool, input: R) -> Result<Outcome> {
	ui::info(&format!(
		"This command will delete all files except [{}] and all folders except [{}]",
		excludes.files().join(", "),
		excludes.dirs().join(", ")
	));

	cleanup::validate(dir, excludes).context("Operation aborted")?;
	ui::info(&format!("Folder \"{}\" located.", dir.display()));

	if !auto_confirm {
		let answer = ui::ask("Do you want to proceed? Press [Y(yes)] to confirm, or any other key to abort.", input)?;
		if !confirm(&answer) {
			ui::warn("Operation aborted by the user.");
			return Ok(Outcome::Aborted);
		}
	}

	let plan = cleanup::plan(dir, excludes)?;
	ui::debug(&format!("{} files and {} folders to delete", plan.files.len(), plan.dirs.len()));

	ui::header("─── Deleting ───");
	let removed = cleanup::execute(&plan, |removed| match removed {
		Removed::File(name) => ui::item(&format!("File \"{}\" deleted", name)),
		Removed::Dir(name) => ui::item(&format!("Directory \"{}\" deleted", name)),
	})?;

	ui::success(&format!("Operation completed ({} deleted)", removed));
	Ok(Outcome::Completed(removed))
}
