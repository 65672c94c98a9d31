//! Guarded bulk delete of a directory's top level

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::exclude::same_name;
use crate::core::ExcludeList;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CleanError {
	#[error("Problem with the path to process \"{0}\"")]
	MissingTarget(PathBuf),
	#[error("File to exclude \"{0}\" does not exist")]
	MissingFile(String),
	#[error("Directory to exclude \"{0}\" does not exist")]
	MissingDir(String),
}

/// Top-level entries scheduled for removal, sorted by name
#[derive(Debug, Default)]
pub struct Plan {
	pub files: Vec<PathBuf>,
	pub dirs: Vec<PathBuf>,
}

impl Plan {
	pub fn len(&self) -> usize {
		self.files.len() + self.dirs.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removed<'a> {
	File(&'a str),
	Dir(&'a str),
}

enum Kind {
	File,
	Dir,
}

struct Entry {
	path: PathBuf,
	name: String,
	kind: Kind,
}

fn entries(dir: &Path) -> Result<Vec<Entry>> {
	let mut out = Vec::new();

	for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
		let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
		let file_type = entry.file_type()?;
		// Symlinks are unlinked like files, never followed
		let kind = if file_type.is_dir() { Kind::Dir } else { Kind::File };

		out.push(Entry {
			path: entry.path(),
			name: entry.file_name().to_string_lossy().into_owned(),
			kind,
		});
	}

	out.sort_by(|a, b| a.name.cmp(&b.name));
	Ok(out)
}

/// Check that the target exists and every excluded name is present.
///
/// Returns the first missing entry; nothing is touched either way.
pub fn validate(dir: &Path, excludes: &ExcludeList) -> Result<()> {
	if !dir.is_dir() {
		return Err(CleanError::MissingTarget(dir.to_path_buf()).into());
	}

	let entries = entries(dir)?;

	for name in excludes.files() {
		let found = entries.iter().any(|e| matches!(e.kind, Kind::File) && same_name(&e.name, name));
		if !found {
			return Err(CleanError::MissingFile(name.clone()).into());
		}
	}

	for name in excludes.dirs() {
		let found = entries.iter().any(|e| matches!(e.kind, Kind::Dir) && same_name(&e.name, name));
		if !found {
			return Err(CleanError::MissingDir(name.clone()).into());
		}
	}

	Ok(())
}

/// Collect every top-level entry not covered by `excludes`
pub fn plan(dir: &Path, excludes: &ExcludeList) -> Result<Plan> {
	let mut plan = Plan::default();

	for entry in entries(dir)? {
		match entry.kind {
			Kind::File if !excludes.keeps_file(&entry.name) => plan.files.push(entry.path),
			Kind::Dir if !excludes.keeps_dir(&entry.name) => plan.dirs.push(entry.path),
			_ => {}
		}
	}

	Ok(plan)
}

/// Delete files first, then directories recursively.
///
/// Stops at the first failure; anything already removed stays removed.
pub fn execute<F>(plan: &Plan, mut on_removed: F) -> Result<usize>
where
	F: FnMut(Removed<'_>),
{
	let mut removed = 0;

	for path in &plan.files {
		fs::remove_file(path).with_context(|| format!("Failed to delete {}", path.display()))?;
		on_removed(Removed::File(&file_name(path)));
		removed += 1;
	}

	for path in &plan.dirs {
		fs::remove_dir_all(path).with_context(|| format!("Failed to delete {}", path.display()))?;
		on_removed(Removed::Dir(&file_name(path)));
		removed += 1;
	}

	Ok(removed)
}

fn file_name(path: &Path) -> String {
	path.file_name()
		.map(|n| n.to_string_lossy().into_owned())
		.unwrap_or_default()
}
