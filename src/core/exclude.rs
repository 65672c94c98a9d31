//! Names exempt from cleaning

use crate::config::{KEEP_DIRS, KEEP_FILES};

/// File and directory names that survive `clean`, matched case-insensitively
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeList {
	files: Vec<String>,
	dirs: Vec<String>,
}

impl ExcludeList {
	pub fn new<F, D>(files: F, dirs: D) -> Self
	where
		F: IntoIterator,
		F::Item: Into<String>,
		D: IntoIterator,
		D::Item: Into<String>,
	{
		Self {
			files: files.into_iter().map(Into::into).collect(),
			dirs: dirs.into_iter().map(Into::into).collect(),
		}
	}

	pub fn files(&self) -> &[String] {
		&self.files
	}

	pub fn dirs(&self) -> &[String] {
		&self.dirs
	}

	pub fn keeps_file(&self, name: &str) -> bool {
		contains_ignore_case(&self.files, name)
	}

	pub fn keeps_dir(&self, name: &str) -> bool {
		contains_ignore_case(&self.dirs, name)
	}
}

impl Default for ExcludeList {
	fn default() -> Self {
		Self::new(KEEP_FILES.iter().copied(), KEEP_DIRS.iter().copied())
	}
}

pub(crate) fn same_name(a: &str, b: &str) -> bool {
	a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(names: &[String], name: &str) -> bool {
	names.iter().any(|n| same_name(n, name))
}
