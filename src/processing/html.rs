//! Staging rewrite of generated HTML
//!
//! Two passes per file: regex substitutions over the raw text, then a DOM
//! pass on index pages that makes root-relative `.html` links relative.
//! The text pass runs first so it also reaches markup the parser would
//! reshape or drop.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use dom_query::Document;
use regex::Regex;
use walkdir::WalkDir;

use crate::config::{
	HTML_EXTENSION, INCLUDE_PATTERN, INCLUDE_REPLACEMENT, INDEX_PAGE, ROOT_HREF_PATTERN,
	ROOT_HREF_REPLACEMENT, TRACKING_QUERY_PATTERN,
};

// Constant patterns; a compile failure is a bug caught by the tests below
static INCLUDE: LazyLock<Regex> = LazyLock::new(|| Regex::new(INCLUDE_PATTERN).expect("include pattern"));
static ROOT_HREF: LazyLock<Regex> = LazyLock::new(|| Regex::new(ROOT_HREF_PATTERN).expect("root href pattern"));
static TRACKING_QUERY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(TRACKING_QUERY_PATTERN).expect("tracking query pattern"));

/// Per-file result of a sanitize pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
	pub path: PathBuf,
	pub anchors_rewritten: usize,
}

/// Apply the raw-text substitutions in order
pub fn rewrite_text(text: &str) -> String {
	let text = INCLUDE.replace_all(text, INCLUDE_REPLACEMENT);
	let text = ROOT_HREF.replace_all(&text, ROOT_HREF_REPLACEMENT);
	TRACKING_QUERY.replace_all(&text, "").into_owned()
}

/// Literal suffix test, so nested `index.html` pages qualify too
pub fn is_index_page(path: &Path) -> bool {
	path.to_string_lossy().ends_with(INDEX_PAGE)
}

/// Strip the leading `/` from every anchor `href` that starts with `/` and
/// ends with `.html`. Returns how many anchors changed.
pub fn rewrite_anchors(doc: &Document) -> usize {
	let mut rewritten = 0;

	for anchor in doc.select("a[href]").iter() {
		let Some(href) = anchor.attr("href") else { continue };

		if let Some(relative) = href.strip_prefix('/') {
			if href.ends_with(".html") {
				anchor.set_attr("href", relative);
				rewritten += 1;
			}
		}
	}

	rewritten
}

/// Every `.html` file under `root` (extension matched case-insensitively),
/// in file-name order. Symlinks are followed; any walk error is fatal.
pub fn find_html_files(root: &Path) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
		let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
		if !entry.file_type().is_file() {
			continue;
		}

		let is_html = entry
			.path()
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(HTML_EXTENSION));
		if is_html {
			files.push(entry.into_path());
		}
	}

	Ok(files)
}

/// Run both passes on one file and write it back in place
pub fn sanitize_file(path: &Path) -> Result<FileReport> {
	let original = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let text = rewrite_text(&original);

	let doc = Document::from(text.as_str());
	let anchors_rewritten = if is_index_page(path) { rewrite_anchors(&doc) } else { 0 };

	// Serializing reshapes untouched markup, so only mutated documents go through it
	let output = if anchors_rewritten > 0 { doc.html().to_string() } else { text };

	fs::write(path, output).with_context(|| format!("Failed to write {}", path.display()))?;

	Ok(FileReport {
		path: path.to_path_buf(),
		anchors_rewritten,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn hrefs(doc: &Document) -> Vec<String> {
		doc.select("a")
			.iter()
			.map(|a| a.attr("href").map(|h| h.to_string()).unwrap_or_default())
			.collect()
	}

	#[test]
	fn include_paths_become_relative() {
		assert_eq!(rewrite_text(r#"<a href="/inc/style.css">"#), r#"<a href="inc/style.css">"#);
		assert_eq!(rewrite_text(r#"<script src="/INC/app.js">"#), r#"<script src="inc/app.js">"#);
	}

	#[test]
	fn root_href_points_at_index() {
		assert_eq!(rewrite_text(r#"<a HREF="/">Home</a>"#), r#"<a href="index.html">Home</a>"#);
		assert_eq!(rewrite_text(r#"<a href="/about">"#), r#"<a href="/about">"#);
	}

	#[test]
	fn tracking_query_is_removed() {
		assert_eq!(rewrite_text("foo.html?id=abc123"), "foo.html");
		assert_eq!(rewrite_text(r#"<a href="x.html?id=Q9">"#), r#"<a href="x.html">"#);
		// case-sensitive key, alphanumeric value only
		assert_eq!(rewrite_text("foo.html?ID=abc"), "foo.html?ID=abc");
		assert_eq!(rewrite_text("foo.html?id=ab-c"), "foo.html-c");
	}

	#[test]
	fn text_pass_is_idempotent() {
		let input = r#"<a href="/">x</a><link href="/inc/a.css"><a href="/p.html?id=1">"#;
		let once = rewrite_text(input);
		assert_eq!(rewrite_text(&once), once);
	}

	#[test]
	fn index_page_detection() {
		assert!(is_index_page(Path::new("site/index.html")));
		assert!(is_index_page(Path::new("site/blog/index.html")));
		assert!(!is_index_page(Path::new("site/about.html")));
		assert!(!is_index_page(Path::new("site/index.htm")));
	}

	#[test]
	fn anchors_rewritten_by_prefix_and_suffix() {
		let doc = Document::from(
			r#"<a href="/page.html">p</a><a href="/other.txt">o</a><a href="page.html">r</a><a>n</a><a href="/">h</a>"#,
		);

		assert_eq!(rewrite_anchors(&doc), 1);
		assert_eq!(hrefs(&doc), ["page.html", "/other.txt", "page.html", "", "/"]);
	}

	#[test]
	fn finds_html_at_any_depth() {
		let dir = TempDir::new().unwrap();
		let root = dir.path();
		fs::create_dir_all(root.join("blog/2024")).unwrap();
		fs::write(root.join("index.html"), "").unwrap();
		fs::write(root.join("ABOUT.HTML"), "").unwrap();
		fs::write(root.join("notes.txt"), "").unwrap();
		fs::write(root.join("page.htm"), "").unwrap();
		fs::write(root.join("blog/2024/post.html"), "").unwrap();

		let mut found: Vec<_> = find_html_files(root)
			.unwrap()
			.into_iter()
			.map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
			.collect();
		found.sort();

		assert_eq!(found, ["ABOUT.HTML", "blog/2024/post.html", "index.html"]);
	}

	#[test]
	fn missing_root_fails_the_walk() {
		let dir = TempDir::new().unwrap();
		let err = find_html_files(&dir.path().join("nope")).unwrap_err();
		assert!(err.to_string().contains("Failed to walk"));
	}

	#[cfg(unix)]
	#[test]
	fn dangling_link_fails_the_walk() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("a.html"), "").unwrap();
		std::os::unix::fs::symlink(dir.path().join("gone.html"), dir.path().join("b.html")).unwrap();

		assert!(find_html_files(dir.path()).is_err());
	}

	#[cfg(unix)]
	#[test]
	fn linked_pages_are_found() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("a.html"), "").unwrap();
		std::os::unix::fs::symlink(dir.path().join("a.html"), dir.path().join("b.html")).unwrap();

		assert_eq!(find_html_files(dir.path()).unwrap().len(), 2);
	}

	#[test]
	fn substitution_patterns_compile() {
		assert!(INCLUDE.is_match("/inc/"));
		assert!(ROOT_HREF.is_match(r#"href="/""#));
		assert!(TRACKING_QUERY.is_match("?id=a1"));
	}

	#[test]
	fn non_index_file_gets_text_pass_only() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("about.html");
		fs::write(&path, r#"<a href="/inc/style.css"><a href="/page.html">"#).unwrap();

		let report = sanitize_file(&path).unwrap();

		assert_eq!(report.anchors_rewritten, 0);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			r#"<a href="inc/style.css"><a href="/page.html">"#
		);
	}

	#[test]
	fn index_file_gets_anchor_pass() {
		let dir = TempDir::new().unwrap();
		fs::create_dir_all(dir.path().join("docs")).unwrap();
		let path = dir.path().join("docs/index.html");
		fs::write(
			&path,
			r#"<html><body><a href="/page.html?id=x1">p</a><a href="/other.txt">o</a><a href="/">h</a></body></html>"#,
		)
		.unwrap();

		let report = sanitize_file(&path).unwrap();
		assert_eq!(report.anchors_rewritten, 1);

		let written = fs::read_to_string(&path).unwrap();
		let doc = Document::from(written.as_str());
		assert_eq!(hrefs(&doc), ["page.html", "/other.txt", "index.html"]);
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = TempDir::new().unwrap();
		let err = sanitize_file(&dir.path().join("gone.html")).unwrap_err();
		assert!(err.to_string().contains("Failed to read"));
	}
}
