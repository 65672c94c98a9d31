//! Application constants

// === Clean ===
pub const KEEP_FILES: &[&str] = &["appsettings.json", "web.config"];
pub const KEEP_DIRS: &[&str] = &["assets"];

// === Sanitize ===
pub const HTML_EXTENSION: &str = "html";
pub const INDEX_PAGE: &str = "index.html";

pub const INCLUDE_PATTERN: &str = r"(?i)/inc/";
pub const INCLUDE_REPLACEMENT: &str = "inc/";
pub const ROOT_HREF_PATTERN: &str = r#"(?i)href="/""#;
pub const ROOT_HREF_REPLACEMENT: &str = r#"href="index.html""#;
pub const TRACKING_QUERY_PATTERN: &str = r"\?id=[a-zA-Z0-9]+";

// === Days ===
pub const REFERENCE_YEAR: i32 = 2000;
pub const REFERENCE_MONTH: u32 = 1;
pub const REFERENCE_DAY: u32 = 1;

// === Prompt ===
pub const CONFIRM_TOKENS: &[&str] = &["y", "yes"];
