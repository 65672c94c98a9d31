use chrono::NaiveDate;
use clap::builder::styling::{AnsiColor, Style, Styles};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{KEEP_DIRS, KEEP_FILES};

fn parse_date(s: &str) -> Result<NaiveDate, String> {
	NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| format!("'{}' is not a date in YYYY-MM-DD form", s))
}

fn styles() -> Styles {
	Styles::styled()
		.header(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.usage(Style::new().bold().fg_color(Some(AnsiColor::Blue.into())))
		.literal(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.placeholder(Style::new().fg_color(Some(AnsiColor::Yellow.into())))
		.valid(Style::new().fg_color(Some(AnsiColor::Blue.into())))
		.invalid(Style::new().fg_color(Some(AnsiColor::Red.into())))
}

#[derive(Parser, Debug)]
#[command(
	name = "stagehand",
	author,
	version,
	about = "Pre-publication chores for static sites",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {bin} {clean}                   {clean_desc}
  {bin} {clean} {clean_args}  {clean_args_desc}
  {bin} {sanitize} {sanitize_args}          {sanitize_desc}
  {bin} {days}                    {days_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "stagehand".bright_blue(),
		clean = "clean".yellow(),
		clean_desc = "Empty the current folder, keeping the defaults".dimmed(),
		clean_args = "--keep-file robots.txt",
		clean_args_desc = "Keep a different file".dimmed(),
		sanitize = "sanitize".yellow(),
		sanitize_args = "-d ./dist/",
		sanitize_desc = "Fix links for staging".dimmed(),
		days = "days".yellow(),
		days_desc = "Copy days since 2000-01-01".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	/// Folder to work in
	#[arg(short = 'd', long = "dir", global = true, default_value = ".")]
	pub directory: PathBuf,

	/// Skip the confirmation prompt
	#[arg(short = 'y', long = "yes", global = true)]
	pub auto_confirm: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Delete all files and folders except those kept
	Clean {
		/// Files to keep (comma-separated, replaces the default list)
		#[arg(long = "keep-file", value_delimiter = ',', default_values_t = KEEP_FILES.iter().map(|s| s.to_string()))]
		keep_files: Vec<String>,

		/// Folders to keep (comma-separated, replaces the default list)
		#[arg(long = "keep-dir", value_delimiter = ',', default_values_t = KEEP_DIRS.iter().map(|s| s.to_string()))]
		keep_dirs: Vec<String>,
	},

	/// Prepare HTML templates for publication in staging
	Sanitize,

	/// Print days since the reference date and copy them to the clipboard
	Days {
		/// Reference date (YYYY-MM-DD)
		#[arg(long = "since", value_parser = parse_date)]
		since: Option<NaiveDate>,

		/// Print only, leave the clipboard alone
		#[arg(long = "no-copy")]
		no_copy: bool,
	},

	/// Show help for a subcommand
	Help {
		/// Subcommand name
		subcommand: Option<String>,
	},
}
