//! Stagehand - static site publication helper
//!
//! Cleans a deploy folder, sanitizes generated HTML for staging and
//! copies a day count to the clipboard.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;

use stagehand::cli::{Cli, Command};
use stagehand::clipboard::{Clipboard, SystemClipboard};
use stagehand::commands;
use stagehand::core::{days, ExcludeList};
use stagehand::ui::{self, Log};

fn main() {
	let cli = Cli::parse();
	Log::set_verbose(cli.verbose);

	if let Err(e) = run(cli) {
		ui::error(&format!("{:#}", e));
		std::process::exit(1);
	}
}

fn run(cli: Cli) -> Result<()> {
	let dir = cli.directory;

	match cli.command {
		Command::Clean { keep_files, keep_dirs } => {
			ui::print_logo();
			let excludes = ExcludeList::new(keep_files, keep_dirs);
			commands::clean::run(&dir, &excludes, cli.auto_confirm, io::stdin().lock())?;
		}
		Command::Sanitize => {
			ui::print_logo();
			commands::sanitize::run(&dir, cli.auto_confirm, io::stdin().lock())?;
		}
		Command::Days { since, no_copy } => {
			let reference = since.unwrap_or_else(days::reference_date);
			let mut system = SystemClipboard::default();
			let clipboard: Option<&mut dyn Clipboard> = if no_copy { None } else { Some(&mut system) };
			commands::days::run(reference, days::today(), clipboard)?;
		}
		Command::Help { subcommand } => {
			let mut cmd = Cli::command();
			if let Some(sub) = subcommand {
				if let Some(sub_cmd) = cmd.find_subcommand_mut(&sub) {
					sub_cmd.print_help()?;
				} else {
					ui::warn(&format!("Unknown subcommand: {}", sub));
					cmd.print_help()?;
				}
			} else {
				cmd.print_help()?;
			}
		}
	}

	Ok(())
}
