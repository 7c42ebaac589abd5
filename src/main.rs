//! faqgen - build an FAQ document from question files and suggest relevant entries
//!
//! faqgen provides:
//! - A question collection model: one `*.question.md` file per FAQ entry
//! - FAQ assembly through user-editable templates
//! - Fuzzy suggestion of relevant entries for a free-text query

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod flows;
mod matching;
mod questions;
mod slug;
mod templates;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
