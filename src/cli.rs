//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default config file path used when -c/--config is not given
pub const CONFIG_PATH: &str = "./faq.toml";

/// Default directory for question documents (init only)
pub const QUESTIONS_PATH: &str = "./questions";

/// Default directory for templates (init only)
pub const TEMPLATES_PATH: &str = ".faq";

/// Default output path for the generated FAQ (init only)
pub const FAQ_PATH: &str = "./FAQ.md";

/// Placeholder FAQ URL written by init; users should replace it
pub const FAQ_URL: &str = "https://github.com/talkincode/faqgen/blob/main/FAQ.md";

/// faqgen - build an FAQ document from question files and suggest relevant entries.
#[derive(Parser, Debug)]
#[command(name = "faqgen")]
#[command(
    author,
    version,
    about,
    long_about = r#"faqgen assembles a directory of question documents into a single FAQ
document, and can suggest relevant FAQ entries for a free-text query
(for example, the title of a new support issue).

A question document is a plain text file named *.question.md whose first
non-blank line is the title; the rest is the body.

Examples:
    faqgen init
    faqgen build
    faqgen build -o -
    faqgen suggest "how do I install this"
"#
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialise a repository for faqgen.
    #[command(
        long_about = "Write a default config file and create the questions and templates\n\
directories, including a questions README and the stock FAQ/suggest templates.\n\n\
Existing files are left alone unless --overwrite is given.\n\n\
Examples:\n\
  faqgen init\n\
  faqgen init --questions ./faq-questions --overwrite\n"
    )]
    Init {
        /// Path to config file.
        #[arg(short, long, default_value = CONFIG_PATH, value_name = "PATH")]
        config: PathBuf,

        /// Path to questions directory.
        #[arg(long, default_value = QUESTIONS_PATH, value_name = "PATH")]
        questions: PathBuf,

        /// Path to templates directory.
        #[arg(long, default_value = TEMPLATES_PATH, value_name = "PATH")]
        templates: PathBuf,

        /// Path to generated FAQ.
        #[arg(long, default_value = FAQ_PATH, value_name = "PATH")]
        output: String,

        /// FAQ URL used in suggestion links.
        #[arg(long, default_value = FAQ_URL, value_name = "URL")]
        faq_url: String,

        /// Overwrite files if they exist.
        #[arg(long)]
        overwrite: bool,
    },

    /// Build the FAQ document.
    #[command(
        long_about = "Load the config, read every question document, render the FAQ template\n\
and write the result to the configured output path.\n\n\
Use -o to override the destination, or -o - to print to stdout.\n\n\
Examples:\n\
  faqgen build\n\
  faqgen build -c ./faq.toml -o docs/FAQ.md\n\
  faqgen build -o -\n"
    )]
    Build {
        /// Path to config file.
        #[arg(short, long, default_value = CONFIG_PATH, value_name = "PATH")]
        config: PathBuf,

        /// Path to output, or - for stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Suggest FAQ entries for a free-text query.
    #[command(
        long_about = "Score every question title against QUERY, keep the entries scoring above\n\
the relevance threshold, and render the suggest template with the results\n\
ordered by descending relevance.\n\n\
Examples:\n\
  faqgen suggest \"how do I install this\"\n\
  faqgen suggest \"crash on startup\" -c ./faq.toml\n"
    )]
    Suggest {
        /// Free-text query, e.g. the title of a new issue.
        #[arg(value_name = "QUERY")]
        query: String,

        /// Path to config file.
        #[arg(short, long, default_value = CONFIG_PATH, value_name = "PATH")]
        config: PathBuf,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init {
            config,
            questions,
            templates,
            output,
            faq_url,
            overwrite,
        } => crate::flows::init::run_init(
            &config, &questions, &templates, &output, &faq_url, overwrite,
        ),

        Commands::Build { config, output } => {
            crate::flows::build::run_build(&config, output.as_deref())
        }

        Commands::Suggest { query, config } => crate::flows::suggest::run_suggest(&query, &config),
    }
}
