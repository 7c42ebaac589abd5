//! Build flow: config -> collection -> rendered FAQ -> output

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::error::Error;
use crate::questions::read_questions;
use crate::templates::{Render, TemplateVars, Templates, FAQ_TEMPLATE};

/// Run the build command
///
/// `output` overrides the configured output path; "-" (from either source)
/// prints the rendered FAQ to stdout instead of writing a file.
pub fn run_build(config_path: &Path, output: Option<&str>) -> Result<()> {
    let config = Config::load(config_path)?;
    let questions = read_questions(&config.questions_path)?;

    let templates = Templates::new(&config.templates_path);
    let vars = TemplateVars {
        questions: questions.iter().collect(),
        faq_url: None,
    };
    let faq = templates.render(FAQ_TEMPLATE, &vars)?;

    let dest = output
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| config.output_path.to_string_lossy().into_owned());

    if dest == "-" {
        println!("{faq}");
    } else {
        let dest = PathBuf::from(dest);
        fs::write(&dest, &faq).map_err(|source| Error::Write {
            path: dest.clone(),
            source,
        })?;
        eprintln!(
            "{} wrote FAQ with {} questions to {:?}",
            "✔".green(),
            questions.len(),
            dest
        );
    }

    Ok(())
}
