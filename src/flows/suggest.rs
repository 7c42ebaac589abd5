//! Suggest flow: config -> collection -> score/filter/rank -> rendered reply

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::matching::{rank, TitleMatcher};
use crate::questions::read_questions;
use crate::templates::{Render, TemplateVars, Templates, SUGGEST_TEMPLATE};

/// Run the suggest command
pub fn run_suggest(query: &str, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let questions = read_questions(&config.questions_path)?;

    let matcher = TitleMatcher::default();
    let ranked = rank(&questions, query, &matcher);

    let templates = Templates::new(&config.templates_path);
    let vars = TemplateVars {
        questions: ranked.iter().map(|s| s.question).collect(),
        faq_url: Some(&config.faq_url),
    };
    let reply = templates.render(SUGGEST_TEMPLATE, &vars)?;

    println!("{reply}");
    Ok(())
}
