//! Init flow: scaffold a repository for faqgen
//!
//! Writes the default config, creates the questions and templates directories,
//! and installs a questions README plus the stock FAQ/suggest templates.
//! Existing files are reported and skipped unless --overwrite is given; a
//! skipped file is not an error.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::templates::{FAQ_TEMPLATE, SUGGEST_TEMPLATE};

const QUESTIONS_README: &str = "\
# Questions

Your questions should go in this directory.

Question files should be named with the extension \".question.md\".
";

const STOCK_FAQ_TEMPLATE: &str = "\
# Frequently Asked Questions

{{#questions}}- [{{title}}](#{{slug}})
{{/questions}}
{{#questions}}<a name=\"{{slug}}\"></a>
## {{title}}

{{body}}

{{/questions}}<hr>

Generated by faqgen
";

const STOCK_SUGGEST_TEMPLATE: &str = "\
{{?questions}}We found the following entries in the [FAQ]({{faq_url}}) which you may find helpful:

{{#questions}}- [{{title}}]({{faq_url}}#{{slug}})
{{/questions}}
Feel free to close this issue if you found an answer in the FAQ. Otherwise, please give us a little time to review.
{{/questions}}{{^questions}}Thank you for your issue. Give us a little time to review it.

PS. You might want to check the [FAQ]({{faq_url}}) if you haven't done so already.
{{/questions}}
This is an automated reply, generated by faqgen
";

fn default_config(questions: &Path, templates: &Path, output: &str, faq_url: &str) -> String {
    format!(
        "# faqgen settings\n\n\
         faq_url = {faq_url:?}        # Replace this with the URL to your FAQ.md!\n\n\
         questions_path = {questions:?} # Where questions should be stored\n\
         output_path = {output:?}      # Where FAQ.md should be generated\n\
         templates_path = {templates:?} # Path to templates\n"
    )
}

/// Write `text` to `path`, honoring the overwrite flag; reports and skips
/// existing files, returns whether the file was written
fn write_path(path: &Path, text: &str, overwrite: bool) -> bool {
    let result = if overwrite {
        fs::write(path, text)
    } else if path.exists() {
        Err(io::Error::new(io::ErrorKind::AlreadyExists, "exists"))
    } else {
        fs::write(path, text)
    };

    match result {
        Ok(()) => {
            eprintln!("{} Wrote {:?}", "✔".green(), path);
            true
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            eprintln!(
                "{} File {:?} exists, use --overwrite to update",
                "⚠".red(),
                path
            );
            false
        }
        Err(err) => {
            eprintln!("{} Unable to write {:?}; {}", "⚠".red(), path, err);
            false
        }
    }
}

fn make_directory(path: &Path) -> bool {
    match fs::create_dir_all(path) {
        Ok(()) => {
            eprintln!("{} Directory {:?} created (or exists)", "✔".green(), path);
            true
        }
        Err(err) => {
            eprintln!("unable to create {:?} directory; {}", path, err);
            false
        }
    }
}

/// Run the init command
pub fn run_init(
    config: &Path,
    questions: &Path,
    templates: &Path,
    output: &str,
    faq_url: &str,
    overwrite: bool,
) -> Result<()> {
    let config_text = default_config(questions, templates, output, faq_url);
    if write_path(config, &config_text, overwrite) {
        eprintln!("{config_text}");
    }

    make_directory(questions);
    make_directory(templates);

    write_path(&questions.join("README.md"), QUESTIONS_README, overwrite);
    write_path(&templates.join(FAQ_TEMPLATE), STOCK_FAQ_TEMPLATE, overwrite);
    write_path(
        &templates.join(SUGGEST_TEMPLATE),
        STOCK_SUGGEST_TEMPLATE,
        overwrite,
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid_toml() {
        let text = default_config(
            Path::new("./questions"),
            Path::new(".faq"),
            "./FAQ.md",
            "https://example.com/FAQ.md",
        );
        let config: crate::config::Config = toml::from_str(&text).unwrap();
        assert_eq!(config.faq_url, "https://example.com/FAQ.md");
    }

    #[test]
    fn test_run_init_scaffolds_everything() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("faq.toml");
        let questions = temp.path().join("questions");
        let templates = temp.path().join(".faq");

        run_init(
            &config,
            &questions,
            &templates,
            "./FAQ.md",
            "https://example.com/FAQ.md",
            false,
        )
        .unwrap();

        assert!(config.is_file());
        assert!(questions.join("README.md").is_file());
        assert!(templates.join(FAQ_TEMPLATE).is_file());
        assert!(templates.join(SUGGEST_TEMPLATE).is_file());
    }

    #[test]
    fn test_write_path_refuses_existing_without_overwrite() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("file.txt");
        fs::write(&path, "original").unwrap();

        assert!(!write_path(&path, "updated", false));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");

        assert!(write_path(&path, "updated", true));
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }
}
