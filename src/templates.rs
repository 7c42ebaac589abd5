//! Template rendering
//!
//! The core treats the renderer as a pure function of a template name and a
//! variable mapping. The file-backed implementation here loads templates from
//! the configured templates directory and expands a minimal section syntax:
//!
//! - `{{#questions}}...{{/questions}}` repeats the block once per question
//! - `{{?questions}}...{{/questions}}` renders the block once if any question
//! - `{{^questions}}...{{/questions}}` renders the block once if none
//! - `{{title}}`, `{{slug}}`, `{{body}}` inside a repeated block
//! - `{{faq_url}}` anywhere, when supplied
//!
//! Sections may nest inside `{{?questions}}`/`{{^questions}}` blocks; an
//! unterminated section is emitted verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::questions::Question;

/// Template name for the generated FAQ document
pub const FAQ_TEMPLATE: &str = "FAQ.md";

/// Template name for the suggestion reply
pub const SUGGEST_TEMPLATE: &str = "suggest.md";

const OPEN_EACH: &str = "{{#questions}}";
const OPEN_ANY: &str = "{{?questions}}";
const OPEN_NONE: &str = "{{^questions}}";
const CLOSE: &str = "{{/questions}}";

/// Variables handed to the renderer
#[derive(Debug, Default)]
pub struct TemplateVars<'a> {
    pub questions: Vec<&'a Question>,
    pub faq_url: Option<&'a str>,
}

/// Black-box renderer contract: template name + variables in, text out
pub trait Render {
    fn render(&self, template: &str, vars: &TemplateVars) -> Result<String, Error>;
}

/// File-backed templates under a directory
pub struct Templates {
    dir: PathBuf,
}

impl Templates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Render for Templates {
    fn render(&self, template: &str, vars: &TemplateVars) -> Result<String, Error> {
        let path = self.dir.join(template);
        let text = fs::read_to_string(&path).map_err(|source| Error::from_read(&path, source))?;
        Ok(expand(&text, vars))
    }
}

/// Expand sections and placeholders in template text
pub fn expand(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        let opener = [OPEN_EACH, OPEN_ANY, OPEN_NONE]
            .iter()
            .filter_map(|open| rest.find(open).map(|idx| (idx, *open)))
            .min_by_key(|(idx, _)| *idx);

        let Some((idx, open)) = opener else {
            out.push_str(&substitute_globals(rest, vars));
            break;
        };

        out.push_str(&substitute_globals(&rest[..idx], vars));
        let after = &rest[idx + open.len()..];

        let Some(end) = section_end(after) else {
            out.push_str(&substitute_globals(&rest[idx..], vars));
            break;
        };

        let block = &after[..end];
        match open {
            OPEN_EACH => {
                for question in &vars.questions {
                    let filled = block
                        .replace("{{title}}", &question.title)
                        .replace("{{slug}}", &question.slug)
                        .replace("{{body}}", &question.body);
                    out.push_str(&substitute_globals(&filled, vars));
                }
            }
            OPEN_ANY if !vars.questions.is_empty() => out.push_str(&expand(block, vars)),
            OPEN_NONE if vars.questions.is_empty() => out.push_str(&expand(block, vars)),
            _ => {}
        }

        rest = &after[end + CLOSE.len()..];
    }

    out
}

/// Find the matching close marker for a section, honoring nesting
fn section_end(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with(OPEN_EACH) || rest.starts_with(OPEN_ANY) || rest.starts_with(OPEN_NONE)
        {
            depth += 1;
            i += OPEN_EACH.len();
        } else if rest.starts_with(CLOSE) {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
            i += CLOSE.len();
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    None
}

fn substitute_globals(text: &str, vars: &TemplateVars) -> String {
    match vars.faq_url {
        Some(url) => text.replace("{{faq_url}}", url),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn question(title: &str, body: &str) -> Question {
        Question::parse(
            &format!("# {title}\n\n{body}"),
            Path::new("test.question.md"),
        )
        .unwrap()
    }

    #[test]
    fn test_expand_each_section() {
        let a = question("Alpha?", "Body A");
        let b = question("Beta?", "Body B");
        let vars = TemplateVars {
            questions: vec![&a, &b],
            faq_url: None,
        };

        let out = expand("{{#questions}}- [{{title}}](#{{slug}})\n{{/questions}}", &vars);
        assert_eq!(out, "- [Alpha?](#alpha)\n- [Beta?](#beta)\n");
    }

    #[test]
    fn test_expand_empty_section_variants() {
        let vars = TemplateVars::default();
        assert_eq!(expand("{{#questions}}x{{/questions}}", &vars), "");
        assert_eq!(expand("{{?questions}}some{{/questions}}", &vars), "");
        assert_eq!(expand("{{^questions}}none{{/questions}}", &vars), "none");
    }

    #[test]
    fn test_expand_nested_sections() {
        let a = question("Alpha?", "Body A");
        let vars = TemplateVars {
            questions: vec![&a],
            faq_url: Some("https://example.com/FAQ.md"),
        };

        let out = expand(
            "{{?questions}}found:\n{{#questions}}- {{title}} ({{faq_url}}#{{slug}})\n{{/questions}}{{/questions}}{{^questions}}nothing{{/questions}}",
            &vars,
        );
        assert_eq!(out, "found:\n- Alpha? (https://example.com/FAQ.md#alpha)\n");
    }

    #[test]
    fn test_expand_faq_url_outside_sections() {
        let vars = TemplateVars {
            questions: vec![],
            faq_url: Some("https://example.com/FAQ.md"),
        };
        assert_eq!(
            expand("See {{faq_url}}.", &vars),
            "See https://example.com/FAQ.md."
        );
    }

    #[test]
    fn test_expand_unterminated_section_verbatim() {
        let vars = TemplateVars::default();
        assert_eq!(
            expand("before {{#questions}}dangling", &vars),
            "before {{#questions}}dangling"
        );
    }

    #[test]
    fn test_expand_body_verbatim() {
        let a = question("Alpha?", "line 1\n\n    code");
        let vars = TemplateVars {
            questions: vec![&a],
            faq_url: None,
        };
        let out = expand("{{#questions}}{{body}}{{/questions}}", &vars);
        assert_eq!(out, "line 1\n\n    code");
    }

    #[test]
    fn test_render_missing_template_is_not_found() {
        let temp = tempfile::tempdir().unwrap();
        let templates = Templates::new(temp.path());
        let result = templates.render(FAQ_TEMPLATE, &TemplateVars::default());
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_render_reads_template_file() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("FAQ.md"), "# FAQ\n").unwrap();
        let templates = Templates::new(temp.path());
        let out = templates
            .render(FAQ_TEMPLATE, &TemplateVars::default())
            .unwrap();
        assert_eq!(out, "# FAQ\n");
    }
}
