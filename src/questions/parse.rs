//! Question document parser
//!
//! A question document is plain text: the first non-blank line is the title
//! (an optional leading markdown heading marker is stripped), the remainder is
//! the body. The body is not interpreted here.

use std::path::Path;

use crate::error::Error;
use crate::questions::model::Question;
use crate::slug::slugify;

impl Question {
    /// Parse raw document text into a Question, or fail with a parse error
    pub fn parse(text: &str, source_path: &Path) -> Result<Question, Error> {
        let empty_title = || Error::Parse {
            path: source_path.to_path_buf(),
            reason: "empty title".to_string(),
        };

        let mut lines = text.lines();
        let mut title = None;

        for line in lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            let stripped = line.trim_start_matches('#').trim();
            if stripped.is_empty() {
                // a bare heading marker line carries no title
                return Err(empty_title());
            }
            title = Some(stripped.to_string());
            break;
        }

        let title = title.ok_or_else(empty_title)?;

        let mut body_lines: Vec<&str> = lines.collect();
        while body_lines.first().is_some_and(|l| l.trim().is_empty()) {
            body_lines.remove(0);
        }
        while body_lines.last().is_some_and(|l| l.trim().is_empty()) {
            body_lines.pop();
        }

        Ok(Question {
            slug: slugify(&title),
            title,
            body: body_lines.join("\n"),
            source_path: source_path.display().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Question, Error> {
        Question::parse(text, Path::new("test.question.md"))
    }

    #[test]
    fn test_parse_heading_title_and_body() {
        let question = parse("# Why is the sky blue?\n\nBecause of Rayleigh scattering.").unwrap();
        assert_eq!(question.title, "Why is the sky blue?");
        assert_eq!(question.body, "Because of Rayleigh scattering.");
        assert_eq!(question.slug, "why-is-the-sky-blue");
        assert_eq!(question.source_path, "test.question.md");
    }

    #[test]
    fn test_parse_title_without_marker() {
        let question = parse("Plain title\nbody").unwrap();
        assert_eq!(question.title, "Plain title");
        assert_eq!(question.body, "body");
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let question = parse("\n\n# Title\nbody").unwrap();
        assert_eq!(question.title, "Title");
    }

    #[test]
    fn test_parse_blank_document_fails() {
        let result = parse("\n\n   \n");
        match result {
            Err(Error::Parse { reason, .. }) => assert_eq!(reason, "empty title"),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_document_fails() {
        assert!(matches!(parse(""), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_bare_marker_line_fails() {
        assert!(matches!(parse("#   \nbody"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_body_internal_formatting_preserved() {
        let question = parse("# T\n\nline 1\n\n    indented\nline 3\n\n\n").unwrap();
        assert_eq!(question.body, "line 1\n\n    indented\nline 3");
    }

    #[test]
    fn test_parse_title_only_has_empty_body() {
        let question = parse("# Just a title").unwrap();
        assert_eq!(question.body, "");
    }
}
