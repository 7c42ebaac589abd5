//! Question directory loader
//!
//! Scans a single directory (no recursion) for eligible question documents and
//! parses each one. Ordering is by filename so repeated runs on the same tree
//! produce the same collection.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Error;
use crate::questions::model::Question;

/// Filename suffix marking a file as a question document
pub const QUESTION_SUFFIX: &str = ".question.md";

/// Load all question documents under `dir`, sorted by filename
///
/// Files without the question suffix (README.md included) are ignored. A
/// single malformed document aborts the whole load rather than silently
/// producing an incomplete collection.
pub fn read_questions(dir: &Path) -> Result<Vec<Question>, Error> {
    if !dir.is_dir() {
        return Err(Error::NotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut questions = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| Error::Read {
            path: dir.to_path_buf(),
            source: err
                .into_io_error()
                .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "walk error")),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(QUESTION_SUFFIX) {
            continue;
        }

        let text = fs::read_to_string(entry.path())
            .map_err(|source| Error::from_read(entry.path(), source))?;
        questions.push(Question::parse(&text, entry.path())?);
    }

    Ok(questions)
}
