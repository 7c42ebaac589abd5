//! Slug generation
//!
//! Slugs are URL-safe anchor identifiers derived from question titles. The
//! derivation is a pure function: the renderer and the parser must agree on
//! the anchor for a given title across runs.

/// Derive a slug from a title
///
/// Lower-cases the title and collapses every maximal run of characters that
/// are not ASCII letters or digits into a single hyphen, with no leading or
/// trailing hyphen. Idempotent: slugifying a slug is a no-op.
///
/// Duplicate titles produce duplicate slugs; no disambiguation is attempted.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut gap = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('-');
            }
            gap = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    slug
}
