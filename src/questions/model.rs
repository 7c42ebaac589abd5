//! Question model

/// One FAQ entry, parsed from a question document
///
/// Constructed once per load and immutable thereafter; the collection is
/// rebuilt from scratch on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// First non-blank line of the document, heading markers stripped
    pub title: String,

    /// Everything after the title line, leading/trailing blank lines trimmed.
    /// Opaque markup; handed to the renderer verbatim.
    pub body: String,

    /// Anchor identifier, a pure function of `title`
    pub slug: String,

    /// Originating file path, used only for diagnostics
    pub source_path: String,
}
