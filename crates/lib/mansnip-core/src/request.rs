/// A validated manpage query.
///
/// Built exactly once per tool call at the server's argument boundary;
/// everything past that boundary operates on this value, never on the raw
/// wire mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetQuery {
    /// Section hint for disambiguation. Empty means "no hint".
    pub section: String,
    /// Name of the manual page to read.
    pub manpage: String,
    /// Term to look up inside the page.
    pub query: String,
}

impl SnippetQuery {
    #[must_use]
    pub const fn new(section: String, manpage: String, query: String) -> Self {
        Self {
            section,
            manpage,
            query,
        }
    }
}
