/// Template content and its physical location, if any.
///
/// Immutable once constructed; share it by reference between the lexer
/// and any diagnostic code that needs to render positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    content: String,
    filename: Option<String>,
}

impl Source {
    #[must_use]
    pub fn new(content: impl Into<String>, filename: Option<String>) -> Self {
        Self {
            content: content.into(),
            filename,
        }
    }

    /// The full, unmodified source text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Identifier for diagnostics (e.g. a template path), if known.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Maps a byte offset to a 1-based line number.
    ///
    /// Counts newlines before `offset`; offsets past the end of
    /// `content` resolve to the last line rather than failing. Offset 0
    /// is always line 1. Each call rescans from the start of `content`,
    /// there is no memoization.
    #[must_use]
    pub fn resolve_line(content: &str, offset: usize) -> usize {
        content
            .as_bytes()
            .iter()
            .take(offset)
            .filter(|&&byte| byte == b'\n')
            .count()
            + 1
    }
}
