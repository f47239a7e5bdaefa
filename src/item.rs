/// Grammar-defined token discriminant.
///
/// The stream core never interprets this value; producers (the lexing
/// passes that compose tokens) assign kinds from their own constant
/// tables, the way syntax-kind integers work in lossless lexers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenKind(pub u16);

/// A token composed by an earlier lexing pass.
///
/// `kind` and `value` are opaque to the stream core; only `offset` is
/// read, for position tracking and replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// Byte offset where the token begins in the original source.
    pub offset: usize,
}

/// One element of the lexical input sequence.
///
/// A producer yields either raw, not-yet-lexed characters or tokens
/// already composed by a previous pass, in non-decreasing offset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamItem {
    /// A single input character and its absolute byte offset.
    Raw { ch: char, offset: usize },
    /// An already-composed token.
    Token(Token),
}

impl StreamItem {
    /// Byte offset of this item within the original source.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Raw { offset, .. } => *offset,
            Self::Token(token) => token.offset,
        }
    }
}
