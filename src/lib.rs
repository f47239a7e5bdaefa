//! Replayable lexical-stream buffer for template-language tokenizers.
//!
//! A tokenizer for a template language typically runs in passes: a raw
//! character stream is gradually refined into composed tokens, and the
//! grammar needs to peek ahead for multi-character delimiters or
//! backtrack over a region it mis-read. [`StreamBuffer`] sits between a
//! lazy producer of [`StreamItem`]s and the consumer, remembering
//! everything it has delivered so the consumer can look ahead and
//! replay without the producer ever being rewound. [`Source`] carries
//! the template text itself and resolves byte offsets to line numbers
//! for diagnostics.
//!
//! # Quick start
//!
//! ## Consume, look ahead, rewind
//!
//! ```
//! use lexstream_rs::{StreamBuffer, StreamError, StreamItem};
//!
//! let producer = "{% if %}"
//!     .char_indices()
//!     .map(|(offset, ch)| Ok::<_, StreamError>(StreamItem::Raw { ch, offset }));
//! let mut stream = StreamBuffer::new(producer, 0);
//!
//! // a lookahead does not change what comes next
//! let peeked = stream.lookahead().unwrap();
//! assert_eq!(stream.next().unwrap(), peeked);
//!
//! // bounded lookahead for a multi-character delimiter
//! assert_eq!(stream.lookahead_raw(2).unwrap().as_deref(), Some("% "));
//!
//! // drain the rest, then replay everything after offset 2
//! assert_eq!(stream.next_raw().unwrap(), "% if %}");
//! stream.rewind_to(2);
//! assert_eq!(stream.next_raw().unwrap(), "if %}");
//! ```
//!
//! ## Resolve an offset for an error message
//!
//! ```
//! use lexstream_rs::Source;
//!
//! let source = Source::new("<h1>\n{{ title }}\n</h1>", Some("views/page.tpl".into()));
//! assert_eq!(Source::resolve_line(source.content(), 5), 2);
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod buffer;
pub mod item;
pub mod source;

pub use buffer::{IntoIter, StreamBuffer, StreamError};
pub use item::{StreamItem, Token, TokenKind};
pub use source::Source;
