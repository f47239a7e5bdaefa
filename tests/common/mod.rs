#![allow(dead_code)]

use lexstream_rs::{StreamBuffer, StreamError, StreamItem, Token, TokenKind};

/// Producer over a fixed, pre-built item sequence.
pub type FixedProducer = std::vec::IntoIter<Result<StreamItem, StreamError>>;

pub fn raw(ch: char, offset: usize) -> StreamItem {
    StreamItem::Raw { ch, offset }
}

pub fn token(kind: u16, value: &str, offset: usize) -> StreamItem {
    StreamItem::Token(Token {
        kind: TokenKind(kind),
        value: value.to_string(),
        offset,
    })
}

/// Raw-character items for `input`, offset by byte position.
pub fn chars_of(input: &str) -> Vec<StreamItem> {
    input
        .char_indices()
        .map(|(offset, ch)| raw(ch, offset))
        .collect()
}

/// Buffer starting at offset 0 over a producer that never fails.
pub fn buffer_over(items: Vec<StreamItem>) -> StreamBuffer<FixedProducer> {
    let results: Vec<_> = items.into_iter().map(Ok).collect();
    StreamBuffer::new(results.into_iter(), 0)
}

/// Buffer over a producer that yields `items` and then fails.
pub fn failing_buffer(items: Vec<StreamItem>, error: StreamError) -> StreamBuffer<FixedProducer> {
    let mut results: Vec<_> = items.into_iter().map(Ok).collect();
    results.push(Err(error));
    StreamBuffer::new(results.into_iter(), 0)
}

/// Drains the buffer via `next()`, panicking on producer failure.
pub fn drain(buffer: &mut StreamBuffer<FixedProducer>) -> Vec<StreamItem> {
    let mut items = Vec::new();
    while let Some(item) = buffer.next().expect("producer failure") {
        items.push(item);
    }
    items
}
