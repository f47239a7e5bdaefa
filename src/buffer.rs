use std::collections::VecDeque;

use crate::item::StreamItem;

/// Failure raised by a producer while the stream was being advanced.
///
/// The buffer never constructs one of these itself: absence of further
/// data is `Ok(None)`, not an error. Producers raise this for fatal
/// conditions (e.g. malformed input) and the buffer propagates it
/// unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at offset {offset}")]
pub struct StreamError {
    pub message: String,
    pub offset: usize,
}

impl StreamError {
    #[must_use]
    pub fn new(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset,
        }
    }
}

/// Local buffer over a lazy char/token stream, able to replay
/// already-seen items.
///
/// Wraps an exclusively-owned producer that yields [`StreamItem`]s in
/// non-decreasing offset order. Items pulled from the producer are
/// recorded in an append-only history, so a consumer can backtrack with
/// [`rewind_to`](Self::rewind_to) without the producer ever being
/// rewound. History is kept for the whole lifetime of the buffer; one
/// buffer serves one lexing pass over one producer.
///
/// Queue discipline: lookahead pushes onto the *front* of the pending
/// queue, rewind appends onto the *back*. Swapping either side breaks
/// the guarantee that a lookahead immediately followed by a rewind
/// still delivers the looked-ahead item first.
#[derive(Debug)]
pub struct StreamBuffer<P> {
    producer: P,
    history: Vec<StreamItem>,
    pending: VecDeque<StreamItem>,
    offset: usize,
}

impl<P> StreamBuffer<P>
where
    P: Iterator<Item = Result<StreamItem, StreamError>>,
{
    /// Creates a buffer over `producer`, reporting `offset` as the
    /// position until the first item is delivered.
    #[must_use]
    pub const fn new(producer: P, offset: usize) -> Self {
        Self {
            producer,
            history: Vec::new(),
            pending: VecDeque::new(),
            offset,
        }
    }

    /// Byte offset of the most recently delivered item.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns and consumes the next item.
    ///
    /// Pending (replayed or looked-ahead) items are delivered before
    /// anything new is pulled from the producer. Freshly pulled items
    /// are recorded in history. Returns `Ok(None)` once the producer is
    /// exhausted and nothing is pending; calling again keeps returning
    /// `Ok(None)`.
    pub fn next(&mut self) -> Result<Option<StreamItem>, StreamError> {
        if let Some(item) = self.pending.pop_front() {
            self.offset = item.offset();
            return Ok(Some(item));
        }

        let Some(pulled) = self.producer.next() else {
            return Ok(None);
        };
        let item = pulled?;
        self.history.push(item.clone());
        self.offset = item.offset();
        Ok(Some(item))
    }

    /// Consumes raw characters up to the next composed token and
    /// returns them as one string.
    ///
    /// The terminating token, if any, is consumed and discarded: it is
    /// a boundary the caller is expected to have already dispatched on.
    /// Callers that need the token must [`lookahead`](Self::lookahead)
    /// before calling this.
    pub fn next_raw(&mut self) -> Result<String, StreamError> {
        let mut result = String::new();
        while let Some(item) = self.next()? {
            match item {
                StreamItem::Raw { ch, .. } => result.push(ch),
                StreamItem::Token(_) => break,
            }
        }
        Ok(result)
    }

    /// Returns the next item without permanently consuming it.
    ///
    /// The item stays queued, so the following [`next`](Self::next)
    /// call delivers it again. Looking ahead advances the reported
    /// offset to the inspected item.
    pub fn lookahead(&mut self) -> Result<Option<StreamItem>, StreamError> {
        if let Some(front) = self.pending.front() {
            return Ok(Some(front.clone()));
        }

        let item = self.next()?;
        if let Some(item) = &item {
            self.pending.push_front(item.clone());
        }
        Ok(item)
    }

    /// Peeks up to `max` upcoming raw characters as a string.
    ///
    /// Stops early, without error, at the first composed token or at
    /// exhaustion. Every inspected item (a terminating token included)
    /// is pushed back in original order and will be delivered again.
    /// Returns `Ok(None)` only when the stream is already exhausted at
    /// the peek point; a run that hits a token immediately yields an
    /// empty string.
    pub fn lookahead_raw(&mut self, max: usize) -> Result<Option<String>, StreamError> {
        let mut text = String::new();
        let mut inspected = Vec::new();

        for _ in 0..max {
            let Some(item) = self.next()? else {
                break;
            };
            match &item {
                StreamItem::Raw { ch, .. } => {
                    text.push(*ch);
                    inspected.push(item);
                }
                StreamItem::Token(_) => {
                    inspected.push(item);
                    break;
                }
            }
        }

        if inspected.is_empty() {
            return Ok(None);
        }
        for item in inspected.into_iter().rev() {
            self.pending.push_front(item);
        }
        Ok(Some(text))
    }

    /// Queues every remembered item after `offset` for re-delivery.
    ///
    /// History is scanned in original order and items with an offset
    /// strictly greater than `offset` are appended to the back of the
    /// pending queue. The producer is not touched. Items already
    /// pending (e.g. from a lookahead) are delivered first.
    pub fn rewind_to(&mut self, offset: usize) {
        for item in &self.history {
            if item.offset() > offset {
                self.pending.push_back(item.clone());
            }
        }
    }
}

impl<P> IntoIterator for StreamBuffer<P>
where
    P: Iterator<Item = Result<StreamItem, StreamError>>,
{
    type Item = Result<StreamItem, StreamError>;
    type IntoIter = IntoIter<P>;

    /// Drains the buffer item by item, pending entries first.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buffer: self }
    }
}

/// Draining iterator over a [`StreamBuffer`].
#[derive(Debug)]
pub struct IntoIter<P> {
    buffer: StreamBuffer<P>,
}

impl<P> Iterator for IntoIter<P>
where
    P: Iterator<Item = Result<StreamItem, StreamError>>,
{
    type Item = Result<StreamItem, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.next().transpose()
    }
}
