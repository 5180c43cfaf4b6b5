//! Lookahead window over decoded input.
//!
//! `LookaheadBuffer` keeps the text pulled from the source since the last
//! emission boundary. `start..position` is the span being lexed; anything
//! past `position` was consumed and then rewound, and is replayed by the next
//! call to [`LookaheadBuffer::next`] before the source is touched again.
//!
//! Invariants
//! - `start <= position <= data.len()`, all on UTF-8 boundaries.
//! - The rewind log holds one entry per `next` since the last boundary, in
//!   consumption order. End of input is logged with zero widths.
//! - `ahead` holds the source byte counts of the code points in
//!   `data[position..]`, the next one on top.
//! - [`LookaheadBuffer::commit`] drops `data[..position]`, resets both cursors
//!   to zero and clears the log, so no rewind crosses a boundary.

use alloc::{string::String, vec::Vec};

use crate::source::{ByteSource, CodePointSource};

#[derive(Debug, Default)]
pub(crate) struct LookaheadBuffer {
    data: String,
    start: usize,
    position: usize,
    rewind: RewindLog,
    ahead: Vec<usize>,
    /// Source bytes behind `position`, across all boundaries.
    offset: usize,
}

impl LookaheadBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Consumes the next code point, replaying rewound input first.
    pub(crate) fn next<S: ByteSource>(&mut self, source: &mut CodePointSource<S>) -> Option<char> {
        if let Some(ch) = self.data[self.position..].chars().next() {
            let bytes = self.ahead.pop().unwrap_or(ch.len_utf8());
            self.advance(ch, bytes);
            return Some(ch);
        }

        let before = source.bytes_read();
        match source.next_code_point() {
            Some(ch) => {
                self.data.push(ch);
                self.advance(ch, source.bytes_read() - before);
                Some(ch)
            }
            None => {
                self.rewind.push(Step::END);
                None
            }
        }
    }

    fn advance(&mut self, ch: char, bytes: usize) {
        let width = ch.len_utf8();
        self.position += width;
        self.offset += bytes;
        self.rewind.push(Step { width, bytes });
    }

    /// Undoes the most recent `next`, never moving before `start`.
    pub(crate) fn rewind(&mut self) {
        let Some(step) = self.rewind.pop() else {
            return;
        };
        if step.width == 0 {
            return;
        }
        self.position = self.position.saturating_sub(step.width).max(self.start);
        self.offset -= step.bytes;
        self.ahead.push(step.bytes);
    }

    pub(crate) fn current(&self) -> &str {
        &self.data[self.start..self.position]
    }

    /// Source bytes consumed up to the cursor.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Marks an emission boundary at `position`.
    pub(crate) fn commit(&mut self) {
        self.data.drain(..self.position);
        self.start = 0;
        self.position = 0;
        self.rewind.clear();
    }

    #[cfg(test)]
    pub(crate) fn rewind_depth(&self) -> usize {
        self.rewind.steps.len()
    }

    #[cfg(test)]
    pub(crate) fn buffered(&self) -> &str {
        &self.data
    }
}

/// One consumed code point: its width in `data` and in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    width: usize,
    bytes: usize,
}

impl Step {
    const END: Step = Step { width: 0, bytes: 0 };
}

/// Code points consumed since the last emission boundary.
#[derive(Debug, Default)]
struct RewindLog {
    steps: Vec<Step>,
}

impl RewindLog {
    fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    fn pop(&mut self) -> Option<Step> {
        self.steps.pop()
    }

    fn clear(&mut self) {
        self.steps.clear();
    }
}
