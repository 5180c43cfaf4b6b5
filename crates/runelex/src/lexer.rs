//! The state-function driven lexer.
//!
//! A [`Lexer`] owns the decoded input window and drives a chain of
//! [`StateFn`]s. Every state function sees the lexer through its cursor
//! operations (`next`, `peek`, `rewind`, `take`, `accept`, `current`) and
//! closes spans with `emit` or `ignore`.
//!
//! Consumption modes
//! - [`Lexer::scan`] runs the whole chain and hands every token to a sink.
//! - [`Lexer::next_batch`] runs one state function per call and returns the
//!   tokens it emitted.
//! - [`Lexer::next_token`] runs as many state functions as it takes to produce
//!   one token. [`Lexer::tokens`] wraps it in an iterator.
//!
//! All three run the same driver step, so for a given input and start state
//! they produce the same token sequence. During a scan `emit` hands each token
//! to the sink before it returns. Outside a scan tokens wait in a queue that
//! the pull calls drain.

use alloc::{boxed::Box, collections::VecDeque, string::String, vec::Vec};
use core::{fmt, mem};

use crate::{
    Accept, LexError, LexerOptions, StateFn, Token, TokenSink, Transition,
    buffer::LookaheadBuffer,
    sink::ErasedSink,
    source::{ByteSource, CodePointSource},
};

type ErrorHandler = Box<dyn FnMut(&str)>;

/// A lexer over the byte source `S` producing tokens of kind `K`.
pub struct Lexer<K, S> {
    source: CodePointSource<S>,
    buffer: LookaheadBuffer,
    start: Option<StateFn<K, S>>,
    /// State the next driver step runs; `None` once the chain has terminated.
    resume: Option<StateFn<K, S>>,
    delivery: Delivery<K>,
    emitted: VecDeque<Token<K>>,
    err: Option<LexError>,
    error_handler: Option<ErrorHandler>,
}

impl<K, S: ByteSource> Lexer<K, S> {
    /// Creates a lexer that reads `source` and starts in `start`.
    ///
    /// With `start` set to `None` the lexer produces no tokens on its own, but
    /// the cursor operations can still be driven by hand.
    pub fn new(source: S, start: Option<StateFn<K, S>>) -> Self {
        Self::with_options(source, start, LexerOptions::default())
    }

    /// Creates a lexer with explicit [`LexerOptions`].
    pub fn with_options(source: S, start: Option<StateFn<K, S>>, options: LexerOptions) -> Self {
        Self {
            source: CodePointSource::new(source, options.decode_mode),
            buffer: LookaheadBuffer::with_capacity(options.buffer_capacity),
            start,
            resume: start,
            delivery: Delivery::Queue,
            emitted: VecDeque::new(),
            err: None,
            error_handler: None,
        }
    }

    /// Registers `handler` to receive errors raised with [`Lexer::error`],
    /// making them recoverable.
    #[must_use]
    pub fn with_error_handler(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.set_error_handler(handler);
        self
    }

    /// Registers `handler` to receive errors raised with [`Lexer::error`],
    /// replacing any handler set before.
    pub fn set_error_handler(&mut self, handler: impl FnMut(&str) + 'static) {
        self.error_handler = Some(Box::new(handler));
    }

    // ---------------------------------------------------------------------
    // Cursor operations
    // ---------------------------------------------------------------------

    /// Consumes and returns the next code point, or `None` at end of input.
    ///
    /// Reaching the end of input is recorded like any other step, so a
    /// following [`Lexer::rewind`] undoes it without moving the cursor.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.buffer.next(&mut self.source)
    }

    /// Undoes the most recent [`Lexer::next`]. Does nothing once every step
    /// since the last `emit` or `ignore` has been undone.
    pub fn rewind(&mut self) {
        self.buffer.rewind();
    }

    /// Returns the next code point without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        let next = self.next();
        self.rewind();
        next
    }

    /// Consumes the longest run of code points that are members of `set`.
    ///
    /// The first code point outside the set is left for the next call to
    /// [`Lexer::next`].
    pub fn take(&mut self, set: impl Accept) {
        loop {
            match self.next() {
                Some(ch) if set.accepts(ch) => {}
                _ => {
                    self.rewind();
                    return;
                }
            }
        }
    }

    /// Consumes one code point if it is a member of `set`.
    pub fn accept(&mut self, set: impl Accept) -> bool {
        match self.next() {
            Some(ch) if set.accepts(ch) => true,
            _ => {
                self.rewind();
                false
            }
        }
    }

    /// The text consumed since the last `emit` or `ignore`.
    #[must_use]
    pub fn current(&self) -> &str {
        self.buffer.current()
    }

    /// Number of input bytes consumed up to the cursor, across emission
    /// boundaries.
    ///
    /// Rewound input does not count, so [`Lexer::peek`] never changes it.
    #[must_use]
    pub fn bytes_read(&self) -> usize {
        self.buffer.offset()
    }

    // ---------------------------------------------------------------------
    // Emission
    // ---------------------------------------------------------------------

    /// Emits the current text as a token of `kind` and starts a new span.
    ///
    /// Inside [`Lexer::scan`] the token reaches the sink before this returns.
    /// Otherwise it is queued for the next pull. Emitting an empty span is
    /// allowed and produces a token with an empty value.
    pub fn emit(&mut self, kind: K) {
        let value = String::from(self.buffer.current());
        tracing::trace!(value = %value, "emit");
        self.buffer.commit();
        let token = Token { kind, value };
        match self.delivery {
            Delivery::Queue => self.emitted.push_back(token),
            // SAFETY: only `scan_into` installs a sink, and its `ScanScope`
            // puts the previous delivery back before the sink borrow ends,
            // unwinding included.
            Delivery::Sink(sink) => unsafe { sink.push(token) },
        }
    }

    /// Discards the current text and starts a new span.
    pub fn ignore(&mut self) {
        tracing::trace!(value = %self.buffer.current(), "ignore");
        self.buffer.commit();
    }

    // ---------------------------------------------------------------------
    // Errors
    // ---------------------------------------------------------------------

    /// Raises a lexing error.
    ///
    /// The error is stored (see [`Lexer::err`]) and passed to the registered
    /// handler. Lexing carries on: a state function that wants to stop returns
    /// `None` after raising.
    ///
    /// # Panics
    ///
    /// Panics with `message` when no error handler is registered.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        let Some(handler) = self.error_handler.as_mut() else {
            panic!("{message}");
        };
        let bytes_read = self.buffer.offset();
        tracing::debug!(message = %message, bytes_read, "lex error");
        let error = self.err.insert(LexError::new(message, bytes_read));
        handler(error.message());
    }

    /// The last error raised with [`Lexer::error`], if any.
    #[must_use]
    pub fn err(&self) -> Option<&LexError> {
        self.err.as_ref()
    }

    /// Takes the last error raised with [`Lexer::error`] out of the lexer.
    pub fn take_err(&mut self) -> Option<LexError> {
        self.err.take()
    }

    // ---------------------------------------------------------------------
    // Driving
    // ---------------------------------------------------------------------

    /// Runs the state chain to completion, calling `f` with every emitted
    /// token as it is emitted.
    ///
    /// See [`Lexer::scan_into`].
    pub fn scan(&mut self, mut f: impl FnMut(Token<K>)) {
        self.scan_into(&mut f);
    }

    /// Runs the state chain to completion, pushing every emitted token into
    /// `sink` from inside [`Lexer::emit`].
    ///
    /// The chain picks up where pulling left it: a fresh lexer starts from the
    /// start state, one that has been pulled from continues with the state the
    /// next pull would have run, and one whose chain has terminated runs
    /// nothing. Tokens still queued from an earlier pull are delivered first.
    pub fn scan_into(&mut self, sink: &mut impl TokenSink<K>) {
        for token in self.emitted.drain(..) {
            sink.push_token(token);
        }
        let previous = mem::replace(&mut self.delivery, Delivery::Sink(ErasedSink::new(sink)));
        let scope = ScanScope {
            lexer: self,
            previous,
        };
        while let Some(state) = scope.lexer.resume.take() {
            scope.lexer.resume = scope.lexer.step(state);
        }
    }

    /// Runs one state function and returns the tokens it emitted.
    ///
    /// Returns `None` once the chain has terminated, and rearms the lexer so
    /// the call after that starts over from the start state.
    pub fn next_batch(&mut self) -> Option<Vec<Token<K>>> {
        if !self.advance() && self.emitted.is_empty() {
            self.resume = self.start;
            return None;
        }
        Some(self.emitted.drain(..).collect())
    }

    /// Returns the next token, running state functions until one is emitted.
    ///
    /// Tokens emitted in the same state function as the returned one are kept
    /// and returned by later calls before any other state function runs.
    /// Returns `None` once the chain has terminated, and keeps returning it.
    pub fn next_token(&mut self) -> Option<Token<K>> {
        loop {
            if let Some(token) = self.emitted.pop_front() {
                return Some(token);
            }
            if !self.advance() {
                return None;
            }
        }
    }

    /// An iterator over the remaining tokens, driven by [`Lexer::next_token`].
    pub fn tokens(&mut self) -> Tokens<'_, K, S> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// Runs the cached state once. Returns `false` when the chain has already
    /// terminated.
    fn advance(&mut self) -> bool {
        let Some(state) = self.resume.take() else {
            return false;
        };
        self.resume = self.step(state);
        true
    }

    fn step(&mut self, state: StateFn<K, S>) -> Transition<K, S> {
        tracing::trace!(?state, "enter state");
        let next = state.run(self);
        if next.is_none() {
            tracing::trace!(bytes_read = self.buffer.offset(), "state chain terminated");
        }
        next
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &LookaheadBuffer {
        &self.buffer
    }
}

impl<K, S> fmt::Debug for Lexer<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("current", &self.buffer.current())
            .field("bytes_read", &self.buffer.offset())
            .field("bytes_decoded", &self.source.bytes_read())
            .field("pending_tokens", &self.emitted.len())
            .field("scanning", &matches!(self.delivery, Delivery::Sink(_)))
            .field("err", &self.err)
            .field("has_error_handler", &self.error_handler.is_some())
            .finish_non_exhaustive()
    }
}

/// Where [`Lexer::emit`] sends tokens.
enum Delivery<K> {
    /// Pull modes and hand-driven lexers: tokens wait in `emitted`.
    Queue,
    /// Inside `scan_into`: tokens go straight to the caller's sink.
    Sink(ErasedSink<K>),
}

/// Restores the delivery that was active before a scan, even if a state
/// function panics.
struct ScanScope<'l, K, S> {
    lexer: &'l mut Lexer<K, S>,
    previous: Delivery<K>,
}

impl<K, S> Drop for ScanScope<'_, K, S> {
    fn drop(&mut self) {
        self.lexer.delivery = mem::replace(&mut self.previous, Delivery::Queue);
    }
}

/// Iterator over the tokens of a [`Lexer`], returned by [`Lexer::tokens`].
///
/// Stops for good at the first end of output.
#[derive(Debug)]
pub struct Tokens<'a, K, S> {
    lexer: &'a mut Lexer<K, S>,
    done: bool,
}

impl<K, S: ByteSource> Iterator for Tokens<'_, K, S> {
    type Item = Token<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        self.done = token.is_none();
        token
    }
}

impl<K, S: ByteSource> core::iter::FusedIterator for Tokens<'_, K, S> {}
