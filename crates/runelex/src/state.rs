use core::fmt;

use crate::Lexer;

/// What a state function returns: the next state, or `None` to stop.
pub type Transition<K, S> = Option<StateFn<K, S>>;

/// A state of a client-defined lexer.
///
/// A state function consumes input through the [`Lexer`] cursor operations,
/// emits or ignores what it consumed, and names the state to run next. States
/// are plain functions, so they carry no data of their own.
///
/// ```rust
/// use runelex::{ByteSource, Lexer, StateFn, Transition};
///
/// fn digits<S: ByteSource>(lexer: &mut Lexer<&'static str, S>) -> Transition<&'static str, S> {
///     lexer.take("0123456789");
///     lexer.emit("digits");
///     None
/// }
///
/// let mut lexer = Lexer::new(&b"42"[..], Some(StateFn(digits)));
/// let tokens: Vec<_> = lexer.tokens().map(|t| t.value).collect();
/// assert_eq!(tokens, ["42"]);
/// ```
pub struct StateFn<K, S>(pub fn(&mut Lexer<K, S>) -> Transition<K, S>);

impl<K, S> StateFn<K, S> {
    /// Runs this state against `lexer`.
    #[inline]
    pub fn run(self, lexer: &mut Lexer<K, S>) -> Transition<K, S> {
        (self.0)(lexer)
    }
}

// Manual impls: deriving would demand `K: Clone` and `S: Clone`.
impl<K, S> Clone for StateFn<K, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, S> Copy for StateFn<K, S> {}

impl<K, S> fmt::Debug for StateFn<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateFn({:p})", self.0 as *const ())
    }
}

impl<K, S> From<fn(&mut Lexer<K, S>) -> Transition<K, S>> for StateFn<K, S> {
    fn from(f: fn(&mut Lexer<K, S>) -> Transition<K, S>) -> Self {
        StateFn(f)
    }
}
