use alloc::{collections::VecDeque, vec::Vec};
use core::ptr::NonNull;

use crate::Token;

/// A consumer of emitted tokens.
///
/// Closures taking a [`Token`] are sinks, and so are `Vec` and `VecDeque`,
/// which collect tokens in emission order.
pub trait TokenSink<K> {
    /// Receives the next token. Called once per token, in emission order.
    fn push_token(&mut self, token: Token<K>);
}

impl<K, F> TokenSink<K> for F
where
    F: FnMut(Token<K>),
{
    fn push_token(&mut self, token: Token<K>) {
        self(token);
    }
}

impl<K> TokenSink<K> for Vec<Token<K>> {
    fn push_token(&mut self, token: Token<K>) {
        self.push(token);
    }
}

impl<K> TokenSink<K> for VecDeque<Token<K>> {
    fn push_token(&mut self, token: Token<K>) {
        self.push_back(token);
    }
}

/// A type-erased `&mut T` where `T: TokenSink<K>`, installed by
/// [`Lexer::scan_into`](crate::Lexer::scan_into) for the duration of a scan.
pub(crate) struct ErasedSink<K> {
    data: NonNull<()>,
    push: unsafe fn(NonNull<()>, Token<K>),
}

impl<K> ErasedSink<K> {
    pub(crate) fn new<T: TokenSink<K>>(sink: &mut T) -> Self {
        Self {
            data: NonNull::from(sink).cast(),
            push: push_into::<K, T>,
        }
    }

    /// # Safety
    ///
    /// The sink this was created from must still be alive and not otherwise
    /// borrowed.
    pub(crate) unsafe fn push(&self, token: Token<K>) {
        unsafe { (self.push)(self.data, token) }
    }
}

// Manual impls: deriving would demand `K: Clone`.
impl<K> Clone for ErasedSink<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ErasedSink<K> {}

unsafe fn push_into<K, T: TokenSink<K>>(data: NonNull<()>, token: Token<K>) {
    unsafe { data.cast::<T>().as_mut() }.push_token(token);
}
