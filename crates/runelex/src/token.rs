use alloc::string::String;

/// A lexeme handed to a token sink.
///
/// `kind` is whatever type the client uses to tag tokens, usually a fieldless
/// enum. `value` is the text consumed between the previous emission boundary
/// and the call to [`Lexer::emit`](crate::Lexer::emit), and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<K> {
    /// The client-defined token kind.
    pub kind: K,
    /// The consumed text.
    pub value: String,
}

impl<K> Token<K> {
    /// Creates a token from a kind and its text.
    pub fn new(kind: K, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
