/// Configuration options for a [`Lexer`](crate::Lexer).
///
/// # Examples
///
/// ```rust
/// use runelex::{DecodeMode, Lexer, LexerOptions, Token};
///
/// let options = LexerOptions {
///     decode_mode: DecodeMode::Strict,
///     ..Default::default()
/// };
/// let lexer: Lexer<u8, &[u8]> = Lexer::with_options(&b"abc"[..], None, options);
/// assert_eq!(lexer.bytes_read(), 0);
/// ```
///
/// # Default
///
/// Lossy decoding and no preallocated lookahead buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerOptions {
    /// How byte sequences that are not valid UTF-8 are decoded.
    ///
    /// # Default
    ///
    /// [`DecodeMode::Lossy`]
    pub decode_mode: DecodeMode,

    /// Number of bytes to reserve up front for the lookahead buffer.
    ///
    /// The buffer only ever holds the text consumed since the last emission
    /// plus whatever has been rewound, so this is a hint for the longest token
    /// the grammar expects, not for the size of the input.
    ///
    /// # Default
    ///
    /// `0`
    pub buffer_capacity: usize,
}

/// Decoding policy for invalid UTF-8 in the byte source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    /// Replace each maximal invalid subsequence with `U+FFFD` and keep going.
    #[default]
    Lossy,
    /// Treat the first invalid subsequence as the end of input.
    Strict,
}
