//! Character sets accepted by [`Lexer::take`](crate::Lexer::take) and
//! [`Lexer::accept`](crate::Lexer::accept).

/// A set of code points.
///
/// ```rust
/// use runelex::Accept;
///
/// assert!("0123456789".accepts('7'));
/// assert!(!'x'.accepts('y'));
/// assert!(['+', '-'].accepts('-'));
/// assert!((|c: char| c.is_alphabetic()).accepts('é'));
/// ```
pub trait Accept {
    /// Returns `true` if `ch` is a member of the set.
    fn accepts(&self, ch: char) -> bool;
}

impl Accept for &str {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(ch)
    }
}

impl Accept for char {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        *self == ch
    }
}

impl<const N: usize> Accept for [char; N] {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}

impl Accept for &[char] {
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self.contains(&ch)
    }
}

impl<F> Accept for F
where
    F: Fn(char) -> bool,
{
    #[inline]
    fn accepts(&self, ch: char) -> bool {
        self(ch)
    }
}
