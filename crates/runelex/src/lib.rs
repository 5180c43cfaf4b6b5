//! A lexer engine driven by hand-written state functions.
//!
//! The client defines its token kinds and a set of [`StateFn`]s. Each state
//! function consumes code points through the [`Lexer`] cursor operations,
//! closes spans with [`Lexer::emit`] or [`Lexer::ignore`], and returns the
//! state to run next, or `None` to stop. The engine decodes the byte source
//! one code point at a time, keeps the lookahead window and the rewind log,
//! and delivers tokens either to a callback ([`Lexer::scan`]) or on demand
//! ([`Lexer::next_token`], [`Lexer::next_batch`], [`Lexer::tokens`]).
//!
//! ```rust
//! use runelex::{ByteSource, Lexer, StateFn, Token, Transition};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Kind {
//!     Number,
//!     Word,
//! }
//!
//! fn number<S: ByteSource>(lexer: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
//!     lexer.take("0123456789");
//!     lexer.emit(Kind::Number);
//!     Some(StateFn(space))
//! }
//!
//! fn word<S: ByteSource>(lexer: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
//!     lexer.take(char::is_alphabetic);
//!     lexer.emit(Kind::Word);
//!     Some(StateFn(space))
//! }
//!
//! fn space<S: ByteSource>(lexer: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
//!     lexer.take(' ');
//!     lexer.ignore();
//!     match lexer.peek() {
//!         Some(c) if c.is_ascii_digit() => Some(StateFn(number)),
//!         Some(_) => Some(StateFn(word)),
//!         None => None,
//!     }
//! }
//!
//! let mut lexer = Lexer::new(&b"12 apples"[..], Some(StateFn(space)));
//! let mut tokens = Vec::new();
//! lexer.scan(|token| tokens.push(token));
//! assert_eq!(
//!     tokens,
//!     [Token::new(Kind::Number, "12"), Token::new(Kind::Word, "apples")]
//! );
//! ```
//!
//! # Errors
//!
//! State functions report bad input with [`Lexer::error`]. With a handler
//! registered the error is recorded and lexing continues until a state
//! returns `None`; without one, raising an error panics.
//!
//! # Features
//!
//! - `std` (default): every [`std::io::Read`] is a [`ByteSource`]. Without it
//!   the crate is `no_std` and reads from byte slices.
//! - `serde`: `Serialize`/`Deserialize` for [`Token`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod accept;
mod buffer;
mod error;
mod lexer;
mod options;
mod sink;
mod source;
mod state;
mod token;

#[cfg(test)]
mod tests;

pub use accept::Accept;
pub use error::LexError;
pub use lexer::{Lexer, Tokens};
pub use options::{DecodeMode, LexerOptions};
pub use sink::TokenSink;
pub use source::ByteSource;
pub use state::{StateFn, Transition};
pub use token::Token;
