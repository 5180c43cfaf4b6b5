//! Lexes dotted paths such as `123.hello  675.world` read from standard input
//! (or the first argument) and prints one token per line.
//!
//! ```sh
//! echo '123.hello  675.world' | cargo run --example dotted_idents
//! ```
#![allow(missing_docs)]

use std::io::{self, Read};

use runelex::{ByteSource, Lexer, StateFn, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Number,
    Dot,
    Ident,
}

fn number<S: ByteSource>(l: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
    l.take("0123456789");
    l.emit(Kind::Number);
    if l.accept('.') {
        l.emit(Kind::Dot);
        return Some(StateFn(ident));
    }
    Some(StateFn(separator))
}

fn ident<S: ByteSource>(l: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
    l.take(|c: char| c.is_alphanumeric() || c == '_');
    l.emit(Kind::Ident);
    if l.accept('.') {
        l.emit(Kind::Dot);
        return Some(StateFn(ident));
    }
    Some(StateFn(separator))
}

fn separator<S: ByteSource>(l: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
    let offset = l.bytes_read();
    match l.next()? {
        c if c.is_whitespace() => {
            l.take(char::is_whitespace);
            l.ignore();
            l.peek()?;
            Some(StateFn(number))
        }
        c => {
            l.error(format!("unexpected {c:?} at byte {offset}"));
            None
        }
    }
}

fn main() {
    let input: Box<dyn Read> = match std::env::args().nth(1) {
        Some(arg) => Box::new(io::Cursor::new(arg.into_bytes())),
        None => Box::new(io::stdin().lock()),
    };

    let mut lexer = Lexer::new(input, Some(StateFn(number)))
        .with_error_handler(|message| eprintln!("error: {message}"));
    for token in lexer.tokens() {
        println!("{:<6?} {:?}", token.kind, token.value);
    }
    if lexer.err().is_some() {
        std::process::exit(1);
    }
}
