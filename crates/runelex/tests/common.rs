#![allow(missing_docs, dead_code)]

use runelex::{ByteSource, Lexer, StateFn, Transition};

/// Token kinds of a small expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Number,
    Ident,
    Operator,
    String,
    LParen,
    RParen,
}

const DIGITS: &str = "0123456789";

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn start<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    l.take(char::is_whitespace);
    l.ignore();
    Some(match l.peek()? {
        '0'..='9' => StateFn(number),
        '"' => StateFn(string),
        '(' | ')' => StateFn(paren),
        c if c.is_alphabetic() || c == '_' => StateFn(ident),
        _ => StateFn(operator),
    })
}

fn number<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    l.take(DIGITS);
    // A fraction needs a digit after the dot.
    if l.accept('.') {
        if l.peek().is_some_and(is_digit) {
            l.take(DIGITS);
        } else {
            l.rewind();
        }
    }
    // So does an exponent; otherwise give back the marker and the sign.
    if l.accept("eE") {
        let signed = l.accept("+-");
        if l.peek().is_some_and(is_digit) {
            l.take(DIGITS);
        } else {
            if signed {
                l.rewind();
            }
            l.rewind();
        }
    }
    l.emit(Expr::Number);
    Some(StateFn(start))
}

fn ident<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    l.take(|c: char| c.is_alphanumeric() || c == '_');
    l.emit(Expr::Ident);
    Some(StateFn(start))
}

fn paren<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    match l.next()? {
        '(' => l.emit(Expr::LParen),
        _ => l.emit(Expr::RParen),
    }
    Some(StateFn(start))
}

fn operator<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    match l.next()? {
        '<' | '>' | '=' | '!' => {
            l.accept('=');
        }
        '*' => {
            l.accept('*');
        }
        '+' | '-' | '/' | '%' | ',' => {}
        c => {
            l.error(format!("unexpected character {c:?}"));
            return None;
        }
    }
    l.emit(Expr::Operator);
    Some(StateFn(start))
}

fn string<S: ByteSource>(l: &mut Lexer<Expr, S>) -> Transition<Expr, S> {
    l.next();
    l.ignore();
    loop {
        match l.next() {
            Some('"') => {
                l.rewind();
                l.emit(Expr::String);
                l.next();
                l.ignore();
                return Some(StateFn(start));
            }
            Some('\\') => {
                l.next();
            }
            Some(_) => {}
            None => {
                l.error("unterminated string");
                return None;
            }
        }
    }
}

/// A lexer for the expression language with a no-op error handler.
pub fn expr_lexer<S: ByteSource>(source: S) -> Lexer<Expr, S> {
    Lexer::new(source, Some(StateFn(start))).with_error_handler(|_| {})
}
