#![no_main]
use std::io::Read;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use runelex::{ByteSource, DecodeMode, Lexer, LexerOptions, StateFn, Token, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Digits,
    Word,
    Other,
}

#[derive(Debug, Arbitrary)]
struct Input {
    strict: bool,
    /// Chunk sizes handed out by the reader, cycled.
    splits: Vec<u8>,
    data: Vec<u8>,
}

/// Hands out `data` in chunks whose sizes follow `splits`.
struct Chunked<'a> {
    data: &'a [u8],
    splits: &'a [u8],
    turn: usize,
}

impl Read for Chunked<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let want = match self.splits {
            [] => buf.len(),
            splits => usize::from(splits[self.turn % splits.len()]).max(1),
        };
        self.turn += 1;
        let n = want.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

// Every code point lands in some token. Digits followed by exactly one letter
// give the letter back, so rewinds cross chunk boundaries.
fn start<S: ByteSource>(l: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
    let c = l.next()?;
    if c.is_ascii_digit() {
        l.take(|c: char| c.is_ascii_digit());
        if l.accept(char::is_alphabetic) && !l.accept(char::is_alphabetic) {
            l.rewind();
        }
        l.emit(Kind::Digits);
    } else if c.is_alphabetic() {
        l.take(char::is_alphanumeric);
        l.emit(Kind::Word);
    } else {
        l.emit(Kind::Other);
    }
    Some(StateFn(start))
}

fn lexer<'a>(input: &'a Input) -> Lexer<Kind, Chunked<'a>> {
    let options = LexerOptions {
        decode_mode: if input.strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Lossy
        },
        ..LexerOptions::default()
    };
    let reader = Chunked {
        data: &input.data,
        splits: &input.splits,
        turn: 0,
    };
    Lexer::with_options(reader, Some(StateFn(start)), options)
}

fn check(input: &Input) {
    let mut pushed = Vec::new();
    let mut push = lexer(input);
    push.scan(|t| pushed.push(t));

    let mut pull = lexer(input);
    let pulled: Vec<Token<Kind>> = pull.tokens().collect();
    assert_eq!(pushed, pulled);
    assert_eq!(push.bytes_read(), pull.bytes_read());

    let text: String = pushed.iter().map(|t| t.value.as_str()).collect();
    if !input.strict {
        assert_eq!(text, String::from_utf8_lossy(&input.data));
        assert_eq!(push.bytes_read(), input.data.len());
    }
    assert!(pushed.iter().all(|t| !t.value.is_empty()));
}

fuzz_target!(|input: Input| check(&input));
