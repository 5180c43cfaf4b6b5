use alloc::{collections::VecDeque, vec, vec::Vec};

use super::grammar::{Kind, start_number, whitespace};
use crate::{ByteSource, Lexer, StateFn, Token, Transition};

fn lexer(input: &str) -> Lexer<Kind, &[u8]> {
    Lexer::new(input.as_bytes(), start_number()).with_error_handler(|_| {})
}

fn dotted() -> Vec<Token<Kind>> {
    vec![
        Token::new(Kind::Number, "123"),
        Token::new(Kind::Op, "."),
        Token::new(Kind::Ident, "hello"),
        Token::new(Kind::Number, "675"),
        Token::new(Kind::Op, "."),
        Token::new(Kind::Ident, "world"),
    ]
}

#[test]
fn lexing_numbers_one_batch_at_a_time() {
    let mut l = lexer("123");
    assert_eq!(l.next_batch(), Some(vec![Token::new(Kind::Number, "123")]));
    assert_eq!(l.next_batch(), None);
}

#[test]
fn multiple_tokens_push() {
    let mut l = lexer("123.hello  675.world");
    let mut tokens = Vec::new();
    l.scan(|tok| tokens.push(tok));
    assert_eq!(tokens, dotted());
    assert!(l.err().is_none());
}

#[test]
fn multiple_tokens_pull_single() {
    let mut l = lexer("123.hello  675.world");
    let mut tokens = Vec::new();
    while let Some(tok) = l.next_token() {
        tokens.push(tok);
    }
    assert_eq!(tokens, dotted());
}

#[test]
fn multiple_tokens_pull_batches() {
    let mut l = lexer("123.hello  675.world");
    let mut batches = Vec::new();
    while let Some(batch) = l.next_batch() {
        batches.push(batch);
    }
    // number state emits the number and the dot, ident emits the name, and
    // whitespace emits nothing.
    let sizes: Vec<usize> = batches.iter().map(Vec::len).collect();
    assert_eq!(sizes, [2, 1, 0, 2, 1, 0]);
    assert_eq!(batches.concat(), dotted());
}

#[test]
fn trailing_input_after_terminal_state_is_not_lexed() {
    let mut l = lexer("1 2 ");
    let tokens: Vec<_> = l.tokens().collect();
    assert_eq!(tokens, [Token::new(Kind::Number, "1")]);
    assert_eq!(l.peek(), Some(' '));
}

#[test]
fn scan_into_collects_into_sinks() {
    let mut queue = VecDeque::new();
    lexer("42.x").scan_into(&mut queue);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.pop_back(), Some(Token::new(Kind::Ident, "x")));

    let mut list = Vec::new();
    lexer("42.x").scan_into(&mut list);
    assert_eq!(list.len(), 3);
}

#[test]
fn next_token_stays_at_end_of_output() {
    let mut l = lexer("7");
    assert_eq!(l.next_token(), Some(Token::new(Kind::Number, "7")));
    assert_eq!(l.next_token(), None);
    assert_eq!(l.next_token(), None);
    assert_eq!(l.next_token(), None);
}

#[test]
fn next_batch_rearms_after_end_of_output() {
    let mut l = lexer("7");
    assert_eq!(l.next_batch(), Some(vec![Token::new(Kind::Number, "7")]));
    assert_eq!(l.next_batch(), None);
    // The next sequence runs the start state again over the exhausted input.
    assert_eq!(l.next_batch(), Some(vec![Token::new(Kind::Number, "")]));
    assert_eq!(l.next_batch(), None);
}

#[test]
fn tokens_iterator_is_fused() {
    let mut l = lexer("7");
    let mut it = l.tokens();
    assert!(it.next().is_some());
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}

#[test]
fn no_start_state_produces_nothing() {
    let mut l: Lexer<Kind, &[u8]> = Lexer::new(&b"123"[..], None);
    let mut count = 0;
    l.scan(|_| count += 1);
    assert_eq!(count, 0);
    assert_eq!(l.next_batch(), None);
    assert_eq!(l.next_token(), None);
    assert_eq!(l.next(), Some('1'));
}

#[test]
fn scan_resumes_where_pulling_stopped() {
    let mut l = lexer("1.a 2");
    assert_eq!(l.next_token(), Some(Token::new(Kind::Number, "1")));
    // The dot is still queued and the ident state is next in line.
    let mut rest = Vec::new();
    l.scan(|tok| rest.push(tok));
    assert_eq!(
        rest,
        [
            Token::new(Kind::Op, "."),
            Token::new(Kind::Ident, "a"),
            Token::new(Kind::Number, "2"),
        ]
    );
    assert_eq!(l.next_token(), None);
}

#[test]
fn scan_after_scan_runs_nothing() {
    let mut l = lexer("1.a 2");
    let mut first = Vec::new();
    l.scan_into(&mut first);
    assert_eq!(first.len(), 4);
    let mut second = Vec::new();
    l.scan_into(&mut second);
    assert!(second.is_empty());
}

#[test]
fn state_can_emit_many_tokens_in_one_step() {
    fn split<S: ByteSource>(l: &mut Lexer<Kind, S>) -> Transition<Kind, S> {
        while let Some(c) = l.next() {
            if c == ',' {
                l.rewind();
                l.emit(Kind::Ident);
                l.next();
                l.ignore();
            }
        }
        l.emit(Kind::Ident);
        None
    }

    let mut l: Lexer<Kind, &[u8]> = Lexer::new(&b"a,b,c"[..], Some(StateFn(split)));
    assert_eq!(l.next_token(), Some(Token::new(Kind::Ident, "a")));
    assert_eq!(l.next_token(), Some(Token::new(Kind::Ident, "b")));
    assert_eq!(l.next_token(), Some(Token::new(Kind::Ident, "c")));
    assert_eq!(l.next_token(), None);
}

#[test]
fn bytes_read_tracks_emitted_input() {
    let mut l = lexer("12.ab");
    l.next_batch();
    assert_eq!(l.bytes_read(), 3);
    l.next_batch();
    assert_eq!(l.bytes_read(), 5);
}

#[test]
fn whitespace_state_alone_skips_and_hands_over() {
    let mut l: Lexer<Kind, &[u8]> = Lexer::new(&b"  9"[..], Some(StateFn(whitespace)));
    assert_eq!(l.next_batch(), Some(Vec::new()));
    assert_eq!(l.next_batch(), Some(vec![Token::new(Kind::Number, "9")]));
    assert_eq!(l.next_batch(), None);
}
