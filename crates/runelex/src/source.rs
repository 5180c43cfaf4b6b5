//! Byte sources and the code-point decoding adapter.
//!
//! The lexer never sees raw bytes. It asks a [`CodePointSource`] for one
//! Unicode scalar at a time, and the adapter pulls exactly as many bytes from
//! the underlying [`ByteSource`] as that scalar needs.
//!
//! # End of input
//!
//! A read that produces zero bytes is the end of input. A failed read is
//! reported the same way: callers that need to tell the two apart should wrap
//! their reader and inspect the error themselves.
//!
//! # Invalid UTF-8
//!
//! Invalid sequences are handled according to [`DecodeMode`]. In lossy mode
//! the maximal invalid prefix becomes `U+FFFD` and any byte that could not
//! continue the sequence is held back to start the next scalar. In strict mode
//! the first invalid sequence ends the input for good.

use alloc::collections::VecDeque;

use crate::options::DecodeMode;

/// A producer of raw input bytes.
///
/// With the `std` feature enabled every [`std::io::Read`] is a byte source.
/// Without it, byte slices are.
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes into `buf` and returns how many bytes were
    /// written. Returning `0` signals that no more input is available.
    fn read_bytes(&mut self, buf: &mut [u8]) -> usize;
}

#[cfg(feature = "std")]
impl<R: std::io::Read + ?Sized> ByteSource for R {
    fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        match self.read(buf) {
            Ok(n) => n,
            Err(error) => {
                tracing::debug!(%error, "byte source read failed, treating as end of input");
                0
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl ByteSource for &[u8] {
    fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        n
    }
}

/// Decodes a [`ByteSource`] one code point at a time.
#[derive(Debug)]
pub(crate) struct CodePointSource<S> {
    inner: S,
    /// Bytes read from `inner` that belong to a later code point.
    held: VecDeque<u8>,
    bytes_read: usize,
    mode: DecodeMode,
    halted: bool,
}

impl<S> CodePointSource<S> {
    /// Number of bytes consumed by the code points decoded so far.
    pub(crate) fn bytes_read(&self) -> usize {
        self.bytes_read
    }
}

impl<S: ByteSource> CodePointSource<S> {
    pub(crate) fn new(inner: S, mode: DecodeMode) -> Self {
        Self {
            inner,
            held: VecDeque::new(),
            bytes_read: 0,
            mode,
            halted: false,
        }
    }

    /// Decodes the next code point, or returns `None` at end of input.
    pub(crate) fn next_code_point(&mut self) -> Option<char> {
        if self.halted {
            return None;
        }

        let lead = self.read_byte()?;
        let width = sequence_width(lead);
        let mut seq = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            let Some(byte) = self.read_byte() else {
                break;
            };
            if !is_continuation(byte) {
                self.held.push_front(byte);
                break;
            }
            seq[len] = byte;
            len += 1;
        }

        let (decoded, size) = bstr::decode_utf8(&seq[..len]);
        for &byte in seq[size..len].iter().rev() {
            self.held.push_front(byte);
        }

        match decoded {
            Some(ch) => {
                self.bytes_read += size;
                Some(ch)
            }
            None => match self.mode {
                DecodeMode::Lossy => {
                    self.bytes_read += size;
                    Some(char::REPLACEMENT_CHARACTER)
                }
                DecodeMode::Strict => {
                    tracing::debug!(
                        bytes = %bstr::BStr::new(&seq[..size]),
                        offset = self.bytes_read,
                        "invalid UTF-8 in strict mode, ending input"
                    );
                    self.halted = true;
                    self.held.clear();
                    None
                }
            },
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.held.pop_front() {
            return Some(byte);
        }
        let mut byte = [0u8; 1];
        match self.inner.read_bytes(&mut byte) {
            0 => None,
            _ => Some(byte[0]),
        }
    }
}

/// Length of the UTF-8 sequence announced by `lead`. Bytes that cannot start a
/// sequence count as one byte wide so they decode (and fail) on their own.
fn sequence_width(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
