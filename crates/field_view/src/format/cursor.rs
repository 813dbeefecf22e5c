//! Bounds-checked read cursor over an in-memory field file.
use nom::number::{complete as number, Endianness};
use nom::{multi, Parser};

use super::{ByteOrder, WORD};
use crate::error::{Error, Result, Stage};

type NomError<'a> = nom::error::Error<&'a [u8]>;

/// Sequential reader over a byte slice.
///
/// Every read names the [`Stage`] it belongs to and only advances when the full
/// request is available, so a short read leaves the position untouched.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    endian: Endianness,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self {
            bytes,
            pos: 0,
            endian: order.into(),
        }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_i32(&mut self, stage: Stage) -> Result<i32> {
        let endian = self.endian;
        self.words(stage, 1, number::i32(endian))
    }

    /// Reads `count` consecutive `i32` values.
    pub fn read_i32s(&mut self, stage: Stage, count: usize) -> Result<Vec<i32>> {
        let endian = self.endian;
        self.words(stage, count, multi::count(number::i32(endian), count))
    }

    /// Reads `count` consecutive `f32` values, preserving their bit patterns.
    pub fn read_f32s(&mut self, stage: Stage, count: usize) -> Result<Vec<f32>> {
        let endian = self.endian;
        self.words(stage, count, multi::count(number::f32(endian), count))
    }

    /// Runs `parser` over the next `count` words.
    ///
    /// The length is checked up front so truncation reports exact byte counts and
    /// `count` never drives an allocation larger than the input.
    fn words<O, P>(&mut self, stage: Stage, count: usize, mut parser: P) -> Result<O>
    where
        P: Parser<&'a [u8], O, NomError<'a>>,
    {
        let bytes = self.bytes;
        let input = &bytes[self.pos..];
        let truncated = |expected| Error::Truncated {
            stage,
            expected,
            actual: input.len(),
        };
        let expected = count
            .checked_mul(WORD)
            .ok_or_else(|| truncated(usize::MAX))?;
        if input.len() < expected {
            return Err(truncated(expected));
        }

        let (rest, values) = parser.parse(input).map_err(|_| truncated(expected))?;
        self.pos = bytes.len() - rest.len();
        Ok(values)
    }
}
