//! Forward-only byte sources consumed by the decoder.
//!
//! The decoder never seeks. Everything it needs from its input is expressed by
//! [`ByteSource`]: read an exact number of bytes, read up to a NUL terminator,
//! and report whether the stream is exhausted.

use crate::error::{Error, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::io::{ErrorKind, Read};

/// Upper bound on the up-front allocation for a single read
const READ_CHUNK: usize = 8 * 1024;

/// Sequential little-endian byte source
pub trait ByteSource {
    /// Read exactly `count` bytes or fail with [`Error::Truncated`]
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>>;

    /// Read bytes up to and including the next NUL, returning them without the terminator
    fn read_until_nul(&mut self) -> Result<Vec<u8>>;

    /// True once no further byte can be read
    fn is_exhausted(&mut self) -> Result<bool>;

    /// Number of bytes consumed so far
    fn position(&self) -> u64;

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(&self.read_bytes(2)?))
    }

    fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(&self.read_bytes(4)?))
    }

    fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(&self.read_bytes(4)?))
    }

    fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(&self.read_bytes(8)?))
    }

    /// Read a 16-byte GUID in its on-disk byte order
    fn read_guid(&mut self) -> Result<[u8; 16]> {
        let bytes = self.read_bytes(16)?;
        let mut guid = [0u8; 16];
        guid.copy_from_slice(&bytes);
        Ok(guid)
    }
}

/// [`ByteSource`] over any [`Read`] implementation
///
/// Holds at most one byte of lookahead, used only to answer
/// [`ByteSource::is_exhausted`].
pub struct StreamCursor<R> {
    inner: R,
    position: u64,
    peeked: Option<u8>,
}

impl<R: Read> StreamCursor<R> {
    /// Wrap a reader positioned at the first byte of a shell link
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            position: 0,
            peeked: None,
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.peeked.take() {
            return Ok(Some(byte));
        }

        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

impl<R: Read> ByteSource for StreamCursor<R> {
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(count.min(READ_CHUNK));
        if count > 0 {
            if let Some(byte) = self.peeked.take() {
                buffer.push(byte);
            }
        }

        let remaining = (count - buffer.len()) as u64;
        self.inner.by_ref().take(remaining).read_to_end(&mut buffer)?;

        if buffer.len() < count {
            return Err(Error::Truncated {
                offset: self.position,
                wanted: count,
                available: buffer.len(),
            });
        }

        self.position += count as u64;
        Ok(buffer)
    }

    fn read_until_nul(&mut self) -> Result<Vec<u8>> {
        let start = self.position;
        let mut bytes = Vec::new();

        loop {
            match self.next_byte()? {
                Some(0) => {
                    self.position += bytes.len() as u64 + 1;
                    return Ok(bytes);
                }
                Some(byte) => bytes.push(byte),
                None => {
                    return Err(Error::Truncated {
                        offset: start,
                        wanted: bytes.len() + 1,
                        available: bytes.len(),
                    })
                }
            }
        }
    }

    fn is_exhausted(&mut self) -> Result<bool> {
        if self.peeked.is_some() {
            return Ok(false);
        }
        match self.next_byte()? {
            Some(byte) => {
                self.peeked = Some(byte);
                Ok(false)
            }
            None => Ok(true),
        }
    }

    fn position(&self) -> u64 {
        self.position
    }
}

/// Bookkeeping for one variable-length structure.
///
/// Tracks how many bytes of the structure have been consumed and how large its
/// header was declared to be, so optional trailing header fields can be read
/// only while they still fall inside the declared size.
#[derive(Debug, Clone, Copy, Default)]
pub struct Section {
    consumed: u32,
    declared: u32,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the declared header size once it has been read
    pub fn declare(&mut self, declared: u32) {
        self.declared = declared;
    }

    pub fn consumed(&self) -> u32 {
        self.consumed
    }

    pub fn declared(&self) -> u32 {
        self.declared
    }

    /// Read a mandatory field
    pub fn read_u32<S: ByteSource + ?Sized>(&mut self, source: &mut S) -> Result<u32> {
        let value = source.read_u32()?;
        self.consumed = self.consumed.saturating_add(4);
        Ok(value)
    }

    /// Read an optional field only if the declared size reaches past what has
    /// been consumed so far
    pub fn read_u32_if_declared<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<Option<u32>> {
        if self.declared > self.consumed {
            log::trace!(
                "declared size {} exceeds {} consumed bytes, reading optional field",
                self.declared,
                self.consumed
            );
            self.read_u32(source).map(Some)
        } else {
            Ok(None)
        }
    }
}
