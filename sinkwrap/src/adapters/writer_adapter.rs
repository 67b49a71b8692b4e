//! Adapter that completes a basic sink with byte and string writes.

use crate::domain::{Capabilities, Error, ErrorType, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn};
use alloc::vec::Vec;

/// Initial capacity of the string scratch buffer.
pub const STRING_SCRATCH_CAPACITY: usize = 32;

/// How single-byte writes reach the sink.
enum ByteWriter<W: ErrorType> {
    /// The sink's own `write_byte`.
    Native(WriteByteFn<W>),
    /// One-byte chunk writes through this scratch cell.
    Emulated([u8; 1]),
}

/// How string writes reach the sink.
enum StrWriter<W: ErrorType> {
    /// The sink's own `write_str`.
    Native(WriteStrFn<W>),
    /// Chunk writes of the string copied into this reusable buffer.
    Emulated(Vec<u8>),
}

/// Adapter that gives any [`Write`] sink the full capability set.
///
/// Capabilities are probed once, in [`new`](Adapter::new). Each capability
/// the sink implements natively is called directly; each one it lacks is
/// emulated through [`Write::write`] and a scratch buffer owned by the
/// adapter.
///
/// The adapter borrows the sink exclusively for its lifetime and never
/// buffers: every call reaches the sink before it returns.
///
/// # Type Parameters
///
/// - `W`: The basic sink type
///
/// # Examples
///
/// ```
/// use sinkwrap::{Adapter, Capabilities, ErrorType, Write, WriteByte, WriteStr};
///
/// struct Chunks(Vec<u8>);
///
/// impl ErrorType for Chunks {
///     type Error = core::convert::Infallible;
/// }
///
/// impl Write for Chunks {
///     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
///         self.0.extend_from_slice(buf);
///         Ok(buf.len())
///     }
/// }
///
/// let mut sink = Chunks(Vec::new());
/// let mut adapter = Adapter::new(&mut sink);
/// assert_eq!(adapter.capabilities(), Capabilities::empty());
///
/// adapter.write_byte(b'H').unwrap();
/// adapter.write_byte(b'i').unwrap();
/// assert_eq!(adapter.write_str("!").unwrap(), 1);
/// assert_eq!(sink.0, b"Hi!");
/// ```
pub struct Adapter<'a, W: Write> {
    inner: &'a mut W,
    byte: ByteWriter<W>,
    string: StrWriter<W>,
}

impl<'a, W: Write> Adapter<'a, W> {
    /// Create an adapter around `inner`, probing its capabilities.
    pub fn new(inner: &'a mut W) -> Self {
        Self::with_capacity(inner, STRING_SCRATCH_CAPACITY)
    }

    /// Create an adapter whose string scratch starts with `capacity` bytes.
    ///
    /// The capacity only matters when the sink lacks a native string write;
    /// otherwise nothing is allocated.
    pub fn with_capacity(inner: &'a mut W, capacity: usize) -> Self {
        let byte = match W::native_write_byte() {
            Some(write_byte) => ByteWriter::Native(write_byte),
            None => ByteWriter::Emulated([0]),
        };
        let string = match W::native_write_str() {
            Some(write_str) => StrWriter::Native(write_str),
            None => StrWriter::Emulated(Vec::with_capacity(capacity)),
        };

        let adapter = Self { inner, byte, string };
        trace!(
            "sinkwrap: adapting {} (native write_byte: {}, native write_str: {})",
            core::any::type_name::<W>(),
            adapter.capabilities().contains(Capabilities::WRITE_BYTE),
            adapter.capabilities().contains(Capabilities::WRITE_STR),
        );
        adapter
    }

    /// Capabilities the wrapped sink provides natively.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::WRITE_BYTE, matches!(self.byte, ByteWriter::Native(_)));
        caps.set(Capabilities::WRITE_STR, matches!(self.string, StrWriter::Native(_)));
        caps
    }

    /// Get a reference to the wrapped sink.
    pub fn inner(&self) -> &W {
        &*self.inner
    }

    /// Get a mutable reference to the wrapped sink.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut *self.inner
    }

    /// Release the adapter and return the borrow of the wrapped sink.
    pub fn into_inner(self) -> &'a mut W {
        self.inner
    }
}

impl<W: Write> ErrorType for Adapter<'_, W> {
    type Error = Error<W::Error>;
}

impl<W: Write> Write for Adapter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.inner.write(buf).map_err(Error::Sink)
    }

    fn native_write_byte() -> Option<WriteByteFn<Self>> {
        Some(<Self as WriteByte>::write_byte)
    }

    fn native_write_str() -> Option<WriteStrFn<Self>> {
        Some(<Self as WriteStr>::write_str)
    }
}

impl<W: Write> WriteByte for Adapter<'_, W> {
    /// Write one byte.
    ///
    /// Without a native byte write the byte goes out as a one-byte chunk.
    /// The chunk write must then accept exactly that byte; if it reports
    /// any other count without an error, [`Error::ShortWrite`] is returned.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        match self.byte {
            ByteWriter::Native(write_byte) => write_byte(&mut *self.inner, byte).map_err(Error::Sink),
            ByteWriter::Emulated(ref mut scratch) => {
                scratch[0] = byte;
                match self.inner.write(&scratch[..]) {
                    Ok(1) => Ok(()),
                    Ok(n) => {
                        warn!("sinkwrap: one-byte write accepted {} bytes without error", n);
                        Err(Error::ShortWrite)
                    }
                    Err(e) => Err(Error::Sink(e)),
                }
            }
        }
    }
}

impl<W: Write> WriteStr for Adapter<'_, W> {
    /// Write a string.
    ///
    /// Without a native string write the bytes are copied into the reused
    /// scratch buffer and sent as one chunk. The chunk write's result is
    /// returned as-is, short writes included.
    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error> {
        match self.string {
            StrWriter::Native(write_str) => write_str(&mut *self.inner, s).map_err(Error::Sink),
            StrWriter::Emulated(ref mut scratch) => {
                scratch.clear();
                scratch.extend_from_slice(s.as_bytes());
                self.inner.write(scratch.as_slice()).map_err(Error::Sink)
            }
        }
    }
}
