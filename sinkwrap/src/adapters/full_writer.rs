//! Entry point: give any basic sink the full capability set.

use crate::{
    adapters::Adapter,
    domain::{Capabilities, Error, ErrorType, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn},
};

/// A sink with chunk, byte and string writes, as returned by [`wrap`].
///
/// Sinks that already implement every capability are passed through
/// untouched; everything else goes through an [`Adapter`].
pub enum FullWriter<'a, W: Write> {
    /// The sink is natively full; calls go straight to its own methods.
    Passthrough {
        /// The wrapped sink, exactly as given to [`wrap`].
        inner: &'a mut W,
        /// The sink's own `write_byte`.
        write_byte: WriteByteFn<W>,
        /// The sink's own `write_str`.
        write_str: WriteStrFn<W>,
    },
    /// The sink lacks at least one capability.
    Adapted(Adapter<'a, W>),
}

/// Give `inner` chunk, byte and string writes.
///
/// A sink that natively provides all three is returned as a
/// [`FullWriter::Passthrough`] holding the very same reference, with no
/// scratch buffers. Any other sink is probed once and wrapped in an
/// [`Adapter`]. No I/O happens here.
///
/// # Examples
///
/// ```
/// use sinkwrap::{wrap, WriteStr};
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut w = wrap(&mut out);
/// assert!(w.is_passthrough());
/// assert_eq!(w.write_str("hi").unwrap(), 2);
/// ```
pub fn wrap<W: Write>(inner: &mut W) -> FullWriter<'_, W> {
    match (W::native_write_byte(), W::native_write_str()) {
        (Some(write_byte), Some(write_str)) => {
            trace!("sinkwrap: {} is a full writer, passing through", core::any::type_name::<W>());
            FullWriter::Passthrough { inner, write_byte, write_str }
        }
        _ => FullWriter::Adapted(Adapter::new(inner)),
    }
}

impl<'a, W: Write> FullWriter<'a, W> {
    /// Whether the sink was passed through without an adapter.
    pub fn is_passthrough(&self) -> bool {
        matches!(self, Self::Passthrough { .. })
    }

    /// Capabilities the wrapped sink provides natively.
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Passthrough { .. } => Capabilities::all(),
            Self::Adapted(adapter) => adapter.capabilities(),
        }
    }

    /// Get a reference to the wrapped sink.
    pub fn inner(&self) -> &W {
        match self {
            Self::Passthrough { inner, .. } => &**inner,
            Self::Adapted(adapter) => adapter.inner(),
        }
    }

    /// Get a mutable reference to the wrapped sink.
    pub fn inner_mut(&mut self) -> &mut W {
        match self {
            Self::Passthrough { inner, .. } => &mut **inner,
            Self::Adapted(adapter) => adapter.inner_mut(),
        }
    }

    /// Release the writer and return the borrow of the wrapped sink.
    pub fn into_inner(self) -> &'a mut W {
        match self {
            Self::Passthrough { inner, .. } => inner,
            Self::Adapted(adapter) => adapter.into_inner(),
        }
    }
}

impl<W: Write> ErrorType for FullWriter<'_, W> {
    type Error = Error<W::Error>;
}

impl<W: Write> Write for FullWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        match self {
            Self::Passthrough { inner, .. } => inner.write(buf).map_err(Error::Sink),
            Self::Adapted(adapter) => adapter.write(buf),
        }
    }

    fn native_write_byte() -> Option<WriteByteFn<Self>> {
        Some(<Self as WriteByte>::write_byte)
    }

    fn native_write_str() -> Option<WriteStrFn<Self>> {
        Some(<Self as WriteStr>::write_str)
    }
}

impl<W: Write> WriteByte for FullWriter<'_, W> {
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        match self {
            Self::Passthrough { inner, write_byte, .. } => (*write_byte)(&mut **inner, byte).map_err(Error::Sink),
            Self::Adapted(adapter) => adapter.write_byte(byte),
        }
    }
}

impl<W: Write> WriteStr for FullWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error> {
        match self {
            Self::Passthrough { inner, write_str, .. } => (*write_str)(&mut **inner, s).map_err(Error::Sink),
            Self::Adapted(adapter) => adapter.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::writer_adapter::tests::{Broken, FailingSink, MockSink, ShortSink};

    const TEXT: &str = "1234567890ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    // Bytes, then 3-byte chunks, then 3-byte strings
    fn write_in_pieces<W: Write>(sink: &mut W) {
        let mut w = wrap(sink);
        let bytes = TEXT.as_bytes();

        let mut i = 0;
        while i < 3 {
            w.write_byte(bytes[i]).unwrap();
            i += 1;
        }
        while i <= 15 {
            assert_eq!(w.write(&bytes[i..i + 3]).unwrap(), 3);
            i += 3;
        }
        while i < TEXT.len() {
            let j = (i + 3).min(TEXT.len());
            assert_eq!(w.write_str(&TEXT[i..j]).unwrap(), j - i);
            i = j;
        }
    }

    #[test]
    fn test_reassembles_for_every_capability_mix() {
        let mut plain = MockSink::<false, false>::default();
        write_in_pieces(&mut plain);
        assert_eq!(plain.data, TEXT.as_bytes());

        let mut bytewise = MockSink::<true, false>::default();
        write_in_pieces(&mut bytewise);
        assert_eq!(bytewise.data, TEXT.as_bytes());
        assert_eq!(bytewise.byte_writes, 3);

        let mut textual = MockSink::<false, true>::default();
        write_in_pieces(&mut textual);
        assert_eq!(textual.data, TEXT.as_bytes());
        assert_eq!(textual.str_writes, 6);

        let mut full = MockSink::<true, true>::default();
        write_in_pieces(&mut full);
        assert_eq!(full.data, TEXT.as_bytes());
        assert_eq!((full.byte_writes, full.str_writes), (3, 6));

        let mut vec: Vec<u8> = Vec::new();
        write_in_pieces(&mut vec);
        assert_eq!(vec, TEXT.as_bytes());
    }

    #[test]
    fn test_full_sink_is_passed_through() {
        let mut sink = MockSink::<true, true>::default();
        let ptr: *const MockSink<true, true> = &sink;

        let w = wrap(&mut sink);
        assert!(w.is_passthrough());
        assert_eq!(w.capabilities(), Capabilities::all());
        assert!(core::ptr::eq(w.into_inner(), ptr));
    }

    #[test]
    fn test_partial_sinks_are_adapted() {
        let mut sink = MockSink::<true, false>::default();
        let w = wrap(&mut sink);
        assert!(!w.is_passthrough());
        assert_eq!(w.capabilities(), Capabilities::WRITE_BYTE);

        let mut sink = MockSink::<false, false>::default();
        let ptr: *const MockSink<false, false> = &sink;
        let w = wrap(&mut sink);
        assert!(!w.is_passthrough());
        assert!(core::ptr::eq(w.into_inner(), ptr));
    }

    #[test]
    fn test_rewrapping_passes_through() {
        let mut sink = MockSink::<false, false>::default();
        let mut adapted = wrap(&mut sink);
        let ptr: *const FullWriter<'_, MockSink<false, false>> = &adapted;

        let mut rewrapped = wrap(&mut adapted);
        assert!(rewrapped.is_passthrough());
        rewrapped.write_byte(b'o').unwrap();
        rewrapped.write_str("k").unwrap();
        assert!(core::ptr::eq(rewrapped.into_inner(), ptr));

        assert_eq!(sink.data, b"ok");
    }

    #[test]
    fn test_sink_errors_through_wrap() {
        let mut sink = FailingSink;
        let mut w = wrap(&mut sink);
        assert_eq!(w.write(b"x"), Err(Error::Sink(Broken)));
        assert!(w.write_byte(b'x').unwrap_err().sink().is_some());
    }

    #[test]
    fn test_short_write_through_wrap() {
        let mut sink = ShortSink { data: Vec::new(), limit: 0 };
        let mut w = wrap(&mut sink);
        assert!(w.write_byte(b'x').unwrap_err().is_short_write());
        assert_eq!(w.write_str("abc"), Ok(0));
    }

    #[test]
    fn test_inner_access() {
        let mut out: Vec<u8> = Vec::new();
        let mut w = wrap(&mut out);
        w.write_str("abc").unwrap();
        assert_eq!(w.inner().as_slice(), b"abc");
        w.inner_mut().clear();
        w.write_byte(b'z').unwrap();
        assert_eq!(out, b"z");
    }
}
