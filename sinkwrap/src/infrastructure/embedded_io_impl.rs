//! Bridge from the embedded_io ecosystem to the sink ports.
//!
//! embedded_io writers only offer chunk writes, so they come in as basic
//! sinks and get their byte and string writes from an adapter.

use crate::domain::{ErrorType, Write};

/// Basic sink over an [`embedded_io::Write`] writer.
///
/// # Example
///
/// ```
/// use embedded_io_adapters::std::FromStd;
/// use sinkwrap::{wrap, FromEmbeddedIo, WriteByte, WriteStr};
///
/// let mut sink = FromEmbeddedIo::new(FromStd::new(Vec::<u8>::new()));
/// let mut w = wrap(&mut sink);
/// w.write_byte(b'>').unwrap();
/// w.write_str(" ok").unwrap();
/// assert_eq!(sink.into_inner().into_inner(), b"> ok");
/// ```
pub struct FromEmbeddedIo<T>(T);

impl<T> FromEmbeddedIo<T> {
    /// Create a new sink wrapping the given writer.
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Get a reference to the inner writer.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Get a mutable reference to the inner writer.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consume the sink and return the inner writer.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: embedded_io::ErrorType> ErrorType for FromEmbeddedIo<T> {
    type Error = T::Error;
}

impl<T: embedded_io::Write> Write for FromEmbeddedIo<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.0.write(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Capabilities, Error, WriteByte, WriteStr, wrap};
    use core::fmt;
    use embedded_io::Error as _;

    #[derive(Debug, PartialEq)]
    struct Unplugged;

    impl fmt::Display for Unplugged {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Device unplugged")
        }
    }

    impl core::error::Error for Unplugged {}

    impl embedded_io::Error for Unplugged {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::NotConnected
        }
    }

    // Mock UART that stops accepting bytes after `room` and fails once unplugged
    struct MockUart {
        data: Vec<u8>,
        room: usize,
        plugged: bool,
    }

    impl embedded_io::ErrorType for MockUart {
        type Error = Unplugged;
    }

    impl embedded_io::Write for MockUart {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            if !self.plugged {
                return Err(Unplugged);
            }
            let n = buf.len().min(self.room);
            self.data.extend_from_slice(&buf[..n]);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_embedded_io_writer_is_basic_sink() {
        assert_eq!(Capabilities::probe::<FromEmbeddedIo<MockUart>>(), Capabilities::empty());
    }

    #[test]
    fn test_writes_reach_embedded_io_writer() {
        let uart = MockUart { data: Vec::new(), room: 16, plugged: true };
        let mut sink = FromEmbeddedIo::new(uart);
        let mut w = wrap(&mut sink);

        w.write_byte(b'A').unwrap();
        assert_eq!(w.write_str("T+").unwrap(), 2);
        assert_eq!(w.write(b"OK").unwrap(), 2);

        assert_eq!(sink.inner().data, b"AT+OK");
    }

    #[test]
    fn test_full_uart_reports_write_zero() {
        let uart = MockUart { data: Vec::new(), room: 2, plugged: true };
        let mut sink = FromEmbeddedIo::new(uart);
        let mut w = wrap(&mut sink);

        assert_eq!(w.write_str("abc").unwrap(), 2);
        let err = w.write_byte(b'd').unwrap_err();
        assert_eq!(err, Error::ShortWrite);
        assert_eq!(err.kind(), embedded_io::ErrorKind::WriteZero);
    }

    #[test]
    fn test_unplugged_uart_error_kind_survives() {
        let uart = MockUart { data: Vec::new(), room: 16, plugged: false };
        let mut sink = FromEmbeddedIo::new(uart);
        let mut w = wrap(&mut sink);

        let err = w.write_byte(b'x').unwrap_err();
        assert_eq!(err, Error::Sink(Unplugged));
        assert_eq!(err.kind(), embedded_io::ErrorKind::NotConnected);

        sink.inner_mut().plugged = true;
        let mut w = wrap(&mut sink);
        w.write_str("back").unwrap();
        assert_eq!(sink.into_inner().data, b"back");
    }
}
