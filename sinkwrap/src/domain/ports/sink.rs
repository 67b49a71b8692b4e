//! Sink ports - the basic chunk-write capability and the optional byte and
//! string capabilities layered on top of it.

/// Error type shared by every capability of a sink.
pub trait ErrorType {
    /// Error reported by the sink.
    type Error: core::fmt::Debug;
}

/// Function pointer to a sink's own single-byte write.
pub type WriteByteFn<W> = fn(&mut W, u8) -> Result<(), <W as ErrorType>::Error>;

/// Function pointer to a sink's own string write.
pub type WriteStrFn<W> = fn(&mut W, &str) -> Result<usize, <W as ErrorType>::Error>;

/// Basic sink: accepts a chunk of bytes.
///
/// This is the only capability an adapter requires. A sink that also
/// implements [`WriteByte`] or [`WriteStr`] advertises it by overriding the
/// matching probing hook, otherwise the adapter emulates the capability with
/// [`write`](Write::write).
///
/// # Examples
///
/// ```
/// use sinkwrap::{ErrorType, Write, WriteByte, WriteByteFn};
///
/// struct Uart(Vec<u8>);
///
/// impl ErrorType for Uart {
///     type Error = core::convert::Infallible;
/// }
///
/// impl Write for Uart {
///     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
///         self.0.extend_from_slice(buf);
///         Ok(buf.len())
///     }
///
///     fn native_write_byte() -> Option<WriteByteFn<Self>> {
///         Some(<Self as WriteByte>::write_byte)
///     }
/// }
///
/// impl WriteByte for Uart {
///     fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
///         self.0.push(byte);
///         Ok(())
///     }
/// }
/// ```
pub trait Write: ErrorType {
    /// Write a chunk of bytes, returning how many were accepted.
    ///
    /// # Behavior
    ///
    /// - Accepting fewer bytes than `buf.len()` without an error is a legal
    ///   short write; callers must tolerate it
    /// - Implementations should not return `Ok(0)` for a non-empty `buf`
    ///
    /// # Errors
    ///
    /// Returns the sink's own error when nothing could be written.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Probe for a native single-byte write.
    ///
    /// The default reports none. Sinks implementing [`WriteByte`] should
    /// return `Some(<Self as WriteByte>::write_byte)`.
    fn native_write_byte() -> Option<WriteByteFn<Self>>
    where
        Self: Sized,
    {
        None
    }

    /// Probe for a native string write.
    ///
    /// The default reports none. Sinks implementing [`WriteStr`] should
    /// return `Some(<Self as WriteStr>::write_str)`.
    fn native_write_str() -> Option<WriteStrFn<Self>>
    where
        Self: Sized,
    {
        None
    }
}

/// Byte sink: accepts a single byte.
pub trait WriteByte: ErrorType {
    /// Write one byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte was not written.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// String sink: accepts UTF-8 text.
pub trait WriteStr: ErrorType {
    /// Write a string, returning how many of its bytes were accepted.
    ///
    /// Short writes follow the same rules as [`Write::write`].
    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error>;
}

/// Full sink: chunk, byte and string writes.
pub trait FullWrite: Write + WriteByte + WriteStr {}

impl<T: Write + WriteByte + WriteStr> FullWrite for T {}
