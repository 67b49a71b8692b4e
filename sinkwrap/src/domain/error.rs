//! Adapter errors.
//!
//! Sink failures are carried through untouched. The only error the adapter
//! produces on its own is a single-byte write that the sink neither accepted
//! nor rejected.

use core::fmt;

/// Errors reported by an [`Adapter`](crate::Adapter) or
/// [`FullWriter`](crate::FullWriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// Error from the wrapped sink, unmodified.
    Sink(E),

    /// The sink accepted no bytes of a single-byte write yet reported no error.
    ///
    /// This is a contract violation by the sink: a one-byte write either
    /// succeeds or says why not. String writes never produce this; a short
    /// string write is returned to the caller as a count.
    ShortWrite,
}

impl<E> Error<E> {
    /// Get the sink error, if this is one.
    pub fn sink(&self) -> Option<&E> {
        match self {
            Self::Sink(e) => Some(e),
            Self::ShortWrite => None,
        }
    }

    /// Consume the error and return the sink error, if this is one.
    pub fn into_sink(self) -> Option<E> {
        match self {
            Self::Sink(e) => Some(e),
            Self::ShortWrite => None,
        }
    }

    /// Whether the adapter detected a short write without error.
    pub const fn is_short_write(&self) -> bool {
        matches!(self, Self::ShortWrite)
    }
}

impl<E: fmt::Display> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sink(e) => write!(f, "Sink error: {}", e),
            Self::ShortWrite => write!(f, "write_byte: sink accepted no bytes and returned no error"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Error<E> {}

// Lets adapters slot into code written against embedded_io
impl<E: embedded_io::Error + fmt::Display> embedded_io::Error for Error<E> {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            Self::Sink(e) => e.kind(),
            Self::ShortWrite => embedded_io::ErrorKind::WriteZero,
        }
    }
}

#[cfg(feature = "std")]
impl From<Error<std::io::Error>> for std::io::Error {
    fn from(err: Error<std::io::Error>) -> Self {
        match err {
            Error::Sink(e) => e,
            Error::ShortWrite => std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "write_byte: sink accepted no bytes and returned no error",
            ),
        }
    }
}
