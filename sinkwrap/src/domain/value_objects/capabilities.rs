//! Native capability set of a sink.

use crate::domain::ports::Write;
use core::fmt;

bitflags::bitflags! {
    /// Optional capabilities a sink implements natively.
    ///
    /// The basic chunk write is implied for every sink and has no flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Native single-byte write ([`WriteByte`](crate::WriteByte)).
        const WRITE_BYTE = 1 << 0;
        /// Native string write ([`WriteStr`](crate::WriteStr)).
        const WRITE_STR = 1 << 1;
    }
}

impl Capabilities {
    /// Probe a sink type for its native capabilities.
    ///
    /// # Examples
    ///
    /// ```
    /// use sinkwrap::Capabilities;
    ///
    /// assert!(Capabilities::probe::<Vec<u8>>().is_full());
    /// ```
    pub fn probe<W: Write>() -> Self {
        let mut caps = Self::empty();
        caps.set(Self::WRITE_BYTE, W::native_write_byte().is_some());
        caps.set(Self::WRITE_STR, W::native_write_str().is_some());
        caps
    }

    /// Whether every optional capability is native, so no adapter is needed.
    #[inline]
    pub const fn is_full(self) -> bool {
        self.contains(Self::all())
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write{}{}",
            if self.contains(Self::WRITE_BYTE) { "+write_byte" } else { "" },
            if self.contains(Self::WRITE_STR) { "+write_str" } else { "" },
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Capabilities {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Capabilities({=u8:#b})", self.bits())
    }
}
