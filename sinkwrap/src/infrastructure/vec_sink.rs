//! `Vec<u8>` as a full sink.

use crate::domain::{ErrorType, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn};
use alloc::vec::Vec;
use core::convert::Infallible;

impl ErrorType for Vec<u8> {
    type Error = Infallible;
}

impl Write for Vec<u8> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn native_write_byte() -> Option<WriteByteFn<Self>> {
        Some(<Self as WriteByte>::write_byte)
    }

    fn native_write_str() -> Option<WriteStrFn<Self>> {
        Some(<Self as WriteStr>::write_str)
    }
}

impl WriteByte for Vec<u8> {
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

impl WriteStr for Vec<u8> {
    fn write_str(&mut self, s: &str) -> Result<usize, Self::Error> {
        self.extend_from_slice(s.as_bytes());
        Ok(s.len())
    }
}
