//! Ports define the interfaces between the adapters and the sinks they drive.
//!
//! A sink always offers the **basic** capability ([`Write`]). The byte and
//! string capabilities are optional; a sink advertises them through the
//! probing hooks on [`Write`] so adapters can discover them without
//! specialization.

mod sink;

pub use sink::{ErrorType, FullWrite, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn};
