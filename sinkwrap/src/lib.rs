//! Capability-extending writer adapters.
//!
//! Many byte sinks only know how to write a chunk of bytes. Code that emits
//! output one byte or one string at a time would like a richer interface
//! without forcing a buffered writer (and its flush) onto every caller.
//! [`wrap`] turns any [`Write`] sink into a [`FullWriter`] supporting
//! [`Write`], [`WriteByte`] and [`WriteStr`], writing straight through to the
//! wrapped sink.
//!
//! # Architecture
//!
//! The crate is organized into three layers:
//!
//! ## Domain Layer (`domain`)
//! The contracts, with no knowledge of concrete sinks:
//! - **Ports**: `Write`, `WriteByte`, `WriteStr`, `FullWrite`
//! - **Value Objects**: `Capabilities`
//! - **Errors**: `Error`
//!
//! ## Adapter Layer (`adapters`)
//! - **`Adapter`**: probes a sink once and emulates what it lacks
//! - **`FullWriter`**: passthrough for full sinks, `Adapter` otherwise
//!
//! ## Infrastructure Layer (`infrastructure`)
//! - **`FromEmbeddedIo`**: any `embedded_io::Write` as a basic sink
//! - `Vec<u8>` as a natively full sink
//!
//! # Quick Start
//!
//! ```
//! use sinkwrap::{wrap, Write, WriteByte, WriteStr};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let mut w = wrap(&mut out);
//! w.write_byte(b'H').unwrap();
//! w.write(b"el").unwrap();
//! w.write_str("lo").unwrap();
//! assert_eq!(out, b"Hello");
//! ```
//!
//! # Features
//!
//! - `std`: `std::io::Error` interop
//! - `log`: Enable logging support
//! - `defmt`: Enable defmt logging for embedded

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod fmt;

// Core layers
pub mod domain;
pub mod adapters;
pub mod infrastructure;

pub use adapters::{Adapter, FullWriter, STRING_SCRATCH_CAPACITY, wrap};
pub use domain::{Capabilities, Error, ErrorType, FullWrite, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn};
pub use infrastructure::FromEmbeddedIo;
