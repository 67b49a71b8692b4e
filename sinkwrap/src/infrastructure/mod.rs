//! Infrastructure layer - sink implementations for concrete byte targets.
//!
//! This module connects existing byte targets to the sink ports: `Vec<u8>`
//! as a natively full sink, and any `embedded_io::Write` as a basic sink
//! through [`FromEmbeddedIo`].

mod vec_sink;
mod embedded_io_impl;

pub use embedded_io_impl::FromEmbeddedIo;
