//! Adapter layer - completes basic sinks with the capabilities they lack.
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer                │
//!     │  - Write / WriteByte / WriteStr  │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ implements
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │  ◄── This module
//!     │  - wrap -> FullWriter            │
//!     │  - Adapter                       │
//!     └────────────┬─────────────────────┘
//!                  │
//!                  │ writes through
//!                  ▼
//!     ┌──────────────────────────────────┐
//!     │  Sink (Vec, UART, embedded_io)   │
//!     └──────────────────────────────────┘
//! ```
//!
//! # Available Adapters
//!
//! - **`FullWriter`**: result of [`wrap`]; passes full sinks through
//! - **`Adapter`**: probes once, emulates missing capabilities with scratch buffers
//!
//! Every write takes `&mut self`: scratch buffers are reused across calls,
//! so an instance serves one caller at a time.

mod writer_adapter;
mod full_writer;

pub use writer_adapter::{Adapter, STRING_SCRATCH_CAPACITY};
pub use full_writer::{FullWriter, wrap};
