//! Domain layer - sink contracts with zero knowledge of concrete sinks.
//!
//! The domain layer contains:
//! - **Ports**: the capabilities a sink may offer (`Write`, `WriteByte`, `WriteStr`)
//! - **Value Objects**: `Capabilities`, the result of probing a sink
//! - **Domain Errors**: `Error`, sink failures plus adapter-detected violations
//!
//! ```text
//!     ┌──────────────────────────────────┐
//!     │      Domain Layer (Core)         │
//!     │                                  │
//!     │  ┌────────────────────────────┐  │
//!     │  │    Ports (Interfaces)      │  │
//!     │  │  - Write (basic sink)      │  │
//!     │  │  - WriteByte, WriteStr     │  │
//!     │  └────────────────────────────┘  │
//!     │              │ probed into       │
//!     │              ▼                   │
//!     │  ┌────────────────────────────┐  │
//!     │  │  Capabilities              │  │
//!     │  └────────────────────────────┘  │
//!     └──────────────────────────────────┘
//!                    ▲
//!                    │ consumed by
//!                    │
//!     ┌──────────────────────────────────┐
//!     │      Adapter Layer               │
//!     │  - Adapter                       │
//!     │  - FullWriter                    │
//!     └──────────────────────────────────┘
//! ```

pub mod ports;
pub mod value_objects;
pub mod error;

// Re-export commonly used types
pub use ports::{ErrorType, FullWrite, Write, WriteByte, WriteByteFn, WriteStr, WriteStrFn};
pub use value_objects::Capabilities;
pub use error::Error;
