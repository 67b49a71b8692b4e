//! Value objects for the domain layer.
//!
//! Value objects are immutable data types that represent concepts in the
//! domain model.

mod capabilities;

pub use capabilities::Capabilities;
