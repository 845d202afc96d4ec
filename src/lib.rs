// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod sensor;
pub mod transport;

// Re-export key types for convenience
pub use common::{ChannelType, Fs2012Error, InfoKind, QueryResult, ScaleVariant};
pub use sensor::Fs2012;

#[cfg(feature = "async")]
pub use sensor::Fs2012Async;
