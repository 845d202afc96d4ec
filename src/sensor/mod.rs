// src/sensor/mod.rs

// Declare the sub-modules
pub mod sync_sensor;

// Asynchronous driver (feature-gated)
#[cfg(feature = "async")]
pub mod async_sensor;

// --- Public Re-exports ---

// The synchronous driver struct the host will instantiate.
pub use sync_sensor::Fs2012;

// Conditionally re-export the asynchronous driver struct.
#[cfg(feature = "async")]
pub use async_sensor::Fs2012Async;
