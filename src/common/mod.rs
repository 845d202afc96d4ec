// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod error;
pub mod hal_traits;
pub mod types;

// --- Re-export key types/traits for easier access ---

// From error.rs
pub use error::Fs2012Error;

// From hal_traits.rs
pub use hal_traits::{BusMutex, NoopMutex};

#[cfg(feature = "critical-section")]
pub use hal_traits::CriticalSectionMutex;

// From types.rs
pub use types::{
    ChannelSpec, ChannelType, InfoKind, QueryResult, ScaleVariant, CHANNELS, COMPATIBLE,
    DEFAULT_ADDRESS, DRIVER_NAME,
};
