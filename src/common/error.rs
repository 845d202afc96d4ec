// src/common/error.rs

/// Errors a query can surface.
///
/// `E` is the bus handle's own error type; it rides along unmodified so
/// the host can still tell a NACK from an adapter timeout.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fs2012Error<E = ()>
where
    E: core::fmt::Debug, // Debug is needed to format the wrapped bus error
{
    /// Underlying bus error from the HAL implementation. Propagated
    /// verbatim, never retried.
    #[error("bus transfer failed: {0:?}")]
    Bus(E),

    /// Requested channel/info combination is not one this part defines.
    /// Framework misuse, not a hardware fault; the bus is never touched.
    #[error("unsupported channel or info kind")]
    Unsupported,
}

// No manual Display impl needed - thiserror handles it.

// Allow mapping from the underlying HAL error with `?`
impl<E: core::fmt::Debug> From<E> for Fs2012Error<E> {
    fn from(e: E) -> Self {
        Fs2012Error::Bus(e)
    }
}
