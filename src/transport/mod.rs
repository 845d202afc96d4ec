// src/transport/mod.rs

//! Raw bus transactions.
//!
//! One operation lives here: pulling the measurement word out of the
//! sensor's default response buffer. The FS2012 streams its output
//! register on a plain read, so no register address is written first;
//! the whole exchange is a single fixed-length read.
//!
//! Exclusion on the *bus segment* (keeping other devices' traffic from
//! interleaving with this read) is the bus handle's own contract: a
//! shared-bus device handle holds the segment lock for exactly the
//! span of one `transaction` call. The per-instance guard that keeps
//! two raw reads on the same sensor apart lives a level up, in
//! [`crate::sensor`]. The two domains are independent and this crate
//! never nests them.

use embedded_hal::i2c::{I2c, SevenBitAddress};

/// Size of the measurement word on the wire.
pub const WORD_LEN: usize = 2;

/// Executes one read transaction and decodes the measurement word.
///
/// Exactly [`WORD_LEN`] bytes are requested and the response is
/// interpreted as a big-endian unsigned 16-bit integer. Any bus-level
/// failure (NACK, adapter timeout, short transfer) is returned
/// verbatim; no partial value escapes.
pub fn read_word<B>(bus: &mut B, address: SevenBitAddress) -> Result<u16, B::Error>
where
    B: I2c,
{
    let mut word = [0u8; WORD_LEN];
    bus.read(address, &mut word)?;
    Ok(u16::from_be_bytes(word))
}

/// Async twin of [`read_word`], same single-transaction contract.
#[cfg(feature = "async")]
pub async fn read_word_async<B>(bus: &mut B, address: SevenBitAddress) -> Result<u16, B::Error>
where
    B: embedded_hal_async::i2c::I2c,
{
    let mut word = [0u8; WORD_LEN];
    bus.read(address, &mut word).await?;
    Ok(u16::from_be_bytes(word))
}
