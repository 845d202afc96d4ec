// src/sensor/sync_sensor.rs

use crate::common::{
    error::Fs2012Error,
    hal_traits::BusMutex,
    types::{ChannelType, InfoKind, QueryResult, ScaleVariant, DEFAULT_ADDRESS},
};
use crate::transport;
use embedded_hal::i2c::I2c;

/// HAL error type behind a given guard's bus handle.
type HalError<M> = <<M as BusMutex>::Bus as embedded_hal::i2c::ErrorType>::Error;

/// One FS2012 bound to one bus address.
///
/// The instance owns its guard and holds the bus handle for its whole
/// life; [`Fs2012::release`] hands the handle back when the host
/// unbinds the sensor. Queries take `&self`: concurrent callers are
/// legal and get serialized by the guard, whose flavor is picked via
/// the `M` parameter (see [`BusMutex`]).
///
/// No state outlives a query. Each raw read is one fresh bus
/// transaction; nothing is cached.
pub struct Fs2012<M> {
    mutex: M,
    address: u8,
    variant: ScaleVariant,
}

impl<M> Fs2012<M>
where
    M: BusMutex,
{
    /// Binds a sensor at the factory-default address with the gas-part
    /// scale. Construction performs no bus traffic and no guard
    /// operation.
    pub fn new(bus: M::Bus) -> Self {
        Fs2012 {
            mutex: M::create(bus),
            address: DEFAULT_ADDRESS,
            variant: ScaleVariant::default(),
        }
    }

    /// Overrides the bus address the instance talks to.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Selects the part-variant conversion factor.
    pub fn with_variant(mut self, variant: ScaleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Bus address the instance is bound to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Configured part variant.
    pub fn variant(&self) -> ScaleVariant {
        self.variant
    }

    /// The configured conversion factor as a rational.
    ///
    /// Constant data: never touches the bus or the guard, and is
    /// unaffected by any earlier transport failure.
    pub fn scale(&self) -> (u32, u32) {
        self.variant.scale()
    }

    /// Unbinds the sensor and returns the bus handle to the host.
    pub fn release(self) -> M::Bus {
        self.mutex.free()
    }
}

impl<M> Fs2012<M>
where
    M: BusMutex,
    M::Bus: I2c,
{
    /// Answers one framework query against the channel table.
    ///
    /// The raw facet costs one guarded bus transaction; the scale facet
    /// is answered from configuration alone. Combinations outside the
    /// table fail with [`Fs2012Error::Unsupported`] before any bus
    /// traffic happens.
    pub fn query(
        &self,
        channel: ChannelType,
        info: InfoKind,
    ) -> Result<QueryResult, Fs2012Error<HalError<M>>> {
        match (channel, info) {
            (ChannelType::Velocity, InfoKind::Raw) => {
                Ok(QueryResult::Integer(self.read_raw()?))
            }
            (ChannelType::Velocity, InfoKind::Scale) => {
                let (numerator, denominator) = self.scale();
                Ok(QueryResult::Fractional {
                    numerator,
                    denominator,
                })
            }
            _ => Err(Fs2012Error::Unsupported),
        }
    }

    /// Reads the measurement word.
    ///
    /// One exclusive bus transaction under the instance guard. The
    /// guard is released before this returns, on the error path too, so
    /// a failed read never wedges later queries.
    pub fn read_raw(&self) -> Result<u16, Fs2012Error<HalError<M>>> {
        let word = self
            .mutex
            .lock(|bus| transport::read_word(bus, self.address))?;
        Ok(word)
    }
}
