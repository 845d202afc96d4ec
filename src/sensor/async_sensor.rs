// src/sensor/async_sensor.rs

use crate::common::{
    error::Fs2012Error,
    types::{ChannelType, InfoKind, QueryResult, ScaleVariant, DEFAULT_ADDRESS},
};
use crate::transport;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

/// Async twin of [`crate::sensor::Fs2012`] for executor-driven hosts.
///
/// The guard is an async mutex: a second raw query suspends its task
/// until the in-flight transaction finishes, it never spins or blocks
/// the thread. `M` picks the raw-mutex flavor the host runs on
/// (`NoopRawMutex` on a single executor, `CriticalSectionRawMutex`
/// when instances cross executors or cores).
pub struct Fs2012Async<M: RawMutex, B> {
    bus: Mutex<M, B>,
    address: u8,
    variant: ScaleVariant,
}

impl<M, B> Fs2012Async<M, B>
where
    M: RawMutex,
{
    /// Binds a sensor at the factory-default address with the gas-part
    /// scale. Construction performs no bus traffic and no guard
    /// operation.
    pub fn new(bus: B) -> Self {
        Fs2012Async {
            bus: Mutex::new(bus),
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

    /// The configured conversion factor as a rational. Never touches
    /// the bus or the guard.
    pub fn scale(&self) -> (u32, u32) {
        self.variant.scale()
    }

    /// Unbinds the sensor and returns the bus handle to the host.
    pub fn release(self) -> B {
        self.bus.into_inner()
    }
}

impl<M, B> Fs2012Async<M, B>
where
    M: RawMutex,
    B: I2c,
{
    /// Answers one framework query; same contract as the sync driver's
    /// [`crate::sensor::Fs2012::query`].
    pub async fn query(
        &self,
        channel: ChannelType,
        info: InfoKind,
    ) -> Result<QueryResult, Fs2012Error<B::Error>> {
        match (channel, info) {
            (ChannelType::Velocity, InfoKind::Raw) => {
                Ok(QueryResult::Integer(self.read_raw().await?))
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

    /// Reads the measurement word under the instance guard. The guard
    /// drops before this returns, on the error path too.
    pub async fn read_raw(&self) -> Result<u16, Fs2012Error<B::Error>> {
        let mut bus = self.bus.lock().await;
        let word = transport::read_word_async(&mut *bus, self.address).await?;
        Ok(word)
    }
}
