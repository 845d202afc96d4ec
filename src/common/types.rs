// src/common/types.rs

// --- Identity ---

/// Driver name, as a host environment would register it.
pub const DRIVER_NAME: &str = "fs2012";

/// Device-tree compatible token used for discovery.
///
/// Pass-through contract with the host environment; nothing in this
/// crate consumes it.
pub const COMPATIBLE: &str = "renesas,renesas-fs2012-flow";

/// Factory-default 7-bit bus address of the part.
pub const DEFAULT_ADDRESS: u8 = 0x07;

// --- Framework-facing query vocabulary ---

/// Channel classes a host framework can ask this driver about.
///
/// The FS2012 is a single-channel part: only [`ChannelType::Velocity`]
/// is backed by hardware. The other classes exist so a generic consumer
/// can probe for them and receive a well-typed refusal.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelType {
    /// Flow velocity, the one measurement this part produces.
    Velocity,
    /// Fluid temperature. Not backed by the FS2012.
    Temperature,
}

/// Facets of a channel a host framework can query.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InfoKind {
    /// The unscaled measurement word, straight off the bus.
    Raw,
    /// The raw-to-physical-units conversion factor.
    Scale,
    /// A fully converted reading. The FS2012 leaves scaling to the
    /// consumer, so this facet is never answered here.
    Processed,
}

/// A successfully answered query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueryResult {
    /// Integer-valued result, as returned for the raw facet.
    Integer(u16),
    /// Fractional result, `numerator / denominator`, as returned for
    /// the scale facet.
    Fractional { numerator: u32, denominator: u32 },
}

// --- Part-variant configuration ---

/// Part-variant scale selection.
///
/// The FS2012 ships in gas and liquid calibrations with different
/// raw-to-flow factors; the part code suffix tells them apart. Nothing
/// on the wire identifies the variant, so it is construction-time
/// configuration.
// TODO: the FS1015 speaks the same protocol with its own scale table;
// add its variants here if a board ever needs that part.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScaleVariant {
    /// `-NG` part codes: divide the raw word by 1000 for Liters/minute (SLPM).
    #[default]
    Gas,
    /// `-LQ` part codes: divide the raw word by 10 for Liters/minute (SCCM).
    Liquid,
}

impl ScaleVariant {
    /// Conversion factor as a `(numerator, denominator)` rational.
    pub const fn scale(self) -> (u32, u32) {
        match self {
            ScaleVariant::Gas => (1, 1000),
            ScaleVariant::Liquid => (1, 10),
        }
    }
}

// --- Channel descriptor ---

/// Descriptor for one framework-visible channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub channel_type: ChannelType,
    /// Facets this channel answers.
    pub info: &'static [InfoKind],
}

/// The FS2012 channel table: one velocity channel exposing the raw
/// word and its scale.
pub const CHANNELS: &[ChannelSpec] = &[ChannelSpec {
    channel_type: ChannelType::Velocity,
    info: &[InfoKind::Raw, InfoKind::Scale],
}];
