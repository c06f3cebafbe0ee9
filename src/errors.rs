/// The [`keccak_sponge`](crate) package has a single error type,
/// [`ParameterError`], raised when a sponge is configured with a capacity or rate
/// that does not fit the 1600-bit state of Keccak-f\[1600\].
///
/// Absorbing and squeezing never fail: once a [`SpongeParams`](crate::hash::SpongeParams)
/// has been built, every operation on the sponge is total.
use std::{error::Error, fmt::Display};

/// Invalid construction parameters for a sponge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// The capacity, in bits, is not a multiple of 8.
    CapacityNotByteAligned(usize),
    /// The capacity, in bits, leaves no room for the rate.
    CapacityTooLarge(usize),
    /// The rate, in bytes, is zero or exceeds the 200-byte state.
    RateOutOfRange(usize),
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityNotByteAligned(bits) => {
                write!(f, "capacity of {} bits is not byte-aligned", bits)
            }
            Self::CapacityTooLarge(bits) => {
                write!(f, "capacity of {} bits leaves no room for the rate", bits)
            }
            Self::RateOutOfRange(rate) => {
                write!(f, "rate of {} bytes is not in 1..=200", rate)
            }
        }
    }
}

impl Error for ParameterError {}
