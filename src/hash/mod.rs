/// The Keccak-f\[1600\] permutation.
pub mod keccak;
/// The Keccak sponge: absorbing, padding and squeezing.
pub mod sponge;
/// Support for the [`digest`] traits.
mod bridge;

pub use sponge::KeccakSponge;

use crate::errors::ParameterError;

/// Size of the Keccak-f\[1600\] state, in bytes.
pub const STATE_BYTES: usize = keccak::LANES * 8;

/// Domain separation for sponges sharing the Keccak-f\[1600\] permutation.
///
/// The suffix byte is written right after the message, before the final `0x80` padding bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Domain {
    /// The original Keccak submission, with no domain bits (`0x01`).
    Keccak,
    /// SHA-3 fixed-output hashes (`0x06`).
    Sha3,
    /// SHAKE extendable-output functions (`0x1f`).
    Shake,
}

impl Domain {
    /// The padding byte carrying the domain bits and the first padding bit.
    pub const fn suffix(self) -> u8 {
        match self {
            Domain::Keccak => 0x01,
            Domain::Sha3 => 0x06,
            Domain::Shake => 0x1f,
        }
    }
}

/// Construction parameters of a [`KeccakSponge`].
///
/// A sponge is fully described by its rate (the bytes exchanged per permutation call),
/// its default output size, and its [`Domain`].
/// The capacity is whatever is left of the 200-byte state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SpongeParams {
    rate: usize,
    output_size: usize,
    domain: Domain,
}

impl SpongeParams {
    /// Builds the parameters for a sponge of capacity `capacity_bits`.
    ///
    /// The capacity must be a multiple of 8 and strictly smaller than 1600.
    pub fn new(
        capacity_bits: usize,
        output_size: usize,
        domain: Domain,
    ) -> Result<Self, ParameterError> {
        if capacity_bits % 8 != 0 {
            log::debug!("rejecting capacity of {} bits", capacity_bits);
            return Err(ParameterError::CapacityNotByteAligned(capacity_bits));
        }
        if capacity_bits / 8 >= STATE_BYTES {
            log::debug!("rejecting capacity of {} bits", capacity_bits);
            return Err(ParameterError::CapacityTooLarge(capacity_bits));
        }
        Ok(Self {
            rate: STATE_BYTES - capacity_bits / 8,
            output_size,
            domain,
        })
    }

    /// Builds the parameters for a sponge absorbing `rate` bytes per block.
    pub fn from_rate(
        rate: usize,
        output_size: usize,
        domain: Domain,
    ) -> Result<Self, ParameterError> {
        if rate == 0 || rate > STATE_BYTES {
            log::debug!("rejecting rate of {} bytes", rate);
            return Err(ParameterError::RateOutOfRange(rate));
        }
        Ok(Self {
            rate,
            output_size,
            domain,
        })
    }

    /// Compile-time constructor for the built-in families.
    pub(crate) const fn preset(capacity_bits: usize, output_size: usize, domain: Domain) -> Self {
        assert!(capacity_bits % 8 == 0, "capacity must be byte-aligned");
        assert!(capacity_bits / 8 < STATE_BYTES, "capacity must leave room for the rate");
        Self {
            rate: STATE_BYTES - capacity_bits / 8,
            output_size,
            domain,
        }
    }

    /// The same parameters with a different default output size.
    pub const fn with_output_size(self, output_size: usize) -> Self {
        Self {
            output_size,
            ..self
        }
    }

    /// Bytes absorbed or squeezed per permutation call.
    pub const fn rate(&self) -> usize {
        self.rate
    }

    pub const fn capacity_bits(&self) -> usize {
        (STATE_BYTES - self.rate) * 8
    }

    /// Default output size in bytes, `0` when the caller chooses it on finalization.
    pub const fn output_size(&self) -> usize {
        self.output_size
    }

    pub const fn domain(&self) -> Domain {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_capacity() {
        let params = SpongeParams::new(512, 32, Domain::Sha3).unwrap();
        assert_eq!(params.rate(), 136);
        assert_eq!(params.capacity_bits(), 512);
        assert_eq!(params.rate() * 8 + params.capacity_bits(), 1600);

        let params = SpongeParams::new(0, 0, Domain::Shake).unwrap();
        assert_eq!(params.rate(), STATE_BYTES);
    }

    #[test]
    fn test_invalid_capacity() {
        assert_eq!(
            SpongeParams::new(511, 32, Domain::Sha3),
            Err(ParameterError::CapacityNotByteAligned(511))
        );
        assert_eq!(
            SpongeParams::new(1600, 32, Domain::Sha3),
            Err(ParameterError::CapacityTooLarge(1600))
        );
        assert_eq!(
            SpongeParams::new(4096, 32, Domain::Keccak),
            Err(ParameterError::CapacityTooLarge(4096))
        );
    }

    #[test]
    fn test_invalid_rate() {
        assert_eq!(
            SpongeParams::from_rate(0, 32, Domain::Sha3),
            Err(ParameterError::RateOutOfRange(0))
        );
        assert_eq!(
            SpongeParams::from_rate(201, 32, Domain::Sha3),
            Err(ParameterError::RateOutOfRange(201))
        );
        assert_eq!(
            SpongeParams::from_rate(136, 32, Domain::Sha3),
            SpongeParams::new(512, 32, Domain::Sha3)
        );
    }

    #[test]
    fn test_domain_suffixes() {
        assert_eq!(Domain::Keccak.suffix(), 0x01);
        assert_eq!(Domain::Sha3.suffix(), 0x06);
        assert_eq!(Domain::Shake.suffix(), 0x1f);
    }
}
