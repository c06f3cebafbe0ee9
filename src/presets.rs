//! SHA-3, Keccak and SHAKE.
//!
//! Every family is a [`KeccakSponge`] with fixed [`SpongeParams`]:
//! fixed-output hashes use a capacity of twice their digest size,
//! SHAKE128 and SHAKE256 a capacity of 256 and 512 bits respectively.
use crate::hash::{Domain, KeccakSponge, SpongeParams};
use crate::traits::StreamingHash;

/// SHA3-224 parameters.
pub const SHA3_224: SpongeParams = SpongeParams::preset(2 * 224, 224 / 8, Domain::Sha3);
/// SHA3-256 parameters.
pub const SHA3_256: SpongeParams = SpongeParams::preset(2 * 256, 256 / 8, Domain::Sha3);
/// SHA3-384 parameters.
pub const SHA3_384: SpongeParams = SpongeParams::preset(2 * 384, 384 / 8, Domain::Sha3);
/// SHA3-512 parameters.
pub const SHA3_512: SpongeParams = SpongeParams::preset(2 * 512, 512 / 8, Domain::Sha3);

/// Keccak-224 parameters.
pub const KECCAK_224: SpongeParams = SpongeParams::preset(2 * 224, 224 / 8, Domain::Keccak);
/// Keccak-256 parameters.
pub const KECCAK_256: SpongeParams = SpongeParams::preset(2 * 256, 256 / 8, Domain::Keccak);
/// Keccak-384 parameters.
pub const KECCAK_384: SpongeParams = SpongeParams::preset(2 * 384, 384 / 8, Domain::Keccak);
/// Keccak-512 parameters.
pub const KECCAK_512: SpongeParams = SpongeParams::preset(2 * 512, 512 / 8, Domain::Keccak);

/// SHAKE128 parameters, with no default output size.
pub const SHAKE_128: SpongeParams = SpongeParams::preset(2 * 128, 0, Domain::Shake);
/// SHAKE256 parameters, with no default output size.
pub const SHAKE_256: SpongeParams = SpongeParams::preset(2 * 256, 0, Domain::Shake);

macro_rules! impl_common {
    ($name:ident, $params:ident) => {
        impl $name {
            /// The construction parameters of this family.
            pub const PARAMS: SpongeParams = $params;

            /// Absorbs `input`, returning the number of bytes consumed.
            #[inline]
            pub fn write(&mut self, input: &[u8]) -> usize {
                self.sponge.write(input)
            }

            #[inline]
            pub fn reset(&mut self) {
                self.sponge.reset()
            }

            #[inline]
            pub fn block_size(&self) -> usize {
                self.sponge.block_size()
            }

            #[inline]
            pub fn output_size(&self) -> usize {
                self.sponge.output_size()
            }

            /// The underlying sponge.
            pub fn sponge(&self) -> &KeccakSponge {
                &self.sponge
            }
        }

        impl StreamingHash for $name {
            fn write(&mut self, input: &[u8]) -> usize {
                self.sponge.write(input)
            }

            fn sum(&self, acc: Vec<u8>) -> Vec<u8> {
                self.sponge.sum(acc)
            }

            fn reset(&mut self) {
                self.sponge.reset()
            }

            fn block_size(&self) -> usize {
                self.sponge.block_size()
            }

            fn output_size(&self) -> usize {
                self.sponge.output_size()
            }
        }

        impl std::io::Write for $name {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                Ok(self.sponge.write(buf))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
    };
}

macro_rules! fixed_hash {
    ($(#[$doc:meta])* $name:ident, $oneshot:ident, $params:ident, $size:literal) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name {
            sponge: KeccakSponge,
        }

        impl $name {
            /// Digest size in bytes.
            pub const OUTPUT_SIZE: usize = $size;

            pub fn new() -> Self {
                Self {
                    sponge: KeccakSponge::new(Self::PARAMS),
                }
            }

            /// The digest of the bytes written so far. Writing may continue afterwards.
            pub fn finalize(&self) -> [u8; $size] {
                let mut digest = [0u8; $size];
                self.sponge.finalize_into(&mut digest);
                digest
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl_common!($name, $params);

        #[doc = concat!("Computes [`", stringify!($name), "`] over `msg` in one call.")]
        pub fn $oneshot(msg: &[u8]) -> [u8; $size] {
            let mut hasher = $name::new();
            hasher.write(msg);
            hasher.finalize()
        }
    };
}

macro_rules! xof {
    ($(#[$doc:meta])* $name:ident, $oneshot:ident, $params:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name {
            sponge: KeccakSponge,
        }

        impl $name {
            /// An instance with no default output size: use [`Self::finalize_xof`].
            pub fn new() -> Self {
                Self::with_output_len(0)
            }

            /// An instance whose [`Self::finalize`] returns `output_len` bytes.
            pub fn with_output_len(output_len: usize) -> Self {
                Self {
                    sponge: KeccakSponge::new(Self::PARAMS.with_output_size(output_len)),
                }
            }

            /// [`Self::output_size`] bytes of output for the bytes written so far.
            pub fn finalize(&self) -> Vec<u8> {
                self.sponge.finalize()
            }

            /// `output_len` bytes of output for the bytes written so far.
            pub fn finalize_xof(&self, output_len: usize) -> Vec<u8> {
                self.sponge.finalize_xof(output_len)
            }

            /// Fills `output` for the bytes written so far.
            pub fn finalize_into(&self, output: &mut [u8]) {
                self.sponge.finalize_into(output)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl_common!($name, $params);

        #[doc = concat!("Computes `output_len` bytes of [`", stringify!($name), "`] over `msg`.")]
        pub fn $oneshot(msg: &[u8], output_len: usize) -> Vec<u8> {
            let mut hasher = $name::new();
            hasher.write(msg);
            hasher.finalize_xof(output_len)
        }
    };
}

fixed_hash!(
    /// SHA3-224, as standardized in FIPS 202.
    Sha3_224, sha3_224, SHA3_224, 28
);
fixed_hash!(
    /// SHA3-256, as standardized in FIPS 202.
    ///
    /// ```
    /// use keccak_sponge::Sha3_256;
    ///
    /// let mut hasher = Sha3_256::new();
    /// hasher.write(b"abc");
    /// assert_eq!(
    ///     hex::encode(hasher.finalize()),
    ///     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    /// );
    /// ```
    Sha3_256, sha3_256, SHA3_256, 32
);
fixed_hash!(
    /// SHA3-384, as standardized in FIPS 202.
    Sha3_384, sha3_384, SHA3_384, 48
);
fixed_hash!(
    /// SHA3-512, as standardized in FIPS 202.
    Sha3_512, sha3_512, SHA3_512, 64
);

fixed_hash!(
    /// Keccak-224, the original submission padding.
    Keccak224, keccak224, KECCAK_224, 28
);
fixed_hash!(
    /// Keccak-256, the original submission padding (as used by Ethereum).
    Keccak256, keccak256, KECCAK_256, 32
);
fixed_hash!(
    /// Keccak-384, the original submission padding.
    Keccak384, keccak384, KECCAK_384, 48
);
fixed_hash!(
    /// Keccak-512, the original submission padding.
    Keccak512, keccak512, KECCAK_512, 64
);

xof!(
    /// SHAKE128, the extendable-output function of FIPS 202 with 128 bits of security.
    ///
    /// ```
    /// use keccak_sponge::Shake128;
    ///
    /// let shake = Shake128::new();
    /// assert_eq!(hex::encode(shake.finalize_xof(16)), "7f9c2ba4e88f827d616045507605853e");
    /// ```
    Shake128, shake128, SHAKE_128
);
xof!(
    /// SHAKE256, the extendable-output function of FIPS 202 with 256 bits of security.
    Shake256, shake256, SHAKE_256
);
