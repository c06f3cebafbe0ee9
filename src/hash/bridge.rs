//! Implementations of the [`digest`] traits.
//!
//! Fixed-output families get [`FixedOutput`] and friends, and hence the blanket [`digest::Digest`].
//! SHAKE gets [`VariableOutput`], with the output size chosen at construction.
//! Squeezing more output later, as [`digest::ExtendableOutput`] would, is not supported.
//!
//! ```
//! use digest::Digest;
//! use keccak_sponge::Sha3_256;
//!
//! let digest = Sha3_256::digest(b"abc");
//! assert_eq!(digest.as_slice(), &keccak_sponge::sha3_256(b"abc")[..]);
//! ```
use digest::consts::{U104, U136, U144, U168, U28, U32, U48, U64, U72};
use digest::core_api::BlockSizeUser;
use digest::{
    FixedOutput, FixedOutputReset, HashMarker, InvalidBufferSize, InvalidOutputSize, Output,
    OutputSizeUser, Reset, Update, VariableOutput,
};

use crate::presets::{
    Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512, Shake128,
    Shake256,
};

macro_rules! impl_update {
    ($name:ty, $block:ty) => {
        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $block;
        }

        impl Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                <$name>::write(self, data);
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                <$name>::reset(self)
            }
        }
    };
}

macro_rules! impl_fixed_output {
    ($name:ty, $block:ty, $output:ty) => {
        impl_update!($name, $block);

        impl OutputSizeUser for $name {
            type OutputSize = $output;
        }

        impl FixedOutput for $name {
            fn finalize_into(self, out: &mut Output<Self>) {
                self.sponge().finalize_into(out.as_mut_slice());
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.sponge().finalize_into(out.as_mut_slice());
                <$name>::reset(self);
            }
        }
    };
}

macro_rules! impl_variable_output {
    ($name:ty, $block:ty) => {
        impl_update!($name, $block);

        impl VariableOutput for $name {
            const MAX_OUTPUT_SIZE: usize = usize::MAX;

            fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
                if output_size == 0 {
                    return Err(InvalidOutputSize);
                }
                Ok(<$name>::with_output_len(output_size))
            }

            fn output_size(&self) -> usize {
                <$name>::output_size(self)
            }

            fn finalize_variable(self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
                if out.len() != <$name>::output_size(&self) {
                    return Err(InvalidBufferSize);
                }
                self.finalize_into(out);
                Ok(())
            }
        }
    };
}

impl_fixed_output!(Sha3_224, U144, U28);
impl_fixed_output!(Sha3_256, U136, U32);
impl_fixed_output!(Sha3_384, U104, U48);
impl_fixed_output!(Sha3_512, U72, U64);
impl_fixed_output!(Keccak224, U144, U28);
impl_fixed_output!(Keccak256, U136, U32);
impl_fixed_output!(Keccak384, U104, U48);
impl_fixed_output!(Keccak512, U72, U64);

impl_variable_output!(Shake128, U168);
impl_variable_output!(Shake256, U136);
