//!
//! Keccak-sponge implements the Keccak-f\[1600\] permutation and the sponge functions built on it:
//! the SHA-3 hashes, the original Keccak hashes, and the SHAKE extendable-output functions
//! of [FIPS 202].
//!
//! **This crate makes no attempt at constant-time execution.**
//!
//! # Overview
//!
//! The library is made of two layers:
//!
//! - the permutation [`hash::keccak::f1600`], a pure function over 25 lanes of 64 bits;
//! - the sponge [`hash::KeccakSponge`], which buffers input, absorbs it one block at a time,
//!   pads it with a domain separation suffix ([`hash::Domain`]) and squeezes output.
//!
//! A sponge is configured once, with [`hash::SpongeParams`]: a capacity (the part of the state never
//! exposed to the byte stream), an output size, and a domain.
//! Each standard family is a fixed set of parameters, with its own hasher type:
//!
//! ```
//! use keccak_sponge::Sha3_256;
//!
//! let mut sha3 = Sha3_256::new();
//! sha3.write(b"");
//! assert_eq!(
//!     hex::encode(sha3.finalize()),
//!     "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
//! );
//!
//! // The original Keccak submission only differs in its padding.
//! assert_eq!(
//!     hex::encode(keccak_sponge::keccak256(b"")),
//!     "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
//! );
//! ```
//!
//! Finalization never consumes the hasher: it pads and squeezes a copy of the state,
//! so a digest can be taken at any point in the stream and writing can resume afterwards.
//! ```
//! use keccak_sponge::Sha3_512;
//!
//! let mut hasher = Sha3_512::new();
//! hasher.write(b"yellow ");
//! let _intermediate = hasher.finalize();
//! hasher.write(b"submarine");
//! assert_eq!(hasher.finalize(), keccak_sponge::sha3_512(b"yellow submarine"));
//! ```
//!
//! # Extendable output
//!
//! [`Shake128`] and [`Shake256`] produce as many bytes as requested.
//! Shorter outputs are prefixes of longer ones:
//! ```
//! use keccak_sponge::Shake256;
//!
//! let mut shake = Shake256::new();
//! shake.write(b"seed");
//! let long = shake.finalize_xof(1000);
//! assert_eq!(&long[..32], &shake.finalize_xof(32)[..]);
//! ```
//!
//! # Custom sponges
//!
//! Any byte-aligned capacity smaller than the state can be used.
//! Invalid parameters are rejected at construction:
//! ```
//! use keccak_sponge::hash::{Domain, KeccakSponge, SpongeParams};
//! use keccak_sponge::ParameterError;
//!
//! assert_eq!(
//!     SpongeParams::new(1600, 32, Domain::Sha3),
//!     Err(ParameterError::CapacityTooLarge(1600))
//! );
//! let params = SpongeParams::new(384, 24, Domain::Shake).unwrap();
//! let sponge = KeccakSponge::new(params);
//! assert_eq!(sponge.block_size(), 152);
//! ```
//!
//! # Interoperability
//!
//! All hashers implement [`StreamingHash`] and [`std::io::Write`].
//! The fixed-output hashers also implement [`digest::Digest`],
//! and SHAKE implements [`digest::VariableOutput`].
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

/// Construction errors.
mod errors;
/// The permutation and the sponge construction.
pub mod hash;
/// SHA-3, Keccak and SHAKE families.
pub mod presets;

/// The streaming-hash interface.
pub mod traits;

pub use errors::ParameterError;
pub use hash::{Domain, KeccakSponge, SpongeParams};
pub use presets::{
    keccak224, keccak256, keccak384, keccak512, sha3_224, sha3_256, sha3_384, sha3_512, shake128,
    shake256, Keccak224, Keccak256, Keccak384, Keccak512, Sha3_224, Sha3_256, Sha3_384, Sha3_512,
    Shake128, Shake256,
};
pub use traits::StreamingHash;
