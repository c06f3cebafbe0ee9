use super::keccak::{self, LANES};
use super::{SpongeParams, STATE_BYTES};

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A Keccak sponge in absorbing mode.
///
/// Input is buffered until a full block of [`SpongeParams::rate`] bytes is available,
/// at which point it is XOR-ed into the state (as little-endian lanes) and the state is permuted.
/// Finalization pads and squeezes a *copy* of the sponge, so that the same instance
/// can keep absorbing after producing a digest:
///
/// ```
/// use keccak_sponge::hash::{KeccakSponge, SpongeParams, Domain};
///
/// let params = SpongeParams::new(512, 32, Domain::Sha3).unwrap();
/// let mut sponge = KeccakSponge::new(params);
/// sponge.write(b"hello ");
/// let partial = sponge.finalize();
/// sponge.write(b"world");
/// assert_ne!(partial, sponge.finalize());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakSponge {
    state: [u64; LANES],
    /// Staged tail of the input, always shorter than a block.
    buf: [u8; STATE_BYTES],
    buf_len: usize,
    #[zeroize(skip)]
    params: SpongeParams,
}

impl KeccakSponge {
    pub fn new(params: SpongeParams) -> Self {
        Self {
            state: [0; LANES],
            buf: [0; STATE_BYTES],
            buf_len: 0,
            params,
        }
    }

    pub fn params(&self) -> &SpongeParams {
        &self.params
    }

    /// Block size in bytes, i.e. the rate.
    pub fn block_size(&self) -> usize {
        self.params.rate()
    }

    /// Configured output size in bytes, `0` for an XOF without a default length.
    pub fn output_size(&self) -> usize {
        self.params.output_size()
    }

    /// Absorbs `input`, returning the number of bytes consumed (always `input.len()`).
    pub fn write(&mut self, mut input: &[u8]) -> usize {
        let written = input.len();
        let rate = self.params.rate();

        if self.buf_len > 0 {
            let chunk_len = usize::min(input.len(), rate - self.buf_len);
            let (chunk, rest) = input.split_at(chunk_len);
            self.buf[self.buf_len..self.buf_len + chunk_len].copy_from_slice(chunk);
            self.buf_len += chunk_len;
            input = rest;

            if self.buf_len < rate {
                return written;
            }
            xor_block(&mut self.state, &self.buf[..rate]);
            keccak::f1600(&mut self.state);
            self.buf_len = 0;
        }

        let mut blocks = input.chunks_exact(rate);
        for block in &mut blocks {
            xor_block(&mut self.state, block);
            keccak::f1600(&mut self.state);
        }
        let tail = blocks.remainder();
        self.buf[..tail.len()].copy_from_slice(tail);
        self.buf_len = tail.len();

        written
    }

    /// Returns to the empty-message state. Parameters are kept.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.buf.zeroize();
        self.buf_len = 0;
    }

    /// Pads and squeezes a copy of the sponge, filling `output` entirely.
    pub fn finalize_into(&self, output: &mut [u8]) {
        self.clone().squeeze(output);
    }

    /// The digest of the bytes absorbed so far, of [`Self::output_size`] bytes.
    pub fn finalize(&self) -> Vec<u8> {
        self.finalize_xof(self.output_size())
    }

    /// `output_len` bytes of output for the bytes absorbed so far.
    pub fn finalize_xof(&self, output_len: usize) -> Vec<u8> {
        let mut output = vec![0u8; output_len];
        self.finalize_into(&mut output);
        output
    }

    /// Appends the digest of the bytes absorbed so far to `acc`.
    pub fn sum(&self, mut acc: Vec<u8>) -> Vec<u8> {
        let start = acc.len();
        acc.resize(start + self.output_size(), 0);
        self.finalize_into(&mut acc[start..]);
        acc
    }

    fn squeeze(&mut self, output: &mut [u8]) {
        let rate = self.params.rate();
        log::trace!(
            "finalizing {:?} sponge: {} staged bytes, {} output bytes",
            self.params.domain(),
            self.buf_len,
            output.len()
        );

        // The suffix and the final bit may fall on the same byte.
        self.buf[self.buf_len] = self.params.domain().suffix();
        self.buf[self.buf_len + 1..rate].fill(0);
        self.buf[rate - 1] |= 0x80;
        xor_block(&mut self.state, &self.buf[..rate]);
        keccak::f1600(&mut self.state);

        let mut blocks = output.chunks_mut(rate);
        if let Some(block) = blocks.next() {
            read_block(&self.state, block);
        }
        for block in blocks {
            keccak::f1600(&mut self.state);
            read_block(&self.state, block);
        }
    }
}

impl fmt::Debug for KeccakSponge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakSponge")
            .field("params", &self.params)
            .field("staged", &self.buf_len)
            .finish_non_exhaustive()
    }
}

impl std::io::Write for KeccakSponge {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(KeccakSponge::write(self, buf))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// XORs `block` into the leading lanes of `state`, little-endian.
///
/// A trailing partial lane only touches its low-order bytes.
fn xor_block(state: &mut [u64; LANES], block: &[u8]) {
    debug_assert!(block.len() <= STATE_BYTES);
    for (lane, chunk) in state.iter_mut().zip(block.chunks(8)) {
        let mut bytes = [0u8; 8];
        bytes[..chunk.len()].copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(bytes);
    }
}

/// Serializes the leading lanes of `state` into `block`, little-endian.
fn read_block(state: &[u64; LANES], block: &mut [u8]) {
    debug_assert!(block.len() <= STATE_BYTES);
    for (lane, chunk) in state.iter().zip(block.chunks_mut(8)) {
        chunk.copy_from_slice(&lane.to_le_bytes()[..chunk.len()]);
    }
}
