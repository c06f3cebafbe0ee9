use crate::hash::KeccakSponge;

/// An incremental hash function.
///
/// Bytes are absorbed with [`StreamingHash::write`];
/// [`StreamingHash::sum`] appends the digest of everything written so far
/// without consuming the hasher, so writing may resume afterwards.
pub trait StreamingHash {
    /// Absorbs `input`. Never fails: the whole input is always consumed.
    fn write(&mut self, input: &[u8]) -> usize;

    /// Appends the current digest to `acc` and returns it.
    fn sum(&self, acc: Vec<u8>) -> Vec<u8>;

    /// Forgets every byte written so far.
    fn reset(&mut self);

    /// Number of bytes processed per block.
    fn block_size(&self) -> usize;

    /// Number of bytes appended by [`StreamingHash::sum`].
    fn output_size(&self) -> usize;
}

impl StreamingHash for KeccakSponge {
    #[inline]
    fn write(&mut self, input: &[u8]) -> usize {
        KeccakSponge::write(self, input)
    }

    #[inline]
    fn sum(&self, acc: Vec<u8>) -> Vec<u8> {
        KeccakSponge::sum(self, acc)
    }

    #[inline]
    fn reset(&mut self) {
        KeccakSponge::reset(self)
    }

    #[inline]
    fn block_size(&self) -> usize {
        KeccakSponge::block_size(self)
    }

    #[inline]
    fn output_size(&self) -> usize {
        KeccakSponge::output_size(self)
    }
}
