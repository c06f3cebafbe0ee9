//! The Keccak-f\[1600\] permutation.
//!
//! The state is a 5×5 matrix of 64-bit lanes, stored row-major:
//! lane `(x, y)` lives at index `x + 5 * y`.
//! Each round applies, in order, θ (theta), ρ (rho), π (pi), χ (chi) and ι (iota)
//! as described in [FIPS 202], section 3.2.
//! Here ρ, π and χ are fused in a single pass over the state.
//!
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Round constants for ι, one per round.
pub(crate) const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets for ρ, indexed by lane position `x + 5 * y`.
#[rustfmt::skip]
pub(crate) const RHO: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

/// Destination of every lane under π, indexed by source position.
///
/// Lane `(x, y)` moves to `(y, 2x + 3y mod 5)`.
#[rustfmt::skip]
pub(crate) const PI: [usize; LANES] = [
     0, 10, 20,  5, 15,
    16,  1, 11, 21,  6,
     7, 17,  2, 12, 22,
    23,  8, 18,  3, 13,
    14, 24,  9, 19,  4,
];

/// The Keccak-f\[1600\] permutation, applied in place.
///
/// ```
/// let mut state = [0u64; 25];
/// keccak_sponge::hash::keccak::f1600(&mut state);
/// assert_eq!(state[0], 0xF1258F7940E1DDE7);
/// ```
#[inline]
pub fn f1600(state: &mut [u64; LANES]) {
    p1600(state, ROUNDS);
}

/// The Keccak-p\[1600, n\] permutation: the last `round_count` rounds of Keccak-f\[1600\].
///
/// # Panics
///
/// If `round_count` is greater than [`ROUNDS`].
pub fn p1600(state: &mut [u64; LANES], round_count: usize) {
    assert!(
        round_count <= ROUNDS,
        "Keccak-p[1600] supports at most {} rounds, got {}",
        ROUNDS,
        round_count
    );

    for &rc in &RC[ROUNDS - round_count..] {
        round(state, rc);
    }
}

#[inline(always)]
fn round(a: &mut [u64; LANES], rc: u64) {
    // θ
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }

    // ρ and π
    let mut b = [0u64; LANES];
    for (i, lane) in a.iter().enumerate() {
        b[PI[i]] = lane.rotate_left(RHO[i]);
    }

    // χ, reading from the relocated copy so that every row sees its pre-step values
    for y in (0..LANES).step_by(5) {
        for x in 0..5 {
            a[y + x] = b[y + x] ^ (!b[y + (x + 1) % 5] & b[y + (x + 2) % 5]);
        }
    }

    // ι
    a[0] ^= rc;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unfused θ, ρ, π, χ, ι, one step at a time, following FIPS 202 section 3.2.
    mod reference {
        use super::super::{LANES, RC, RHO};

        fn idx(x: usize, y: usize) -> usize {
            (x % 5) + 5 * (y % 5)
        }

        pub fn theta(a: &mut [u64; LANES]) {
            let mut c = [0u64; 5];
            for x in 0..5 {
                for y in 0..5 {
                    c[x] ^= a[idx(x, y)];
                }
            }
            for x in 0..5 {
                let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
                for y in 0..5 {
                    a[idx(x, y)] ^= d;
                }
            }
        }

        pub fn rho(a: &mut [u64; LANES]) {
            for (lane, offset) in a.iter_mut().zip(RHO) {
                *lane = lane.rotate_left(offset);
            }
        }

        pub fn pi(a: &mut [u64; LANES]) {
            let old = *a;
            for x in 0..5 {
                for y in 0..5 {
                    a[idx(y, 2 * x + 3 * y)] = old[idx(x, y)];
                }
            }
        }

        pub fn chi(a: &mut [u64; LANES]) {
            let old = *a;
            for x in 0..5 {
                for y in 0..5 {
                    a[idx(x, y)] = old[idx(x, y)] ^ (!old[idx(x + 1, y)] & old[idx(x + 2, y)]);
                }
            }
        }

        pub fn iota(a: &mut [u64; LANES], round: usize) {
            a[0] ^= RC[round];
        }

        pub fn f1600(a: &mut [u64; LANES]) {
            for round in 0..RC.len() {
                theta(a);
                rho(a);
                pi(a);
                chi(a);
                iota(a, round);
            }
        }
    }

    // XKCP, KeccakF-1600-IntermediateValues.txt
    const ZERO_STATE_ONCE: [u64; LANES] = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
        0xFF97A42D7F8E6FD4,
        0x90FEE5A0A44647C4,
        0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C,
        0x30935AB7D08FFC64,
        0xEB5AA93F2317D635,
        0xA9A6E6260D712103,
        0x81A57C16DBCF555F,
        0x43B831CD0347C826,
        0x01F22F1A11A5569F,
        0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2,
        0x613670957BC46611,
        0xB87C5A554FD00ECB,
        0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614,
        0x1841F924A2C509E4,
        0x16F53526E70465C2,
        0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    const ZERO_STATE_TWICE: [u64; LANES] = [
        0x2D5C954DF96ECB3C,
        0x6A332CD07057B56D,
        0x093D8D1270D76B6C,
        0x8A20D9B25569D094,
        0x4F9C4F99E5E7F156,
        0xF957B9A2DA65FB38,
        0x85773DAE1275AF0D,
        0xFAF4F247C3D810F7,
        0x1F1B9EE6F79A8759,
        0xE4FECC0FEE98B425,
        0x68CE61B6B9CE68A1,
        0xDEEA66C4BA8F974F,
        0x33C43D836EAFB1F5,
        0xE00654042719DBD9,
        0x7CF8A9F009831265,
        0xFD5449A6BF174743,
        0x97DDAD33D8994B40,
        0x48EAD5FC5D0BE774,
        0xE3B8C8EE55B7B03C,
        0x91A0226E649E42E9,
        0x900E3129E7BADD7B,
        0x202A9EC5FAA3CCE8,
        0x5B3402464E1C3DB6,
        0x609F4E62A44C1059,
        0x20D06CD26A8FBF5C,
    ];

    fn pseudorandom_state(seed: u64) -> [u64; LANES] {
        let mut state = [0u64; LANES];
        let mut x = seed;
        for lane in state.iter_mut() {
            // splitmix64
            x = x.wrapping_add(0x9E3779B97F4A7C15);
            let mut z = x;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
            *lane = z ^ (z >> 31);
        }
        state
    }

    #[test]
    fn test_zero_state() {
        let mut state = [0u64; LANES];
        f1600(&mut state);
        assert_eq!(state, ZERO_STATE_ONCE);
        f1600(&mut state);
        assert_eq!(state, ZERO_STATE_TWICE);
    }

    /// The π table must agree with `(x, y) -> (y, 2x + 3y)`.
    #[test]
    fn test_pi_table() {
        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(PI[x + 5 * y], y + 5 * ((2 * x + 3 * y) % 5));
            }
        }
        let mut seen = [false; LANES];
        PI.iter().for_each(|&i| seen[i] = true);
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fused_matches_reference() {
        for seed in 0..64 {
            let mut fused = pseudorandom_state(seed);
            let mut stepwise = fused;
            f1600(&mut fused);
            reference::f1600(&mut stepwise);
            assert_eq!(fused, stepwise, "seed {seed}");
        }
    }

    #[test]
    fn test_against_keccak_crate() {
        for seed in 0..64 {
            let mut ours = pseudorandom_state(seed);
            let mut theirs = ours;
            f1600(&mut ours);
            keccak::f1600(&mut theirs);
            assert_eq!(ours, theirs, "seed {seed}");
        }
    }

    #[test]
    fn test_reduced_rounds() {
        let mut state = pseudorandom_state(7);
        let mut expected = state;
        p1600(&mut state, 12);
        keccak::p1600(&mut expected, 12);
        assert_eq!(state, expected);

        let mut untouched = pseudorandom_state(7);
        p1600(&mut untouched, 0);
        assert_eq!(untouched, pseudorandom_state(7));
    }

    #[test]
    #[should_panic]
    fn test_too_many_rounds() {
        p1600(&mut [0u64; LANES], ROUNDS + 1);
    }
}
