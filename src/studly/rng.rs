//! Pinned pseudo-random source for studly caps.

use rand::{RngCore, SeedableRng};

use super::cooked::COOKED;

const LEN: usize = 607;
const TAP: usize = 273;
const INT32_MAX: i32 = i32::MAX;
const INT63_MASK: u64 = (1 << 63) - 1;
/// Replaces a seed that reduces to zero.
const ZERO_SEED: i64 = 89_482_311;

/// Additive lagged Fibonacci generator, lags 607 and 273.
///
/// Stream-compatible with Go's `math/rand` source: the same seed yields the
/// same 64-bit outputs. Seeding runs a Park-Miller sequence over the seed and
/// XORs it into a fixed warmed-up state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudlyRng {
    vec: [u64; LEN],
    tap: usize,
    feed: usize,
}

impl StudlyRng {
    /// Create a generator from a signed seed.
    ///
    /// The seed is reduced modulo `i32::MAX`; seeds that reduce to zero are
    /// replaced by a fixed non-zero value.
    pub fn new(seed: i64) -> Self {
        let mut seed = seed % i64::from(INT32_MAX);
        if seed < 0 {
            seed += i64::from(INT32_MAX);
        }
        if seed == 0 {
            seed = ZERO_SEED;
        }

        // In range after the reduction above.
        let mut x = seed as i32;
        for _ in 0..20 {
            x = seed_rand(x);
        }

        let mut vec = [0u64; LEN];
        for (slot, cooked) in vec.iter_mut().zip(COOKED) {
            x = seed_rand(x);
            let mut u = (x as u64) << 40;
            x = seed_rand(x);
            u ^= (x as u64) << 20;
            x = seed_rand(x);
            u ^= x as u64;
            *slot = u ^ cooked as u64;
        }

        Self {
            vec,
            tap: 0,
            feed: LEN - TAP,
        }
    }

    /// A non-negative 63-bit value.
    pub fn int63(&mut self) -> i64 {
        (self.next_u64() & INT63_MASK) as i64
    }
}

/// One step of the Park-Miller "minimal standard" generator, using Schrage's
/// method to stay within 32 bits.
fn seed_rand(x: i32) -> i32 {
    const A: i32 = 48_271;
    const Q: i32 = 44_488;
    const R: i32 = 3_399;

    let hi = x / Q;
    let lo = x % Q;
    let x = A * lo - R * hi;
    if x < 0 { x + INT32_MAX } else { x }
}

impl RngCore for StudlyRng {
    fn next_u32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.tap = self.tap.checked_sub(1).unwrap_or(LEN - 1);
        self.feed = self.feed.checked_sub(1).unwrap_or(LEN - 1);

        let x = self.vec[self.feed].wrapping_add(self.vec[self.tap]);
        self.vec[self.feed] = x;
        x
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for StudlyRng {
    /// Big-endian bytes of the signed seed passed to [`StudlyRng::new`].
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_be_bytes(seed))
    }

    /// Reinterpret `state` as a signed seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooked_table_edges() {
        assert_eq!(COOKED[0], -4_181_792_142_133_755_926);
        assert_eq!(COOKED[1], -4_576_982_950_128_230_565);
        assert_eq!(COOKED[606], 4_152_330_101_494_654_406);
    }

    #[test]
    fn test_seed_one_reference_stream() {
        let mut rng = StudlyRng::new(1);
        assert_eq!(rng.int63(), 5_577_006_791_947_779_410);
        assert_eq!(rng.int63(), 8_674_665_223_082_153_551);
        assert_eq!(rng.int63(), 6_129_484_611_666_145_821);
    }

    #[test]
    fn test_zero_seed_is_replaced() {
        let mut rng = StudlyRng::new(0);
        assert_eq!(rng.int63(), 8_717_895_732_742_165_505);
        assert_eq!(rng.int63(), 2_259_404_117_704_393_152);
        // i32::MAX reduces to zero as well.
        assert_eq!(StudlyRng::new(i64::from(i32::MAX)), StudlyRng::new(0));
    }

    #[test]
    fn test_negative_seeds() {
        let mut rng = StudlyRng::new(-5);
        assert_eq!(rng.int63(), 1_811_683_815_564_572_222);
        assert_eq!(rng.int63(), 4_427_849_682_616_757_295);

        let mut rng = StudlyRng::new(i64::MIN);
        assert_eq!(rng.int63(), 7_681_445_645_332_086_223);
    }

    #[test]
    fn test_next_u32_is_high_bits_of_int63() {
        let mut rng = StudlyRng::new(1);
        assert_eq!(rng.next_u32(), 2_596_996_162);
        assert_eq!(rng.next_u32(), 4_039_455_774);
    }

    #[test]
    fn test_seedable_constructors_agree() {
        let seed = -1_234_567_i64;
        assert_eq!(StudlyRng::from_seed(seed.to_be_bytes()), StudlyRng::new(seed));
        assert_eq!(StudlyRng::seed_from_u64(seed as u64), StudlyRng::new(seed));
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut a = StudlyRng::new(7);
        let mut b = a.clone();
        let mut buf = [0u8; 11];
        a.fill_bytes(&mut buf);
        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();
        assert_eq!(&buf[..8], &first);
        assert_eq!(&buf[8..], &second[..3]);
    }
}
