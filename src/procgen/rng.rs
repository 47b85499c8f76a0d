use rand::rand_core::impls;
use rand::{RngCore, SeedableRng};

/// Fixed odd increment added to the state before every output.
const INCREMENT: u32 = 0x6D2B_79F5;

/// 2^32, the divisor that maps a `u32` output into `[0, 1)`.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32: a 32-bit state, 32-bit output mixing generator.
///
/// Every step uses wrapping `u32` arithmetic so the stream is bit-identical to other
/// implementations of the same function. The state starts one increment past the
/// seed, so the first output mixes `seed + 2 * INCREMENT`.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.wrapping_add(INCREMENT),
        }
    }

    /// Next float in `[0, 1)`.
    pub fn draw(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(1 | a);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// Next float in `[0, 1)` from any generator, via its 32-bit output.
///
/// Generation passes take `&mut dyn RngCore` and draw through this so the consumed
/// stream is exactly one `next_u32` per draw.
pub fn draw(rng: &mut dyn RngCore) -> f64 {
    f64::from(rng.next_u32()) / TWO_POW_32
}
