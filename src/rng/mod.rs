//! Non-cryptographic random source.
//!
//! `Rand` plugs into the `rand` traits so generators and the animator take
//! any `Rng`. It is fast and uniform but makes no security claim; swap in
//! `rand::rngs::OsRng` where that matters.

mod hw;

use std::fmt;

use rand::{RngCore, SeedableRng};
use zeroize::Zeroize;

// Odd 64-bit multipliers; one is picked per draw from the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0xa076_1d64_78bd_642f,
];

const WEYL_STEP: u64 = 0x9e37_79b9_7f4a_7c15;

/// Name of the hardware counter mixed into unseeded draws.
pub fn entropy_source() -> &'static str {
    hw::source_name()
}

#[derive(Clone, Copy)]
enum Source {
    Hardware,
    Weyl(u64),
}

pub struct Rand {
    state: u64,
    source: Source,
}

impl Rand {
    /// Mix the hardware counter into every draw.
    pub fn from_entropy() -> Self {
        Rand {
            state: hw::entropy() ^ WEYL_STEP,
            source: Source::Hardware,
        }
    }

    /// Reproducible stream: the entropy word comes from a Weyl sequence.
    pub fn seeded(seed: u64) -> Self {
        Rand {
            state: seed,
            source: Source::Weyl(seed),
        }
    }

    pub fn is_seeded(&self) -> bool {
        matches!(self.source, Source::Weyl(_))
    }

    #[inline(always)]
    fn entropy(&mut self) -> u64 {
        match &mut self.source {
            Source::Hardware => hw::entropy(),
            Source::Weyl(w) => {
                *w = w.wrapping_add(WEYL_STEP);
                *w
            }
        }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = self.entropy();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // rotate, multiply, fold entropy back in
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for Rand {
    fn default() -> Self {
        Rand::from_entropy()
    }
}

impl fmt::Debug for Rand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            Source::Hardware => hw::source_name(),
            Source::Weyl(_) => "seeded",
        };
        f.debug_struct("Rand").field("source", &source).finish()
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
        if let Source::Weyl(w) = &mut self.source {
            w.zeroize();
        }
    }
}

impl RngCore for Rand {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Rand {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Rand::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Rand::seeded(state)
    }
}
