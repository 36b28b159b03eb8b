//! Dither generator used to approximate blending on 1-bit surfaces.
//!
//! A 1-bit pixel cannot be half lit, so blends on binary painters decide per
//! pixel whether to take the source bit, with probability proportional to the
//! blend's alpha. The generator is explicit per-painter state and seedable, so
//! tests get deterministic output.

/// Seed used when none (or zero) is supplied.
pub const DEFAULT_SEED: u16 = 0xACE1;

/// xorshift16 pseudo random generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphaRng {
    state: u16,
}

impl AlphaRng {
    /// Zero is a fixed point of xorshift, so it is replaced by [`DEFAULT_SEED`].
    pub const fn new(seed: u16) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Advance and return the next value. Never returns zero.
    #[inline]
    pub fn next_u16(&mut self) -> u16 {
        let mut x = self.state;
        x ^= x << 7;
        x ^= x >> 9;
        x ^= x << 8;
        self.state = x;
        x
    }

    /// `true` with probability `chance / 255`; 0 is never and 255 always.
    #[inline]
    pub fn chance(&mut self, chance: u8) -> bool {
        match chance {
            0 => false,
            u8::MAX => true,
            _ => (self.next_u16() as u8) < chance,
        }
    }

    pub fn reseed(&mut self, seed: u16) {
        *self = Self::new(seed);
    }
}

impl Default for AlphaRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(feature = "rand_core")]
impl rand_core::RngCore for AlphaRng {
    fn next_u32(&mut self) -> u32 {
        ((self.next_u16() as u32) << 16) | self.next_u16() as u32
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(feature = "rand_core")]
impl rand_core::SeedableRng for AlphaRng {
    type Seed = [u8; 2];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u16::from_le_bytes(seed))
    }
}
