//! RNG module - seeded deck shuffling
//!
//! Every board is dealt from a shuffled list holding each symbol of the level's
//! palette twice. Shuffling uses a small PCG-style generator so that a seed fully
//! determines the deal (handy for tests and replays), with an unbiased bounded
//! draw so the Fisher-Yates shuffle is a uniform permutation.

/// Small PCG (XSH-RR) random number generator
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
    seed: u32,
}

const PCG_MULTIPLIER: u64 = 6364136223846793005;
const PCG_INCREMENT: u64 = 1442695040888963407;

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = Self { state: 0, seed };
        rng.step();
        rng.state = rng.state.wrapping_add(seed as u64);
        rng.step();
        rng
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(PCG_INCREMENT);
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Generate random value in range [0, max) without modulo bias
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }

        // Lemire's multiply-shift with rejection of the biased low zone.
        let mut m = (self.next_u32() as u64) * (max as u64);
        let mut low = m as u32;
        if low < max {
            let threshold = max.wrapping_neg() % max;
            while low < threshold {
                m = (self.next_u32() as u64) * (max as u64);
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
