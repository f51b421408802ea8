//! Seeded pseudo-random stream for reproducible generation.
//!
//! A 32-bit linear-congruential generator. Not remotely cryptographic; the
//! one hard contract is that a given seed produces the identical sequence on
//! every run and platform, so replay files and regression tests can pin a
//! seed and assert exact output. Every helper consumes exactly one draw,
//! which keeps the generation pipeline's draw order auditable.

/// A deterministic LCG stream seeded from an integer.
#[derive(Debug, Clone)]
pub struct SeedRng {
    state: u32,
}

impl SeedRng {
    /// Create a stream from a seed. Only the low 32 bits are used.
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    /// Next value in `[0, 1)`. One draw.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / 4_294_967_296.0
    }

    /// True with probability `p`. One draw.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform float in `[min, max)`. One draw.
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[min, max]` inclusive. One draw.
    pub fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as f64;
        min + (self.next_f64() * span) as i64
    }

    /// Uniform pick from a non-empty slice. One draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = ((self.next_f64() * items.len() as f64) as usize).min(items.len() - 1);
        &items[idx]
    }

    /// Weighted pick via cumulative walk: draw `r` in `[0, total)`, subtract
    /// each candidate's weight until `r <= 0`. One draw. Slice must be
    /// non-empty and weights non-negative.
    pub fn pick_weighted<'a, T>(&mut self, items: &'a [T], weight: impl Fn(&T) -> f64) -> &'a T {
        let total: f64 = items.iter().map(&weight).sum();
        let mut r = self.next_f64() * total;
        for item in items {
            r -= weight(item);
            if r <= 0.0 {
                return item;
            }
        }
        // Float round-off can leave a sliver of r; last candidate absorbs it.
        &items[items.len() - 1]
    }
}
