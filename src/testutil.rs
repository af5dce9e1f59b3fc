//! Shared helpers for unit and integration tests.

use rand::RngCore;

/// RNG that returns the same word forever. Useful for forcing one side of a
/// probability gate: a low word makes every `with_probability` check pass and
/// every weighted draw land on the first item, a high word does the opposite.
///
/// Not suitable for `range_int`, whose rejection sampling can spin on a
/// constant stream.
pub struct FixedRng(u64);

impl FixedRng {
    /// All probability gates fire; weighted draws take the first candidate.
    pub fn always_low() -> Self {
        Self(0)
    }

    /// No probability gate fires; weighted draws fall through to the last
    /// candidate.
    pub fn always_high() -> Self {
        Self(u64::MAX)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.0.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
