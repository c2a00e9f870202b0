use rand::{TryRngCore, rngs::OsRng};

use crate::{Error, RandSource, Result};

/// A `RandSource` backed by the operating system CSPRNG (`rand::rngs::OsRng`).
///
/// Unlike a thread-local RNG, the OS source reports failure instead of
/// panicking, which lets generator construction surface it as
/// [`Error::RandomUnavailable`].
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| Error::RandomUnavailable {
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_whole_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        OsRandom.fill(&mut a).unwrap();
        OsRandom.fill(&mut b).unwrap();

        // 256 random bits colliding means the source is broken.
        assert_ne!(a, b);
        assert_ne!(a, [0u8; 32]);
    }
}
