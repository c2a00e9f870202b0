use crate::Result;

/// A trait for sources of random seed bytes.
///
/// Used to draw the fallback fingerprint seed when no hardware address is
/// available. This abstraction allows you to plug in the OS random source or a
/// mocked random source in tests.
///
/// # Example
/// ```
/// use macid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill(&self, dest: &mut [u8]) -> macid::Result<()> {
///         dest.fill(0xAB);
///         Ok(())
///     }
/// }
///
/// let mut seed = [0u8; 4];
/// FixedRand.fill(&mut seed).unwrap();
/// assert_eq!(seed, [0xAB; 4]);
/// ```
pub trait RandSource {
    /// Fills `dest` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomUnavailable`](crate::Error::RandomUnavailable) if
    /// the source cannot produce bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}
