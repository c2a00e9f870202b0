use core::fmt;
use std::time::SystemTime;

use portable_atomic::{AtomicU32, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Fingerprint, InterfaceSource, OsRandom, RandSource, RequestId, RequestIdGenerator, Result,
    SystemClock, SystemInterfaces, TimeSource,
};

/// A lock-free request id generator suitable for multi-threaded environments.
///
/// Each generator owns a [`Fingerprint`] fixed at construction and a 32-bit
/// sequence counter stored in an [`AtomicU32`]. Every call to
/// [`Self::next_id`] performs one atomic increment, so concurrent callers
/// sharing a generator (by reference or through an `Arc`) never observe the
/// same sequence value.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Never blocks, never retries
/// - ✅ Independent counters per instance
///
/// ## Caveats
/// The sequence is 32 bits wide and wraps to `0` after `u32::MAX`. Ids stay
/// unique as long as one generator mints fewer than 2^32 ids within the same
/// second, which the wire format does not leave room to extend.
///
/// Construction enumerates host interfaces and may fail; see
/// [`Self::new`].
pub struct MacidGenerator<T = SystemClock>
where
    T: TimeSource,
{
    fingerprint: Fingerprint,
    #[cfg(feature = "cache-padded")]
    sequence: crossbeam_utils::CachePadded<AtomicU32>,
    #[cfg(not(feature = "cache-padded"))]
    sequence: AtomicU32,
    time: T,
}

impl MacidGenerator<SystemClock> {
    /// Creates a generator fingerprinted from this host and stamped with the
    /// system clock.
    ///
    /// # Errors
    ///
    /// - [`Error::InterfacesUnavailable`] if the host interfaces cannot be
    ///   enumerated. Treat this as fatal for whatever needs the generator.
    /// - [`Error::RandomUnavailable`] if no hardware address is usable and
    ///   the OS random source fails.
    ///
    /// # Example
    /// ```
    /// use macid::MacidGenerator;
    ///
    /// let generator = MacidGenerator::new().unwrap();
    /// let a = generator.next_id();
    /// let b = generator.next_id();
    ///
    /// assert_ne!(a, b);
    /// assert_eq!(b.sequence(), a.sequence().wrapping_add(1));
    /// ```
    ///
    /// [`Error::InterfacesUnavailable`]: crate::Error::InterfacesUnavailable
    /// [`Error::RandomUnavailable`]: crate::Error::RandomUnavailable
    pub fn new() -> Result<Self> {
        Self::with_sources(&SystemInterfaces, &OsRandom, SystemClock)
    }
}

impl<T> MacidGenerator<T>
where
    T: TimeSource,
{
    /// Creates a generator from explicit interface, random and time sources.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Fingerprint::from_sources`].
    pub fn with_sources<I, R>(interfaces: &I, rng: &R, time: T) -> Result<Self>
    where
        I: InterfaceSource + ?Sized,
        R: RandSource + ?Sized,
    {
        let fingerprint = Fingerprint::from_sources(interfaces, rng)?;
        Ok(Self::from_components(fingerprint, 0, time))
    }

    /// Creates a generator from a known fingerprint and starting sequence.
    ///
    /// The first id minted carries `sequence + 1`.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`MacidGenerator::new`] to let
    /// the generator derive its own fingerprint.
    pub fn from_components(fingerprint: Fingerprint, sequence: u32, time: T) -> Self {
        Self {
            fingerprint,
            #[cfg(feature = "cache-padded")]
            sequence: crossbeam_utils::CachePadded::new(AtomicU32::new(sequence)),
            #[cfg(not(feature = "cache-padded"))]
            sequence: AtomicU32::new(sequence),
            time,
        }
    }

    /// Mints a new id: the current second, this generator's fingerprint and
    /// the post-increment sequence value.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> RequestId {
        let timestamp = self.time.current_secs();
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        RequestId::from_components(timestamp, self.fingerprint.bytes(), sequence)
    }

    /// Returns a sentinel id whose timestamp is `datetime` in whole seconds and
    /// whose machine and sequence fields are zero.
    ///
    /// # ⚠️ Note
    /// It is **not** safe to store a record under a sentinel id. Sentinels
    /// exist only to find ids created before or after `datetime`. This method
    /// does not touch the sequence counter.
    #[must_use]
    pub fn new_with_time(&self, datetime: SystemTime) -> RequestId {
        RequestId::from_datetime(datetime)
    }

    /// Returns the machine fingerprint stamped into every id.
    #[must_use]
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns the sequence value of the most recently minted id.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence.load(Ordering::Relaxed)
    }
}

impl<T> RequestIdGenerator for MacidGenerator<T>
where
    T: TimeSource,
{
    fn next_id(&self) -> RequestId {
        self.next_id()
    }

    fn new_with_time(&self, datetime: SystemTime) -> RequestId {
        self.new_with_time(datetime)
    }
}

impl<T> fmt::Debug for MacidGenerator<T>
where
    T: TimeSource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MacidGenerator")
            .field("fingerprint", &self.fingerprint)
            .field("sequence", &self.sequence())
            .finish_non_exhaustive()
    }
}
