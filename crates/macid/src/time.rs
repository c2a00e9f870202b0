use std::time::SystemTime;

use crate::id::unix_secs;

/// A trait for time sources that return wall-clock Unix seconds.
///
/// This abstraction allows you to plug in the system clock or a mocked time
/// source in tests. Values are already truncated to the 32-bit timestamp field
/// of a [`RequestId`](crate::RequestId).
///
/// # Example
///
/// ```
/// use macid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource for FixedTime {
///     fn current_secs(&self) -> u32 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_secs(), 1234);
/// ```
pub trait TimeSource {
    /// Returns the current time in whole seconds since the Unix epoch.
    fn current_secs(&self) -> u32;
}

/// The system wall clock.
///
/// Unlike a monotonic clock this follows wall-clock adjustments, so ids minted
/// around a backwards step can carry an earlier timestamp. Uniqueness still
/// holds because the sequence field never repeats within 2^32 ids.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_secs(&self) -> u32 {
        unix_secs(SystemTime::now())
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn current_secs(&self) -> u32 {
        (**self).current_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::UNIX_EPOCH;

    #[test]
    fn system_clock_matches_wall_clock() {
        let before = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();
        let secs = u64::from(SystemClock.current_secs());
        let after = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs();

        assert!(before <= secs && secs <= after);
    }
}
