use core::fmt;

use md5::{Digest, Md5};
#[cfg(feature = "tracing")]
use tracing::{info, warn};

use crate::{InterfaceSource, RandSource, Result, layout::FIELD_BYTES};

/// Number of random bytes drawn when no hardware address is usable.
pub const RANDOM_SEED_BYTES: usize = 12;

/// Where a [`Fingerprint`] came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FingerprintOrigin {
    /// Hashed from the hardware address of the named interface.
    Hardware {
        /// Name of the interface whose address seeded the fingerprint.
        interface: String,
    },
    /// Hashed from a random seed because no interface was up with a hardware
    /// address.
    Random,
    /// Supplied directly, e.g. restored from configuration or a test.
    Explicit,
}

impl fmt::Display for FingerprintOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hardware { interface } => write!(f, "hardware ({interface})"),
            Self::Random => f.write_str("random"),
            Self::Explicit => f.write_str("explicit"),
        }
    }
}

/// The 4-byte machine field stamped into every id of one generator.
///
/// The bytes are the first four bytes of the MD5 digest of a seed, so the
/// hardware address itself never appears in an id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    bytes: [u8; FIELD_BYTES],
    origin: FingerprintOrigin,
}

impl Fingerprint {
    /// Derives a fingerprint from the host.
    ///
    /// The first interface that is up and has a non-zero hardware address
    /// seeds the hash with its `aa:bb:cc:dd:ee:ff` form. When there is none,
    /// [`RANDOM_SEED_BYTES`] bytes from `rng` seed it instead.
    ///
    /// # Errors
    ///
    /// - [`Error::InterfacesUnavailable`] if `interfaces` cannot enumerate.
    /// - [`Error::RandomUnavailable`] if the fallback seed cannot be drawn.
    ///
    /// [`Error::InterfacesUnavailable`]: crate::Error::InterfacesUnavailable
    /// [`Error::RandomUnavailable`]: crate::Error::RandomUnavailable
    pub fn from_sources<I, R>(interfaces: &I, rng: &R) -> Result<Self>
    where
        I: InterfaceSource + ?Sized,
        R: RandSource + ?Sized,
    {
        let nics = interfaces.interfaces()?;
        if let Some(nic) = nics.into_iter().find(|nic| nic.is_candidate()) {
            #[cfg(feature = "tracing")]
            info!(interface = %nic.name, "derived machine fingerprint from hardware address");
            let seed = nic.hardware_addr_string();
            return Ok(Self::from_seed(
                seed.as_bytes(),
                FingerprintOrigin::Hardware {
                    interface: nic.name,
                },
            ));
        }

        #[cfg(feature = "tracing")]
        warn!("no interface is up with a hardware address; using a random fingerprint seed");
        let mut seed = [0u8; RANDOM_SEED_BYTES];
        rng.fill(&mut seed)?;
        Ok(Self::from_seed(&seed, FingerprintOrigin::Random))
    }

    /// Hashes `seed` and keeps the first four digest bytes.
    #[must_use]
    pub fn from_seed(seed: &[u8], origin: FingerprintOrigin) -> Self {
        let digest = Md5::digest(seed);
        let mut bytes = [0u8; FIELD_BYTES];
        bytes.copy_from_slice(&digest[..FIELD_BYTES]);
        Self { bytes, origin }
    }

    /// Uses `bytes` as-is.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; FIELD_BYTES]) -> Self {
        Self {
            bytes,
            origin: FingerprintOrigin::Explicit,
        }
    }

    #[must_use]
    pub const fn bytes(&self) -> [u8; FIELD_BYTES] {
        self.bytes
    }

    #[must_use]
    pub const fn origin(&self) -> &FingerprintOrigin {
        &self.origin
    }

    /// Returns `true` if the fingerprint fell back to a random seed.
    #[must_use]
    pub const fn is_random(&self) -> bool {
        matches!(self.origin, FingerprintOrigin::Random)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bytes {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
