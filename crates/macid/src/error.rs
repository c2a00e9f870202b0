use crate::HexError;

/// A result type defaulting to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `macid` can produce.
///
/// Construction failures ([`Error::InterfacesUnavailable`],
/// [`Error::RandomUnavailable`]) are fatal for the generator being built and
/// are never retried. The remaining variants describe malformed external input
/// and are always recoverable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The host network interfaces could not be enumerated at all.
    ///
    /// A generator built without a trustworthy fingerprint could hand out
    /// colliding ids, so construction aborts instead of degrading.
    #[error("cannot enumerate network interfaces: {reason}")]
    InterfacesUnavailable {
        /// Message reported by the operating system.
        reason: String,
    },

    /// No hardware address was usable and the OS random source failed while
    /// drawing the fallback seed.
    #[error("cannot read random seed: {reason}")]
    RandomUnavailable {
        /// Message reported by the random source.
        reason: String,
    },

    /// A raw byte buffer did not hold exactly
    /// [`REQUEST_ID_BYTES`](crate::REQUEST_ID_BYTES) bytes.
    #[error("invalid request id length: {len} bytes")]
    InvalidLength {
        /// Length of the rejected buffer.
        len: usize,
    },

    /// A hex string could not be decoded into a request id.
    #[error(transparent)]
    Hex(#[from] HexError),
}
