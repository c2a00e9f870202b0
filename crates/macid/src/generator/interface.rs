use std::{sync::Arc, time::SystemTime};

use crate::RequestId;

/// A minimal interface for minting request ids.
///
/// Components that need ids take a `RequestIdGenerator` instead of reaching
/// for a global, so tests can hand each of them an independent generator.
pub trait RequestIdGenerator {
    /// Returns a fresh, unique id.
    fn next_id(&self) -> RequestId;

    /// Returns a sentinel id carrying only the timestamp of `datetime`.
    ///
    /// Sentinels are bounds for range queries, never storage keys.
    fn new_with_time(&self, datetime: SystemTime) -> RequestId {
        RequestId::from_datetime(datetime)
    }
}

impl<G: RequestIdGenerator + ?Sized> RequestIdGenerator for &G {
    fn next_id(&self) -> RequestId {
        (**self).next_id()
    }

    fn new_with_time(&self, datetime: SystemTime) -> RequestId {
        (**self).new_with_time(datetime)
    }
}

impl<G: RequestIdGenerator + ?Sized> RequestIdGenerator for Arc<G> {
    fn next_id(&self) -> RequestId {
        (**self).next_id()
    }

    fn new_with_time(&self, datetime: SystemTime) -> RequestId {
        (**self).new_with_time(datetime)
    }
}
