//! `#[serde(with = "...")]` adapters for [`RequestId`](crate::RequestId).
//!
//! - [`as_hex_request_id`]: the canonical 24-character lowercase hex string.
//! - [`as_native_request_id`]: the 12 raw bytes.

mod request_id;

pub use request_id::*;
