#![doc = include_str!("../README.md")]

mod error;
mod generator;
mod hardware;
mod hex;
mod id;
pub mod layout;
mod rand;
#[cfg(feature = "serde")]
mod serde;
mod time;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::hardware::*;
pub use crate::hex::{HexError, HexFormatter};
pub use crate::id::*;
pub use crate::layout::{REQUEST_ID_BYTES, REQUEST_ID_HEX_LEN};
pub use crate::rand::*;
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::time::*;
