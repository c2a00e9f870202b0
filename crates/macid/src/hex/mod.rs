mod codec;
mod error;
mod formatter;

pub(crate) use codec::*;
pub use error::*;
pub use formatter::*;
