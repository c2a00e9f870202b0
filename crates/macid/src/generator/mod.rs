mod atomic;
mod fingerprint;
mod interface;
#[cfg(test)]
mod tests;

pub use atomic::*;
pub use fingerprint::*;
pub use interface::*;
