mod interface;
mod os_random;

pub use interface::*;
pub use os_random::*;
