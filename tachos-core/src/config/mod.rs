//! Configuration types
//!
//! Fixed controller constants. There is no runtime configuration source;
//! the firmware only validates the compiled-in values at boot.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
