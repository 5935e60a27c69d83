pub mod core;
#[cfg(unix)]
pub mod signal;


pub use self::core::*;
#[cfg(unix)]
pub use self::signal::cancel_on_interrupt;
