pub mod core;
pub mod duration;

#[cfg(test)]
mod tests;

pub use self::core::*;
pub use self::duration::*;
