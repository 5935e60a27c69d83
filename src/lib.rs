//! Deliberately slow, random or lossy ways to sort a slice, all of them
//! governed by a cancellable [`context::Context`].
//!
//! | Module    | Algorithm   | Result                                   |
//! |-----------|-------------|------------------------------------------|
//! | `bogo`    | Bogosort    | in place, unbounded random search        |
//! | `slow`    | Slowsort    | in place, multiply and surrender         |
//! | `miracle` | Miraclesort | in place, waits for the input to be sorted |
//! | `sleep`   | Sleepsort   | new vector, one sleeping thread per element |
//! | `stalin`  | Stalinsort  | new vector, out-of-order elements dropped |
//!
//! In-place procedures may leave the slice partially reordered when the
//! context stops them. The others return either a full result or nothing.

pub mod app;
pub mod bogo;
pub mod common;
pub mod compare;
pub mod context;
pub mod miracle;
pub mod sleep;
pub mod slow;
pub mod stalin;

pub use compare::{Ordered, ascending};
pub use context::{Cause, Context};
