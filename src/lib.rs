//! Interop Shim - C ABI export test library
//!
//! This library exports `add` and `say_hello` with C linkage so foreign code
//! can load the `cdylib` and call them by symbol name.

pub mod error;
pub mod ffi;
pub mod greeting;
pub mod logging;

pub use error::ShimError;
pub use ffi::{add, say_hello};
