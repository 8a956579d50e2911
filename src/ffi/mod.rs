//! Exported symbols of the shared library.
//!
//! `add` and `say_hello` keep their exact names under `#[no_mangle]` and use the
//! platform C calling convention. Failures inside them are logged, never
//! propagated or unwound to the foreign caller.

pub mod console;
pub mod simple;

pub use console::say_hello;
pub use simple::add;
