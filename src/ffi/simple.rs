//! Integer addition for FFI round-trip checks.

/// Adds two signed 32-bit integers.
///
/// Overflow wraps (two's complement) in every build profile; there is no
/// error path.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
