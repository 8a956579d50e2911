//! Greeting text and the line writer.
//!
//! The exported `say_hello` and both console programs print through
//! `write_line`, so their exact output can be checked against a buffer.

use std::io::Write;

use crate::error::ShimError;

/// Line printed by the exported `say_hello`. Part of the interop contract.
pub const HELLO_FROM_LIBRARY: &str = "Hello World from C++!";

/// Line printed by the `interop-shim` program.
pub const HELLO_WORLD: &str = "Hello World!";

/// Write `text` followed by a newline, then flush.
pub fn write_line<W: Write>(out: &mut W, text: &str) -> Result<(), ShimError> {
    writeln!(out, "{text}")?;
    out.flush()?;
    Ok(())
}

/// Write `text` as one line to the process stdout.
///
/// Holds the stdout lock for the whole line.
pub fn print_line(text: &str) -> Result<(), ShimError> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_line(&mut lock, text)
}
