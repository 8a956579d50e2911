//! Console output exported over the C ABI.

use std::io::{self, Write};

use tracing::warn;

use crate::greeting;

/// Prints `Hello World from C++!` and a newline to stdout.
///
/// The line is flushed before returning so a foreign host sharing stdout sees
/// it immediately. A failed write is logged and otherwise ignored.
#[no_mangle]
pub extern "C" fn say_hello() {
    let stdout = io::stdout();
    greet(&mut stdout.lock());
}

fn greet<W: Write>(out: &mut W) {
    if let Err(e) = greeting::write_line(out, greeting::HELLO_FROM_LIBRARY) {
        warn!(error = %e, "say_hello could not write greeting");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_greet_writes_one_line() {
        let mut buf = Vec::new();
        greet(&mut buf);
        assert_eq!(buf, b"Hello World from C++!\n");
    }

    #[test]
    fn test_greet_repeats_per_call() {
        let mut buf = Vec::new();
        greet(&mut buf);
        greet(&mut buf);
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), ["Hello World from C++!"; 2]);
    }

    #[test]
    fn test_greet_swallows_write_error() {
        // Returns normally instead of panicking across the boundary
        greet(&mut ClosedPipe);
    }
}
