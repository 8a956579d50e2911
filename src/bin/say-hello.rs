//! Calls the exported symbols through their C declarations, the way a foreign
//! consumer of the library would.

use interop_shim::logging;
use tracing::debug;

extern "C" {
    fn add(a: i32, b: i32) -> i32;
    fn say_hello();
}

fn main() -> anyhow::Result<()> {
    logging::init();

    // SAFETY: both symbols are defined by interop_shim with these signatures.
    let sum = unsafe { add(2, 3) };
    debug!(sum, "resolved add");
    anyhow::ensure!(sum == 5, "add(2, 3) returned {sum}, expected 5");

    unsafe { say_hello() };

    Ok(())
}
