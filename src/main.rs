use interop_shim::{greeting, logging};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    logging::init();
    debug!("interop-shim starting");

    greeting::print_line(greeting::HELLO_WORLD)?;

    Ok(())
}
