//! dsvec - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dsvec encode 1.5 -2` | Print the wire record of a vector |
//! | `dsvec decode --file wire.json` | Print the vector held by a wire record |
//! | `dsvec nearest --field embedding --vector "1,2,3"` | Print a nearest-neighbor request |

use clap::Parser;
use dsvec::{Cli, run};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(&cli)?;
    Ok(())
}
