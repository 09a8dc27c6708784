//! @acp:module "Platforms Command"
//! @acp:summary "Print the platform length-limit table"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use crate::platform::Platform;

/// Execute the platforms command
pub fn execute_platforms() -> Result<()> {
    println!("{} Supported platforms:\n", style("→").cyan());
    for platform in Platform::ALL {
        println!(
            "  {:<10} {:>6} characters",
            style(platform.id()).bold(),
            platform.max_chars()
        );
    }
    Ok(())
}
