//! Program entry routine
//!
//! The stock implementation only demonstrates the configured logging levels
//! and succeeds. Replace `run` with the real program.

use crate::cli::Args;
use crate::error::Result;

/// Run the program with parsed arguments
pub fn run(args: &Args) -> Result<()> {
    log::debug!("parsed arguments: {:?}", args);
    log::info!("output goes to '{}'", args.output.display());
    log::warn!("nothing to do yet: this is a placeholder routine");
    Ok(())
}
