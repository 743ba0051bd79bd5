//! Ls command implementation

use anyhow::Result;

use sra_core::tables;

use crate::cli::{GlobalArgs, LsArgs};

/// Execute the ls command
pub async fn execute(args: &LsArgs, _global: &GlobalArgs) -> Result<()> {
    for (name, columns) in tables::schemas() {
        if args.columns {
            println!("{}: {}", name, columns.join(", "));
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
