//! `shopfront rig` - assemble and price a built-to-order rig.

use anyhow::{bail, Result};
use clap::Args;
use shopfront_commerce::prelude::*;

use crate::output::Output;

/// Arguments for the rig command.
#[derive(Args)]
pub struct RigArgs {
    /// CPU tier (base, high-end)
    #[arg(long, default_value = "base")]
    pub cpu: String,

    /// Include the RTX 4090 GPU
    #[arg(long)]
    pub gpu: bool,

    /// Include 32GB RAM
    #[arg(long)]
    pub ram: bool,

    /// Include RGB lights
    #[arg(long)]
    pub rgb: bool,
}

/// Execute the rig command.
pub fn run(args: RigArgs, output: &Output) -> Result<()> {
    let (kind, price) = cpu_option(&args.cpu)?;

    let mut builder = RigBuilder::new().cpu(kind, price);
    if args.gpu {
        builder = builder.gpu();
    }
    if args.ram {
        builder = builder.ram();
    }
    if args.rgb {
        builder = builder.rgb_lighting();
    }
    let rig = builder.build()?;

    output.heading("Built-to-order rig");
    for part in rig.parts() {
        output.info(part);
    }
    output.success(&format!("Total: {}", rig.price()));
    Ok(())
}

/// Map a CPU tier to the catalog's name and price for it.
pub fn cpu_option(tier: &str) -> Result<(&'static str, Money)> {
    match tier {
        "base" => Ok(("Base CPU", Money::from_cents(15_000))),
        "high-end" => Ok(("High-End CPU", Money::from_cents(30_000))),
        _ => bail!("unknown CPU tier: {tier} (expected base or high-end)"),
    }
}
