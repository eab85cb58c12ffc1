//! `shopfront browse` - show a brand family's product line.

use anyhow::Result;
use clap::Args;
use shopfront_commerce::prelude::*;

use crate::output::Output;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Brand family tag (fruit, robo)
    pub brand: String,

    /// Print the product line as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the browse command.
pub fn run(args: BrowseArgs, output: &Output) -> Result<()> {
    let brand = Brand::from_tag(&args.brand)?;
    let line = brand.product_line();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&line)?);
        return Ok(());
    }

    output.heading(&format!("{} product line", brand.tag()));
    for device in [&line.laptop, &line.phone] {
        output.item(&device.name(), device.price());
    }
    Ok(())
}
