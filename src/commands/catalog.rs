//! Catalog command implementation
//!
//! Prints the release table in use, for the manual refresh workflow: an
//! operator checking whether a newly published feature release line is
//! covered.

use console::Style;

use crate::catalog::Catalog;
use crate::cli::CatalogArgs;
use crate::error::Result;

/// Run catalog command
pub fn run(args: CatalogArgs) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin()?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    println!("Known feature releases ({}):", catalog.entries().len());
    println!();

    for entry in catalog.entries() {
        println!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(&entry.product),
            entry.version
        );
        if let Some(ref build) = entry.initial_build {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Initial build:"),
                build
            );
        }
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Released:"),
            entry.initial_release_date
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("History:"),
            entry.history_uri
        );
        println!();
    }

    Ok(())
}
