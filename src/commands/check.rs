//! Check command implementation
//!
//! Runs the resolution pipeline and prints the drift report as a single
//! JSON object on stdout. Everything else goes to stderr.

use console::Style;

use crate::catalog::Catalog;
use crate::cli::CheckArgs;
use crate::delta::DriftReport;
use crate::domain::Resolution;
use crate::environment::{OverrideEnvironment, SystemEnvironment};
use crate::error::Result;
use crate::fetch::HttpPageFetcher;
use crate::resolver;

/// Run check command
pub fn run(verbose: bool, args: CheckArgs) -> Result<()> {
    let catalog = load_catalog(&args)?;
    let environment = OverrideEnvironment::new(
        SystemEnvironment,
        args.product,
        args.display_version,
        args.build,
    );
    let fetcher = HttpPageFetcher::new()?;

    let resolution = resolver::resolve(&environment, &catalog, &fetcher)?;

    if verbose {
        print_diagnostics(&resolution);
    }

    let report = DriftReport::from_resolution(&resolution);
    println!("{}", serde_json::to_string(&report)?);

    Ok(())
}

fn load_catalog(args: &CheckArgs) -> Result<Catalog> {
    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin()?,
    };
    Ok(match &args.history_url {
        Some(url) => catalog.with_history_override(url.clone()),
        None => catalog,
    })
}

fn print_diagnostics(resolution: &Resolution) {
    let heading = Style::new().bold();
    eprintln!(
        "{} {} {} (build {})",
        heading.apply_to("Device:"),
        resolution.identity.product_name,
        resolution.identity.version_label,
        resolution.identity.build
    );
    eprintln!(
        "{} {}",
        heading.apply_to("Installed:"),
        resolution.installed.describe()
    );
    match &resolution.latest {
        Some(latest) => eprintln!("{} {}", heading.apply_to("Latest:"), latest.name),
        None => eprintln!(
            "{} no non-preview update published for this release line",
            heading.apply_to("Latest:")
        ),
    }
}
