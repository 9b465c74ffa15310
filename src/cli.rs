//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

/// Patchlag - Windows patch drift measurement
///
/// Reports how many days the installed cumulative update trails the latest
/// one published for the running feature release.
#[derive(Parser, Debug)]
#[command(
    name = "patchlag",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Windows patch drift measurement for compliance agents",
    long_about = "Patchlag scrapes the vendor's update-history page for the running feature \
                  release, matches the installed OS build against the published cumulative \
                  updates, and reports the day distance to the latest one as a single JSON \
                  object on stdout.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  patchlag check\n    \
                  patchlag check --product \"Microsoft Windows 11 Enterprise\" --display-version 22H2 --build 22621.2428\n    \
                  patchlag catalog\n    \
                  patchlag catalog --json\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/asyrjasalo/patchlag"
)]
pub struct Cli {
    /// Print diagnostic details to stderr (never mixed into the JSON output)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Measure drift between the installed and latest cumulative update
    Check(CheckArgs),

    /// Print the release catalog in use
    Catalog(CatalogArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Measure drift on this device:\n    patchlag check\n\n\
                  Measure drift for an explicit identity (e.g. from inventory):\n    \
                  patchlag check --product \"Microsoft Windows 11 Enterprise\" --display-version 22H2 --build 22621.2428\n\n\
                  Use a refreshed release table without rebuilding:\n    patchlag check --catalog ./releases.yaml\n\n\
                  Run against a mirrored history page:\n    patchlag check --history-url http://mirror.lab/win11-22h2")]
pub struct CheckArgs {
    /// Override the detected product name (e.g. "Microsoft Windows 11 Enterprise")
    #[arg(long, env = "PATCHLAG_PRODUCT")]
    pub product: Option<String>,

    /// Override the detected feature-release label (e.g. "22H2")
    #[arg(long, env = "PATCHLAG_DISPLAY_VERSION")]
    pub display_version: Option<String>,

    /// Override the detected OS build in <major>.<UBR> form (e.g. "22621.2428")
    #[arg(long, env = "PATCHLAG_BUILD")]
    pub build: Option<String>,

    /// Load the release catalog from a YAML file instead of the embedded table
    #[arg(long, value_name = "FILE", env = "PATCHLAG_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Fetch this page instead of the catalog entry's update-history URL
    #[arg(long, value_name = "URL")]
    pub history_url: Option<Url>,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the embedded release table:\n    patchlag catalog\n\n\
                  Machine-readable output:\n    patchlag catalog --json\n\n\
                  Inspect a replacement table:\n    patchlag catalog --catalog ./releases.yaml")]
pub struct CatalogArgs {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub json: bool,

    /// Load the release catalog from a YAML file instead of the embedded table
    #[arg(long, value_name = "FILE", env = "PATCHLAG_CATALOG")]
    pub catalog: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    patchlag completions --shell bash > ~/.bash_completion.d/patchlag\n\n\
                  Generate zsh completions:\n    patchlag completions --shell zsh > ~/.zfunc/_patchlag\n\n\
                  Generate fish completions:\n    patchlag completions --shell fish > ~/.config/fish/completions/patchlag.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
