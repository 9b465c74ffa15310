//! Error types and handling for Patchlag
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Patchlag operations
///
/// Every variant is fatal for the run: the caller gets either a complete
/// JSON report on stdout or one of these, never both.
#[derive(Error, Diagnostic, Debug)]
pub enum PatchlagError {
    // Environment query errors
    #[error("Failed to read local OS property '{property}': {reason}")]
    #[diagnostic(
        code(patchlag::env::query_failed),
        help("Supply the value explicitly with --product, --display-version, or --build")
    )]
    EnvironmentQueryFailed { property: String, reason: String },

    // Catalog errors
    #[error("No release catalog entry for product '{product}' version '{version}'")]
    #[diagnostic(
        code(patchlag::catalog::lookup_failed),
        help("The release table may lack a newly published feature release; pass --catalog with an updated table")
    )]
    CatalogLookupFailed { product: String, version: String },

    #[error("Failed to load release catalog from {path}: {reason}")]
    #[diagnostic(code(patchlag::catalog::parse_failed))]
    CatalogParseFailed { path: String, reason: String },

    // Page fetch errors
    #[error("Failed to construct HTTP client: {reason}")]
    #[diagnostic(code(patchlag::fetch::client_failed))]
    HttpClientFailed { reason: String },

    #[error("Failed to fetch update history page {url}: {reason}")]
    #[diagnostic(
        code(patchlag::fetch::page_failed),
        help("Check network reachability; the page is requested exactly once per run")
    )]
    PageFetchFailed { url: String, reason: String },

    #[error("Update history page {url} contained no hyperlinks")]
    #[diagnostic(code(patchlag::fetch::unexpected_page_format))]
    UnexpectedPageFormat { url: String },

    // Resolution errors
    #[error("No update links found on {url}")]
    #[diagnostic(
        code(patchlag::resolve::no_update_links),
        help("The page fetched but its markup no longer matches the update-history layout")
    )]
    NoUpdateLinksFound { url: String },

    #[error("Installed build {build} is not listed for {product} {version}")]
    #[diagnostic(
        code(patchlag::resolve::installed_not_found),
        help("The device build matches neither a published update nor the release baseline recorded in the catalog")
    )]
    InstalledUpdateNotFound {
        build: String,
        product: String,
        version: String,
    },

    // Link parsing errors
    #[error("Malformed update link: {reason}")]
    #[diagnostic(code(patchlag::parse::malformed_link))]
    MalformedUpdateLink { reason: String },

    #[error("Failed to parse release date '{text}'")]
    #[diagnostic(
        code(patchlag::parse::date_failed),
        help("Update-history dates are expected in en-US form, e.g. \"July 11, 2023\"")
    )]
    DateParseFailed { text: String },

    // Output errors
    #[error("Failed to serialize report: {reason}")]
    #[diagnostic(code(patchlag::output::serialize_failed))]
    ReportSerializationFailed { reason: String },
}

impl From<serde_json::Error> for PatchlagError {
    fn from(err: serde_json::Error) -> Self {
        PatchlagError::ReportSerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PatchlagError>;
