//! Update-history resolution
//!
//! Walks the pipeline from local identity to the pair of update records the
//! report is computed from: identity, catalog row, page fetch, link filter,
//! installed/latest selection. Document order on the vendor page is
//! newest-first and is trusted as-is; no date sort is applied.

use crate::catalog::{Catalog, CatalogEntry};
use crate::domain::{InstalledPatch, OsIdentity, RawLink, Resolution, UpdateRecord};
use crate::environment::EnvironmentQuery;
use crate::error::{PatchlagError, Result};
use crate::fetch::PageFetcher;
use crate::linkparse;

/// Updates carrying these markers never qualify as "latest"
const EXCLUDED_MARKERS: [&str; 2] = ["Preview", "Out-of-band"];

/// Resolve the installed and latest updates for the local OS
pub fn resolve(
    environment: &dyn EnvironmentQuery,
    catalog: &Catalog,
    fetcher: &dyn PageFetcher,
) -> Result<Resolution> {
    let identity = environment.identity()?;

    let entry = catalog
        .lookup(&identity.product_name, &identity.version_label)
        .ok_or_else(|| PatchlagError::CatalogLookupFailed {
            product: identity.product_name.clone(),
            version: identity.version_label.clone(),
        })?;

    let links = fetcher.fetch(&entry.history_uri)?;
    if links.is_empty() {
        return Err(PatchlagError::UnexpectedPageFormat {
            url: entry.history_uri.to_string(),
        });
    }

    let updates: Vec<&RawLink> = links.iter().filter(|l| linkparse::is_update_link(l)).collect();
    if updates.is_empty() {
        return Err(PatchlagError::NoUpdateLinksFound {
            url: entry.history_uri.to_string(),
        });
    }

    let installed = select_installed(&updates, &identity, entry)?;
    let latest = select_latest(&updates, &identity)?;

    Ok(Resolution {
        identity,
        installed,
        latest,
    })
}

/// First update link naming the full local build wins. When none does, the
/// device is on the release baseline: fall back to the catalog's GA date,
/// unless the catalog pins an initial build the device does not match.
fn select_installed(
    updates: &[&RawLink],
    identity: &OsIdentity,
    entry: &CatalogEntry,
) -> Result<InstalledPatch> {
    let candidate = updates
        .iter()
        .find(|l| contains_build_token(&l.markup, identity.build.as_str()));
    if let Some(link) = candidate {
        return linkparse::parse(link).map(InstalledPatch::Update);
    }

    match entry.initial_build.as_deref() {
        Some(initial) if initial != identity.build.as_str() => {
            Err(PatchlagError::InstalledUpdateNotFound {
                build: identity.build.as_str().to_string(),
                product: identity.product_name.clone(),
                version: identity.version_label.clone(),
            })
        }
        _ => Ok(InstalledPatch::Baseline {
            release_date: entry.initial_release_date,
        }),
    }
}

/// First update link for this release line that is neither a preview nor an
/// out-of-band hotfix. Absence is not an error: the caller reports zero
/// drift when no comparison is possible.
fn select_latest(updates: &[&RawLink], identity: &OsIdentity) -> Result<Option<UpdateRecord>> {
    let major = identity.build.major();
    updates
        .iter()
        .find(|l| {
            contains_build_token(&l.markup, major)
                && !EXCLUDED_MARKERS.iter().any(|marker| l.markup.contains(marker))
        })
        .map(|l| linkparse::parse(l))
        .transpose()
}

/// Token-boundary containment for build numbers. An occurrence only counts
/// when it is not embedded in a longer number: the character before must not
/// be an ASCII digit or '.', and the character after must not be an ASCII
/// digit. "100" never matches inside "1005523", while "22621" still matches
/// in "22621.1992" and in multi-build entries.
pub fn contains_build_token(haystack: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(token) {
        let start = from + pos;
        let end = start + token.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_ascii_digit() && c != '.');
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_digit());
        if before_ok && after_ok {
            return true;
        }
        from = start + 1;
    }
    false
}
