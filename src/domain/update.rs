//! Update-history page types

use chrono::NaiveDate;
use url::Url;

use super::identity::OsIdentity;

/// One anchor element lifted off the fetched page, untouched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLink {
    /// Inner text of the anchor
    pub label: String,

    /// href attribute (empty when absent)
    pub href: String,

    /// class attribute (empty when absent)
    pub css_class: String,

    /// The serialized element, used for all parsing and matching
    pub markup: String,
}

/// A published cumulative update, parsed from exactly one update link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRecord {
    /// Human-readable summary, e.g. "July 11, 2023 - KB5028185 (OS Build 22621.1992)"
    pub name: String,

    /// KB identifier, e.g. "KB5028185"
    pub kb: String,

    /// Support article for the update
    pub info_url: Url,

    /// Build token(s); entries covering two architectures carry both,
    /// e.g. "22621.1992" or "22621.1992 and 22631.1992"
    pub build: String,

    /// Day the update was published
    pub release_date: NaiveDate,
}

/// What the device is currently running
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledPatch {
    /// A published cumulative update found on the history page
    Update(UpdateRecord),

    /// The feature release's shipping baseline; no cumulative update applied
    Baseline { release_date: NaiveDate },
}

impl InstalledPatch {
    pub fn release_date(&self) -> NaiveDate {
        match self {
            InstalledPatch::Update(record) => record.release_date,
            InstalledPatch::Baseline { release_date } => *release_date,
        }
    }

    /// One-line description for diagnostics
    pub fn describe(&self) -> String {
        match self {
            InstalledPatch::Update(record) => record.name.clone(),
            InstalledPatch::Baseline { release_date } => {
                format!("feature-release baseline (released {})", release_date)
            }
        }
    }
}

/// Outcome of resolving the history page against the local identity
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The identity the page was resolved against
    pub identity: OsIdentity,

    /// The update (or baseline) the device is on
    pub installed: InstalledPatch,

    /// The newest non-preview, non-out-of-band update, when one exists
    pub latest: Option<UpdateRecord>,
}
