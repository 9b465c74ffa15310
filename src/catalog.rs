//! Release catalog: feature releases and their update-history pages
//!
//! The table ships compiled into the binary and is loaded once at startup.
//! It is authored data: a row per feature release line, revised manually
//! when the vendor publishes a new one. Operators can swap in a fresher
//! table at runtime with `--catalog`.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PatchlagError, Result};

/// Embedded release table
const BUILTIN_TABLE: &str = include_str!("catalog/table.yaml");

/// Origin label for the embedded table in error messages
const BUILTIN_ORIGIN: &str = "<builtin catalog>";

/// One feature release line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product marketing name, matched as a substring of the OS caption
    pub product: String,

    /// Feature-release label, matched exactly (e.g. "22H2")
    pub version: String,

    /// Build the release line shipped with; absent where never recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_build: Option<String>,

    /// Day the release line went GA
    pub initial_release_date: NaiveDate,

    /// Vendor update-history page for the release line
    pub history_uri: Url,
}

/// The set of known feature releases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    releases: Vec<CatalogEntry>,
}

impl Catalog {
    /// The compiled-in table
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_TABLE, BUILTIN_ORIGIN)
    }

    /// Load a replacement table from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| PatchlagError::CatalogParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml(&text, &path.display().to_string())
    }

    fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_yaml::from_str(yaml).map_err(|e| PatchlagError::CatalogParseFailed {
                path: origin.to_string(),
                reason: e.to_string(),
            })?;
        catalog.validate(origin)?;
        Ok(catalog)
    }

    /// (product, version) pairs must be unique or lookup is ambiguous
    fn validate(&self, origin: &str) -> Result<()> {
        for (i, entry) in self.releases.iter().enumerate() {
            let duplicate = self.releases[..i]
                .iter()
                .any(|other| other.product == entry.product && other.version == entry.version);
            if duplicate {
                return Err(PatchlagError::CatalogParseFailed {
                    path: origin.to_string(),
                    reason: format!(
                        "duplicate entry for product '{}' version '{}'",
                        entry.product, entry.version
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.releases
    }

    /// Find the release line for a local OS identity.
    ///
    /// The OS caption embeds extra words ("Microsoft Windows 11 Enterprise"),
    /// so the row's product must occur within it, case-insensitively. The
    /// version label is compared exactly.
    pub fn lookup(&self, product_name: &str, version_label: &str) -> Option<&CatalogEntry> {
        let caption = product_name.to_lowercase();
        self.releases.iter().find(|entry| {
            caption.contains(&entry.product.to_lowercase()) && entry.version == version_label
        })
    }

    /// Route every entry's history page to one explicit URL (lab/CI use)
    pub fn with_history_override(mut self, url: Url) -> Self {
        for entry in &mut self.releases {
            entry.history_uri = url.clone();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.entries().is_empty());
    }

    #[test]
    fn test_lookup_substring_and_case_insensitive_product() {
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog
            .lookup("Microsoft Windows 11 Enterprise", "22H2")
            .unwrap();
        assert_eq!(entry.product, "Windows 11");
        assert_eq!(entry.version, "22H2");

        let entry = catalog
            .lookup("microsoft WINDOWS 11 enterprise", "22H2")
            .unwrap();
        assert_eq!(entry.product, "Windows 11");
    }

    #[test]
    fn test_lookup_version_is_exact() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("Microsoft Windows 11 Pro", "22h2").is_none());
        assert!(catalog.lookup("Microsoft Windows 11 Pro", "22H2").is_some());
    }

    #[test]
    fn test_lookup_miss() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.lookup("TempleOS", "5.03").is_none());
        assert!(catalog.lookup("Microsoft Windows 11 Pro", "19H9").is_none());
    }

    #[test]
    fn test_win11_22h2_baseline_matches_published_ga() {
        // Scenario pinned by the fallback policy: 22H2 carries no initial
        // build, only the GA date used as the synthetic baseline.
        let catalog = Catalog::builtin().unwrap();
        let entry = catalog.lookup("Windows 11", "22H2").unwrap();
        assert!(entry.initial_build.is_none());
        assert_eq!(
            entry.initial_release_date,
            NaiveDate::from_ymd_opt(2022, 9, 20).unwrap()
        );
    }

    #[test]
    fn test_duplicate_rows_rejected() {
        let yaml = r#"
releases:
  - product: Windows 11
    version: 22H2
    initial_release_date: 2022-09-20
    history_uri: "https://example.com/a"
  - product: Windows 11
    version: 22H2
    initial_release_date: 2022-09-20
    history_uri: "https://example.com/b"
"#;
        let result = Catalog::from_yaml(yaml, "<test>");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("<test>"));
        assert!(matches!(err, PatchlagError::CatalogParseFailed { .. }));
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let result = Catalog::from_yaml("releases: [unclosed", "<test>");
        assert!(matches!(
            result.unwrap_err(),
            PatchlagError::CatalogParseFailed { .. }
        ));
    }

    #[test]
    fn test_from_file_missing_path() {
        let result = Catalog::from_file(Path::new("/nonexistent/catalog.yaml"));
        assert!(matches!(
            result.unwrap_err(),
            PatchlagError::CatalogParseFailed { .. }
        ));
    }

    #[test]
    fn test_history_override_routes_all_entries() {
        let catalog = Catalog::builtin().unwrap();
        let url = Url::parse("http://127.0.0.1:8080/history").unwrap();
        let catalog = catalog.with_history_override(url.clone());
        assert!(
            catalog
                .entries()
                .iter()
                .all(|entry| entry.history_uri == url)
        );
    }
}
