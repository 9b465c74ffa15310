//! Local OS identity types

use std::fmt;

use crate::error::{PatchlagError, Result};

/// Identity of the running OS, as reported by the environment query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    /// Marketing caption, e.g. "Microsoft Windows 11 Enterprise"
    pub product_name: String,

    /// Feature-release label, e.g. "22H2"
    pub version_label: String,

    /// Installed patch level
    pub build: OsBuild,
}

/// An OS build in `<major>.<UBR>` form, e.g. "22621.1992"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsBuild(String);

impl OsBuild {
    /// Parse a build string, requiring both the major component and the UBR
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (major, ubr) = trimmed.split_once('.').ok_or_else(|| invalid(raw))?;
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !numeric(major) || !numeric(ubr) {
            return Err(invalid(raw));
        }
        Ok(OsBuild(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The major build number, i.e. the component before the first "."
    pub fn major(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for OsBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid(raw: &str) -> PatchlagError {
    PatchlagError::EnvironmentQueryFailed {
        property: "OS build".to_string(),
        reason: format!("'{}' is not in <major>.<UBR> form", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_parse_valid() {
        let build = OsBuild::parse("22621.1992").unwrap();
        assert_eq!(build.as_str(), "22621.1992");
        assert_eq!(build.major(), "22621");
    }

    #[test]
    fn test_build_parse_trims_whitespace() {
        let build = OsBuild::parse(" 19045.3086 ").unwrap();
        assert_eq!(build.as_str(), "19045.3086");
    }

    #[test]
    fn test_build_parse_rejects_missing_ubr() {
        let result = OsBuild::parse("22621");
        assert!(matches!(
            result.unwrap_err(),
            PatchlagError::EnvironmentQueryFailed { .. }
        ));
    }

    #[test]
    fn test_build_parse_rejects_non_numeric() {
        assert!(OsBuild::parse("22621.abc").is_err());
        assert!(OsBuild::parse("abc.1992").is_err());
        assert!(OsBuild::parse("").is_err());
        assert!(OsBuild::parse("22621.").is_err());
    }

    #[test]
    fn test_build_display() {
        let build = OsBuild::parse("20348.169").unwrap();
        assert_eq!(build.to_string(), "20348.169");
    }
}
