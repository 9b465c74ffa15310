//! Local OS identity queries
//!
//! The three identity properties come from different host sources, so each
//! is queried separately and fails distinguishably. CLI overrides layer on
//! top and are also the seam for exercising the pipeline off-box.

use sysinfo::System;

use crate::domain::{OsBuild, OsIdentity};
use crate::error::{PatchlagError, Result};

/// Supplies the identity of the running OS
pub trait EnvironmentQuery {
    fn product_name(&self) -> Result<String>;
    fn version_label(&self) -> Result<String>;
    fn build_string(&self) -> Result<String>;

    /// All three properties, or the first failure
    fn identity(&self) -> Result<OsIdentity> {
        Ok(OsIdentity {
            product_name: self.product_name()?,
            version_label: self.version_label()?,
            build: OsBuild::parse(&self.build_string()?)?,
        })
    }
}

/// Best-effort probe of the host OS
pub struct SystemEnvironment;

impl EnvironmentQuery for SystemEnvironment {
    fn product_name(&self) -> Result<String> {
        System::long_os_version()
            .or_else(System::name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| query_failed("product name", "not reported by the host"))
    }

    #[cfg(windows)]
    fn version_label(&self) -> Result<String> {
        let output = std::process::Command::new("reg")
            .args([
                "query",
                r"HKLM\SOFTWARE\Microsoft\Windows NT\CurrentVersion",
                "/v",
                "DisplayVersion",
            ])
            .output()
            .map_err(|e| query_failed("display version", e.to_string()))?;
        if !output.status.success() {
            return Err(query_failed(
                "display version",
                "registry value DisplayVersion is missing",
            ));
        }
        let text = String::from_utf8_lossy(&output.stdout);
        text.lines()
            .find(|line| line.contains("DisplayVersion"))
            .and_then(|line| line.split_whitespace().last())
            .map(str::to_string)
            .ok_or_else(|| query_failed("display version", "unexpected reg query output"))
    }

    #[cfg(not(windows))]
    fn version_label(&self) -> Result<String> {
        Err(query_failed(
            "display version",
            "only readable on Windows; pass --display-version",
        ))
    }

    #[cfg(windows)]
    fn build_string(&self) -> Result<String> {
        // `ver` is the only stock command whose output carries the UBR.
        let output = std::process::Command::new("cmd")
            .args(["/c", "ver"])
            .output()
            .map_err(|e| query_failed("OS build", e.to_string()))?;
        let text = String::from_utf8_lossy(&output.stdout);
        parse_ver_output(&text).ok_or_else(|| {
            query_failed("OS build", format!("unexpected ver output: {}", text.trim()))
        })
    }

    #[cfg(not(windows))]
    fn build_string(&self) -> Result<String> {
        Err(query_failed(
            "OS build",
            "only readable on Windows; pass --build",
        ))
    }
}

/// Layers explicit values over another environment query; only properties
/// left unset fall through to the inner query.
pub struct OverrideEnvironment<E> {
    inner: E,
    product_name: Option<String>,
    version_label: Option<String>,
    build: Option<String>,
}

impl<E: EnvironmentQuery> OverrideEnvironment<E> {
    pub fn new(
        inner: E,
        product_name: Option<String>,
        version_label: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            inner,
            product_name,
            version_label,
            build,
        }
    }
}

impl<E: EnvironmentQuery> EnvironmentQuery for OverrideEnvironment<E> {
    fn product_name(&self) -> Result<String> {
        match &self.product_name {
            Some(value) => Ok(value.clone()),
            None => self.inner.product_name(),
        }
    }

    fn version_label(&self) -> Result<String> {
        match &self.version_label {
            Some(value) => Ok(value.clone()),
            None => self.inner.version_label(),
        }
    }

    fn build_string(&self) -> Result<String> {
        match &self.build {
            Some(value) => Ok(value.clone()),
            None => self.inner.build_string(),
        }
    }
}

/// Extracts "<major>.<UBR>" from `ver` output such as
/// "Microsoft Windows [Version 10.0.22621.1992]"
#[cfg_attr(not(windows), allow(dead_code))]
fn parse_ver_output(text: &str) -> Option<String> {
    let start = text.find("[Version ")? + "[Version ".len();
    let rest = &text[start..];
    let inner = &rest[..rest.find(']')?];
    let mut parts = inner.trim().split('.');
    let (_, _) = (parts.next()?, parts.next()?);
    let major = parts.next()?;
    let ubr = parts.next()?;
    Some(format!("{}.{}", major, ubr))
}

fn query_failed(property: &str, reason: impl Into<String>) -> PatchlagError {
    PatchlagError::EnvironmentQueryFailed {
        property: property.to_string(),
        reason: reason.into(),
    }
}
