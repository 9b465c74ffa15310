//! Common test utilities for patchlag integration tests

use assert_cmd::Command;

/// Command for the real patchlag binary, with identity env vars cleared so
/// the host environment cannot leak into a test.
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn patchlag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("patchlag").unwrap();
    cmd.env_remove("PATCHLAG_PRODUCT");
    cmd.env_remove("PATCHLAG_DISPLAY_VERSION");
    cmd.env_remove("PATCHLAG_BUILD");
    cmd.env_remove("PATCHLAG_CATALOG");
    cmd
}

/// A history page shaped like the vendor's: a left-nav of update links,
/// newest first, with one preview in between and unrelated anchors around.
#[allow(dead_code)]
pub const HISTORY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Windows 11, version 22H2 update history</title></head>
<body>
  <nav>
    <a class="supLeftNavArticle" href="/en-us/topic/windows-11-version-22h2-update-history">Windows 11, version 22H2 update history</a>
    <a class="supLeftNavLink" data-bi-slot="1" href="/en-us/help/5032190">November 14, 2023&#x2014;KB5032190 (OS Builds 22621.2715 and 22631.2715)</a>
    <a class="supLeftNavLink" data-bi-slot="2" href="/en-us/help/5031455">October 31, 2023&#x2014;KB5031455 (OS Builds 22621.2506 and 22631.2506) Preview</a>
    <a class="supLeftNavLink" data-bi-slot="3" href="/en-us/help/5031354">October 10, 2023&#x2014;KB5031354 (OS Builds 22621.2428 and 22631.2428)</a>
  </nav>
  <main>
    <a href="/en-us/windows">Windows support</a>
  </main>
</body>
</html>
"#;

/// Only preview updates have been published for the release line.
#[allow(dead_code)]
pub const PREVIEW_ONLY_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <nav>
    <a class="supLeftNavLink" href="/en-us/help/5031455">October 31, 2023&#x2014;KB5031455 (OS Builds 22621.2506 and 22631.2506) Preview</a>
  </nav>
</body>
</html>
"#;

/// A page with anchors, none of which are update links.
#[allow(dead_code)]
pub const NO_UPDATE_LINKS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <a class="supLeftNavArticle" href="/en-us/topic/history">Update history</a>
  <a href="/en-us/windows">Windows support</a>
</body>
</html>
"#;

/// A page without a single hyperlink on it.
#[allow(dead_code)]
pub const NO_ANCHORS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<body>
  <p>This content has moved.</p>
</body>
</html>
"#;
