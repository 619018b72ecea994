//! Git submodule acquisition

use crate::error::SetupResult;
use crate::exec::{self, CommandLine};
use std::path::Path;

/// Fetch and initialize all submodules recursively
///
/// Runs in the repository root; a failure (no network, not a git checkout)
/// is fatal to the bootstrap.
pub async fn submodule_update(root: &Path) -> SetupResult<()> {
    exec::run(
        &CommandLine::new("git")
            .args(["submodule", "update", "--init", "--recursive"])
            .cwd(root),
    )
    .await
}
