//! vcpkg bootstrap invocation

use crate::error::{SetupError, SetupResult};
use crate::exec::{self, CommandLine};
use crate::toolchain::Host;
use std::path::Path;

/// Run the OS-selected bootstrap script with the vcpkg directory as its
/// working directory
///
/// On Unix hosts the script is marked executable first; a fresh submodule
/// checkout does not always preserve the execute bit.
pub async fn bootstrap(vcpkg_dir: &Path, host: Host) -> SetupResult<()> {
    let script = vcpkg_dir.join(host.bootstrap_script());
    if !script.exists() {
        return Err(SetupError::BootstrapScriptMissing(script));
    }

    let line = if host.shell_mediated() {
        CommandLine::new("cmd")
            .arg("/C")
            .arg(script.display().to_string())
            .cwd(vcpkg_dir)
    } else {
        make_executable(&script).await?;
        CommandLine::new(script.display().to_string()).cwd(vcpkg_dir)
    };

    exec::run(&line).await
}

#[cfg(unix)]
async fn make_executable(script: &Path) -> SetupResult<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = std::fs::Permissions::from_mode(0o755);
    tokio::fs::set_permissions(script, perms)
        .await
        .map_err(|e| SetupError::io(format!("marking {} executable", script.display()), e))
}

#[cfg(not(unix))]
async fn make_executable(_script: &Path) -> SetupResult<()> {
    Ok(())
}
