//! Integration tests for rtype-setup

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use tempfile::TempDir;

    fn rtype_setup() -> Command {
        cargo_bin_cmd!("rtype-setup")
    }

    /// Command pinned to a temp cwd with config lookups isolated from the host
    fn in_dir(dir: &TempDir) -> Command {
        let mut cmd = rtype_setup();
        cmd.current_dir(dir.path())
            .env("XDG_CONFIG_HOME", dir.path().join("xdg-config"));
        cmd
    }

    #[test]
    fn help_displays() {
        rtype_setup()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("development environment bootstrap"))
            .stdout(predicate::str::contains("bootstrap"))
            .stdout(predicate::str::contains("status"))
            .stdout(predicate::str::contains("clean"));
    }

    #[test]
    fn version_displays() {
        rtype_setup()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("rtype-setup"));
    }

    #[test]
    fn status_runs() {
        let temp = TempDir::new().unwrap();
        // Status reports but never fails on missing tools or markers
        in_dir(&temp)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Environment Status"));
    }

    #[test]
    fn status_reports_unbootstrapped_repo() {
        let temp = TempDir::new().unwrap();
        in_dir(&temp)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("vcpkg submodule not initialized"))
            .stdout(predicate::str::contains("build tree not configured"));
    }

    #[test]
    fn clean_nothing_to_do() {
        let temp = TempDir::new().unwrap();
        in_dir(&temp)
            .arg("clean")
            .assert()
            .success()
            .stdout(predicate::str::contains("Nothing to clean"));
    }

    #[test]
    fn clean_refuses_without_yes() {
        let temp = TempDir::new().unwrap();
        let build_dir = temp.path().join("build");
        std::fs::create_dir_all(&build_dir).unwrap();
        std::fs::write(build_dir.join("CMakeCache.txt"), "").unwrap();

        // Non-interactive without --yes: refuse, but do not fail
        in_dir(&temp).arg("clean").assert().success();
        assert!(build_dir.exists());
    }

    #[test]
    fn clean_with_yes_removes_build_dir() {
        let temp = TempDir::new().unwrap();
        let build_dir = temp.path().join("build");
        std::fs::create_dir_all(&build_dir).unwrap();
        std::fs::write(build_dir.join("CMakeCache.txt"), "").unwrap();

        in_dir(&temp)
            .args(["clean", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed"));
        assert!(!build_dir.exists());
    }

    #[test]
    fn init_creates_local_config() {
        let temp = TempDir::new().unwrap();
        in_dir(&temp)
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Created project config"));
        assert!(temp.path().join(".rtype-setup.toml").exists());
    }

    #[test]
    fn init_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".rtype-setup.toml"), "existing").unwrap();

        in_dir(&temp)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("already exists"));
    }

    #[test]
    fn invalid_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("broken.toml");
        std::fs::write(&config, "not [valid toml").unwrap();

        in_dir(&temp)
            .args(["--config", config.to_str().unwrap(), "status"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}

/// Bootstrap behavior against stubbed external tools
///
/// Each scenario builds a throwaway repository and a bin directory of stub
/// `git`/`cmake` executables prepended to PATH. Stubs append their
/// invocation to a log file so ordering and skipping are observable.
/// Shell-script stubs keep these tests Unix-only; the Windows side of the
/// platform table is covered by unit tests.
#[cfg(unix)]
mod bootstrap_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const GIT_STUB: &str = r#"echo "git $@" >> "$STUB_LOG"
mkdir -p vcpkg
touch vcpkg/README.md
exit 0
"#;

    /// Configure writes a CMakeCache.txt recording the toolchain file it
    /// was given, like the real tool; build just logs.
    const CMAKE_STUB: &str = r#"echo "cmake $@" >> "$STUB_LOG"
if [ "$1" = "-S" ]; then
    builddir=""
    toolchain=""
    prev=""
    for a in "$@"; do
        case "$a" in
            -DCMAKE_TOOLCHAIN_FILE=*) toolchain="${a#-DCMAKE_TOOLCHAIN_FILE=}" ;;
        esac
        if [ "$prev" = "-B" ]; then builddir="$a"; fi
        prev="$a"
    done
    mkdir -p "$builddir"
    printf 'CMAKE_BUILD_TYPE:STRING=Debug\nCMAKE_TOOLCHAIN_FILE:FILEPATH=%s\n' "$toolchain" > "$builddir/CMakeCache.txt"
fi
exit 0
"#;

    const BOOTSTRAP_STUB: &str = "#!/bin/sh\necho \"bootstrap-vcpkg $@\" >> \"$STUB_LOG\"\ntouch vcpkg\nexit 0\n";

    struct Sandbox {
        temp: TempDir,
    }

    impl Sandbox {
        /// A repository with the vcpkg submodule present as an empty
        /// checkout (bootstrap script only, no marker, no executable).
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            let sandbox = Self { temp };
            fs::create_dir_all(sandbox.repo()).unwrap();
            fs::create_dir_all(sandbox.bin()).unwrap();
            fs::create_dir_all(sandbox.repo().join("vcpkg")).unwrap();

            // Fresh submodule checkouts do not preserve the execute bit
            let script = sandbox.repo().join("vcpkg").join("bootstrap-vcpkg.sh");
            fs::write(&script, BOOTSTRAP_STUB).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();

            sandbox.stub("git", GIT_STUB);
            sandbox.stub("cmake", CMAKE_STUB);
            sandbox
        }

        /// Same, but with every marker already in place
        fn bootstrapped() -> Self {
            let sandbox = Self::new();
            let vcpkg = sandbox.repo().join("vcpkg");
            fs::write(vcpkg.join("README.md"), "# vcpkg").unwrap();
            fs::write(vcpkg.join("vcpkg"), "").unwrap();

            let build = sandbox.repo().join("build");
            fs::create_dir_all(&build).unwrap();
            fs::write(
                build.join("CMakeCache.txt"),
                format!(
                    "CMAKE_BUILD_TYPE:STRING=Debug\nCMAKE_TOOLCHAIN_FILE:FILEPATH={}\n",
                    vcpkg.join("scripts/buildsystems/vcpkg.cmake").display()
                ),
            )
            .unwrap();
            sandbox
        }

        fn repo(&self) -> PathBuf {
            self.temp.path().join("repo")
        }

        fn bin(&self) -> PathBuf {
            self.temp.path().join("bin")
        }

        fn log_path(&self) -> PathBuf {
            self.temp.path().join("invocations.log")
        }

        fn stub(&self, name: &str, body: &str) {
            let path = self.bin().join(name);
            let content = if body.starts_with("#!") {
                body.to_string()
            } else {
                format!("#!/bin/sh\n{}", body)
            };
            fs::write(&path, content).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        fn command(&self) -> Command {
            let path = format!(
                "{}:{}",
                self.bin().display(),
                std::env::var("PATH").unwrap_or_default()
            );
            let mut cmd = cargo_bin_cmd!("rtype-setup");
            cmd.current_dir(self.repo())
                .env("PATH", path)
                .env("STUB_LOG", self.log_path())
                .env("XDG_CONFIG_HOME", self.temp.path().join("xdg-config"));
            cmd
        }

        fn log(&self) -> Vec<String> {
            match fs::read_to_string(self.log_path()) {
                Ok(content) => content.lines().map(str::to_string).collect(),
                Err(_) => Vec::new(),
            }
        }

        fn clear_log(&self) {
            fs::write(self.log_path(), "").unwrap();
        }
    }

    fn position(log: &[String], needle: &str) -> Option<usize> {
        log.iter().position(|line| line.contains(needle))
    }

    #[test]
    fn full_bootstrap_from_scratch() {
        let sandbox = Sandbox::new();

        // No subcommand: the bare invocation is the full bootstrap
        sandbox
            .command()
            .assert()
            .success()
            .stdout(predicate::str::contains(
                ">> git submodule update --init --recursive",
            ))
            .stdout(predicate::str::contains("Bootstrap complete"));

        let log = sandbox.log();
        let submodule = position(&log, "git submodule update --init --recursive").unwrap();
        let bootstrap = position(&log, "bootstrap-vcpkg").unwrap();
        let configure = position(&log, "cmake -S .").unwrap();
        let compile = position(&log, "cmake --build build").unwrap();
        assert!(submodule < bootstrap, "submodule fetch must come first");
        assert!(bootstrap < configure);
        assert!(configure < compile);

        assert!(sandbox.repo().join("vcpkg/vcpkg").exists());
        assert!(sandbox.repo().join("build/CMakeCache.txt").exists());

        // The bootstrap script was marked executable before running
        let mode = fs::metadata(sandbox.repo().join("vcpkg/bootstrap-vcpkg.sh"))
            .unwrap()
            .permissions()
            .mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn second_run_skips_heavy_work() {
        let sandbox = Sandbox::new();
        sandbox.command().assert().success();

        let sentinel = sandbox.repo().join("build/compiled-artifact.o");
        fs::write(&sentinel, "object code").unwrap();
        sandbox.clear_log();

        sandbox
            .command()
            .assert()
            .success()
            .stdout(predicate::str::contains("already initialized"))
            .stdout(predicate::str::contains("already built"));

        let log = sandbox.log();
        assert!(position(&log, "git submodule").is_none(), "no refetch");
        assert!(position(&log, "bootstrap-vcpkg").is_none(), "no rebootstrap");
        assert!(position(&log, "cmake -S .").is_some());
        assert!(position(&log, "cmake --build").is_some());

        // Matching cache: the build tree must survive the second run
        assert!(sentinel.exists());
    }

    #[test]
    fn stale_cache_is_cleared_and_recreated() {
        let sandbox = Sandbox::bootstrapped();
        let build = sandbox.repo().join("build");
        fs::write(
            build.join("CMakeCache.txt"),
            "CMAKE_TOOLCHAIN_FILE:FILEPATH=/old/checkout/vcpkg/scripts/buildsystems/vcpkg.cmake\n",
        )
        .unwrap();
        let leftover = build.join("stale-artifact.o");
        fs::write(&leftover, "stale").unwrap();

        sandbox
            .command()
            .assert()
            .success()
            .stdout(predicate::str::contains("Stale CMake cache detected"));

        assert!(!leftover.exists(), "prior contents must be gone");
        assert!(build.join("CMakeCache.txt").exists(), "reconfigured");

        let log = sandbox.log();
        assert!(position(&log, "git submodule").is_none());
        assert!(position(&log, "bootstrap-vcpkg").is_none());
    }

    #[test]
    fn fatal_submodule_failure_propagates_exit_code() {
        let sandbox = Sandbox::new();
        sandbox.stub("git", "echo \"git $@\" >> \"$STUB_LOG\"\nexit 3\n");

        sandbox
            .command()
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Command failed"))
            .stderr(predicate::str::contains("git submodule"));

        // No later stage may run after a fatal failure
        let log = sandbox.log();
        assert!(position(&log, "bootstrap-vcpkg").is_none());
        assert!(position(&log, "cmake").is_none());
    }

    #[test]
    fn fatal_configure_failure_stops_before_build() {
        let sandbox = Sandbox::bootstrapped();
        sandbox.stub(
            "cmake",
            "echo \"cmake $@\" >> \"$STUB_LOG\"\nif [ \"$1\" = \"-S\" ]; then exit 2; fi\nexit 0\n",
        );

        sandbox.command().assert().code(2);

        let log = sandbox.log();
        assert!(position(&log, "cmake -S .").is_some());
        assert!(position(&log, "cmake --build").is_none());
    }

    #[test]
    fn cleanup_failure_is_not_fatal() {
        let sandbox = Sandbox::bootstrapped();
        let build = sandbox.repo().join("build");
        fs::write(
            build.join("CMakeCache.txt"),
            "CMAKE_TOOLCHAIN_FILE:FILEPATH=/old/checkout/vcpkg/scripts/buildsystems/vcpkg.cmake\n",
        )
        .unwrap();

        // An unreadable subdirectory makes remove_dir_all fail (unless the
        // test runs as root, where deletion simply succeeds; the property
        // under test, "the next stage still executes", holds either way)
        let locked = build.join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("artifact"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let assert = sandbox.command().assert().success();

        // Restore permissions so TempDir can clean up
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).ok();

        assert.stdout(predicate::str::contains("Configuring CMake"));
        let log = sandbox.log();
        assert!(position(&log, "cmake -S .").is_some(), "configure still ran");
        assert!(position(&log, "cmake --build").is_some());
    }

    #[test]
    fn build_flags_reach_the_driver() {
        let sandbox = Sandbox::bootstrapped();

        sandbox
            .command()
            .args(["bootstrap", "--build-type", "release", "--jobs", "3"])
            .assert()
            .success();

        let log = sandbox.log();
        let configure = log[position(&log, "cmake -S .").unwrap()].clone();
        let compile = log[position(&log, "cmake --build").unwrap()].clone();
        assert!(configure.contains("-DCMAKE_BUILD_TYPE=Release"));
        assert!(configure.contains("-DCMAKE_TOOLCHAIN_FILE="));
        assert!(compile.contains("--config Release"));
        assert!(compile.contains("--parallel 3"));
    }

    #[test]
    fn local_config_redirects_build_dir() {
        let sandbox = Sandbox::bootstrapped();
        fs::write(
            sandbox.repo().join(".rtype-setup.toml"),
            "[build]\ndir = \"out\"\n",
        )
        .unwrap();

        sandbox.command().assert().success();

        let log = sandbox.log();
        let configure = log[position(&log, "cmake -S .").unwrap()].clone();
        assert!(configure.contains("-B out"));
        assert!(sandbox.repo().join("out/CMakeCache.txt").exists());
    }

    #[test]
    fn missing_bootstrap_script_has_hint() {
        let sandbox = Sandbox::bootstrapped();
        let vcpkg = sandbox.repo().join("vcpkg");
        fs::remove_file(vcpkg.join("vcpkg")).unwrap();
        fs::remove_file(vcpkg.join("bootstrap-vcpkg.sh")).unwrap();

        sandbox
            .command()
            .assert()
            .failure()
            .stderr(predicate::str::contains("bootstrap script not found"))
            .stderr(predicate::str::contains(
                "git submodule update --init --recursive",
            ));
    }
}
