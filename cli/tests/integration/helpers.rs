//! Shared helpers: fake executables and configs.

#![allow(dead_code, clippy::expect_used)]

use std::path::{Path, PathBuf};

use podman_cli_wrapper::WrapperConfig;

/// Fake podman: answers `image ls`, `pull` and `run` like the real tool would.
///
/// - `image ls` lists `nginx:latest` and `redis:6`.
/// - `pull busybox:latest` succeeds; any other pull fails with
///   `manifest unknown` on stderr.
/// - `run ... IMAGE` prints `running IMAGE`, echoes stdin, writes `warn` to
///   stderr, and exits 3.
pub const FAKE_PODMAN: &str = r#"#!/bin/sh
case "$1" in
  image)
    printf 'nginx:latest\nredis:6\n'
    ;;
  pull)
    for last; do :; done
    if [ "$last" = "busybox:latest" ]; then
      exit 0
    fi
    echo "Error: $last: manifest unknown" >&2
    exit 125
    ;;
  run)
    for last; do :; done
    printf 'running %s\n' "$last"
    cat
    echo warn >&2
    exit 3
    ;;
  *)
    echo "unexpected: $*" >&2
    exit 2
    ;;
esac
"#;

/// Write [`FAKE_PODMAN`] into `dir` and make it executable.
///
/// Callers must be `#[serial]`: a concurrent fork while the file is still
/// open for writing makes exec fail with `ETXTBSY`.
pub fn write_fake_podman(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("podman");
    std::fs::write(&path, FAKE_PODMAN).expect("write fake podman");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake podman");
    path
}

/// Config using `/bin/sh` as the engine with no settling delay.
pub fn sh_config() -> WrapperConfig {
    WrapperConfig {
        settle_delay_ms: 0,
        ..WrapperConfig::with_path("/bin/sh")
    }
}

pub fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
