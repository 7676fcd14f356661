//! Command vector construction for the external container CLI.
//!
//! Pure functions only. No I/O, async or process handling. Each builder
//! returns owned tokens that the launcher passes through untouched.

use crate::domain::image::normalize_image_reference;

// ── Constants ────────────────────────────────────────────────────────────────

/// Delimiter an environment entry must contain exactly once (`KEY=VALUE`).
pub const ENV_DELIMITER: char = '=';

/// Delimiter a volume bind must contain exactly once (`HOST:CONTAINER`).
pub const VOLUME_DELIMITER: char = ':';

/// Format string requested from `image ls`, one `repository:tag` per line.
pub const IMAGE_LIST_FORMAT: &str = "{{.Repository}}:{{.Tag}}";

/// What happens to entries that do not split into exactly two parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedEntryPolicy {
    /// Leave the entry out of the command vector without reporting an error.
    DropSilently,
}

/// Policy applied by [`env_flags`] and [`volume_flags`].
pub const MALFORMED_ENTRY_POLICY: MalformedEntryPolicy = MalformedEntryPolicy::DropSilently;

// ── Entry parsing ────────────────────────────────────────────────────────────

/// Result of splitting an environment or volume entry on its delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryParse<'a> {
    Valid { key: &'a str, value: &'a str },
    Malformed { raw: &'a str },
}

/// Splits `raw` on `delimiter`; valid only with exactly one occurrence.
///
/// Either side may be empty: `"="` is a valid environment entry.
#[must_use]
pub fn parse_entry(raw: &str, delimiter: char) -> EntryParse<'_> {
    let mut parts = raw.split(delimiter);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => EntryParse::Valid { key, value },
        _ => EntryParse::Malformed { raw },
    }
}

fn entry_flags(flag: &str, entries: &[String], delimiter: char) -> Vec<String> {
    let mut tokens = Vec::with_capacity(entries.len() * 2);
    for entry in entries {
        match parse_entry(entry, delimiter) {
            EntryParse::Valid { .. } => {
                tokens.push(flag.to_string());
                tokens.push(entry.clone());
            }
            EntryParse::Malformed { raw } => match MALFORMED_ENTRY_POLICY {
                MalformedEntryPolicy::DropSilently => {
                    tracing::debug!(flag, entry = raw, "dropping malformed entry");
                }
            },
        }
    }
    tokens
}

// ── Flag builders ────────────────────────────────────────────────────────────

/// `-e KEY=VALUE` for each well-formed entry, in input order.
#[must_use]
pub fn env_flags(entries: &[String]) -> Vec<String> {
    entry_flags("-e", entries, ENV_DELIMITER)
}

/// `-v HOST:CONTAINER` for each well-formed bind, in input order.
#[must_use]
pub fn volume_flags(binds: &[String]) -> Vec<String> {
    entry_flags("-v", binds, VOLUME_DELIMITER)
}

/// `--cgroupns <ns>`, or nothing when `ns` is empty.
#[must_use]
pub fn cgroupns_flag(ns: &str) -> Vec<String> {
    if ns.is_empty() {
        Vec::new()
    } else {
        vec!["--cgroupns".to_string(), ns.to_string()]
    }
}

/// `--name <name>`, or nothing when `name` is empty.
#[must_use]
pub fn name_flag(name: &str) -> Vec<String> {
    if name.is_empty() {
        Vec::new()
    } else {
        vec!["--name".to_string(), name.to_string()]
    }
}

// ── Full command vectors ─────────────────────────────────────────────────────

/// `image ls --format {{.Repository}}:{{.Tag}}`.
#[must_use]
pub fn image_list_command() -> Vec<String> {
    vec![
        "image".to_string(),
        "ls".to_string(),
        "--format".to_string(),
        IMAGE_LIST_FORMAT.to_string(),
    ]
}

/// `pull [--platform <platform>] <image:tag>`.
#[must_use]
pub fn pull_command(image: &str, platform: Option<&str>) -> Vec<String> {
    let mut args = vec!["pull".to_string()];
    if let Some(platform) = platform {
        args.push("--platform".to_string());
        args.push(platform.to_string());
    }
    args.push(normalize_image_reference(image));
    args
}

/// `base_args` followed by the normalized image.
///
/// `base_args` is caller-owned: subcommand, options and flags are passed
/// through without inspection.
#[must_use]
pub fn deploy_command(mut base_args: Vec<String>, image: &str) -> Vec<String> {
    base_args.push(normalize_image_reference(image));
    base_args
}

// ── Deployment request ───────────────────────────────────────────────────────

/// Structured inputs for one container run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// `KEY=VALUE` assignments.
    pub env: Vec<String>,
    /// `HOST:CONTAINER` binds.
    pub volumes: Vec<String>,
    /// Cgroup namespace mode; empty to omit.
    pub cgroupns: String,
    /// Container name; empty to omit.
    pub name: String,
    /// Target platform such as `linux/arm64`; `None` to omit.
    pub platform: Option<String>,
}

impl DeploymentRequest {
    /// Assembles `run -i -a stdin -a stdout -a stderr` followed by the
    /// request's flags. The image is not included; [`deploy_command`]
    /// appends it.
    #[must_use]
    pub fn run_args(&self) -> Vec<String> {
        let mut args: Vec<String> = [
            "run", "-i", "-a", "stdin", "-a", "stdout", "-a", "stderr",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        if let Some(platform) = &self.platform {
            args.push("--platform".to_string());
            args.push(platform.clone());
        }
        args.extend(cgroupns_flag(&self.cgroupns));
        args.extend(name_flag(&self.name));
        args.extend(env_flags(&self.env));
        args.extend(volume_flags(&self.volumes));
        args
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
