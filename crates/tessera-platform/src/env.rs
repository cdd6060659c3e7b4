//! Process environment pass-through for spawned terminals.

use std::collections::BTreeMap;
use std::path::Path;

use tessera_common::PlatformError;
use tracing::debug;

pub type EnvMap = BTreeMap<String, String>;

/// One-shot launcher tokens that must not leak into child shells.
const SCRUBBED: &[&str] = &["DESKTOP_STARTUP_ID", "XDG_ACTIVATION_TOKEN"];

/// The cgroup this process runs in (unified hierarchy), if any.
pub fn cgroup_path() -> Option<String> {
    match read_cgroup(Path::new("/proc/self/cgroup")) {
        Ok(path) => path,
        Err(err) => {
            debug!(%err, "no cgroup information");
            None
        }
    }
}

/// Parse a `/proc/<pid>/cgroup` file, returning the cgroup v2 path.
pub fn read_cgroup(file: &Path) -> Result<Option<String>, PlatformError> {
    let contents = std::fs::read_to_string(file)
        .map_err(|e| PlatformError::PathError(format!("{}: {e}", file.display())))?;
    Ok(parse_cgroup(&contents))
}

fn parse_cgroup(contents: &str) -> Option<String> {
    contents
        .lines()
        .find_map(|line| line.strip_prefix("0::"))
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
}

/// The environment new terminal surfaces start with: the process
/// environment minus launcher tokens, plus terminal identification.
pub fn default_environment() -> EnvMap {
    environment_from(std::env::vars())
}

pub fn environment_from(vars: impl IntoIterator<Item = (String, String)>) -> EnvMap {
    let mut env: EnvMap = vars
        .into_iter()
        .filter(|(key, _)| !SCRUBBED.contains(&key.as_str()))
        .collect();
    env.insert("TERM".into(), "xterm-256color".into());
    env.insert("COLORTERM".into(), "truecolor".into());
    env.insert("TERM_PROGRAM".into(), "tessera".into());
    env.insert(
        "TERM_PROGRAM_VERSION".into(),
        env!("CARGO_PKG_VERSION").into(),
    );
    env
}
