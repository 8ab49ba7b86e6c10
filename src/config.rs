use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::presentation::BoundaryPolicy;

/// Flags that can be saved as defaults.
///
/// Config files hold the same flags as the command line, one or more per
/// line, with `#` comments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub no_nav: bool,
    pub no_mouse: bool,
    pub boundary: Option<BoundaryPolicy>,
    pub nav_timeout_ms: Option<u64>,
    pub pin_ms: Option<u64>,
    pub debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches accumulate, values from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            no_nav: self.no_nav || other.no_nav,
            no_mouse: self.no_mouse || other.no_mouse,
            boundary: other.boundary.or(self.boundary),
            nav_timeout_ms: other.nav_timeout_ms.or(self.nav_timeout_ms),
            pin_ms: other.pin_ms.or(self.pin_ms),
            debug_log: other.debug_log.clone().or_else(|| self.debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("hpk").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("hpk")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("hpk").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("hpk").join("config");
        }
    }

    PathBuf::from(".hpkrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".hpkrc")
}

/// Load flags from a config file; a missing file yields no flags.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Write `flags` to a config file, creating its directory.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# hpk defaults (saved with --save)".to_string()];
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.no_nav {
        lines.push("--no-nav".to_string());
    }
    if flags.no_mouse {
        lines.push("--no-mouse".to_string());
    }
    if let Some(boundary) = flags.boundary {
        lines.push(format!("--boundary {}", boundary.as_str()));
    }
    if let Some(ms) = flags.nav_timeout_ms {
        lines.push(format!("--nav-timeout {ms}"));
    }
    if let Some(ms) = flags.pin_ms {
        lines.push(format!("--pin {ms}"));
    }
    if let Some(path) = &flags.debug_log {
        lines.push(format!("--debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// Remove a config file if present.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the saveable flags out of raw arguments.
///
/// Unknown tokens (the deck path, `--save`, ...) are skipped; malformed
/// values are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        match name {
            "--watch" | "-w" => flags.watch = true,
            "--no-nav" => flags.no_nav = true,
            "--no-mouse" => flags.no_mouse = true,
            "--boundary" | "--nav-timeout" | "--pin" | "--debug-log" => {
                let value = match inline {
                    Some(value) => Some(value),
                    None => {
                        let next = tokens.get(i + 1).map(String::as_str);
                        if next.is_some() {
                            i += 1;
                        }
                        next
                    }
                };
                if let Some(value) = value {
                    apply_value(&mut flags, name, value);
                }
            }
            _ => {}
        }
        i += 1;
    }
    flags
}

fn apply_value(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--boundary" => flags.boundary = parse_boundary(value),
        "--nav-timeout" => flags.nav_timeout_ms = value.parse().ok(),
        "--pin" => flags.pin_ms = value.parse().ok(),
        "--debug-log" => flags.debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

fn parse_boundary(s: &str) -> Option<BoundaryPolicy> {
    match s {
        "clamp" => Some(BoundaryPolicy::Clamp),
        "end" => Some(BoundaryPolicy::End),
        _ => None,
    }
}
