//! openagent-config: Config directory resolution.
//!
//! The config directory is resolved on every call from an [`Environment`]
//! snapshot, never cached. Callers pick where the snapshot comes from through
//! [`EnvProvider`]: [`ProcessEnv`] reads the live process, while an
//! `Environment` value can be handed in directly for tests.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "OPENCODE_CONFIG_DIR";

/// Default config directory, relative to the home directory.
pub const DEFAULT_CONFIG_SUBDIR: &str = ".config/opencode";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Home directory not found")]
    NoHomeDir,
    #[error("Relative config directory {0:?} needs a current directory")]
    NoCurrentDir(String),
}

// ──────────────────── Environment ────────────────────

/// The process-wide inputs to config directory resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Raw value of [`CONFIG_DIR_ENV`], if set.
    pub config_dir_override: Option<String>,
    /// The user's home directory.
    pub home_dir: PathBuf,
    /// Base for resolving a relative override. Only captured when the
    /// override is relative.
    pub current_dir: Option<PathBuf>,
}

impl Environment {
    /// Snapshot the live process environment.
    pub fn from_process() -> Result<Self, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let config_dir_override = std::env::var(CONFIG_DIR_ENV).ok();
        let current_dir = if needs_current_dir(config_dir_override.as_deref()) {
            Some(std::env::current_dir()?)
        } else {
            None
        };
        Ok(Self {
            config_dir_override,
            home_dir,
            current_dir,
        })
    }
}

/// Source of [`Environment`] snapshots.
pub trait EnvProvider: Send + Sync {
    fn snapshot(&self) -> Result<Environment, ConfigError>;
}

/// Reads the real process environment on every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn snapshot(&self) -> Result<Environment, ConfigError> {
        Environment::from_process()
    }
}

impl EnvProvider for Environment {
    fn snapshot(&self) -> Result<Environment, ConfigError> {
        Ok(self.clone())
    }
}

// ──────────────────── Path resolution ────────────────────

/// Normalize a user-supplied directory path.
///
/// Returns `None` for missing, empty or whitespace-only input. `~` and `~/...`
/// expand against `home_dir`; relative paths resolve against `current_dir`.
/// `.` and `..` are resolved lexically.
pub fn normalize_path(raw: Option<&str>, home_dir: &Path, current_dir: &Path) -> Option<PathBuf> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let expanded = if let Some(rest) = trimmed.strip_prefix("~/") {
        home_dir.join(rest)
    } else if trimmed == "~" {
        home_dir.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    };

    Some(lexical_absolute(&current_dir.join(expanded)))
}

/// Whether [`normalize_path`] would resolve `raw` against the current dir.
pub fn needs_current_dir(raw: Option<&str>) -> bool {
    let Some(trimmed) = raw.map(str::trim) else {
        return false;
    };
    !(trimmed.is_empty()
        || trimmed == "~"
        || trimmed.starts_with("~/")
        || Path::new(trimmed).is_absolute())
}

/// Collapse `.` and `..` components without touching the filesystem.
fn lexical_absolute(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` is a no-op at the root
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

/// Resolve the config directory: the normalized override, or
/// `<home>/.config/opencode`.
///
/// Fails only for a relative override when no current dir was captured.
pub fn resolve_config_dir(env: &Environment) -> Result<PathBuf, ConfigError> {
    let raw = env.config_dir_override.as_deref();
    let current_dir = match env.current_dir.as_deref() {
        Some(dir) => dir,
        None if needs_current_dir(raw) => {
            return Err(ConfigError::NoCurrentDir(raw.unwrap_or_default().to_string()));
        }
        // never joined: the override is absolute, `~`-based or absent
        None => Path::new(""),
    };

    Ok(match normalize_path(raw, &env.home_dir, current_dir) {
        Some(dir) => dir,
        None => env.home_dir.join(DEFAULT_CONFIG_SUBDIR),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> PathBuf {
        PathBuf::from("/home/alice")
    }

    fn cwd() -> PathBuf {
        PathBuf::from("/work/project")
    }

    fn env(override_dir: Option<&str>) -> Environment {
        Environment {
            config_dir_override: override_dir.map(String::from),
            home_dir: home(),
            current_dir: Some(cwd()),
        }
    }

    #[test]
    fn test_normalize_empty_inputs() {
        assert_eq!(normalize_path(None, &home(), &cwd()), None);
        assert_eq!(normalize_path(Some(""), &home(), &cwd()), None);
        assert_eq!(normalize_path(Some("   \t\n"), &home(), &cwd()), None);
    }

    #[test]
    fn test_normalize_tilde() {
        assert_eq!(normalize_path(Some("~"), &home(), &cwd()), Some(home()));
        assert_eq!(normalize_path(Some("  ~  "), &home(), &cwd()), Some(home()));
        assert_eq!(
            normalize_path(Some("~/a/b"), &home(), &cwd()),
            Some(PathBuf::from("/home/alice/a/b"))
        );
    }

    #[test]
    fn test_normalize_tilde_not_expanded_mid_path() {
        assert_eq!(
            normalize_path(Some("~bob/x"), &home(), &cwd()),
            Some(PathBuf::from("/work/project/~bob/x"))
        );
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(
            normalize_path(Some("~/a/../b/./c"), &home(), &cwd()),
            Some(PathBuf::from("/home/alice/b/c"))
        );
        assert_eq!(
            normalize_path(Some("/etc/../../opt"), &home(), &cwd()),
            Some(PathBuf::from("/opt"))
        );
    }

    #[test]
    fn test_normalize_relative_uses_current_dir() {
        assert_eq!(
            normalize_path(Some("conf/../cfg"), &home(), &cwd()),
            Some(PathBuf::from("/work/project/cfg"))
        );
    }

    #[test]
    fn test_resolve_config_dir() {
        assert_eq!(
            resolve_config_dir(&env(None)).unwrap(),
            PathBuf::from("/home/alice/.config/opencode")
        );
        assert_eq!(
            resolve_config_dir(&env(Some("  "))).unwrap(),
            PathBuf::from("/home/alice/.config/opencode")
        );
        assert_eq!(
            resolve_config_dir(&env(Some("~/dotfiles/opencode"))).unwrap(),
            PathBuf::from("/home/alice/dotfiles/opencode")
        );
        assert_eq!(
            resolve_config_dir(&env(Some("cfg"))).unwrap(),
            PathBuf::from("/work/project/cfg")
        );
    }

    #[test]
    fn test_needs_current_dir() {
        for raw in [None, Some(""), Some("  "), Some("~"), Some("~/x"), Some("/abs")] {
            assert!(!needs_current_dir(raw), "{raw:?}");
        }
        for raw in [Some("rel"), Some("./x"), Some("../x"), Some("~bob")] {
            assert!(needs_current_dir(raw), "{raw:?}");
        }
    }

    #[test]
    fn test_resolve_without_current_dir() {
        let no_cwd = |raw: Option<&str>| Environment {
            current_dir: None,
            ..env(raw)
        };

        assert_eq!(
            resolve_config_dir(&no_cwd(None)).unwrap(),
            PathBuf::from("/home/alice/.config/opencode")
        );
        assert_eq!(
            resolve_config_dir(&no_cwd(Some("~/cfg"))).unwrap(),
            PathBuf::from("/home/alice/cfg")
        );
        assert_eq!(
            resolve_config_dir(&no_cwd(Some("/etc/opencode/../oc"))).unwrap(),
            PathBuf::from("/etc/oc")
        );
        assert!(matches!(
            resolve_config_dir(&no_cwd(Some("cfg"))),
            Err(ConfigError::NoCurrentDir(raw)) if raw == "cfg"
        ));
    }

    #[test]
    fn test_environment_is_its_own_provider() {
        let e = env(Some("/tmp/x"));
        assert_eq!(e.snapshot().unwrap(), e);
    }
}
