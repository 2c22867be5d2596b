use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "walink";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub clipboard: ClipboardConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardConfig {
    pub backend: ClipboardBackend,
    /// Program and arguments; only set for [`ClipboardBackend::Command`].
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    Command,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiConfig {
    pub live_preview: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { live_preview: true }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("clipboard.command is required when clipboard.backend = \"command\"")]
    MissingClipboardCommand,
    #[error("clipboard.command is only used when clipboard.backend = \"command\"")]
    UnexpectedClipboardCommand,
    #[error("clipboard.command entries must not be empty")]
    InvalidClipboardCommand,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    clipboard: Option<ClipboardFile>,
    tui: Option<TuiFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClipboardFile {
    backend: Option<ClipboardBackend>,
    command: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TuiFile {
    live_preview: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(clipboard) = parsed.clipboard {
        if let Some(backend) = clipboard.backend {
            config.clipboard.backend = backend;
        }
        config.clipboard.command = validate_clipboard_command(
            config.clipboard.backend,
            clipboard.command.unwrap_or_default(),
        )?;
    }

    if let Some(tui) = parsed.tui {
        if let Some(live_preview) = tui.live_preview {
            config.tui.live_preview = live_preview;
        }
    }

    Ok(config)
}

fn validate_clipboard_command(
    backend: ClipboardBackend,
    command: Vec<String>,
) -> Result<Vec<String>> {
    if backend != ClipboardBackend::Command {
        if !command.is_empty() {
            return Err(ConfigError::UnexpectedClipboardCommand);
        }
        return Ok(command);
    }

    if command.is_empty() {
        return Err(ConfigError::MissingClipboardCommand);
    }
    if command.iter().any(|part| part.trim().is_empty()) {
        return Err(ConfigError::InvalidClipboardCommand);
    }
    Ok(command)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        load, load_at_path, merge_config, resolve_config_path, ClipboardBackend, ClipboardFile,
        ConfigError, ConfigFile, TuiFile,
    };
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write config");
        restrict_permissions(&path);
        path
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            clipboard: Some(ClipboardFile {
                backend: Some(ClipboardBackend::Command),
                command: Some(vec!["xclip".to_string(), "-selection".to_string()]),
            }),
            tui: Some(TuiFile {
                live_preview: Some(false),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.clipboard.backend, ClipboardBackend::Command);
        assert_eq!(merged.clipboard.command, vec!["xclip", "-selection"]);
        assert!(!merged.tui.live_preview);
    }

    #[test]
    fn merge_config_requires_command_for_command_backend() {
        let parsed = ConfigFile {
            clipboard: Some(ClipboardFile {
                backend: Some(ClipboardBackend::Command),
                command: None,
            }),
            tui: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::MissingClipboardCommand));
    }

    #[test]
    fn merge_config_rejects_command_for_other_backends() {
        let parsed = ConfigFile {
            clipboard: Some(ClipboardFile {
                backend: None,
                command: Some(vec!["pbcopy".to_string()]),
            }),
            tui: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::UnexpectedClipboardCommand));
    }

    #[test]
    fn merge_config_rejects_blank_command_parts() {
        let parsed = ConfigFile {
            clipboard: Some(ClipboardFile {
                backend: Some(ClipboardBackend::Command),
                command: Some(vec!["wl-copy".to_string(), "  ".to_string()]),
            }),
            tui: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidClipboardCommand));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_returns_none_for_optional_missing_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_config(
            &temp,
            "[clipboard]\nbackend = \"none\"\n[tui]\nlive_preview = false\n",
        );

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.clipboard.backend, ClipboardBackend::None);
        assert!(config.clipboard.command.is_empty());
        assert!(!config.tui.live_preview);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_config(&temp, "default_country = \"44\"\n");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "").expect("write config");
        let mut perms = fs::metadata(&path).expect("metadata").permissions();
        perms.set_mode(0o644);
        fs::set_permissions(&path, perms).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }

    #[test]
    fn load_with_explicit_path_reads_defaults_for_empty_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = write_config(&temp, "");
        let config = load(Some(path)).expect("load");
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert!(config.tui.live_preview);
    }

    #[test]
    fn resolve_config_path_rejects_empty_custom_path() {
        let err = resolve_config_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigPath(_)));
    }
}
