//! Typed bridge configuration loaded from TOML and the environment.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::prefs::DEFAULT_PREFS_FILE;
use crate::secrets::DEFAULT_SECRET_SERVICE;

/// Environment variable naming the config file when none is passed explicitly.
pub const CONFIG_PATH_ENV: &str = "NATIVE_BRIDGE_CONFIG";
/// Environment variable overriding the preferences directory.
pub const DATA_DIR_ENV: &str = "NATIVE_BRIDGE_DATA_DIR";

const APP_DIR_NAME: &str = "native-bridge";

/// Failure while loading configuration or composing services from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {path}: {message}")]
    Read {
        /// Config path.
        path: String,
        /// Underlying error text.
        message: String,
    },
    /// The config file is not valid TOML for the expected shape.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// Config path.
        path: String,
        /// Underlying error text.
        message: String,
    },
    /// No per-user data directory could be determined.
    #[error("no per-user data directory; set NATIVE_BRIDGE_DATA_DIR or [preferences].dir")]
    NoDataDir,
    /// A store could not be opened.
    #[error(transparent)]
    Store(#[from] native_host::StoreError),
}

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization; semantic checks
/// belong to the consumer.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    pub fn load(&self) -> Result<T, ConfigError> {
        let body = fs::read_to_string(&self.path).map_err(|err| ConfigError::Read {
            path: self.path.display().to_string(),
            message: err.to_string(),
        })?;
        toml::from_str(&body).map_err(|err| ConfigError::Parse {
            path: self.path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Secret store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretBackend {
    /// Platform keyring.
    #[default]
    Keyring,
    /// Process-local memory; secrets vanish on exit.
    Memory,
}

/// `[preferences]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreferencesConfig {
    /// Directory holding the preference file.
    pub dir: Option<PathBuf>,
    /// Preference file name.
    pub file_name: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: DEFAULT_PREFS_FILE.to_string(),
        }
    }
}

/// `[secrets]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecretsConfig {
    /// Backend used for secrets.
    pub backend: SecretBackend,
    /// Keyring service name.
    pub service: String,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            backend: SecretBackend::default(),
            service: DEFAULT_SECRET_SERVICE.to_string(),
        }
    }
}

/// Complete bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Preference store settings.
    pub preferences: PreferencesConfig,
    /// Secret store settings.
    pub secrets: SecretsConfig,
}

impl BridgeConfig {
    /// Loads configuration from `path`, then from [`CONFIG_PATH_ENV`], then falls back to
    /// defaults when neither is set.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        match path.map(Path::to_path_buf).or(env_path) {
            Some(path) => {
                log::debug!("loading bridge config from {}", path.display());
                ConfigLoader::<Self>::new(path).load()
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolves the preferences directory from config, [`DATA_DIR_ENV`], or the per-user data
    /// directory.
    pub fn preferences_dir(&self) -> Result<PathBuf, ConfigError> {
        let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        self.preferences_dir_with(env_dir, dirs::data_dir())
    }

    fn preferences_dir_with(
        &self,
        env_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
    ) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.preferences.dir {
            return Ok(dir.clone());
        }
        if let Some(dir) = env_dir {
            return Ok(dir);
        }
        data_dir
            .map(|dir| dir.join(APP_DIR_NAME).join("prefs"))
            .ok_or(ConfigError::NoDataDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "native-bridge-config-test-{}-{}",
            std::process::id(),
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn load_reads_full_toml_config() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("bridge.toml");
        fs::write(
            &path,
            "[preferences]\ndir = \"/tmp/prefs\"\nfile_name = \"defaults.json\"\n\n[secrets]\nbackend = \"memory\"\nservice = \"com.example.app\"\n",
        )
        .expect("write config");

        let loaded = BridgeConfig::load(Some(&path)).expect("load config");
        assert_eq!(
            loaded,
            BridgeConfig {
                preferences: PreferencesConfig {
                    dir: Some(PathBuf::from("/tmp/prefs")),
                    file_name: "defaults.json".into(),
                },
                secrets: SecretsConfig {
                    backend: SecretBackend::Memory,
                    service: "com.example.app".into(),
                },
            }
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("partial.toml");
        fs::write(&path, "[secrets]\nservice = \"svc\"\n").expect("write config");

        let loaded = BridgeConfig::load(Some(&path)).expect("load config");
        assert_eq!(loaded.preferences, PreferencesConfig::default());
        assert_eq!(loaded.secrets.backend, SecretBackend::Keyring);
        assert_eq!(loaded.secrets.service, "svc");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn load_reports_missing_file_as_read_error() {
        let root = unique_test_root();
        let loader = ConfigLoader::<BridgeConfig>::new(root.join("missing.toml"));
        let err = loader.load().expect_err("missing config should fail");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_reports_unknown_fields_as_parse_error() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let path = root.join("broken.toml");
        fs::write(&path, "[overlay]\nenabled = true\n").expect("write broken config");

        let err = BridgeConfig::load(Some(&path)).expect_err("unknown table should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn preferences_dir_prefers_config_then_env_then_data_dir() {
        let mut config = BridgeConfig::default();
        assert_eq!(
            config
                .preferences_dir_with(None, Some(PathBuf::from("/home/u/.local/share")))
                .expect("data dir"),
            PathBuf::from("/home/u/.local/share/native-bridge/prefs")
        );
        assert_eq!(
            config
                .preferences_dir_with(Some(PathBuf::from("/env")), Some(PathBuf::from("/data")))
                .expect("env dir"),
            PathBuf::from("/env")
        );
        assert_eq!(
            config.preferences_dir_with(None, None),
            Err(ConfigError::NoDataDir)
        );

        config.preferences.dir = Some(PathBuf::from("/configured"));
        assert_eq!(
            config
                .preferences_dir_with(Some(PathBuf::from("/env")), None)
                .expect("configured dir"),
            PathBuf::from("/configured")
        );
    }
}
