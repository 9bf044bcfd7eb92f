//! Configuration loading and path resolution.
//!
//! Supports HOSTSCTL_HOME and HOSTSCTL_HOSTS_FILE env var overrides for testing.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;

/// Env var overriding the data directory.
pub const HOME_ENV: &str = "HOSTSCTL_HOME";
/// Env var overriding the hosts file location.
pub const HOSTS_FILE_ENV: &str = "HOSTSCTL_HOSTS_FILE";

/// Paths for hostsctl's own data.
#[derive(Debug, Clone)]
pub struct HostsctlPaths {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl HostsctlPaths {
    /// Build paths from base directory (e.g. ProjectDirs data dir or HOSTSCTL_HOME).
    pub fn from_base(base: PathBuf) -> Self {
        let config_file = base.join("config.toml");
        Self {
            config_dir: base,
            config_file,
        }
    }

    /// Paths for testing: use a temp dir as base.
    pub fn for_test(base: impl AsRef<Path>) -> Self {
        Self::from_base(base.as_ref().to_path_buf())
    }

    /// Get default paths (respects HOSTSCTL_HOME).
    pub fn default_paths() -> Self {
        let base = if let Ok(home) = std::env::var(HOME_ENV) {
            PathBuf::from(home)
        } else if let Some(dirs) = directories::ProjectDirs::from("", "", "hostsctl") {
            dirs.data_dir().to_path_buf()
        } else {
            PathBuf::from(".hostsctl")
        };
        Self::from_base(base)
    }
}

/// config.toml structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Hosts file to edit instead of the platform one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts_file: Option<PathBuf>,
    /// Entry used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
}

impl Config {
    /// Load config from paths (with shared lock when file exists).
    pub fn load(paths: &HostsctlPaths) -> Result<Config> {
        if paths.config_file.is_file() {
            let mut file = fs::OpenOptions::new().read(true).open(&paths.config_file)?;
            fs2::FileExt::lock_shared(&file)?;
            use std::io::Read;
            let mut s = String::new();
            file.read_to_string(&mut s)?;
            let cfg: Config = toml::from_str(&s)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to paths (with exclusive lock). Creates parent dirs if needed.
    pub fn save(&self, paths: &HostsctlPaths) -> Result<()> {
        if let Some(p) = paths.config_file.parent() {
            fs::create_dir_all(p)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&paths.config_file)?;
        fs2::FileExt::lock_exclusive(&file)?;
        let s = toml::to_string_pretty(self)?;
        use std::io::Write;
        file.write_all(s.as_bytes())?;
        Ok(())
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub hosts_file: PathBuf,
    pub entry: Option<String>,
}

impl Settings {
    /// Resolve: explicit flag, then HOSTSCTL_HOSTS_FILE, then config, then platform default.
    pub fn resolve(config: &Config, hosts_file_flag: Option<PathBuf>) -> Self {
        let hosts_file = hosts_file_flag
            .or_else(|| std::env::var_os(HOSTS_FILE_ENV).map(PathBuf::from))
            .or_else(|| config.hosts_file.clone())
            .unwrap_or_else(platform::default_hosts_path);
        Self {
            hosts_file,
            entry: config.entry.clone().filter(|e| !e.is_empty()),
        }
    }

    /// Entry from the command line, else the configured one. Empty counts as absent.
    pub fn entry_or<'a>(&'a self, arg: Option<&'a str>) -> Option<&'a str> {
        arg.filter(|e| !e.is_empty())
            .or(self.entry.as_deref())
    }
}
