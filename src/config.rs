use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level server configuration, loaded once at startup and shared
/// read-only with every connection task.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// Document root; no file outside it is ever served.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// File served when the request target is `/` or empty.
    #[serde(default = "default_page")]
    pub default_page: String,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_root() -> PathBuf {
    PathBuf::from("./public")
}

fn default_page() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            default_page: default_page(),
        }
    }
}

impl Config {
    /// Loads configuration from the file named by `HARBOR_CONFIG`
    /// (default `harbor.yaml`). A missing file yields the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("HARBOR_CONFIG").unwrap_or_else(|_| "harbor.yaml".to_string());
        if Path::new(&path).exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path))?;
        let cfg = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path))?;
        Ok(cfg)
    }
}
