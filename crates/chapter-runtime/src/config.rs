use crate::transport::{FsTransport, HttpTransport, Transport};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_CONTENT_DIR: &str = "content";
const DEFAULT_PAGE_SIZE: usize = 6;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CHAPTER_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (`<config_dir>/chapter/config.toml`)
///
/// Returns `None` when no candidate can be determined.
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("CHAPTER_CONFIG") {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("chapter").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

fn is_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Where content JSON files are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Directory(PathBuf),
    Remote(String),
}

impl ContentSource {
    fn parse(value: &str) -> Self {
        if is_url(value) {
            ContentSource::Remote(value.to_string())
        } else {
            ContentSource::Directory(expand_tilde(value))
        }
    }

    pub fn directory(&self) -> Option<&Path> {
        match self {
            ContentSource::Directory(path) => Some(path),
            ContentSource::Remote(_) => None,
        }
    }

    /// Build the transport serving this source
    pub fn open(&self, timeout: Option<Duration>) -> Result<Arc<dyn Transport>> {
        Ok(match self {
            ContentSource::Directory(path) => Arc::new(FsTransport::new(path.clone())),
            ContentSource::Remote(url) => Arc::new(HttpTransport::new(url.clone(), timeout)?),
        })
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::Directory(path) => write!(f, "{}", path.display()),
            ContentSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load from the resolved path; a missing file yields the defaults.
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == Some(0) {
            return Err(Error::Config("page_size must be at least 1".to_string()));
        }
        if let Some(url) = &self.base_url
            && !is_url(url)
        {
            return Err(Error::Config(format!(
                "base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        Ok(())
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
            .and_then(NonZeroUsize::new)
            .or_else(|| NonZeroUsize::new(DEFAULT_PAGE_SIZE))
            .unwrap_or(NonZeroUsize::MIN)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Resolve the content source based on priority:
    /// 1. Explicit URL (`--base-url`)
    /// 2. Explicit directory (`--content-dir`)
    /// 3. CHAPTER_CONTENT environment variable (URL or directory)
    /// 4. `base_url` from config
    /// 5. `content_dir` from config
    /// 6. `./content`
    pub fn resolve_source(
        &self,
        explicit_url: Option<&str>,
        explicit_dir: Option<&str>,
    ) -> ContentSource {
        if let Some(url) = explicit_url {
            return ContentSource::Remote(url.to_string());
        }

        if let Some(dir) = explicit_dir {
            return ContentSource::Directory(expand_tilde(dir));
        }

        if let Ok(env_value) = std::env::var("CHAPTER_CONTENT")
            && !env_value.trim().is_empty()
        {
            return ContentSource::parse(env_value.trim());
        }

        if let Some(url) = &self.base_url {
            return ContentSource::Remote(url.clone());
        }

        ContentSource::parse(self.content_dir.as_deref().unwrap_or(DEFAULT_CONTENT_DIR))
    }
}
