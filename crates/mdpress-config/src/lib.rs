use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "site.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site build configuration, loaded from `site.toml` in the site root.
///
/// All paths are relative to the site root unless absolute; tildes and
/// shell variables are expanded on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding markdown page sources.
    pub content_dir: PathBuf,
    /// Directory of static assets copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Output directory. Cleared and rebuilt on every run.
    pub public_dir: PathBuf,
    /// HTML page template with `{{ Title }}` and `{{ Content }}` tokens.
    pub template_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            public_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    /// Loads `site.toml` from the given site root.
    ///
    /// A missing file is not an error; the caller falls back to
    /// [`Config::default`].
    pub fn load(site_root: &Path) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(site_root.join(CONFIG_FILE_NAME))
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.content_dir = expand_path(&config.content_dir);
        config.static_dir = expand_path(&config.static_dir);
        config.public_dir = expand_path(&config.public_dir);
        config.template_path = expand_path(&config.template_path);

        Ok(Some(config))
    }

    /// Resolves every configured path against the site root.
    pub fn resolved(&self, site_root: &Path) -> Self {
        Self {
            content_dir: site_root.join(&self.content_dir),
            static_dir: site_root.join(&self.static_dir),
            public_dir: site_root.join(&self.public_dir),
            template_path: site_root.join(&self.template_path),
        }
    }
}

/// Expands tilde and shell variables; leaves the path alone on failure.
fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
