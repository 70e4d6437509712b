// ABOUTME: Configuration types and parsing for stackshift.yml.
// ABOUTME: Handles file discovery, region resolution, and provisioner settings.

use crate::error::{Error, Result};
use crate::provisioner::{DEFAULT_BINARY, SenzaCli};
use crate::types::Region;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "stackshift.yml";
pub const CONFIG_FILENAME_ALT: &str = "stackshift.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".stackshift/config.yml";

/// Environment variable overriding the configured region.
pub const REGION_ENV: &str = "STACKSHIFT_REGION";

const TEMPLATE_REGION: &str = "eu-central-1";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub region: Option<Region>,

    #[serde(default)]
    pub provisioner: ProvisionerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionerConfig {
    /// Path or name of the senza executable.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from(DEFAULT_BINARY)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file is a valid config with every default applied.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Find the first config file in `dir`.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => Err(Error::ConfigNotFound(dir.to_path_buf())),
        }
    }

    /// Like `discover`, but a missing file yields the default config so the
    /// region can come from the environment or command line alone.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    fn find(dir: &Path) -> Option<PathBuf> {
        [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Apply the region override chain: explicit value, then `STACKSHIFT_REGION`,
    /// then whatever the file said.
    pub fn with_region_override(mut self, region: Option<Region>) -> Result<Self> {
        if let Some(region) = region {
            self.region = Some(region);
            return Ok(self);
        }

        if let Ok(value) = std::env::var(REGION_ENV)
            && !value.trim().is_empty()
        {
            let region = Region::new(&value)
                .map_err(|e| Error::InvalidConfig(format!("{REGION_ENV}: {e}")))?;
            self.region = Some(region);
        }

        Ok(self)
    }

    pub fn region(&self) -> Result<&Region> {
        self.region.as_ref().ok_or(Error::MissingRegion)
    }

    /// Build the region-scoped senza client this config describes.
    pub fn provisioner(&self) -> Result<SenzaCli> {
        let region = self.region()?.clone();
        Ok(SenzaCli::new(region).binary(&self.provisioner.binary))
    }
}

pub fn init_config(dir: &Path, region: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        return Err(Error::AlreadyExists(config_path));
    }

    let region = Region::new(region.unwrap_or(TEMPLATE_REGION))
        .map_err(|e| Error::InvalidConfig(e.to_string()))?;

    std::fs::write(&config_path, generate_template_yaml(&region))?;

    Ok(config_path)
}

fn generate_template_yaml(region: &Region) -> String {
    format!(
        r#"region: {}
provisioner:
  binary: {}
"#,
        region, DEFAULT_BINARY
    )
}
