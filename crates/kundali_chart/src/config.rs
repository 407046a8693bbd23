//! Chart computation settings, loadable from TOML.
//!
//! ```toml
//! ayanamsha = "lahiri"
//! aspect_orb_deg = 8.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use kundali_vedic_base::{AyanamshaSystem, DEFAULT_ORB_DEG};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Widest accepted aspect orb in degrees.
pub const MAX_ORB_DEG: f64 = 30.0;

/// Settings shared by every chart computed with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Sidereal reference system.
    pub ayanamsha: AyanamshaSystem,
    /// Orb for [`crate::BirthChart::aspects_to`], degrees.
    pub aspect_orb_deg: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsha: AyanamshaSystem::Lahiri,
            aspect_orb_deg: DEFAULT_ORB_DEG,
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse chart config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid chart config")]
    Invalid(#[from] InvalidConfig),
}

/// A parsed config whose values are out of range.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidConfig {
    #[error("aspect orb {0} outside [0, 30]")]
    AspectOrb(f64),
}

impl ChartConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Range checks. NaN orbs are rejected.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if !(0.0..=MAX_ORB_DEG).contains(&self.aspect_orb_deg) {
            return Err(InvalidConfig::AspectOrb(self.aspect_orb_deg));
        }
        Ok(())
    }

    pub fn with_ayanamsha(self, ayanamsha: AyanamshaSystem) -> Self {
        Self { ayanamsha, ..self }
    }
}
