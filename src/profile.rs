use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{
    clock::TimestampStyle,
    gps::GpsSettings,
    location::{Coordinates, FixedLocation},
};

/// A named location fix plus optional log formatting, read from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub description: Option<String>,
    pub location: Coordinates,
    #[serde(default)]
    pub timestamp_format: Option<String>,
}

impl Profile {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let profile: Profile = serde_yaml::from_str(text)?;
        profile.location.validate()?;
        if let Some(format) = &profile.timestamp_format {
            TimestampStyle::custom(format.as_str())?;
        }
        Ok(profile)
    }

    pub fn gps_settings(&self) -> Result<GpsSettings> {
        let timestamps = match &self.timestamp_format {
            Some(format) => TimestampStyle::custom(format.as_str())?,
            None => TimestampStyle::default(),
        };
        Ok(GpsSettings::default()
            .with_source(FixedLocation::new(self.location))
            .with_timestamps(timestamps))
    }
}

pub struct ProfileLoader {
    base_dir: PathBuf,
}

impl ProfileLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Profile> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?;
        let profile = Profile::from_yaml(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!(profile = %profile.name, location = %profile.location, "loaded profile");
        Ok(profile)
    }
}
