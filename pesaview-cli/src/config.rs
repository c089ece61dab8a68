use anyhow::{Context, Result};
use pesaview_analytics::DashboardOptions;
use pesaview_core::Palette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::pesaview_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceSection,
    pub dashboard: DashboardSection,
    pub display: DisplaySection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// Path or http(s) URL of the CSV export
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    pub breakdown_limit: usize,
    pub summary_top: usize,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub currency: String,
    /// Category labels longer than this are abbreviated
    pub label_width: usize,
}

impl Default for SourceSection {
    fn default() -> Self {
        Self {
            location: "cleaned_mpesa_data.csv".to_string(),
        }
    }
}

impl Default for DashboardSection {
    fn default() -> Self {
        let defaults = DashboardOptions::default();
        Self {
            breakdown_limit: defaults.breakdown_limit,
            summary_top: defaults.summary_top,
            palette: defaults.palette,
        }
    }
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: "KES".to_string(),
            label_width: 16,
        }
    }
}

impl Config {
    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            breakdown_limit: self.dashboard.breakdown_limit,
            summary_top: self.dashboard.summary_top,
            palette: self.dashboard.palette.clone(),
        }
    }
}

/// Default location. Resolving it never touches the filesystem.
pub fn config_path() -> Result<PathBuf> {
    Ok(pesaview_home()?.join("config.toml"))
}

/// Load from `path`, or defaults when the file does not exist.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", path.display()))
}

/// Load the explicit file, else the default one. Without `HOME` there is no
/// default file, so defaults apply.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(p) => load_config_from(p),
        None => match config_path() {
            Ok(p) => load_config_from(&p),
            Err(e) => {
                tracing::debug!(error = %e, "no config location, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub fn save_config(cfg: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Write the default config unless one already exists. Returns the path.
pub fn init_config(explicit: Option<&Path>) -> Result<PathBuf> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(p);
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(p)
}
