// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.kharchnama", "KharchNama", "kharchnama"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    pub currency: String,
    /// Stand-in for characters the report font cannot encode.
    pub placeholder: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: APP.1.to_string(),
            currency: "PKR".to_string(),
            placeholder: '?',
        }
    }
}

impl AppConfig {
    /// Page header and PDF document title.
    pub fn report_title(&self) -> String {
        format!("{} - Monthly Budget Report", self.app_name)
    }

    pub fn report_file_name(&self) -> String {
        format!("{}_Report.pdf", self.app_name)
    }
}

/// `config.json` in the platform config directory, if one can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("config.json"))
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read config at {}", path.display()))?;
    let cfg: AppConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Parse config at {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// An explicit path must exist; the platform default is optional.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match default_config_path() {
        Some(path) if path.is_file() => load_from(&path),
        _ => Ok(AppConfig::default()),
    }
}
