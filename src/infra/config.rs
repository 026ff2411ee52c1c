use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::entities::submission::ProgressSettings;

pub const API_URL_ENV: &str = "NOTAS_RECON_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            endpoint: "/verificar_notas".to_string(),
            timeout_secs: 3600,
        }
    }
}

impl ApiConfig {
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub progress: ProgressSettings,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "notas", "notas-recon")
        .ok_or_else(|| anyhow!("unable to resolve config directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let webview_data_dir = project_dirs()?.data_local_dir().join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

/// Missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    config.progress = config.progress.sanitized();
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn apply_env_overrides(mut config: AppConfig, api_url: Option<String>) -> AppConfig {
    if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    config
}

/// Default location plus environment override; errors are returned next to the
/// defaults so the UI can still start.
pub fn resolve_config() -> (AppConfig, Option<anyhow::Error>) {
    let loaded = default_config_path().and_then(|path| load_config(&path));
    let (config, err) = match loaded {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    (
        apply_env_overrides(config, std::env::var(API_URL_ENV).ok()),
        err,
    )
}
