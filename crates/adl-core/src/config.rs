use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/adl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdlConfig {
    /// Base URL of the artifacts REST API.
    pub api_url: String,
    /// Default repository as `owner/name`; `--repo` overrides it.
    #[serde(default)]
    pub repo: Option<String>,
    /// Environment variables checked, in order, for an API token.
    pub token_env: Vec<String>,
    /// Artifacts requested per listing page.
    pub per_page: u32,
    pub connect_timeout_secs: u64,
    /// Upper bound on a single request, archive downloads included.
    pub timeout_secs: u64,
    /// Default destination root; `--dir` overrides it, otherwise the current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

impl Default for AdlConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            repo: None,
            token_env: vec!["GH_TOKEN".to_string(), "GITHUB_TOKEN".to_string()],
            per_page: 100,
            connect_timeout_secs: 15,
            timeout_secs: 600,
            download_dir: None,
        }
    }
}

impl AdlConfig {
    /// First non-empty token among the configured environment variables.
    pub fn token(&self) -> Option<String> {
        self.token_env
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("adl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AdlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: AdlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = AdlConfig::default();
        assert_eq!(cfg.api_url, "https://api.github.com");
        assert_eq!(cfg.per_page, 100);
        assert_eq!(cfg.token_env, ["GH_TOKEN", "GITHUB_TOKEN"]);
        assert!(cfg.repo.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AdlConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AdlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api_url, cfg.api_url);
        assert_eq!(parsed.per_page, cfg.per_page);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_url = "https://ghe.example.com/api/v3"
            repo = "octo/widgets"
            token_env = ["WIDGETS_TOKEN"]
            per_page = 30
            connect_timeout_secs = 5
            timeout_secs = 60
            download_dir = "/srv/artifacts"
        "#;
        let cfg: AdlConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_url, "https://ghe.example.com/api/v3");
        assert_eq!(cfg.repo.as_deref(), Some("octo/widgets"));
        assert_eq!(cfg.per_page, 30);
        assert_eq!(cfg.download_dir, Some(PathBuf::from("/srv/artifacts")));
    }

    #[test]
    fn token_from_first_set_variable() {
        let cfg = AdlConfig {
            token_env: vec![
                "ADL_TEST_TOKEN_UNSET_1".to_string(),
                "ADL_TEST_TOKEN_BLANK".to_string(),
                "ADL_TEST_TOKEN_SET".to_string(),
            ],
            ..AdlConfig::default()
        };
        std::env::set_var("ADL_TEST_TOKEN_BLANK", "  ");
        std::env::set_var("ADL_TEST_TOKEN_SET", "tok-123");
        assert_eq!(cfg.token().as_deref(), Some("tok-123"));
    }
}
