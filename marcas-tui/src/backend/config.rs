//! 配置服务
//!
//! 配置保存在 `<config_dir>/marcas-tui/config.json`，
//! 环境变量 `MARCAS_API_URL` 优先于文件中的 `api_url`。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marcas_client::ClientConfig;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖服务地址的环境变量
pub const API_URL_ENV: &str = "MARCAS_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const CONFIG_FILE: &str = "config.json";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 商标服务根地址
    pub api_url: String,
    /// 界面语言（`en-US` / `es-ES`）
    pub language: String,
    /// 主题（`dark` / `light`）
    pub theme: String,
    /// 请求超时（秒），不设置则不限时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            language: Language::default().code().to_string(),
            theme: Theme::default().name().to_string(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// 界面语言；无法识别时使用默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            tracing::warn!("Unknown language '{}', using default", self.language);
            Language::default()
        })
    }

    /// 主题；无法识别时使用默认主题
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", self.theme);
            Theme::default()
        })
    }

    /// 构造 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone());
        match self.request_timeout_secs {
            Some(secs) if secs > 0 => config.with_timeout(Duration::from_secs(secs)),
            _ => config,
        }
    }
}

/// 用环境变量覆盖服务地址（空值不生效）
pub fn apply_env_override(mut config: AppConfig, api_url: Option<String>) -> AppConfig {
    if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
        config.api_url = url.trim().to_string();
    }
    config
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 默认配置文件路径
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("marcas-tui")
            .join(CONFIG_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 配置文件是否存在
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content =
            serde_json::to_string_pretty(config).map_err(|source| ConfigError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> JsonConfigService {
        JsonConfigService::new(dir.path().join("marcas-tui").join(CONFIG_FILE))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        assert!(!service.exists());
        let config = service.load().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://localhost:8000");
        assert_eq!(config.language(), Language::EnUs);
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let config = AppConfig {
            api_url: "http://marcas.internal:9000".into(),
            language: "es-ES".into(),
            theme: "light".into(),
            request_timeout_secs: Some(10),
        };
        service.save(&config).unwrap();

        assert!(service.exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), r#"{"language": "es"}"#).unwrap();

        let config = service.load().unwrap();
        assert_eq!(config.language(), Language::EsEs);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "{ not json").unwrap();

        let err = service.load().unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn env_override_wins_unless_blank() {
        let config = apply_env_override(AppConfig::default(), Some("http://other:8080".into()));
        assert_eq!(config.api_url, "http://other:8080");

        let config = apply_env_override(AppConfig::default(), Some("   ".into()));
        assert_eq!(config.api_url, DEFAULT_API_URL);

        let config = apply_env_override(AppConfig::default(), None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn timeout_only_when_configured() {
        let mut config = AppConfig::default();
        assert!(config.client_config().request_timeout.is_none());

        config.request_timeout_secs = Some(0);
        assert!(config.client_config().request_timeout.is_none());

        config.request_timeout_secs = Some(15);
        assert_eq!(
            config.client_config().request_timeout,
            Some(Duration::from_secs(15))
        );
    }

    #[test]
    fn unknown_values_fall_back() {
        let config = AppConfig {
            language: "fr-FR".into(),
            theme: "neon".into(),
            ..AppConfig::default()
        };
        assert_eq!(config.language(), Language::EnUs);
        assert_eq!(config.theme(), Theme::Dark);
    }
}
