use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::charging::{Currency, PricingSchema};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 충전 계산기 페이지 속성에 해당하는 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargingConfig {
    pub currency: Currency,
    pub pricing: PricingSchema,
    /// 모델별 하드웨어 가격 (타일 순서)
    pub model_prices: Vec<f64>,
    /// 슬라이더 초기값
    pub ac_chargings: u32,
    pub dc_chargings: u32,
    pub grid_price: f64,
}

impl Default for ChargingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::Czk,
            pricing: PricingSchema::Czk,
            model_prices: vec![500_000.0, 750_000.0, 1_000_000.0],
            ac_chargings: 3,
            dc_chargings: 2,
            grid_price: 4.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (cs/en/de/auto)
    pub language: String,
    /// 언어팩 덮어쓰기 디렉터리
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<PathBuf>,
    pub charging: ChargingConfig,
    #[serde(skip)]
    path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            locales_dir: None,
            charging: ChargingConfig::default(),
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let mut cfg: Config = toml::from_str(&content)?;
        cfg.path = path.to_path_buf();
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config {
            path: path.to_path_buf(),
            ..Config::default()
        };
        cfg.save()?;
        tracing::info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 로드한 경로에 다시 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 모델 가격 목록을 페이지 속성 형식(JSON 배열)으로 만든다.
    pub fn model_prices_attr(&self) -> String {
        serde_json::to_string(&self.charging.model_prices).unwrap_or_else(|_| "[]".to_string())
    }
}
