use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 설정 파일이 지정되지 않았을 때 사용하는 경로.
pub const DEFAULT_CONFIG_PATH: &str = "measurements.toml";

/// 각 물리량별 기본 출력 단위 설정을 담는다.
/// 단위는 표시 기호(`kg`, `Torr`, `C`, `ml` 등)로 저장된다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub mass: MassUnit,
    pub pressure: PressureUnit,
    pub temperature: TemperatureUnit,
    pub volume: VolumeUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            mass: MassUnit::FALLBACK,
            pressure: PressureUnit::FALLBACK,
            temperature: TemperatureUnit::FALLBACK,
            volume: VolumeUnit::FALLBACK,
        }
    }
}

impl DefaultUnits {
    /// 물리량별 기본 단위의 기호를 돌려준다.
    pub fn symbol_for(&self, kind: QuantityKind) -> &'static str {
        match kind {
            QuantityKind::Mass => self.mass.symbol(),
            QuantityKind::Pressure => self.pressure.symbol(),
            QuantityKind::Temperature => self.temperature.symbol(),
            QuantityKind::Volume => self.volume.symbol(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_units: DefaultUnits,
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
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
