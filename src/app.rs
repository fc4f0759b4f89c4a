use clap::Subcommand;

use crate::config::Config;
use crate::conversion;
use crate::quantity::QuantityKind;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 알 수 없는 물리량 이름
    UnknownKind(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::UnknownKind(k) => write!(f, "알 수 없는 물리량: {k}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 하위 명령.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// 값을 다른 단위로 변환한다
    Convert {
        /// 변환할 값
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// 입력 단위 기호 (예: kg, Torr, C, "imp gal")
        from: String,

        /// 변환 단위 기호. 생략하면 설정 파일의 기본 단위를 사용한다
        #[arg(short, long)]
        to: Option<String>,
    },

    /// 지원하는 단위와 기호를 나열한다
    Units {
        /// 물리량 (mass, pressure, temperature, volume). 생략하면 전체
        kind: Option<String>,
    },
}

/// 명령 하나를 실행하고 출력할 문자열을 돌려준다.
pub fn run(command: &Command, config: &Config) -> Result<String, AppError> {
    match command {
        Command::Convert { value, from, to } => {
            let source = conversion::measurement(*value, from)?;
            let target = match to {
                Some(t) => t.as_str(),
                None => config.default_units.symbol_for(source.kind()),
            };
            let result = conversion::convert_measurement(&source, target)?;
            Ok(ui_cli::format_conversion(&source, &result))
        }
        Command::Units { kind } => {
            let kinds = match kind.as_deref() {
                None => QuantityKind::ALL.to_vec(),
                Some(name) => vec![parse_kind(name)?],
            };
            Ok(ui_cli::format_unit_table(&kinds))
        }
    }
}

fn parse_kind(s: &str) -> Result<QuantityKind, AppError> {
    QuantityKind::ALL
        .into_iter()
        .find(|k| k.name() == s.to_lowercase())
        .ok_or_else(|| AppError::UnknownKind(s.to_string()))
}
