use crate::quantity::{Measurement, Quantity, QuantityKind};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 기호
    UnknownUnit(String),
    /// 서로 다른 물리량 사이의 변환 요청
    IncompatibleUnits {
        from: QuantityKind,
        to: QuantityKind,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::IncompatibleUnits { from, to } => {
                write!(f, "{from} 단위를 {to} 단위로 변환할 수 없습니다")
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// 기호로 단위를 찾아 해당 물리량 값을 만든다.
pub fn measurement(value: f64, unit_str: &str) -> Result<Measurement, ConversionError> {
    let kind = QuantityKind::of_symbol(unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(unit_str.to_string()))?;
    Ok(match kind {
        QuantityKind::Mass => Measurement::Mass(Quantity::new(lookup(unit_str)?, value)),
        QuantityKind::Pressure => Measurement::Pressure(Quantity::new(lookup(unit_str)?, value)),
        QuantityKind::Temperature => {
            Measurement::Temperature(Quantity::new(lookup(unit_str)?, value))
        }
        QuantityKind::Volume => Measurement::Volume(Quantity::new(lookup(unit_str)?, value)),
    })
}

/// 값을 기호로 지정한 같은 물리량의 단위로 변환한다.
///
/// `Quantity::to_symbol`과 달리 모르는 기호를 기본 단위로 대체하지 않고 오류로 돌려준다.
pub fn convert_measurement(
    source: &Measurement,
    to_unit_str: &str,
) -> Result<Measurement, ConversionError> {
    let target_kind = QuantityKind::of_symbol(to_unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(to_unit_str.to_string()))?;
    if target_kind != source.kind() {
        return Err(ConversionError::IncompatibleUnits {
            from: source.kind(),
            to: target_kind,
        });
    }
    let converted = match source {
        Measurement::Mass(q) => Measurement::Mass(q.to(lookup(to_unit_str)?)),
        Measurement::Pressure(q) => Measurement::Pressure(q.to(lookup(to_unit_str)?)),
        Measurement::Temperature(q) => Measurement::Temperature(q.to(lookup(to_unit_str)?)),
        Measurement::Volume(q) => Measurement::Volume(q.to(lookup(to_unit_str)?)),
    };
    tracing::trace!(%source, %converted, "converted measurement");
    Ok(converted)
}

/// 문자열로 전달된 단위 기호를 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 기호는 `kg`, `Torr`, `C`, `imp gal` 처럼 표시 기호 그대로 적는다 (대소문자 구분).
/// 물리량 종류는 원본 단위 기호로 판별한다.
pub fn convert(
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<Measurement, ConversionError> {
    let source = measurement(value, from_unit_str)?;
    convert_measurement(&source, to_unit_str)
}

fn lookup<U: UnitSymbol>(s: &str) -> Result<U, ConversionError> {
    U::from_symbol(s).ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}
