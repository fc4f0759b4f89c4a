use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::UnitSymbol;

/// 출력 시 섭씨/화씨 기호 앞에 붙이는 도 기호.
pub const DEGREE_SIGN: &str = "°";

const KELVIN_OFFSET: f64 = 273.15;

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureUnit {
    /// 0이 절대영도인 척도인지 여부. 절대 척도에는 도 기호를 붙이지 않는다.
    pub fn is_absolute(self) -> bool {
        matches!(self, TemperatureUnit::Kelvin)
    }
}

/// 온도를 서로 다른 단위로 변환한다.
///
/// 척도마다 영점이 다르므로 배율만으로는 환산할 수 없고, 단위 쌍마다 1차식을 적용한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;
    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}

impl UnitSymbol for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];
    const FALLBACK: Self = TemperatureUnit::Celsius;

    fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn display_symbol(self) -> Cow<'static, str> {
        if self.is_absolute() {
            Cow::Borrowed(self.symbol())
        } else {
            Cow::Owned(format!("{DEGREE_SIGN}{}", self.symbol()))
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        convert_temperature(value, self, to)
    }
}
