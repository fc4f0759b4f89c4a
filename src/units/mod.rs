//! 단위 정의 및 변환 모듈 모음.

use std::borrow::Cow;

pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod volume;

pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use volume::{convert_volume, VolumeUnit};

/// 하나의 물리량에 속한 닫힌 단위 집합이 공통으로 제공하는 기호표와 변환 규칙.
///
/// `symbol`은 전체 함수이고 `from_symbol`은 그 역함수(부분 함수)이다.
/// 같은 집합 안에서 두 단위가 같은 기호를 가져서는 안 된다.
pub trait UnitSymbol: Copy + Eq + std::fmt::Debug + 'static {
    /// 집합에 속한 모든 단위. 선언 순서를 따른다.
    const ALL: &'static [Self];

    /// 알 수 없는 기호로 변환을 요청받았을 때 대신 사용하는 단위.
    const FALLBACK: Self;

    /// 단위의 표시 기호.
    fn symbol(self) -> &'static str;

    /// 값과 함께 출력할 때의 기호. 기본은 `symbol`과 같다.
    fn display_symbol(self) -> Cow<'static, str> {
        Cow::Borrowed(self.symbol())
    }

    /// `value`를 `self` 단위에서 `to` 단위로 환산한다.
    fn convert(self, value: f64, to: Self) -> f64;

    /// 기호로 단위를 찾는다. 대소문자를 구분하며 별칭은 받지 않는다.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.symbol() == symbol)
    }

    /// 기호로 단위를 찾되, 없으면 `FALLBACK`을 돌려준다.
    fn from_symbol_or_fallback(symbol: &str) -> Self {
        Self::from_symbol(symbol).unwrap_or_else(|| {
            tracing::debug!(
                symbol,
                fallback = Self::FALLBACK.symbol(),
                "unknown unit symbol, using fallback unit"
            );
            Self::FALLBACK
        })
    }
}
