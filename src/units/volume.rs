use serde::{Deserialize, Serialize};

use super::UnitSymbol;

/// 체적 단위. 내부 기준은 밀리리터이다.
///
/// 미국 액량 단위와 영국(임페리얼) 단위를 함께 다루며, 기호 앞의 `imp`로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeUnit {
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "l")]
    Litre,
    #[serde(rename = "fl oz")]
    UsFluidOunce,
    #[serde(rename = "cp")]
    UsLegalCup,
    #[serde(rename = "pt")]
    UsLiquidPint,
    #[serde(rename = "qt")]
    UsLiquidQuart,
    #[serde(rename = "gal")]
    UsLiquidGallon,
    #[serde(rename = "imp fl oz")]
    ImperialFluidOunce,
    #[serde(rename = "imp cp")]
    ImperialCup,
    #[serde(rename = "imp pt")]
    ImperialPint,
    #[serde(rename = "imp qt")]
    ImperialQuart,
    #[serde(rename = "imp gal")]
    ImperialGallon,
}

// 미국 액량 단위는 231 in³ 갤런에서 유도된다.
const ML_PER_US_GALLON: f64 = 3_785.411_784;
const ML_PER_US_QUART: f64 = ML_PER_US_GALLON / 4.0;
const ML_PER_US_PINT: f64 = ML_PER_US_GALLON / 8.0;
const ML_PER_US_FLUID_OUNCE: f64 = ML_PER_US_GALLON / 128.0;
// 영양성분 표시용 법정 컵(FDA)
const ML_PER_US_LEGAL_CUP: f64 = 240.0;

const ML_PER_IMPERIAL_GALLON: f64 = 4_546.09;
const ML_PER_IMPERIAL_QUART: f64 = ML_PER_IMPERIAL_GALLON / 4.0;
const ML_PER_IMPERIAL_PINT: f64 = ML_PER_IMPERIAL_GALLON / 8.0;
const ML_PER_IMPERIAL_CUP: f64 = ML_PER_IMPERIAL_GALLON / 16.0;
const ML_PER_IMPERIAL_FLUID_OUNCE: f64 = ML_PER_IMPERIAL_GALLON / 160.0;

/// 1 단위가 몇 ml인지 돌려준다.
fn ml_per_unit(unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::Milliliter => 1.0,
        VolumeUnit::Litre => 1000.0,
        VolumeUnit::UsFluidOunce => ML_PER_US_FLUID_OUNCE,
        VolumeUnit::UsLegalCup => ML_PER_US_LEGAL_CUP,
        VolumeUnit::UsLiquidPint => ML_PER_US_PINT,
        VolumeUnit::UsLiquidQuart => ML_PER_US_QUART,
        VolumeUnit::UsLiquidGallon => ML_PER_US_GALLON,
        VolumeUnit::ImperialFluidOunce => ML_PER_IMPERIAL_FLUID_OUNCE,
        VolumeUnit::ImperialCup => ML_PER_IMPERIAL_CUP,
        VolumeUnit::ImperialPint => ML_PER_IMPERIAL_PINT,
        VolumeUnit::ImperialQuart => ML_PER_IMPERIAL_QUART,
        VolumeUnit::ImperialGallon => ML_PER_IMPERIAL_GALLON,
    }
}

fn to_milliliter(value: f64, unit: VolumeUnit) -> f64 {
    value * ml_per_unit(unit)
}

fn from_milliliter(value_ml: f64, unit: VolumeUnit) -> f64 {
    value_ml / ml_per_unit(unit)
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    if from == to {
        return value;
    }
    let ml = to_milliliter(value, from);
    from_milliliter(ml, to)
}

impl UnitSymbol for VolumeUnit {
    const ALL: &'static [Self] = &[
        VolumeUnit::Milliliter,
        VolumeUnit::Litre,
        VolumeUnit::UsFluidOunce,
        VolumeUnit::UsLegalCup,
        VolumeUnit::UsLiquidPint,
        VolumeUnit::UsLiquidQuart,
        VolumeUnit::UsLiquidGallon,
        VolumeUnit::ImperialFluidOunce,
        VolumeUnit::ImperialCup,
        VolumeUnit::ImperialPint,
        VolumeUnit::ImperialQuart,
        VolumeUnit::ImperialGallon,
    ];
    const FALLBACK: Self = VolumeUnit::Milliliter;

    fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "ml",
            VolumeUnit::Litre => "l",
            VolumeUnit::UsFluidOunce => "fl oz",
            VolumeUnit::UsLegalCup => "cp",
            VolumeUnit::UsLiquidPint => "pt",
            VolumeUnit::UsLiquidQuart => "qt",
            VolumeUnit::UsLiquidGallon => "gal",
            VolumeUnit::ImperialFluidOunce => "imp fl oz",
            VolumeUnit::ImperialCup => "imp cp",
            VolumeUnit::ImperialPint => "imp pt",
            VolumeUnit::ImperialQuart => "imp qt",
            VolumeUnit::ImperialGallon => "imp gal",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        convert_volume(value, self, to)
    }
}
