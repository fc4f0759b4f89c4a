use serde::{Deserialize, Serialize};

use super::UnitSymbol;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "oz")]
    Ounce,
}

// 국제 파운드(1959) 정의값
const KG_PER_POUND: f64 = 0.453_592_37;
const KG_PER_OUNCE: f64 = KG_PER_POUND / 16.0;

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Pound => value * KG_PER_POUND,
        MassUnit::Ounce => value * KG_PER_OUNCE,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Pound => value / KG_PER_POUND,
        MassUnit::Ounce => value / KG_PER_OUNCE,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_kg(value, from);
    from_kg(base, to)
}

impl UnitSymbol for MassUnit {
    const ALL: &'static [Self] = &[
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];
    const FALLBACK: Self = MassUnit::Kilogram;

    fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        convert_mass(value, self, to)
    }
}
