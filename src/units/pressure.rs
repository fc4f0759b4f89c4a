use serde::{Deserialize, Serialize};

use super::UnitSymbol;

/// 압력 단위. 내부 기준은 Pa(절대압)이다.
/// 게이지/절대 구분은 하지 않으며 모든 값은 같은 기준점을 공유한다고 본다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "Torr")]
    Torr,
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "psi")]
    PoundForcePerSquareInch,
}

const PA_PER_BAR: f64 = 100_000.0;
// 1 Torr = 1 atm / 760
const PA_PER_TORR: f64 = 101_325.0 / 760.0;
const PA_PER_PSI: f64 = 6_894.757_293_168_361;

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Torr => value * PA_PER_TORR,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Pascal => value,
        PressureUnit::PoundForcePerSquareInch => value * PA_PER_PSI,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Torr => value_pa / PA_PER_TORR,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Pascal => value_pa,
        PressureUnit::PoundForcePerSquareInch => value_pa / PA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}

impl UnitSymbol for PressureUnit {
    const ALL: &'static [Self] = &[
        PressureUnit::Torr,
        PressureUnit::Bar,
        PressureUnit::Pascal,
        PressureUnit::PoundForcePerSquareInch,
    ];
    const FALLBACK: Self = PressureUnit::Torr;

    fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Torr => "Torr",
            PressureUnit::Bar => "bar",
            PressureUnit::Pascal => "Pa",
            PressureUnit::PoundForcePerSquareInch => "psi",
        }
    }

    fn convert(self, value: f64, to: Self) -> f64 {
        convert_pressure(value, self, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::table_checks;
    use approx::assert_relative_eq;

    #[test]
    fn symbol_table_is_bijective() {
        table_checks::assert_symbols_bijective::<PressureUnit>();
        table_checks::assert_self_identity::<PressureUnit>(0.35);
    }

    #[test]
    fn symbols_are_case_sensitive() {
        assert_eq!(PressureUnit::from_symbol("torr"), None);
        assert_eq!(PressureUnit::from_symbol("pa"), None);
        assert_eq!(PressureUnit::from_symbol("Pa"), Some(PressureUnit::Pascal));
    }

    #[test]
    fn atmosphere_in_torr_and_psi() {
        // 1 atm = 760 Torr ≈ 14.696 psi
        let psi = convert_pressure(760.0, PressureUnit::Torr, PressureUnit::PoundForcePerSquareInch);
        assert_relative_eq!(psi, 14.695_949, max_relative = 1e-6);
    }
}
