use std::fmt;

use serde::{Deserialize, Serialize};

use crate::units::{MassUnit, PressureUnit, TemperatureUnit, UnitSymbol, VolumeUnit};

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Mass,
    Pressure,
    Temperature,
    Volume,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Mass,
        QuantityKind::Pressure,
        QuantityKind::Temperature,
        QuantityKind::Volume,
    ];

    /// 기호가 속한 물리량을 찾는다. 물리량 사이에 겹치는 기호는 없다.
    pub fn of_symbol(symbol: &str) -> Option<QuantityKind> {
        QuantityKind::ALL
            .into_iter()
            .find(|kind| kind.symbols().iter().any(|s| *s == symbol))
    }

    /// 이 물리량에 속한 모든 단위 기호를 선언 순서대로 돌려준다.
    pub fn symbols(self) -> Vec<&'static str> {
        fn collect<U: UnitSymbol>() -> Vec<&'static str> {
            U::ALL.iter().map(|u| u.symbol()).collect()
        }
        match self {
            QuantityKind::Mass => collect::<MassUnit>(),
            QuantityKind::Pressure => collect::<PressureUnit>(),
            QuantityKind::Temperature => collect::<TemperatureUnit>(),
            QuantityKind::Volume => collect::<VolumeUnit>(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Mass => "mass",
            QuantityKind::Pressure => "pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Volume => "volume",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 단위가 명시된 불변 물리량 값.
///
/// 변환은 항상 새 값을 만들며, 크기에 대한 물리적 범위 검사는 하지 않는다
/// (음의 질량이나 절대영도 미만 온도도 그대로 받는다).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity<U> {
    unit: U,
    value: f64,
}

impl<U: UnitSymbol> Quantity<U> {
    pub const fn new(unit: U, value: f64) -> Self {
        Self { unit, value }
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// 같은 물리량의 다른 단위로 변환한다. 반올림은 하지 않는다.
    pub fn to(&self, unit: U) -> Self {
        Self::new(unit, self.unit.convert(self.value, unit))
    }

    /// 기호로 지정한 단위로 변환한다.
    /// 알 수 없는 기호는 오류 대신 물리량별 기본 단위(`UnitSymbol::FALLBACK`)로 처리한다.
    pub fn to_symbol(&self, symbol: &str) -> Self {
        self.to(U::from_symbol_or_fallback(symbol))
    }
}

impl<U: UnitSymbol> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.display_symbol())
    }
}

pub type Mass = Quantity<MassUnit>;
pub type Pressure = Quantity<PressureUnit>;
pub type Temperature = Quantity<TemperatureUnit>;
pub type Volume = Quantity<VolumeUnit>;

impl Quantity<MassUnit> {
    pub const fn from_kilogram(value: f64) -> Self {
        Self::new(MassUnit::Kilogram, value)
    }
    pub const fn from_gram(value: f64) -> Self {
        Self::new(MassUnit::Gram, value)
    }
    pub const fn from_pound(value: f64) -> Self {
        Self::new(MassUnit::Pound, value)
    }
    pub const fn from_ounce(value: f64) -> Self {
        Self::new(MassUnit::Ounce, value)
    }

    pub fn to_kilogram(&self) -> Self {
        self.to(MassUnit::Kilogram)
    }
    pub fn to_gram(&self) -> Self {
        self.to(MassUnit::Gram)
    }
    pub fn to_pound(&self) -> Self {
        self.to(MassUnit::Pound)
    }
    pub fn to_ounce(&self) -> Self {
        self.to(MassUnit::Ounce)
    }
}

impl Quantity<PressureUnit> {
    pub const fn from_torr(value: f64) -> Self {
        Self::new(PressureUnit::Torr, value)
    }
    pub const fn from_bar(value: f64) -> Self {
        Self::new(PressureUnit::Bar, value)
    }
    pub const fn from_pascal(value: f64) -> Self {
        Self::new(PressureUnit::Pascal, value)
    }
    pub const fn from_pound_force_per_square_inch(value: f64) -> Self {
        Self::new(PressureUnit::PoundForcePerSquareInch, value)
    }

    pub fn to_torr(&self) -> Self {
        self.to(PressureUnit::Torr)
    }
    pub fn to_bar(&self) -> Self {
        self.to(PressureUnit::Bar)
    }
    pub fn to_pascal(&self) -> Self {
        self.to(PressureUnit::Pascal)
    }
    pub fn to_pound_force_per_square_inch(&self) -> Self {
        self.to(PressureUnit::PoundForcePerSquareInch)
    }
}

impl Quantity<TemperatureUnit> {
    pub const fn from_celsius(value: f64) -> Self {
        Self::new(TemperatureUnit::Celsius, value)
    }
    pub const fn from_fahrenheit(value: f64) -> Self {
        Self::new(TemperatureUnit::Fahrenheit, value)
    }
    pub const fn from_kelvin(value: f64) -> Self {
        Self::new(TemperatureUnit::Kelvin, value)
    }

    pub fn to_celsius(&self) -> Self {
        self.to(TemperatureUnit::Celsius)
    }
    pub fn to_fahrenheit(&self) -> Self {
        self.to(TemperatureUnit::Fahrenheit)
    }
    pub fn to_kelvin(&self) -> Self {
        self.to(TemperatureUnit::Kelvin)
    }
}

impl Quantity<VolumeUnit> {
    pub const fn from_milliliter(value: f64) -> Self {
        Self::new(VolumeUnit::Milliliter, value)
    }
    pub const fn from_litre(value: f64) -> Self {
        Self::new(VolumeUnit::Litre, value)
    }
    pub const fn from_us_fluid_ounce(value: f64) -> Self {
        Self::new(VolumeUnit::UsFluidOunce, value)
    }
    pub const fn from_us_legal_cup(value: f64) -> Self {
        Self::new(VolumeUnit::UsLegalCup, value)
    }
    pub const fn from_us_liquid_pint(value: f64) -> Self {
        Self::new(VolumeUnit::UsLiquidPint, value)
    }
    pub const fn from_us_liquid_quart(value: f64) -> Self {
        Self::new(VolumeUnit::UsLiquidQuart, value)
    }
    pub const fn from_us_liquid_gallon(value: f64) -> Self {
        Self::new(VolumeUnit::UsLiquidGallon, value)
    }
    pub const fn from_imperial_fluid_ounce(value: f64) -> Self {
        Self::new(VolumeUnit::ImperialFluidOunce, value)
    }
    pub const fn from_imperial_cup(value: f64) -> Self {
        Self::new(VolumeUnit::ImperialCup, value)
    }
    pub const fn from_imperial_pint(value: f64) -> Self {
        Self::new(VolumeUnit::ImperialPint, value)
    }
    pub const fn from_imperial_quart(value: f64) -> Self {
        Self::new(VolumeUnit::ImperialQuart, value)
    }
    pub const fn from_imperial_gallon(value: f64) -> Self {
        Self::new(VolumeUnit::ImperialGallon, value)
    }

    pub fn to_milliliter(&self) -> Self {
        self.to(VolumeUnit::Milliliter)
    }
    pub fn to_litre(&self) -> Self {
        self.to(VolumeUnit::Litre)
    }
    pub fn to_us_fluid_ounce(&self) -> Self {
        self.to(VolumeUnit::UsFluidOunce)
    }
    pub fn to_us_legal_cup(&self) -> Self {
        self.to(VolumeUnit::UsLegalCup)
    }
    pub fn to_us_liquid_pint(&self) -> Self {
        self.to(VolumeUnit::UsLiquidPint)
    }
    pub fn to_us_liquid_quart(&self) -> Self {
        self.to(VolumeUnit::UsLiquidQuart)
    }
    pub fn to_us_liquid_gallon(&self) -> Self {
        self.to(VolumeUnit::UsLiquidGallon)
    }
    pub fn to_imperial_fluid_ounce(&self) -> Self {
        self.to(VolumeUnit::ImperialFluidOunce)
    }
    pub fn to_imperial_cup(&self) -> Self {
        self.to(VolumeUnit::ImperialCup)
    }
    pub fn to_imperial_pint(&self) -> Self {
        self.to(VolumeUnit::ImperialPint)
    }
    pub fn to_imperial_quart(&self) -> Self {
        self.to(VolumeUnit::ImperialQuart)
    }
    pub fn to_imperial_gallon(&self) -> Self {
        self.to(VolumeUnit::ImperialGallon)
    }
}

/// 물리량 종류를 런타임에 고르는 경우(기호 기반 변환, CLI)를 위한 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Measurement {
    Mass(Mass),
    Pressure(Pressure),
    Temperature(Temperature),
    Volume(Volume),
}

impl Measurement {
    pub fn kind(&self) -> QuantityKind {
        match self {
            Measurement::Mass(_) => QuantityKind::Mass,
            Measurement::Pressure(_) => QuantityKind::Pressure,
            Measurement::Temperature(_) => QuantityKind::Temperature,
            Measurement::Volume(_) => QuantityKind::Volume,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Measurement::Mass(q) => q.value(),
            Measurement::Pressure(q) => q.value(),
            Measurement::Temperature(q) => q.value(),
            Measurement::Volume(q) => q.value(),
        }
    }

    /// 단위 기호 (도 기호 없이).
    pub fn symbol(&self) -> &'static str {
        match self {
            Measurement::Mass(q) => q.unit().symbol(),
            Measurement::Pressure(q) => q.unit().symbol(),
            Measurement::Temperature(q) => q.unit().symbol(),
            Measurement::Volume(q) => q.unit().symbol(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measurement::Mass(q) => fmt::Display::fmt(q, f),
            Measurement::Pressure(q) => fmt::Display::fmt(q, f),
            Measurement::Temperature(q) => fmt::Display::fmt(q, f),
            Measurement::Volume(q) => fmt::Display::fmt(q, f),
        }
    }
}

impl From<Mass> for Measurement {
    fn from(value: Mass) -> Self {
        Measurement::Mass(value)
    }
}

impl From<Pressure> for Measurement {
    fn from(value: Pressure) -> Self {
        Measurement::Pressure(value)
    }
}

impl From<Temperature> for Measurement {
    fn from(value: Temperature) -> Self {
        Measurement::Temperature(value)
    }
}

impl From<Volume> for Measurement {
    fn from(value: Volume) -> Self {
        Measurement::Volume(value)
    }
}
