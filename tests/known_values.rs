//! 물리량별 기준값 변환 회귀 테스트. 허용 오차는 0.5%.
use approx::assert_relative_eq;
use measurements::units::{MassUnit, PressureUnit, TemperatureUnit, VolumeUnit};
use measurements::{Mass, Pressure, Temperature, Volume};

const TOL: f64 = 0.005;

#[test]
fn mass_reference_points() {
    let lb = Mass::from_kilogram(10.0).to_pound();
    assert_eq!(lb.unit(), MassUnit::Pound);
    assert_relative_eq!(lb.value(), 22.05, max_relative = TOL);
    assert_eq!(lb.to_string(), "22.05 lb");

    let kg = Mass::from_gram(10_000.0).to_kilogram();
    assert_eq!(kg.to_string(), "10.00 kg");

    let kg = Mass::from_ounce(352.74).to_kilogram();
    assert_relative_eq!(kg.value(), 10.0, max_relative = TOL);
    assert_eq!(kg.to_string(), "10.00 kg");
}

#[test]
fn mass_to_gram_from_every_unit() {
    let cases = [
        (MassUnit::Kilogram, 0.01),
        (MassUnit::Gram, 10.0),
        (MassUnit::Pound, 0.022_046_2),
        (MassUnit::Ounce, 0.352_74),
    ];
    for (unit, value) in cases {
        let g = Mass::new(unit, value).to_gram();
        assert_relative_eq!(g.value(), 10.0, max_relative = TOL);
        assert_eq!(g.to_string(), "10.00 g", "{unit:?}");
    }
}

#[test]
fn pressure_reference_points() {
    let bar = Pressure::from_torr(7500.62).to_bar();
    assert_relative_eq!(bar.value(), 10.0, max_relative = TOL);
    assert_eq!(bar.to_string(), "10.00 bar");

    let pa = Pressure::from_bar(1e-4).to_pascal();
    assert_relative_eq!(pa.value(), 10.0, max_relative = 1e-12);
    assert_eq!(pa.to_string(), "10.00 Pa");

    let pa = Pressure::from_bar(1.0).to(PressureUnit::Pascal);
    assert_relative_eq!(pa.value(), 100_000.0, max_relative = 1e-12);

    let psi = Pressure::from_bar(1.0).to_pound_force_per_square_inch();
    assert_relative_eq!(psi.value(), 14.504, max_relative = TOL);
}

#[test]
fn temperature_reference_points() {
    let c = Temperature::from_fahrenheit(50.0).to_celsius();
    assert_relative_eq!(c.value(), 10.0, max_relative = 1e-12);
    assert_eq!(c.to_string(), "10.00 °C");

    let c = Temperature::from_kelvin(283.15).to_celsius();
    assert_relative_eq!(c.value(), 10.0, max_relative = 1e-9);
    assert_eq!(c.to_string(), "10.00 °C");

    let f = Temperature::from_celsius(10.0).to_fahrenheit();
    assert_relative_eq!(f.value(), 50.0, max_relative = 1e-12);
    assert_eq!(f.to_string(), "50.00 °F");

    let k = Temperature::from_celsius(-263.15).to_kelvin();
    assert_relative_eq!(k.value(), 10.0, max_relative = 1e-9);
    assert_eq!(k.to_string(), "10.00 K");

    let k = Temperature::from_fahrenheit(50.0).to(TemperatureUnit::Kelvin);
    assert_relative_eq!(k.value(), 283.15, max_relative = 1e-12);
}

#[test]
fn below_absolute_zero_is_accepted() {
    let t = Temperature::from_kelvin(-5.0);
    assert_eq!(t.to_string(), "-5.00 K");
    assert_relative_eq!(t.to_celsius().value(), -278.15, max_relative = 1e-12);
}

#[test]
fn volume_reference_points() {
    let l = Volume::from_milliliter(10_000.0).to_litre();
    assert_eq!(l.to_string(), "10.00 l");

    let floz = Volume::from_litre(10.0).to_us_fluid_ounce();
    assert_relative_eq!(floz.value(), 338.14, max_relative = TOL);
    assert_eq!(floz.to_string(), "338.14 fl oz");

    let gal = Volume::from_milliliter(4546.0).to_imperial_gallon();
    assert_relative_eq!(gal.value(), 1.0, max_relative = TOL);
    assert_eq!(gal.to_string(), "1.00 imp gal");
}

#[test]
fn volume_to_litre_from_every_unit() {
    let cases = [
        (VolumeUnit::Milliliter, 10_000.0),
        (VolumeUnit::Litre, 10.0),
        (VolumeUnit::UsFluidOunce, 338.14),
        (VolumeUnit::UsLegalCup, 41.6667),
        (VolumeUnit::UsLiquidPint, 21.1338),
        (VolumeUnit::UsLiquidQuart, 10.5669),
        (VolumeUnit::UsLiquidGallon, 2.641_72),
        (VolumeUnit::ImperialFluidOunce, 351.951),
        (VolumeUnit::ImperialCup, 35.1951),
        (VolumeUnit::ImperialPint, 17.5975),
        (VolumeUnit::ImperialQuart, 8.798_77),
        (VolumeUnit::ImperialGallon, 2.199_69),
    ];
    for (unit, value) in cases {
        let l = Volume::new(unit, value).to_litre();
        assert_eq!(l.unit(), VolumeUnit::Litre);
        assert_relative_eq!(l.value(), 10.0, max_relative = TOL);
    }
}

#[test]
fn formatting_always_has_two_decimals() {
    assert_eq!(Mass::from_gram(0.0).to_string(), "0.00 g");
    assert_eq!(Mass::from_pound(1.005).to_string(), "1.00 lb");
    assert_eq!(Pressure::from_pascal(-12.3456).to_string(), "-12.35 Pa");
    assert_eq!(Volume::from_imperial_fluid_ounce(7.0).to_string(), "7.00 imp fl oz");
    assert_eq!(Temperature::from_fahrenheit(98.6).to_string(), "98.60 °F");
}
