use std::fmt::Write;

use crate::quantity::{Measurement, QuantityKind};

/// 변환 결과를 `원본 => 결과` 한 줄로 만든다.
pub fn format_conversion(source: &Measurement, result: &Measurement) -> String {
    format!("{source} => {result}")
}

/// 물리량별 단위 기호 목록을 표 형태로 만든다.
pub fn format_unit_table(kinds: &[QuantityKind]) -> String {
    let mut out = String::new();
    for kind in kinds {
        // String에 쓰는 write!는 실패하지 않는다.
        let _ = writeln!(out, "-- {kind} --");
        for symbol in kind.symbols() {
            let _ = writeln!(out, "  {symbol}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Temperature;

    #[test]
    fn conversion_line() {
        let src = Measurement::from(Temperature::from_fahrenheit(50.0));
        let dst = Measurement::from(Temperature::from_celsius(10.0));
        assert_eq!(format_conversion(&src, &dst), "50.00 °F => 10.00 °C");
    }

    #[test]
    fn unit_table_lists_every_symbol() {
        let table = format_unit_table(&[QuantityKind::Pressure]);
        assert_eq!(table, "-- pressure --\n  Torr\n  bar\n  Pa\n  psi\n");
    }
}
