//! 질량, 압력, 온도, 체적을 단위가 붙은 불변 값으로 다루는 라이브러리.
//! 같은 물리량 안에서의 단위 변환과 `"값 기호"` 형태의 출력을 제공한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use quantity::{Mass, Measurement, Pressure, Quantity, QuantityKind, Temperature, Volume};
pub use units::UnitSymbol;
