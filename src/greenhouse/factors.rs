use std::sync::OnceLock;

use crate::interp::Breakpoint::{Finite, OpenAbove, OpenBelow};
use crate::interp::{ReferenceTable, TableRow};

/// 표고 보정 계수 표(표고 m → Felev).
pub fn elevation_table() -> &'static ReferenceTable {
    static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("Elevation Factor", ELEVATION_ROWS))
}

/// 실내 광도 보정 계수 표(klx → Flight).
pub fn light_table() -> &'static ReferenceTable {
    static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("Light Intensity Factor", LIGHT_ROWS))
}

/// 허용 온도 상승 보정 계수 표(°C → Ftemp).
pub fn temperature_rise_table() -> &'static ReferenceTable {
    static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("Temperature Rise Factor", TEMPERATURE_RISE_ROWS))
}

/// 패드-팬 거리 풍속 계수 표(m → Fvel).
pub fn pad_to_fan_table() -> &'static ReferenceTable {
    static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("Pad-to-Fan Distance Factor", PAD_TO_FAN_ROWS))
}

/// 겨울철 실내외 온도차 보정 계수 표(°C → Fwinter).
pub fn winter_temperature_table() -> &'static ReferenceTable {
    static TABLE: OnceLock<ReferenceTable> = OnceLock::new();
    TABLE.get_or_init(|| builtin("Winter Temperature Factor", WINTER_TEMPERATURE_ROWS))
}

pub fn elevation_factor(elevation_m: f64) -> f64 {
    elevation_table().lookup(elevation_m)
}

pub fn light_factor(light_klx: f64) -> f64 {
    light_table().lookup(light_klx)
}

pub fn temperature_rise_factor(rise_c: f64) -> f64 {
    temperature_rise_table().lookup(rise_c)
}

pub fn pad_to_fan_factor(distance_m: f64) -> f64 {
    pad_to_fan_table().lookup(distance_m)
}

pub fn winter_temperature_factor(diff_c: f64) -> f64 {
    winter_temperature_table().lookup(diff_c)
}

// 내장 표 행은 고정 데이터라 항상 구성 검증을 통과한다.
fn builtin(name: &'static str, rows: &[TableRow]) -> ReferenceTable {
    ReferenceTable::new(name, rows.to_vec()).unwrap()
}

const ELEVATION_ROWS: &[TableRow] = &[
    row(OpenBelow(300.0), 1.00),
    row(Finite(300.0), 1.04),
    row(Finite(600.0), 1.08),
    row(Finite(900.0), 1.12),
    row(Finite(1200.0), 1.16),
    row(Finite(1500.0), 1.20),
    row(Finite(1800.0), 1.25),
    row(Finite(2100.0), 1.30),
    row(Finite(2400.0), 1.30),
];

const LIGHT_ROWS: &[TableRow] = &[
    row(Finite(43.1), 0.80),
    row(Finite(48.4), 0.90),
    row(Finite(53.8), 1.00),
    row(Finite(59.2), 1.10),
    row(Finite(64.6), 1.20),
    row(Finite(70.0), 1.30),
    row(Finite(75.3), 1.40),
    row(Finite(80.1), 1.50),
    row(Finite(86.1), 1.60),
];

const TEMPERATURE_RISE_ROWS: &[TableRow] = &[
    row(Finite(2.2), 1.75),
    row(Finite(2.8), 1.40),
    row(Finite(3.3), 1.17),
    row(Finite(3.9), 1.00),
    row(Finite(4.4), 0.88),
    row(Finite(5.0), 0.78),
    row(Finite(5.6), 0.70),
];

const PAD_TO_FAN_ROWS: &[TableRow] = &[
    row(Finite(6.1), 2.24),
    row(Finite(7.6), 2.00),
    row(Finite(9.1), 1.83),
    row(Finite(10.7), 1.69),
    row(Finite(12.2), 1.58),
    row(Finite(13.7), 1.48),
    row(Finite(15.2), 1.41),
    row(Finite(16.8), 1.35),
    row(Finite(18.3), 1.29),
    row(Finite(19.8), 1.24),
    row(Finite(21.3), 1.20),
    row(Finite(22.9), 1.16),
    row(Finite(24.4), 1.12),
    row(Finite(25.9), 1.08),
    row(Finite(27.4), 1.05),
    row(Finite(29.0), 1.02),
    row(OpenAbove(30.5), 1.00),
];

const WINTER_TEMPERATURE_ROWS: &[TableRow] = &[
    row(Finite(5.0), 1.67),
    row(Finite(5.6), 1.50),
    row(Finite(6.1), 1.37),
    row(Finite(6.7), 1.25),
    row(Finite(7.2), 1.15),
    row(Finite(7.8), 1.07),
    row(Finite(8.3), 1.00),
    row(Finite(8.9), 0.94),
    row(Finite(9.4), 0.88),
    row(Finite(10.0), 0.83),
];

const fn row(breakpoint: crate::interp::Breakpoint, value: f64) -> TableRow {
    TableRow::new(breakpoint, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_construct() {
        // 행 데이터가 정렬/개방 경계 검증을 통과하는지 확인한다.
        assert_eq!(elevation_table().rows().len(), 9);
        assert_eq!(light_table().rows().len(), 9);
        assert_eq!(temperature_rise_table().rows().len(), 7);
        assert_eq!(pad_to_fan_table().rows().len(), 17);
        assert_eq!(winter_temperature_table().rows().len(), 10);
    }

    #[test]
    fn open_bounds_clamp_flat() {
        assert_eq!(elevation_factor(100.0), 1.00);
        assert_eq!(pad_to_fan_factor(50.0), 1.00);
    }

    #[test]
    fn published_anchor_points() {
        assert!((elevation_factor(600.0) - 1.08).abs() < 1e-12);
        assert!((light_factor(53.8) - 1.00).abs() < 1e-12);
        assert!((temperature_rise_factor(3.9) - 1.00).abs() < 1e-12);
        assert!((winter_temperature_factor(8.3) - 1.00).abs() < 1e-12);
    }
}
