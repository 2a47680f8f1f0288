use serde::{Deserialize, Serialize};

/// 환기량(공기 유량) 단위. 내부 기준은 m³/min이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirflowUnit {
    CubicMeterPerMinute,
    CubicMeterPerHour,
    CubicFootPerMinute,
}

fn to_m3_per_min(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerMinute => value,
        AirflowUnit::CubicMeterPerHour => value / 60.0,
        AirflowUnit::CubicFootPerMinute => value * 0.0283168,
    }
}

fn from_m3_per_min(value: f64, unit: AirflowUnit) -> f64 {
    match unit {
        AirflowUnit::CubicMeterPerMinute => value,
        AirflowUnit::CubicMeterPerHour => value * 60.0,
        AirflowUnit::CubicFootPerMinute => value / 0.0283168,
    }
}

/// 환기량을 변환한다.
pub fn convert_airflow(value: f64, from: AirflowUnit, to: AirflowUnit) -> f64 {
    let base = to_m3_per_min(value, from);
    from_m3_per_min(base, to)
}
