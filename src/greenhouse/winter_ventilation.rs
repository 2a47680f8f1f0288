use super::factors;
use super::GreenhouseError;

/// 겨울철 환기 튜브 설계 입력.
#[derive(Debug, Clone)]
pub struct WinterVentilationInput {
    /// 온실 길이(m)
    pub length_m: f64,
    /// 온실 폭(m)
    pub width_m: f64,
    /// 설계 실내외 온도차(°C)
    pub inside_outside_diff_c: f64,
}

/// 겨울철 환기 튜브 설계 결과.
#[derive(Debug, Clone)]
pub struct WinterVentilationResult {
    /// 표준 환기량(m³/min). 바닥면적 1m²당 0.61 m³/min 기준.
    pub standard_airflow_m3_per_min: f64,
    /// 온도차 보정 계수 Fwinter
    pub winter_factor: f64,
    /// 설계 환기량(m³/min)
    pub adjusted_airflow_m3_per_min: f64,
    /// 환기 튜브 수
    pub tube_count: u32,
    /// 환기 튜브 직경(cm)
    pub tube_diameter_cm: u32,
    /// 튜브 1본당 분배 유량(m³/min)
    pub flow_per_tube_m3_per_min: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 겨울철 설계 환기량과 천공 환기 튜브 배치를 계산한다.
pub fn compute_winter_ventilation(
    input: WinterVentilationInput,
) -> Result<WinterVentilationResult, GreenhouseError> {
    if input.length_m <= 0.0 || input.width_m <= 0.0 {
        return Err(GreenhouseError::InvalidInput(
            "온실 길이와 폭은 0보다 커야 합니다.",
        ));
    }
    if input.inside_outside_diff_c <= 0.0 {
        return Err(GreenhouseError::InvalidInput(
            "실내외 온도차는 0보다 커야 합니다.",
        ));
    }

    let standard_airflow = input.length_m * input.width_m * 0.61;
    let winter_factor = factors::winter_temperature_factor(input.inside_outside_diff_c);
    let adjusted_airflow = standard_airflow * winter_factor;

    let (tube_count, tube_diameter_cm) = select_tubes(input.width_m, input.length_m);
    let flow_per_tube = adjusted_airflow / f64::from(tube_count);

    let mut warnings = Vec::new();
    if !(4.0..=11.0).contains(&input.inside_outside_diff_c) {
        warnings.push(format!(
            "온도차 {:.1} °C는 보정표 범위(약 5~10 °C)를 벗어나 가장자리 계수로 처리됩니다.",
            input.inside_outside_diff_c
        ));
    }
    if input.length_m > 61.0 {
        warnings.push(format!(
            "온실 길이 {:.0} m는 단일 튜브 배치 기준(≤61 m)을 넘습니다. 구간 분할을 검토하세요.",
            input.length_m
        ));
    }

    Ok(WinterVentilationResult {
        standard_airflow_m3_per_min: standard_airflow,
        winter_factor,
        adjusted_airflow_m3_per_min: adjusted_airflow,
        tube_count,
        tube_diameter_cm,
        flow_per_tube_m3_per_min: flow_per_tube,
        warnings,
    })
}

// 폭으로 튜브 수를, 길이로 직경을 고른다. 값은 천공 폴리튜브 설계 관행 기준.
fn select_tubes(width_m: f64, length_m: f64) -> (u32, u32) {
    if width_m <= 4.6 {
        (1, if length_m <= 30.0 { 46 } else { 61 })
    } else if width_m <= 7.6 {
        (1, if length_m <= 30.0 { 61 } else { 76 })
    } else if width_m <= 10.7 {
        (2, if length_m <= 46.0 { 61 } else { 76 })
    } else {
        (3, 76)
    }
}
