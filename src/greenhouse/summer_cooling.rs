use super::factors;
use super::GreenhouseError;

/// 여름철 팬-패드 냉방 환기 설계 입력.
#[derive(Debug, Clone)]
pub struct SummerCoolingInput {
    /// 온실 길이(m)
    pub length_m: f64,
    /// 온실 폭(m)
    pub width_m: f64,
    /// 설치 지점 표고(m)
    pub elevation_m: f64,
    /// 실내 최대 광도(klx)
    pub light_klx: f64,
    /// 패드-팬 구간 허용 온도 상승(°C)
    pub temperature_rise_c: f64,
    /// 패드-팬 간 거리(m)
    pub pad_to_fan_m: f64,
}

/// 여름철 냉방 환기 설계 결과.
#[derive(Debug, Clone)]
pub struct SummerCoolingResult {
    /// 표준 환기량(m³/min). 바닥면적 1m²당 2.5 m³/min 기준.
    pub standard_airflow_m3_per_min: f64,
    /// 표고 보정 계수 Felev
    pub elevation_factor: f64,
    /// 광도 보정 계수 Flight
    pub light_factor: f64,
    /// 온도 상승 보정 계수 Ftemp
    pub temperature_factor: f64,
    /// Fhouse = Felev × Flight × Ftemp
    pub house_factor: f64,
    /// 패드-팬 거리 풍속 계수 Fvel
    pub velocity_factor: f64,
    /// 설계 계수 = max(Fhouse, Fvel)
    pub design_factor: f64,
    /// 설계 환기량(m³/min)
    pub adjusted_airflow_m3_per_min: f64,
    /// 필요 증발 패드 면적(m²). 패드 1m²당 75 m³/min 기준.
    pub pad_area_m2: f64,
    /// 경고/주의 메시지
    pub warnings: Vec<String>,
}

/// 팬-패드 냉방의 설계 환기량과 패드 면적을 계산한다.
pub fn compute_summer_cooling(
    input: SummerCoolingInput,
) -> Result<SummerCoolingResult, GreenhouseError> {
    if input.length_m <= 0.0 || input.width_m <= 0.0 {
        return Err(GreenhouseError::InvalidInput(
            "온실 길이와 폭은 0보다 커야 합니다.",
        ));
    }
    if input.pad_to_fan_m <= 0.0 {
        return Err(GreenhouseError::InvalidInput(
            "패드-팬 거리는 0보다 커야 합니다.",
        ));
    }

    let standard_airflow = input.length_m * input.width_m * 2.5;
    let elevation_factor = factors::elevation_factor(input.elevation_m);
    let light_factor = factors::light_factor(input.light_klx);
    let temperature_factor = factors::temperature_rise_factor(input.temperature_rise_c);
    let house_factor = elevation_factor * light_factor * temperature_factor;
    let velocity_factor = factors::pad_to_fan_factor(input.pad_to_fan_m);
    let design_factor = house_factor.max(velocity_factor);
    let adjusted_airflow = standard_airflow * design_factor;
    let pad_area_m2 = adjusted_airflow / 75.0;

    let mut warnings = Vec::new();
    if !(0.0..=3000.0).contains(&input.elevation_m) {
        warnings.push(format!(
            "표고 {:.0} m는 일반 설계 범위(0~3000 m)를 벗어나 가장자리 계수로 처리됩니다.",
            input.elevation_m
        ));
    }
    if !(40.0..=90.0).contains(&input.light_klx) {
        warnings.push(format!(
            "광도 {:.1} klx는 보정표 범위(약 43~86 klx)를 벗어나 가장자리 계수로 처리됩니다.",
            input.light_klx
        ));
    }
    if !(2.0..=6.0).contains(&input.temperature_rise_c) {
        warnings.push(format!(
            "허용 온도 상승 {:.1} °C는 보정표 범위(약 2.2~5.6 °C)를 벗어나 가장자리 계수로 처리됩니다.",
            input.temperature_rise_c
        ));
    }
    if !(6.0..=40.0).contains(&input.pad_to_fan_m) {
        warnings.push(format!(
            "패드-팬 거리 {:.1} m는 보정표 범위(약 6.1~30.5 m)를 벗어나 가장자리 계수로 처리됩니다.",
            input.pad_to_fan_m
        ));
    }

    Ok(SummerCoolingResult {
        standard_airflow_m3_per_min: standard_airflow,
        elevation_factor,
        light_factor,
        temperature_factor,
        house_factor,
        velocity_factor,
        design_factor,
        adjusted_airflow_m3_per_min: adjusted_airflow,
        pad_area_m2,
        warnings,
    })
}
