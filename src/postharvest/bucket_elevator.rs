use super::{EfficiencyRating, PostharvestError};

const G_M_PER_S2: f64 = 9.81;

/// 버킷 엘리베이터 평가 입력.
#[derive(Debug, Clone, Copy)]
pub struct BucketElevatorInput {
    /// 버킷 하나의 용적(cm³)
    pub bucket_volume_cm3: f64,
    /// 버킷 간격(cm)
    pub bucket_spacing_cm: f64,
    /// 운반 재료의 산물밀도(kg/m³)
    pub bulk_density_kg_per_m3: f64,
    /// 헤드 풀리 지름(cm)
    pub pulley_diameter_cm: f64,
    /// 헤드 풀리 회전수(rpm)
    pub pulley_rpm: f64,
    /// 받아낸 질량(kg)
    pub collected_mass_kg: f64,
    /// 받아낸 시간(min)
    pub collection_time_min: f64,
    /// 부하 운전 전력(W)
    pub loaded_power_w: f64,
    /// 무부하 운전 전력(W)
    pub no_load_power_w: f64,
    /// 양정(m)
    pub lift_height_m: f64,
}

/// 버킷 엘리베이터 평가 결과.
#[derive(Debug, Clone)]
pub struct BucketElevatorResult {
    pub buckets_per_meter: f64,
    /// 벨트 1 m당 적재 질량(kg/m)
    pub load_per_meter_kg: f64,
    pub belt_speed_m_per_min: f64,
    pub theoretical_capacity_kg_per_h: f64,
    pub actual_capacity_kg_per_h: f64,
    pub efficiency_percent: f64,
    pub rating: EfficiencyRating,
    /// 원심/중력 배출 판별비 V²/(gR). 1 부근이 원심 배출 설계점이다.
    pub discharge_ratio: f64,
    /// 판별비가 1이 되는 회전수(rpm)
    pub optimal_rpm: f64,
    pub net_power_w: f64,
    /// 실측 양곡 에너지(Wh)
    pub actual_energy_wh: f64,
    /// 이론 양곡 에너지 MgH(Wh)
    pub theoretical_lift_energy_wh: f64,
    pub energy_per_kg_wh: f64,
    pub mechanical_efficiency_percent: f64,
    pub warnings: Vec<String>,
}

/// 버킷 용적과 풀리 회전수로 이론 용량을, 전력 실측으로 에너지 효율을 계산한다.
pub fn compute_bucket_elevator(
    input: BucketElevatorInput,
) -> Result<BucketElevatorResult, PostharvestError> {
    if input.bucket_volume_cm3 <= 0.0 || input.bucket_spacing_cm <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "버킷 용적과 간격은 0보다 커야 합니다.",
        ));
    }
    if input.bulk_density_kg_per_m3 <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "산물밀도는 0보다 커야 합니다.",
        ));
    }
    if input.pulley_diameter_cm <= 0.0 || input.pulley_rpm <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "풀리 지름과 회전수는 0보다 커야 합니다.",
        ));
    }
    if input.collected_mass_kg <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "받아낸 질량은 0보다 커야 합니다.",
        ));
    }
    if input.collection_time_min <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "받아낸 시간은 0보다 커야 합니다.",
        ));
    }
    if input.loaded_power_w < input.no_load_power_w {
        return Err(PostharvestError::InvalidInput(
            "부하 전력이 무부하 전력보다 작습니다.",
        ));
    }
    if input.no_load_power_w < 0.0 {
        return Err(PostharvestError::InvalidInput(
            "무부하 전력은 음수일 수 없습니다.",
        ));
    }
    if input.lift_height_m <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "양정은 0보다 커야 합니다.",
        ));
    }

    let buckets_per_meter = 100.0 / input.bucket_spacing_cm;
    let load_per_meter =
        input.bucket_volume_cm3 * buckets_per_meter * input.bulk_density_kg_per_m3 * 1.0e-6;
    let belt_speed = std::f64::consts::PI * input.pulley_diameter_cm * input.pulley_rpm / 100.0;
    let theoretical = load_per_meter * belt_speed * 60.0;
    let actual = input.collected_mass_kg / input.collection_time_min * 60.0;
    let efficiency = actual / theoretical * 100.0;

    // 풀리 반지름(m)과 버킷 속도(m/s)로 원심 배출 여부를 판별한다.
    let radius_m = input.pulley_diameter_cm / 200.0;
    let speed_m_per_s = belt_speed / 60.0;
    let discharge_ratio = speed_m_per_s * speed_m_per_s / (G_M_PER_S2 * radius_m);
    let optimal_rpm = 60.0 * (G_M_PER_S2 / radius_m).sqrt() / (2.0 * std::f64::consts::PI);

    let net_power = input.loaded_power_w - input.no_load_power_w;
    let actual_energy = net_power * input.collection_time_min / 60.0;
    let theoretical_energy =
        input.collected_mass_kg * G_M_PER_S2 * input.lift_height_m / 3600.0;
    let energy_per_kg = actual_energy / input.collected_mass_kg;
    let mechanical_efficiency = if actual_energy > 0.0 {
        theoretical_energy / actual_energy * 100.0
    } else {
        0.0
    };

    let mut warnings = Vec::new();
    if discharge_ratio < 0.9 {
        warnings.push(format!(
            "판별비 {discharge_ratio:.2}로 중력 배출 영역입니다. 증속 또는 반경 축소를 검토하세요."
        ));
    } else if discharge_ratio > 1.1 {
        warnings.push(format!(
            "판별비 {discharge_ratio:.2}로 과원심 영역입니다. 감속 또는 반경 확대를 검토하세요."
        ));
    }

    Ok(BucketElevatorResult {
        buckets_per_meter,
        load_per_meter_kg: load_per_meter,
        belt_speed_m_per_min: belt_speed,
        theoretical_capacity_kg_per_h: theoretical,
        actual_capacity_kg_per_h: actual,
        efficiency_percent: efficiency,
        rating: EfficiencyRating::from_percent(efficiency),
        discharge_ratio,
        optimal_rpm,
        net_power_w: net_power,
        actual_energy_wh: actual_energy,
        theoretical_lift_energy_wh: theoretical_energy,
        energy_per_kg_wh: energy_per_kg,
        mechanical_efficiency_percent: mechanical_efficiency,
        warnings,
    })
}
