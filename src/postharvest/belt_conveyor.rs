use super::{EfficiencyRating, PostharvestError};

/// 벨트 컨베이어 평가 입력. 벨트 위 재료 단면은 사다리꼴로 근사한다.
#[derive(Debug, Clone, Copy)]
pub struct BeltConveyorInput {
    /// 운반 재료의 산물밀도(kg/m³)
    pub bulk_density_kg_per_m3: f64,
    /// 재료 단면 윗변(cm)
    pub top_width_cm: f64,
    /// 재료 단면 아랫변(cm)
    pub bottom_width_cm: f64,
    /// 재료 깊이(cm)
    pub depth_cm: f64,
    /// 구동 풀리 지름(cm)
    pub pulley_diameter_cm: f64,
    /// 구동 풀리 회전수(rpm)
    pub pulley_rpm: f64,
    /// 받아낸 질량(kg)
    pub collected_mass_kg: f64,
    /// 받아낸 시간(min)
    pub collection_time_min: f64,
}

/// 벨트 컨베이어 평가 결과.
#[derive(Debug, Clone, Copy)]
pub struct BeltConveyorResult {
    pub belt_speed_m_per_min: f64,
    /// 벨트 1 m당 재료 단면적에서 나온 적재 부피(cm³/m)
    pub load_section_cm3_per_m: f64,
    pub trough_angle_deg: f64,
    pub theoretical_capacity_kg_per_h: f64,
    pub actual_capacity_kg_per_h: f64,
    pub efficiency_percent: f64,
    pub rating: EfficiencyRating,
}

/// 단면 치수와 풀리 회전수로 이론 용량을, 실측 질량으로 실용량과 효율을 계산한다.
pub fn compute_belt_conveyor(
    input: BeltConveyorInput,
) -> Result<BeltConveyorResult, PostharvestError> {
    if input.bulk_density_kg_per_m3 <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "산물밀도는 0보다 커야 합니다.",
        ));
    }
    if input.top_width_cm <= 0.0 || input.bottom_width_cm <= 0.0 || input.depth_cm <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "재료 단면 치수는 0보다 커야 합니다.",
        ));
    }
    if input.top_width_cm < input.bottom_width_cm {
        return Err(PostharvestError::InvalidInput(
            "단면 윗변은 아랫변 이상이어야 합니다.",
        ));
    }
    if input.pulley_diameter_cm <= 0.0 || input.pulley_rpm <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "풀리 지름과 회전수는 0보다 커야 합니다.",
        ));
    }
    if input.collected_mass_kg < 0.0 {
        return Err(PostharvestError::InvalidInput(
            "받아낸 질량은 음수일 수 없습니다.",
        ));
    }
    if input.collection_time_min <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "받아낸 시간은 0보다 커야 합니다.",
        ));
    }

    // V = πDN, D를 cm에서 m로 환산.
    let belt_speed = std::f64::consts::PI * input.pulley_diameter_cm * input.pulley_rpm / 100.0;
    // 사다리꼴 단면적(cm²) × 100 cm = 벨트 1 m당 부피(cm³/m).
    let section_cm2 = (input.top_width_cm + input.bottom_width_cm) / 2.0 * input.depth_cm;
    let load_section = section_cm2 * 100.0;
    let trough_angle = ((input.top_width_cm - input.bottom_width_cm) / (2.0 * input.depth_cm))
        .atan()
        .to_degrees();

    // kg/h = (kg/cm³) × (cm³/m) × (m/min) × 60
    let theoretical =
        input.bulk_density_kg_per_m3 * 1.0e-6 * load_section * belt_speed * 60.0;
    let actual = input.collected_mass_kg / input.collection_time_min * 60.0;
    let efficiency = actual / theoretical * 100.0;

    Ok(BeltConveyorResult {
        belt_speed_m_per_min: belt_speed,
        load_section_cm3_per_m: load_section,
        trough_angle_deg: trough_angle,
        theoretical_capacity_kg_per_h: theoretical,
        actual_capacity_kg_per_h: actual,
        efficiency_percent: efficiency,
        rating: EfficiencyRating::from_percent(efficiency),
    })
}
