use super::PostharvestError;

/// 트레이 건조기 평가 입력.
#[derive(Debug, Clone, Copy)]
pub struct TrayDryerInput {
    /// 빈 트레이 질량(g)
    pub empty_tray_g: f64,
    /// 습시료 + 트레이 질량(g)
    pub wet_tray_g: f64,
    /// 건조 후 + 트레이 질량(g)
    pub dry_tray_g: f64,
    /// 건조기에 실제 투입한 배치 질량(g)
    pub batch_weight_g: f64,
    /// 가열 공기 온도 t1(°C)
    pub heated_air_c: f64,
    /// 배기 온도 t2(°C)
    pub exhaust_air_c: f64,
    /// 외기 온도 t0(°C)
    pub ambient_air_c: f64,
    /// 히터 소비 전력(W)
    pub heater_power_w: f64,
    /// 운전 시간(min)
    pub duration_min: f64,
}

/// 트레이 건조기 평가 결과.
#[derive(Debug, Clone)]
pub struct TrayDryerResult {
    pub moisture_wb_percent: f64,
    pub moisture_db_percent: f64,
    /// 배치 전체의 예상 건조 후 질량(g)
    pub probable_dry_weight_g: f64,
    /// 열 이용률 (t1-t2)/(t1-t0)
    pub heat_utilization_factor: f64,
    /// 성능 계수 (t2-t0)/(t1-t0)
    pub coefficient_of_performance: f64,
    pub energy_kwh: f64,
    pub warnings: Vec<String>,
}

/// 시료 건조 전후 질량과 공기 온도 3점으로 건조기 성능을 평가한다.
pub fn compute_tray_dryer(input: TrayDryerInput) -> Result<TrayDryerResult, PostharvestError> {
    let wet_sample = input.wet_tray_g - input.empty_tray_g;
    let dry_sample = input.dry_tray_g - input.empty_tray_g;
    if wet_sample <= 0.0 || dry_sample <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "시료 질량은 빈 트레이 질량보다 커야 합니다.",
        ));
    }
    if dry_sample > wet_sample {
        return Err(PostharvestError::InvalidInput(
            "건조 후 질량이 습시료 질량보다 큽니다.",
        ));
    }
    if input.batch_weight_g <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "배치 질량은 0보다 커야 합니다.",
        ));
    }
    if input.heated_air_c == input.ambient_air_c {
        return Err(PostharvestError::InvalidInput(
            "가열 공기 온도가 외기 온도와 같으면 평가할 수 없습니다.",
        ));
    }
    if input.duration_min <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "운전 시간은 0보다 커야 합니다.",
        ));
    }
    if input.heater_power_w < 0.0 {
        return Err(PostharvestError::InvalidInput(
            "히터 전력은 음수일 수 없습니다.",
        ));
    }

    let water = wet_sample - dry_sample;
    let moisture_wb = water / wet_sample * 100.0;
    let moisture_db = water / dry_sample * 100.0;
    let probable_dry_weight = input.batch_weight_g * 100.0 / (100.0 + moisture_db);

    let temp_span = input.heated_air_c - input.ambient_air_c;
    let heat_utilization = (input.heated_air_c - input.exhaust_air_c) / temp_span;
    let cop = (input.exhaust_air_c - input.ambient_air_c) / temp_span;
    let energy_kwh = input.heater_power_w * input.duration_min / (60.0 * 1000.0);

    let mut warnings = Vec::new();
    let span = if input.ambient_air_c <= input.heated_air_c {
        input.ambient_air_c..=input.heated_air_c
    } else {
        input.heated_air_c..=input.ambient_air_c
    };
    if !span.contains(&input.exhaust_air_c) {
        warnings.push(
            "배기 온도가 외기와 가열 공기 사이를 벗어났습니다. 온도계 설치 위치를 확인하세요."
                .into(),
        );
    }

    Ok(TrayDryerResult {
        moisture_wb_percent: moisture_wb,
        moisture_db_percent: moisture_db,
        probable_dry_weight_g: probable_dry_weight,
        heat_utilization_factor: heat_utilization,
        coefficient_of_performance: cop,
        energy_kwh,
        warnings,
    })
}

/// 건조 곡선의 한 관측점. 공기 온도 3점은 기록했을 때만 채운다.
#[derive(Debug, Clone, Copy)]
pub struct DryingObservation {
    pub elapsed_min: f64,
    pub weight_g: f64,
    /// 외기 온도 t0(°C)
    pub ambient_air_c: Option<f64>,
    /// 가열 공기 온도 t1(°C)
    pub heated_air_c: Option<f64>,
    /// 배기 온도 t2(°C)
    pub exhaust_air_c: Option<f64>,
}

/// 건조 곡선 해석 입력.
#[derive(Debug, Clone)]
pub struct DryingCurveInput {
    pub observations: Vec<DryingObservation>,
    /// 평형 함수율 Me(%d.b.)
    pub equilibrium_moisture_db: f64,
    /// 완전 건조 질량(g). 없으면 마지막 관측을 평형으로 보고 추정한다.
    pub bone_dry_weight_g: Option<f64>,
}

/// 건조 곡선의 한 점. 함수율은 %d.b.
#[derive(Debug, Clone, Copy)]
pub struct DryingCurvePoint {
    pub elapsed_min: f64,
    pub weight_g: f64,
    pub moisture_db_percent: f64,
    /// 관측 시점 열 이용률. 온도 3점이 모두 기록된 관측에만 있다.
    pub heat_utilization_factor: Option<f64>,
    /// 관측 시점 성능 계수
    pub coefficient_of_performance: Option<f64>,
}

/// 인접 관측 구간의 건조 속도.
#[derive(Debug, Clone, Copy)]
pub struct DryingRatePoint {
    /// 구간 중앙 시각(min)
    pub mid_elapsed_min: f64,
    /// 건조 속도(%d.b./h)
    pub rate_percent_db_per_h: f64,
}

/// 건조 곡선 해석 결과.
#[derive(Debug, Clone)]
pub struct DryingCurveResult {
    pub curve: Vec<DryingCurvePoint>,
    pub rates: Vec<DryingRatePoint>,
    /// 박층 건조식 MR = exp(-kθ)의 건조 상수 k(1/h). 산정 불가면 0.
    pub drying_constant_per_h: f64,
    pub bone_dry_weight_g: f64,
}

// t1 = t0인 관측은 계수가 정의되지 않으므로 건너뛴다.
fn instant_air_factors(obs: &DryingObservation) -> (Option<f64>, Option<f64>) {
    match (obs.ambient_air_c, obs.heated_air_c, obs.exhaust_air_c) {
        (Some(t0), Some(t1), Some(t2)) if t1 != t0 => {
            let span = t1 - t0;
            (Some((t1 - t2) / span), Some((t2 - t0) / span))
        }
        _ => (None, None),
    }
}

/// 시간-질량 관측열을 함수율 곡선과 건조 속도로 변환하고 건조 상수를 추정한다.
pub fn compute_drying_curve(
    input: DryingCurveInput,
) -> Result<DryingCurveResult, PostharvestError> {
    if input.observations.len() < 2 {
        return Err(PostharvestError::InvalidInput(
            "관측점이 2개 이상이어야 합니다.",
        ));
    }
    if input.equilibrium_moisture_db < 0.0 {
        return Err(PostharvestError::InvalidInput(
            "평형 함수율은 0 이상이어야 합니다.",
        ));
    }
    for pair in input.observations.windows(2) {
        if pair[1].elapsed_min <= pair[0].elapsed_min {
            return Err(PostharvestError::InvalidInput(
                "관측 시각은 순증가해야 합니다.",
            ));
        }
    }
    for obs in &input.observations {
        if obs.weight_g <= 0.0 {
            return Err(PostharvestError::InvalidInput(
                "관측 질량은 0보다 커야 합니다.",
            ));
        }
    }

    let last = input.observations[input.observations.len() - 1];
    let bone_dry = match input.bone_dry_weight_g {
        Some(w) => {
            if w <= 0.0 || w > last.weight_g {
                return Err(PostharvestError::InvalidInput(
                    "완전 건조 질량은 0보다 크고 마지막 관측 질량 이하여야 합니다.",
                ));
            }
            w
        }
        // 마지막 관측을 평형 함수율 상태로 본 추정치.
        None => last.weight_g * 100.0 / (100.0 + input.equilibrium_moisture_db),
    };

    let curve: Vec<DryingCurvePoint> = input
        .observations
        .iter()
        .map(|obs| {
            let (huf, cop) = instant_air_factors(obs);
            DryingCurvePoint {
                elapsed_min: obs.elapsed_min,
                weight_g: obs.weight_g,
                moisture_db_percent: (obs.weight_g - bone_dry) / bone_dry * 100.0,
                heat_utilization_factor: huf,
                coefficient_of_performance: cop,
            }
        })
        .collect();

    let me = input.equilibrium_moisture_db;
    let mut rates = Vec::with_capacity(curve.len() - 1);
    let mut constants = Vec::new();
    for pair in curve.windows(2) {
        let dt_h = (pair[1].elapsed_min - pair[0].elapsed_min) / 60.0;
        let mc_prev = pair[0].moisture_db_percent;
        let mc_cur = pair[1].moisture_db_percent;
        rates.push(DryingRatePoint {
            mid_elapsed_min: (pair[0].elapsed_min + pair[1].elapsed_min) / 2.0,
            rate_percent_db_per_h: (mc_prev - mc_cur) / dt_h,
        });
        // 평형 함수율 이하 구간에서는 박층 건조식이 정의되지 않는다.
        if mc_prev > me && mc_cur > me {
            let k = (1.0 / dt_h) * ((mc_prev - me) / (mc_cur - me)).ln();
            if k > 0.0 {
                constants.push(k);
            }
        }
    }
    let drying_constant = if constants.is_empty() {
        0.0
    } else {
        constants.iter().sum::<f64>() / constants.len() as f64
    };

    Ok(DryingCurveResult {
        curve,
        rates,
        drying_constant_per_h: drying_constant,
        bone_dry_weight_g: bone_dry,
    })
}
