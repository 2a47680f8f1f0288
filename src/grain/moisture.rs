use super::GrainCalcError;
use crate::stats::{self, ReplicationStats};

/// 오븐 건조 방식. 표준 프리셋과 임의 온도/시간을 지원한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DryingMethod {
    /// 열풍 오븐 130±1°C, 1~2시간 (곡물 신속법)
    HotAirHighTemp,
    /// 열풍 오븐 100±1°C, 24시간 (기준법)
    HotAirReference,
    /// 진공 오븐 70°C, 6시간
    VacuumOven,
    /// 임의 온도/시간
    Custom { temperature_c: f64, hours: f64 },
}

impl DryingMethod {
    /// 이력 표시용 설명 문자열.
    pub fn describe(&self) -> String {
        match self {
            DryingMethod::HotAirHighTemp => "Hot Air Oven (130±1°C, 1-2h)".to_string(),
            DryingMethod::HotAirReference => "Hot Air Oven (100±1°C, 24h)".to_string(),
            DryingMethod::VacuumOven => "Vacuum Oven (70°C, 6h)".to_string(),
            DryingMethod::Custom {
                temperature_c,
                hours,
            } => format!("Custom ({temperature_c}°C, {hours}h)"),
        }
    }
}

/// 오븐법 반복 측정값. 질량은 g.
#[derive(Debug, Clone, Copy)]
pub struct OvenReading {
    /// 빈 용기 질량(g)
    pub container_g: f64,
    /// 습시료 + 용기 질량(g)
    pub wet_g: f64,
    /// 건조 후 + 용기 질량(g)
    pub dried_g: f64,
}

/// 오븐법 수분 측정 입력.
#[derive(Debug, Clone)]
pub struct OvenMoistureInput {
    pub method: DryingMethod,
    pub readings: Vec<OvenReading>,
}

/// 오븐법 수분 측정 결과.
#[derive(Debug, Clone)]
pub struct OvenMoistureResult {
    /// 반복별 습량 기준 함수율(%w.b.)
    pub replicate_wb_percent: Vec<f64>,
    /// 반복별 건량 기준 함수율(%d.b.)
    pub replicate_db_percent: Vec<f64>,
    pub wet_basis: ReplicationStats,
    pub dry_basis: ReplicationStats,
}

/// 오븐 건조 전후 질량으로 습량/건량 기준 함수율을 계산한다.
pub fn compute_oven_moisture(
    input: OvenMoistureInput,
) -> Result<OvenMoistureResult, GrainCalcError> {
    if let DryingMethod::Custom {
        temperature_c,
        hours,
    } = input.method
    {
        if temperature_c <= 0.0 || hours <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "건조 온도와 시간은 0보다 커야 합니다.",
            ));
        }
    }
    if input.readings.is_empty() {
        return Err(GrainCalcError::InvalidInput("반복 측정값이 없습니다."));
    }

    let mut wb = Vec::with_capacity(input.readings.len());
    let mut db = Vec::with_capacity(input.readings.len());
    for reading in &input.readings {
        let wet_sample = reading.wet_g - reading.container_g;
        let dry_sample = reading.dried_g - reading.container_g;
        if wet_sample <= 0.0 || dry_sample <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "시료 질량은 빈 용기 질량보다 커야 합니다.",
            ));
        }
        if dry_sample > wet_sample {
            return Err(GrainCalcError::InvalidInput(
                "건조 후 질량이 습시료 질량보다 큽니다.",
            ));
        }
        let water = wet_sample - dry_sample;
        wb.push(water / wet_sample * 100.0);
        db.push(water / dry_sample * 100.0);
    }

    let wet_basis = stats::replication_stats(&wb)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let dry_basis = stats::replication_stats(&db)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    Ok(OvenMoistureResult {
        replicate_wb_percent: wb,
        replicate_db_percent: db,
        wet_basis,
        dry_basis,
    })
}

/// 습량 기준(%w.b.)을 건량 기준(%d.b.)으로 환산한다.
pub fn wet_to_dry_basis(wb_percent: f64) -> Result<f64, GrainCalcError> {
    if !(0.0..100.0).contains(&wb_percent) {
        return Err(GrainCalcError::InvalidInput(
            "습량 기준 함수율은 0 이상 100 미만이어야 합니다.",
        ));
    }
    Ok(wb_percent / (100.0 - wb_percent) * 100.0)
}

/// 건량 기준(%d.b.)을 습량 기준(%w.b.)으로 환산한다.
pub fn dry_to_wet_basis(db_percent: f64) -> Result<f64, GrainCalcError> {
    if db_percent < 0.0 {
        return Err(GrainCalcError::InvalidInput(
            "건량 기준 함수율은 0 이상이어야 합니다.",
        ));
    }
    Ok(db_percent / (100.0 + db_percent) * 100.0)
}

/// 요구 정확도.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementAccuracy {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// 가용 시간.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailableTime {
    VeryLimited,
    Limited,
    Moderate,
    Extensive,
}

/// 시료 특성.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMaterial {
    CerealGrains,
    OilSeeds,
    FruitsVegetables,
    HeatSensitive,
    OilyFatty,
}

/// 측정 목적.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementPurpose {
    FieldTesting,
    QualityControl,
    TradeCommerce,
    Research,
    StandardReference,
}

/// 추천 측정 방법과 근거.
#[derive(Debug, Clone, Copy)]
pub struct MethodRecommendation {
    pub method: &'static str,
    pub reason: &'static str,
}

/// 요구 조건에 맞는 수분 측정 방법을 추천한다. 먼저 맞는 규칙이 우선한다.
pub fn recommend_method(
    accuracy: MeasurementAccuracy,
    time: AvailableTime,
    material: SampleMaterial,
    purpose: MeasurementPurpose,
) -> MethodRecommendation {
    if purpose == MeasurementPurpose::StandardReference || accuracy == MeasurementAccuracy::VeryHigh
    {
        return MethodRecommendation {
            method: "Vacuum Oven",
            reason: "Highest accuracy for reference measurements",
        };
    }
    if material == SampleMaterial::OilyFatty {
        return MethodRecommendation {
            method: "Distillation (Dean-Stark)",
            reason: "Best for separating water from oils/fats",
        };
    }
    if time == AvailableTime::VeryLimited && purpose == MeasurementPurpose::FieldTesting {
        return MethodRecommendation {
            method: "Electrical Moisture Meter",
            reason: "Fastest method for field use",
        };
    }
    if matches!(time, AvailableTime::VeryLimited | AvailableTime::Limited)
        && matches!(
            accuracy,
            MeasurementAccuracy::Medium | MeasurementAccuracy::High
        )
    {
        return MethodRecommendation {
            method: "Infra-Red Moisture Meter",
            reason: "Good balance of speed and accuracy",
        };
    }
    MethodRecommendation {
        method: "Hot Air Oven",
        reason: "Standard method with good accuracy",
    }
}

/// 이력 선택지로 쓰는 표준 측정 방법 목록.
pub fn standard_methods() -> &'static [&'static str] {
    &[
        "Hot Air Oven",
        "Vacuum Oven",
        "Distillation",
        "Infra-Red",
        "Electrical Meter",
    ]
}

/// 수분 측정 이력 한 건.
#[derive(Debug, Clone)]
pub struct MoistureRecord {
    pub grain: String,
    pub method: String,
    pub moisture_wb_percent: f64,
    pub moisture_db_percent: f64,
    /// 측정일(YYYY-MM-DD). 미기록은 "-".
    pub measured_on: String,
}

/// 호출자가 소유하는 추가 전용 수분 측정 이력.
#[derive(Debug, Clone, Default)]
pub struct MoistureLog {
    records: Vec<MoistureRecord>,
}

impl MoistureLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 대표 곡물 기준값이 미리 담긴 이력을 만든다.
    pub fn with_reference_data() -> Self {
        let records = vec![
            seed("Wheat", "Hot Air Oven", 13.5, 15.6, "2023-01-15"),
            seed("Rice", "Hot Air Oven", 12.0, 13.6, "2023-01-15"),
            seed("Corn", "Infra-Red", 14.2, 16.6, "2023-01-16"),
            seed("Soybean", "Vacuum Oven", 10.8, 12.1, "2023-01-16"),
        ];
        Self { records }
    }

    pub fn push(&mut self, record: MoistureRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MoistureRecord] {
        &self.records
    }
}

fn seed(grain: &str, method: &str, wb: f64, db: f64, date: &str) -> MoistureRecord {
    MoistureRecord {
        grain: grain.to_string(),
        method: method.to_string(),
        moisture_wb_percent: wb,
        moisture_db_percent: db,
        measured_on: date.to_string(),
    }
}
