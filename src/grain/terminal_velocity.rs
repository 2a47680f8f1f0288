use super::GrainCalcError;
use crate::grain_db;
use crate::stats::{self, ReplicationStats};
use crate::units::{convert_velocity, VelocityUnit};

const G_M_PER_S2: f64 = 9.81;

/// 수직 풍동 실측 입력. 판독값 단위는 자유롭게 고른다.
#[derive(Debug, Clone)]
pub struct MeasuredVelocityInput {
    pub unit: VelocityUnit,
    pub readings: Vec<f64>,
    /// 측정 당시 기온(°C)
    pub air_temperature_c: Option<f64>,
    /// 측정 당시 기압(kPa)
    pub air_pressure_kpa: Option<f64>,
}

/// 실측 종말속도 요약.
#[derive(Debug, Clone)]
pub struct MeasuredVelocityResult {
    /// m/s로 환산한 반복 판독값
    pub readings_m_per_s: Vec<f64>,
    pub stats: ReplicationStats,
    pub air_temperature_c: Option<f64>,
    pub air_pressure_kpa: Option<f64>,
}

/// 반복 판독값을 m/s로 환산해 통계를 낸다.
pub fn summarize_measurements(
    input: MeasuredVelocityInput,
) -> Result<MeasuredVelocityResult, GrainCalcError> {
    if input.readings.is_empty() {
        return Err(GrainCalcError::InvalidInput("반복 측정값이 없습니다."));
    }
    let mut readings_m_per_s = Vec::with_capacity(input.readings.len());
    for &reading in &input.readings {
        if reading <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "풍속 판독값은 0보다 커야 합니다.",
            ));
        }
        readings_m_per_s.push(convert_velocity(
            reading,
            input.unit,
            VelocityUnit::MeterPerSecond,
        ));
    }
    let stats = stats::replication_stats(&readings_m_per_s)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    Ok(MeasuredVelocityResult {
        readings_m_per_s,
        stats,
        air_temperature_c: input.air_temperature_c,
        air_pressure_kpa: input.air_pressure_kpa,
    })
}

/// 이론 종말속도 입력.
#[derive(Debug, Clone, Copy)]
pub struct TheoreticalVelocityInput {
    /// 입자 등가 직경(mm)
    pub particle_diameter_mm: f64,
    /// 입자 밀도(kg/m³)
    pub particle_density_kg_per_m3: f64,
    /// 형상 계수(구는 1.0)
    pub shape_factor: f64,
    /// 항력 계수
    pub drag_coefficient: f64,
    /// 공기 밀도(kg/m³)
    pub air_density_kg_per_m3: f64,
}

/// 매개변수 +10% 민감도 한 줄.
#[derive(Debug, Clone, Copy)]
pub struct SensitivityEntry {
    pub parameter: &'static str,
    /// 해당 매개변수만 10% 키웠을 때의 종말속도(m/s)
    pub velocity_m_per_s: f64,
    pub change_percent: f64,
}

/// 이론 종말속도 결과.
#[derive(Debug, Clone)]
pub struct TheoreticalVelocityResult {
    pub terminal_velocity_m_per_s: f64,
    pub sensitivity: Vec<SensitivityEntry>,
}

/// 항력 평형식으로 이론 종말속도를 계산하고 매개변수 민감도를 붙인다.
pub fn compute_theoretical_velocity(
    input: TheoreticalVelocityInput,
) -> Result<TheoreticalVelocityResult, GrainCalcError> {
    if input.particle_diameter_mm <= 0.0
        || input.particle_density_kg_per_m3 <= 0.0
        || input.shape_factor <= 0.0
        || input.drag_coefficient <= 0.0
        || input.air_density_kg_per_m3 <= 0.0
    {
        return Err(GrainCalcError::InvalidInput(
            "종말속도 매개변수는 모두 0보다 커야 합니다.",
        ));
    }

    let base = terminal_velocity(&input);
    let mut sensitivity = Vec::with_capacity(5);
    let variants: [(&'static str, TheoreticalVelocityInput); 5] = [
        (
            "Particle Density",
            TheoreticalVelocityInput {
                particle_density_kg_per_m3: input.particle_density_kg_per_m3 * 1.1,
                ..input
            },
        ),
        (
            "Particle Diameter",
            TheoreticalVelocityInput {
                particle_diameter_mm: input.particle_diameter_mm * 1.1,
                ..input
            },
        ),
        (
            "Shape Factor",
            TheoreticalVelocityInput {
                shape_factor: input.shape_factor * 1.1,
                ..input
            },
        ),
        (
            "Air Density",
            TheoreticalVelocityInput {
                air_density_kg_per_m3: input.air_density_kg_per_m3 * 1.1,
                ..input
            },
        ),
        (
            "Drag Coefficient",
            TheoreticalVelocityInput {
                drag_coefficient: input.drag_coefficient * 1.1,
                ..input
            },
        ),
    ];
    for (parameter, varied) in variants {
        let velocity = terminal_velocity(&varied);
        sensitivity.push(SensitivityEntry {
            parameter,
            velocity_m_per_s: velocity,
            change_percent: (velocity - base) / base * 100.0,
        });
    }

    Ok(TheoreticalVelocityResult {
        terminal_velocity_m_per_s: base,
        sensitivity,
    })
}

/// Vt = sqrt(4·g·d·ρp·SF / (3·CD·ρa))
fn terminal_velocity(input: &TheoreticalVelocityInput) -> f64 {
    let diameter_m = input.particle_diameter_mm / 1000.0;
    let numerator =
        4.0 * G_M_PER_S2 * diameter_m * input.particle_density_kg_per_m3 * input.shape_factor;
    let denominator = 3.0 * input.drag_coefficient * input.air_density_kg_per_m3;
    (numerator / denominator).sqrt()
}

/// 종말속도 측정 이력 한 건.
#[derive(Debug, Clone)]
pub struct VelocityRecord {
    pub grain: String,
    pub moisture_db_percent: f64,
    pub terminal_velocity_m_per_s: f64,
    pub particle_density_kg_per_m3: f64,
    pub equivalent_diameter_mm: f64,
}

/// 호출자가 소유하는 추가 전용 종말속도 이력.
#[derive(Debug, Clone, Default)]
pub struct VelocityLog {
    records: Vec<VelocityRecord>,
}

impl VelocityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 곡물 물성 DB의 대표값으로 초기화한 이력을 만든다.
    pub fn with_reference_data() -> Self {
        let records = grain_db::grains()
            .iter()
            .map(|grain| VelocityRecord {
                grain: grain.name.to_string(),
                moisture_db_percent: grain.moisture_db_percent,
                terminal_velocity_m_per_s: grain.terminal_velocity_m_per_s,
                particle_density_kg_per_m3: grain.particle_density_kg_per_m3,
                equivalent_diameter_mm: grain.equivalent_diameter_mm,
            })
            .collect();
        Self { records }
    }

    pub fn push(&mut self, record: VelocityRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[VelocityRecord] {
        &self.records
    }
}
