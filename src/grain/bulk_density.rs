use super::GrainCalcError;
use crate::stats::{self, ReplicationStats};

/// 측정 용기 형상. 내용적(cm³)을 치수로 구하거나 실측값을 그대로 쓴다.
#[derive(Debug, Clone, Copy)]
pub enum ContainerGeometry {
    /// 원통형 용기: 안지름과 높이(cm)
    Cylindrical { diameter_cm: f64, height_cm: f64 },
    /// 직육면체 용기: 가로/세로/높이(cm)
    Rectangular {
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
    },
    /// 실측 내용적(cm³)
    Measured { volume_cm3: f64 },
}

impl ContainerGeometry {
    /// 용기 내용적(cm³)을 계산한다.
    pub fn volume_cm3(&self) -> Result<f64, GrainCalcError> {
        let volume = match *self {
            ContainerGeometry::Cylindrical {
                diameter_cm,
                height_cm,
            } => std::f64::consts::PI * (diameter_cm / 2.0).powi(2) * height_cm,
            ContainerGeometry::Rectangular {
                length_cm,
                width_cm,
                height_cm,
            } => length_cm * width_cm * height_cm,
            ContainerGeometry::Measured { volume_cm3 } => volume_cm3,
        };
        if volume <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "용기 내용적은 0보다 커야 합니다.",
            ));
        }
        Ok(volume)
    }
}

/// 용기 충전법 벌크 밀도 반복 측정값. 질량은 g.
#[derive(Debug, Clone, Copy)]
pub struct BulkDensityReading {
    /// 빈 용기 질량(g)
    pub container_g: f64,
    /// 시료 충전 후 전체 질량(g)
    pub filled_g: f64,
}

/// 벌크 밀도 측정 입력.
#[derive(Debug, Clone)]
pub struct BulkDensityInput {
    /// 용기 내용적(cm³)
    pub container_volume_cm3: f64,
    pub readings: Vec<BulkDensityReading>,
}

/// 벌크 밀도 측정 결과.
#[derive(Debug, Clone)]
pub struct BulkDensityResult {
    /// 반복별 벌크 밀도(kg/m³)
    pub replicate_kg_per_m3: Vec<f64>,
    pub stats: ReplicationStats,
}

/// 공기 비교 피크노미터 반복 측정값. P1은 기준 탱크 압력, P2는 시료 연결 후 압력.
#[derive(Debug, Clone, Copy)]
pub struct PorosityReading {
    pub tank_pressure_p1: f64,
    pub coupled_pressure_p2: f64,
}

/// 공극률 측정 결과.
#[derive(Debug, Clone)]
pub struct PorosityResult {
    /// 반복별 공극률(%)
    pub replicate_percent: Vec<f64>,
    pub stats: ReplicationStats,
}

/// 용기 충전법으로 벌크 밀도를 계산한다.
pub fn compute_bulk_density(input: BulkDensityInput) -> Result<BulkDensityResult, GrainCalcError> {
    if input.container_volume_cm3 <= 0.0 {
        return Err(GrainCalcError::InvalidInput(
            "용기 내용적은 0보다 커야 합니다.",
        ));
    }
    if input.readings.is_empty() {
        return Err(GrainCalcError::InvalidInput("반복 측정값이 없습니다."));
    }

    let mut replicate = Vec::with_capacity(input.readings.len());
    for reading in &input.readings {
        if reading.filled_g <= reading.container_g {
            return Err(GrainCalcError::InvalidInput(
                "충전 후 질량은 빈 용기 질량보다 커야 합니다.",
            ));
        }
        // (g/cm³) × 1000 = kg/m³
        let g_per_cc = (reading.filled_g - reading.container_g) / input.container_volume_cm3;
        replicate.push(g_per_cc * 1000.0);
    }

    let stats = stats::replication_stats(&replicate)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    Ok(BulkDensityResult {
        replicate_kg_per_m3: replicate,
        stats,
    })
}

/// 공기 비교 피크노미터 압력 쌍으로 공극률을 계산한다.
///
/// ε = (P1 - P2)/P2 × 100
pub fn compute_porosity(readings: &[PorosityReading]) -> Result<PorosityResult, GrainCalcError> {
    if readings.is_empty() {
        return Err(GrainCalcError::InvalidInput("반복 측정값이 없습니다."));
    }

    let mut replicate = Vec::with_capacity(readings.len());
    for reading in readings {
        if reading.coupled_pressure_p2 <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "연결 후 압력 P2는 0보다 커야 합니다.",
            ));
        }
        if reading.tank_pressure_p1 < reading.coupled_pressure_p2 {
            return Err(GrainCalcError::InvalidInput(
                "탱크 압력 P1은 연결 후 압력 P2보다 작을 수 없습니다.",
            ));
        }
        let percent =
            (reading.tank_pressure_p1 - reading.coupled_pressure_p2) / reading.coupled_pressure_p2
                * 100.0;
        replicate.push(percent);
    }

    let stats = stats::replication_stats(&replicate)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    Ok(PorosityResult {
        replicate_percent: replicate,
        stats,
    })
}

/// 벌크 밀도와 공극률로 진밀도를 계산한다.
///
/// ρt = ρb / (1 - ε/100)
pub fn true_density(
    bulk_density_kg_per_m3: f64,
    porosity_percent: f64,
) -> Result<f64, GrainCalcError> {
    if bulk_density_kg_per_m3 <= 0.0 {
        return Err(GrainCalcError::InvalidInput(
            "벌크 밀도는 0보다 커야 합니다.",
        ));
    }
    if !(0.0..100.0).contains(&porosity_percent) {
        return Err(GrainCalcError::InvalidInput(
            "공극률은 0 이상 100 미만이어야 합니다.",
        ));
    }
    Ok(bulk_density_kg_per_m3 / (1.0 - porosity_percent / 100.0))
}
