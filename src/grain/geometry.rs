use super::GrainCalcError;
use crate::stats::{self, ReplicationStats};

/// 3축 치수비로 판정한 곡물 외형 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrainShape {
    Round,
    Oblong,
    Oblate,
    Elliptical,
    Irregular,
}

/// 곡물 기하 특성 입력. 치수는 mm, 면적은 mm².
#[derive(Debug, Clone)]
pub struct GrainGeometryInput {
    /// 장축 길이 l(mm)
    pub length_mm: f64,
    /// 중간축 폭 b(mm)
    pub breadth_mm: f64,
    /// 단축 두께 t(mm)
    pub thickness_mm: f64,
    /// 투영 면적 Ap(mm²) - 선택
    pub projected_area_mm2: Option<f64>,
    /// 최소 외접원 면적 Ac(mm²) - 선택
    pub circumscribed_area_mm2: Option<f64>,
    /// 최대 내접원 반경 r(mm) - 선택
    pub inscribed_radius_mm: Option<f64>,
    /// 최소 외접원 반경 R(mm) - 선택
    pub circumscribed_radius_mm: Option<f64>,
}

/// 곡물 기하 특성 결과.
#[derive(Debug, Clone)]
pub struct GrainGeometryResult {
    /// 타원체 근사 부피(mm³) = (π/6)·l·b·t
    pub volume_mm3: f64,
    /// 등가 구 직경(mm) = (l·b·t)^(1/3)
    pub equivalent_diameter_mm: f64,
    /// 구형도 = 등가 직경 / 장축 길이
    pub sphericity: f64,
    /// 장축/중간축 비 l/b
    pub length_breadth_ratio: f64,
    /// 중간축/단축 비 b/t
    pub breadth_thickness_ratio: f64,
    /// 원형도 = Ap/Ac. 두 면적이 모두 주어졌을 때만 계산.
    pub roundness: Option<f64>,
    /// 원형도 비 = r/R. 두 반경이 모두 주어졌을 때만 계산.
    pub roundness_ratio: Option<f64>,
    pub shape: GrainShape,
}

/// 3축 치수로 곡물 기하 특성과 외형 분류를 계산한다.
pub fn compute_geometry(input: GrainGeometryInput) -> Result<GrainGeometryResult, GrainCalcError> {
    if input.length_mm <= 0.0 || input.breadth_mm <= 0.0 || input.thickness_mm <= 0.0 {
        return Err(GrainCalcError::InvalidInput(
            "길이/폭/두께는 모두 0보다 커야 합니다.",
        ));
    }
    for opt in [
        input.projected_area_mm2,
        input.circumscribed_area_mm2,
        input.inscribed_radius_mm,
        input.circumscribed_radius_mm,
    ] {
        if let Some(v) = opt {
            if v <= 0.0 {
                return Err(GrainCalcError::InvalidInput(
                    "선택 입력(면적/반경)은 0보다 커야 합니다.",
                ));
            }
        }
    }

    let l = input.length_mm;
    let b = input.breadth_mm;
    let t = input.thickness_mm;

    let volume_mm3 = std::f64::consts::PI / 6.0 * l * b * t;
    let equivalent_diameter_mm = (l * b * t).cbrt();
    let sphericity = equivalent_diameter_mm / l;
    let length_breadth_ratio = l / b;
    let breadth_thickness_ratio = b / t;

    let roundness = match (input.projected_area_mm2, input.circumscribed_area_mm2) {
        (Some(ap), Some(ac)) => Some(ap / ac),
        _ => None,
    };
    let roundness_ratio = match (input.inscribed_radius_mm, input.circumscribed_radius_mm) {
        (Some(r), Some(big_r)) => Some(r / big_r),
        _ => None,
    };

    Ok(GrainGeometryResult {
        volume_mm3,
        equivalent_diameter_mm,
        sphericity,
        length_breadth_ratio,
        breadth_thickness_ratio,
        roundness,
        roundness_ratio,
        shape: classify(length_breadth_ratio, breadth_thickness_ratio),
    })
}

/// 반복 측정한 낟알 하나의 3축 치수(mm).
#[derive(Debug, Clone, Copy)]
pub struct AxialDimensions {
    pub length_mm: f64,
    pub breadth_mm: f64,
    pub thickness_mm: f64,
}

/// 반복 측정 낟알 묶음의 기하 특성 요약.
#[derive(Debug, Clone)]
pub struct GeometrySampleSummary {
    /// 낟알별 등가 구 직경(mm)
    pub equivalent_diameters_mm: Vec<f64>,
    /// 낟알별 구형도
    pub sphericities: Vec<f64>,
    pub length: ReplicationStats,
    pub breadth: ReplicationStats,
    pub thickness: ReplicationStats,
    pub equivalent_diameter: ReplicationStats,
    pub sphericity: ReplicationStats,
    /// 평균 치수비로 판정한 외형 분류
    pub shape: GrainShape,
}

/// 낟알 여러 개의 3축 치수를 요약 통계로 정리한다.
/// 외형 분류는 낟알별이 아니라 평균 l/b, b/t 비로 판정한다.
pub fn summarize_geometry(
    samples: &[AxialDimensions],
) -> Result<GeometrySampleSummary, GrainCalcError> {
    if samples.is_empty() {
        return Err(GrainCalcError::InvalidInput("반복 측정값이 없습니다."));
    }
    for dims in samples {
        if dims.length_mm <= 0.0 || dims.breadth_mm <= 0.0 || dims.thickness_mm <= 0.0 {
            return Err(GrainCalcError::InvalidInput(
                "길이/폭/두께는 모두 0보다 커야 합니다.",
            ));
        }
    }

    let lengths: Vec<f64> = samples.iter().map(|d| d.length_mm).collect();
    let breadths: Vec<f64> = samples.iter().map(|d| d.breadth_mm).collect();
    let thicknesses: Vec<f64> = samples.iter().map(|d| d.thickness_mm).collect();
    let equivalent_diameters_mm: Vec<f64> = samples
        .iter()
        .map(|d| (d.length_mm * d.breadth_mm * d.thickness_mm).cbrt())
        .collect();
    let sphericities: Vec<f64> = samples
        .iter()
        .zip(&equivalent_diameters_mm)
        .map(|(d, de)| de / d.length_mm)
        .collect();

    let length = stats::replication_stats(&lengths)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let breadth = stats::replication_stats(&breadths)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let thickness = stats::replication_stats(&thicknesses)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let equivalent_diameter = stats::replication_stats(&equivalent_diameters_mm)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let sphericity = stats::replication_stats(&sphericities)
        .ok_or(GrainCalcError::InvalidInput("반복 측정값이 없습니다."))?;
    let shape = classify(length.mean / breadth.mean, breadth.mean / thickness.mean);

    Ok(GeometrySampleSummary {
        equivalent_diameters_mm,
        sphericities,
        length,
        breadth,
        thickness,
        equivalent_diameter,
        sphericity,
        shape,
    })
}

// 판정 순서가 의미를 가진다. 앞 조건을 통과하지 못한 경우에만 다음을 본다.
fn classify(lb: f64, bt: f64) -> GrainShape {
    if (0.9..=1.1).contains(&lb) && (0.9..=1.1).contains(&bt) {
        GrainShape::Round
    } else if lb > 1.5 && (0.9..=1.1).contains(&bt) {
        GrainShape::Oblong
    } else if lb < 0.85 {
        GrainShape::Oblate
    } else if lb > 1.1 && bt > 1.1 {
        GrainShape::Elliptical
    } else {
        GrainShape::Irregular
    }
}
