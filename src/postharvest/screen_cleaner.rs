use super::PostharvestError;
use crate::stats;

/// 한 시료의 전체 질량과 그 안의 정상 곡물 질량(g).
#[derive(Debug, Clone, Copy)]
pub struct MassFractionSample {
    pub total_g: f64,
    pub good_grain_g: f64,
}

/// 정선기 평가 입력. 투입구와 두 배출구에서 채취한 시료 묶음.
#[derive(Debug, Clone)]
pub struct ScreenCleanerInput {
    pub feed_samples: Vec<MassFractionSample>,
    pub clean_outlet_samples: Vec<MassFractionSample>,
    pub chaff_outlet_samples: Vec<MassFractionSample>,
}

/// 정선기 평가 결과. 분율은 0~1, 효율은 %.
#[derive(Debug, Clone, Copy)]
pub struct ScreenCleanerResult {
    pub feed_fraction: f64,
    pub clean_fraction: f64,
    pub chaff_fraction: f64,
    /// 정상 곡물 회수율(%)
    pub grain_recovery_percent: f64,
    /// 이물 제거율(%)
    pub chaff_rejection_percent: f64,
    pub overall_percent: f64,
}

/// 물질수지식으로 정선 효율을 계산한다.
///
/// X, Y, Z를 각각 투입구/정선 배출구/이물 배출구의 정상 곡물 질량 분율이라 할 때
/// 회수율 Eg = Y(X-Z) / X(Y-Z), 제거율 Ec = (Y-X)(1-Z) / (Y-Z)(1-X).
pub fn compute_screen_cleaner(
    input: ScreenCleanerInput,
) -> Result<ScreenCleanerResult, PostharvestError> {
    let x = stream_fraction(&input.feed_samples)?;
    let y = stream_fraction(&input.clean_outlet_samples)?;
    let z = stream_fraction(&input.chaff_outlet_samples)?;

    if x <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "투입구 시료에 정상 곡물이 없습니다.",
        ));
    }
    if x >= 1.0 {
        return Err(PostharvestError::InvalidInput(
            "투입구 시료가 전부 정상 곡물이면 효율을 정의할 수 없습니다.",
        ));
    }
    if y == z {
        return Err(PostharvestError::InvalidInput(
            "두 배출구의 곡물 분율이 같으면 분리가 일어나지 않은 것입니다.",
        ));
    }

    let grain_recovery = y * (x - z) / (x * (y - z));
    let chaff_rejection = (y - x) * (1.0 - z) / ((y - z) * (1.0 - x));
    let overall = grain_recovery * chaff_rejection;

    Ok(ScreenCleanerResult {
        feed_fraction: x,
        clean_fraction: y,
        chaff_fraction: z,
        grain_recovery_percent: grain_recovery * 100.0,
        chaff_rejection_percent: chaff_rejection * 100.0,
        overall_percent: overall * 100.0,
    })
}

/// 체 선별 평가 입력. 분율은 체 눈보다 큰 입자의 질량 분율(0~1).
#[derive(Debug, Clone, Copy)]
pub struct GradingInput {
    pub sieve_size_mm: f64,
    pub feed_fraction: f64,
    pub overflow_fraction: f64,
    pub underflow_fraction: f64,
}

/// 체 선별 평가 결과.
#[derive(Debug, Clone, Copy)]
pub struct GradingResult {
    /// 체 위 배출(대립) 효율(%)
    pub overflow_efficiency_percent: f64,
    /// 체 아래 배출(소립) 효율(%)
    pub underflow_efficiency_percent: f64,
    pub overall_percent: f64,
}

/// 체 선별 효율. 정선기와 같은 물질수지식을 대립 분율에 적용한다.
pub fn compute_grading(input: GradingInput) -> Result<GradingResult, PostharvestError> {
    if input.sieve_size_mm <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "체 눈 크기는 0보다 커야 합니다.",
        ));
    }
    for fraction in [
        input.feed_fraction,
        input.overflow_fraction,
        input.underflow_fraction,
    ] {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(PostharvestError::InvalidInput(
                "질량 분율은 0~1 범위여야 합니다.",
            ));
        }
    }
    let x = input.feed_fraction;
    let y = input.overflow_fraction;
    let z = input.underflow_fraction;
    if x <= 0.0 || x >= 1.0 {
        return Err(PostharvestError::InvalidInput(
            "투입 분율이 0 또는 1이면 효율을 정의할 수 없습니다.",
        ));
    }
    if y == z {
        return Err(PostharvestError::InvalidInput(
            "두 배출구의 대립 분율이 같으면 선별이 일어나지 않은 것입니다.",
        ));
    }

    let overflow = y * (x - z) / (x * (y - z));
    let underflow = (y - x) * (1.0 - z) / ((y - z) * (1.0 - x));

    Ok(GradingResult {
        overflow_efficiency_percent: overflow * 100.0,
        underflow_efficiency_percent: underflow * 100.0,
        overall_percent: overflow * underflow * 100.0,
    })
}

/// 처리 용량(kg/h). 일정 시간 받아낸 질량으로 계산한다.
pub fn throughput_capacity(mass_kg: f64, time_min: f64) -> Result<f64, PostharvestError> {
    if mass_kg < 0.0 {
        return Err(PostharvestError::InvalidInput(
            "질량은 음수일 수 없습니다.",
        ));
    }
    if time_min <= 0.0 {
        return Err(PostharvestError::InvalidInput(
            "측정 시간은 0보다 커야 합니다.",
        ));
    }
    Ok(mass_kg / time_min * 60.0)
}

/// 시료 묶음의 평균 정상 곡물 분율. 총질량 평균 대비 곡물 질량 평균.
fn stream_fraction(samples: &[MassFractionSample]) -> Result<f64, PostharvestError> {
    if samples.is_empty() {
        return Err(PostharvestError::InvalidInput("시료가 없습니다."));
    }
    let mut totals = Vec::with_capacity(samples.len());
    let mut goods = Vec::with_capacity(samples.len());
    for sample in samples {
        if sample.total_g <= 0.0 {
            return Err(PostharvestError::InvalidInput(
                "시료 총질량은 0보다 커야 합니다.",
            ));
        }
        if sample.good_grain_g < 0.0 || sample.good_grain_g > sample.total_g {
            return Err(PostharvestError::InvalidInput(
                "곡물 질량은 0 이상, 시료 총질량 이하여야 합니다.",
            ));
        }
        totals.push(sample.total_g);
        goods.push(sample.good_grain_g);
    }
    let total_mean =
        stats::mean(&totals).ok_or(PostharvestError::InvalidInput("시료가 없습니다."))?;
    let good_mean =
        stats::mean(&goods).ok_or(PostharvestError::InvalidInput("시료가 없습니다."))?;
    Ok(good_mean / total_mean)
}
