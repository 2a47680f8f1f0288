//! 수확 후 처리 기계 성능 평가 모듈.
//!
//! 정선기, 트레이 건조기, 벨트 컨베이어, 버킷 엘리베이터의
//! 용량과 효율을 실측값으로부터 계산한다.

pub mod belt_conveyor;
pub mod bucket_elevator;
pub mod screen_cleaner;
pub mod tray_dryer;

pub use belt_conveyor::{compute_belt_conveyor, BeltConveyorInput, BeltConveyorResult};
pub use bucket_elevator::{compute_bucket_elevator, BucketElevatorInput, BucketElevatorResult};
pub use screen_cleaner::{
    compute_grading, compute_screen_cleaner, throughput_capacity, GradingInput, GradingResult,
    MassFractionSample, ScreenCleanerInput, ScreenCleanerResult,
};
pub use tray_dryer::{
    compute_drying_curve, compute_tray_dryer, DryingCurveInput, DryingCurveResult,
    DryingObservation, TrayDryerInput, TrayDryerResult,
};

#[derive(Debug)]
pub enum PostharvestError {
    InvalidInput(&'static str),
}

impl std::fmt::Display for PostharvestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostharvestError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for PostharvestError {}

/// 실측 효율 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    Low,
    Moderate,
    Good,
    Excellent,
    /// 100% 초과는 계측 오류 가능성이 크다.
    SuspectMeasurement,
}

impl EfficiencyRating {
    pub fn from_percent(efficiency_percent: f64) -> Self {
        if efficiency_percent > 100.0 {
            EfficiencyRating::SuspectMeasurement
        } else if efficiency_percent >= 95.0 {
            EfficiencyRating::Excellent
        } else if efficiency_percent >= 80.0 {
            EfficiencyRating::Good
        } else if efficiency_percent >= 50.0 {
            EfficiencyRating::Moderate
        } else {
            EfficiencyRating::Low
        }
    }
}
