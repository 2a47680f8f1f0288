//! 곡물 물성 계산 모듈 모음.
//! 기하 특성, 벌크 밀도/공극률, 수분 측정, 부유 속도로 구성한다.

pub mod bulk_density;
pub mod geometry;
pub mod moisture;
pub mod terminal_velocity;

/// 곡물 물성 계산 공통 오류.
#[derive(Debug)]
pub enum GrainCalcError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for GrainCalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrainCalcError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for GrainCalcError {}
