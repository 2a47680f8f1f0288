//! 온실 환기 설계 모듈 모음.
//! 여름철 팬-패드 냉방, 겨울철 환기 튜브 설계, 내장 보정 계수 표로 구성한다.

pub mod factors;
pub mod summer_cooling;
pub mod winter_ventilation;

pub use summer_cooling::{compute_summer_cooling, SummerCoolingInput, SummerCoolingResult};
pub use winter_ventilation::{
    compute_winter_ventilation, WinterVentilationInput, WinterVentilationResult,
};

/// 온실 환기 계산 공통 오류.
#[derive(Debug)]
pub enum GreenhouseError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for GreenhouseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreenhouseError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for GreenhouseError {}
