use crate::config::Config;
use crate::conversion;
use crate::grain::moisture::MoistureLog;
use crate::grain::terminal_velocity::VelocityLog;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;
use crate::{grain, greenhouse, postharvest};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
    /// 온실 환기 계산 오류
    Greenhouse(greenhouse::GreenhouseError),
    /// 곡물 물성 계산 오류
    Grain(grain::GrainCalcError),
    /// 수확 후 처리 계산 오류
    Postharvest(postharvest::PostharvestError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
            AppError::Greenhouse(e) => write!(f, "온실 환기 계산 오류: {e}"),
            AppError::Grain(e) => write!(f, "곡물 물성 계산 오류: {e}"),
            AppError::Postharvest(e) => write!(f, "수확 후 처리 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<greenhouse::GreenhouseError> for AppError {
    fn from(value: greenhouse::GreenhouseError) -> Self {
        AppError::Greenhouse(value)
    }
}

impl From<grain::GrainCalcError> for AppError {
    fn from(value: grain::GrainCalcError) -> Self {
        AppError::Grain(value)
    }
}

impl From<postharvest::PostharvestError> for AppError {
    fn from(value: postharvest::PostharvestError) -> Self {
        AppError::Postharvest(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// 세션 측정 이력은 루프 수명 동안만 유지한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut moisture_log = MoistureLog::with_reference_data();
    let mut velocity_log = VelocityLog::with_reference_data();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::Greenhouse => ui_cli::handle_greenhouse(tr, config)?,
            MenuChoice::GrainProperties => {
                ui_cli::handle_grain_properties(tr, config, &mut velocity_log)?
            }
            MenuChoice::Moisture => ui_cli::handle_moisture(tr, &mut moisture_log)?,
            MenuChoice::Postharvest => ui_cli::handle_postharvest(tr, config)?,
            MenuChoice::ReferenceData => ui_cli::handle_reference_data(tr, &velocity_log)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
