use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion;
use crate::grain::bulk_density::{
    compute_bulk_density, compute_porosity, true_density, BulkDensityInput, BulkDensityReading,
    ContainerGeometry, PorosityReading,
};
use crate::grain::geometry::{
    compute_geometry, summarize_geometry, AxialDimensions, GrainGeometryInput, GrainShape,
};
use crate::grain::moisture::{
    compute_oven_moisture, dry_to_wet_basis, recommend_method, wet_to_dry_basis, AvailableTime,
    DryingMethod, MeasurementAccuracy, MeasurementPurpose, MoistureLog, MoistureRecord,
    OvenMoistureInput, OvenReading, SampleMaterial,
};
use crate::grain::terminal_velocity::{
    compute_theoretical_velocity, summarize_measurements, MeasuredVelocityInput,
    TheoreticalVelocityInput, VelocityLog, VelocityRecord,
};
use crate::grain_db;
use crate::greenhouse::factors;
use crate::greenhouse::{
    compute_summer_cooling, compute_winter_ventilation, SummerCoolingInput, WinterVentilationInput,
};
use crate::i18n::{keys, Translator};
use crate::interp::ReferenceTable;
use crate::postharvest::{
    compute_belt_conveyor, compute_bucket_elevator, compute_drying_curve, compute_grading,
    compute_screen_cleaner, compute_tray_dryer, throughput_capacity, BeltConveyorInput,
    BucketElevatorInput, DryingCurveInput, DryingObservation, EfficiencyRating, GradingInput,
    MassFractionSample, ScreenCleanerInput, TrayDryerInput,
};
use crate::quantity::QuantityKind;
use crate::stats::ReplicationStats;
use crate::units::{convert_airflow, convert_density, AirflowUnit, DensityUnit, VelocityUnit};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Greenhouse,
    GrainProperties,
    Moisture,
    Postharvest,
    ReferenceData,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_GREENHOUSE));
    println!("{}", tr.t(keys::MAIN_MENU_GRAIN));
    println!("{}", tr.t(keys::MAIN_MENU_MOISTURE));
    println!("{}", tr.t(keys::MAIN_MENU_POSTHARVEST));
    println!("{}", tr.t(keys::MAIN_MENU_REFERENCE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Greenhouse),
            "3" => return Ok(MenuChoice::GrainProperties),
            "4" => return Ok(MenuChoice::Moisture),
            "5" => return Ok(MenuChoice::Postharvest),
            "6" => return Ok(MenuChoice::ReferenceData),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE1));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE2));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Length),
        4 => Some(QuantityKind::Area),
        5 => Some(QuantityKind::Volume),
        6 => Some(QuantityKind::Velocity),
        7 => Some(QuantityKind::Mass),
        8 => Some(QuantityKind::Density),
        9 => Some(QuantityKind::AirFlow),
        _ => None,
    }
}

/// 온실 환기 설계 메뉴를 처리한다.
pub fn handle_greenhouse(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GREENHOUSE_HEADING));
    println!("{}", tr.t(keys::GREENHOUSE_OPTION_SUMMER));
    println!("{}", tr.t(keys::GREENHOUSE_OPTION_WINTER));
    println!("{}", tr.t(keys::GREENHOUSE_OPTION_TABLES));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            let input = SummerCoolingInput {
                length_m: read_f64(tr, tr.t(keys::PROMPT_HOUSE_LENGTH))?,
                width_m: read_f64(tr, tr.t(keys::PROMPT_HOUSE_WIDTH))?,
                elevation_m: read_f64(tr, tr.t(keys::PROMPT_ELEVATION))?,
                light_klx: read_f64(tr, tr.t(keys::PROMPT_LIGHT))?,
                temperature_rise_c: read_f64(tr, tr.t(keys::PROMPT_TEMP_RISE))?,
                pad_to_fan_m: read_f64(tr, tr.t(keys::PROMPT_PAD_FAN_DISTANCE))?,
            };
            let result = compute_summer_cooling(input)?;
            let unit = cfg.default_units.airflow;
            let label = airflow_label(unit);
            println!(
                "{} {:.1} {label}",
                tr.t(keys::RESULT_STANDARD_AIRFLOW),
                convert_airflow(
                    result.standard_airflow_m3_per_min,
                    AirflowUnit::CubicMeterPerMinute,
                    unit
                )
            );
            println!(
                "{} Felev={:.2} Flight={:.2} Ftemp={:.2} Fvel={:.2}",
                tr.t(keys::RESULT_FACTOR_BREAKDOWN),
                result.elevation_factor,
                result.light_factor,
                result.temperature_factor,
                result.velocity_factor
            );
            println!(
                "{} {:.2}",
                tr.t(keys::RESULT_DESIGN_FACTOR),
                result.design_factor
            );
            println!(
                "{} {:.1} {label}",
                tr.t(keys::RESULT_ADJUSTED_AIRFLOW),
                convert_airflow(
                    result.adjusted_airflow_m3_per_min,
                    AirflowUnit::CubicMeterPerMinute,
                    unit
                )
            );
            println!("{} {:.1} m2", tr.t(keys::RESULT_PAD_AREA), result.pad_area_m2);
            print_warnings(tr, &result.warnings);
        }
        "2" => {
            let input = WinterVentilationInput {
                length_m: read_f64(tr, tr.t(keys::PROMPT_HOUSE_LENGTH))?,
                width_m: read_f64(tr, tr.t(keys::PROMPT_HOUSE_WIDTH))?,
                inside_outside_diff_c: read_f64(tr, tr.t(keys::PROMPT_TEMP_DIFF))?,
            };
            let result = compute_winter_ventilation(input)?;
            let unit = cfg.default_units.airflow;
            let label = airflow_label(unit);
            println!(
                "{} {:.1} {label}",
                tr.t(keys::RESULT_STANDARD_AIRFLOW),
                convert_airflow(
                    result.standard_airflow_m3_per_min,
                    AirflowUnit::CubicMeterPerMinute,
                    unit
                )
            );
            println!(
                "{} {:.2}",
                tr.t(keys::RESULT_WINTER_FACTOR),
                result.winter_factor
            );
            println!(
                "{} {:.1} {label}",
                tr.t(keys::RESULT_ADJUSTED_AIRFLOW),
                convert_airflow(
                    result.adjusted_airflow_m3_per_min,
                    AirflowUnit::CubicMeterPerMinute,
                    unit
                )
            );
            println!(
                "{} {} x ⌀{} cm",
                tr.t(keys::RESULT_TUBE_LAYOUT),
                result.tube_count,
                result.tube_diameter_cm
            );
            println!(
                "{} {:.1} m3/min",
                tr.t(keys::RESULT_FLOW_PER_TUBE),
                result.flow_per_tube_m3_per_min
            );
            print_warnings(tr, &result.warnings);
        }
        "3" => {
            println!("{}", tr.t(keys::TABLES_OPTIONS));
            let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
            let table = match sel.trim() {
                "1" => factors::elevation_table(),
                "2" => factors::light_table(),
                "3" => factors::temperature_rise_table(),
                "4" => factors::pad_to_fan_table(),
                "5" => factors::winter_temperature_table(),
                _ => {
                    println!("{}", tr.t(keys::INVALID_CHOICE));
                    return Ok(());
                }
            };
            print_table(table);
            let query = read_f64(tr, tr.t(keys::TABLES_PROMPT_QUERY))?;
            println!(
                "{} {:.3}",
                tr.t(keys::TABLES_LOOKUP_RESULT),
                table.lookup(query)
            );
        }
        _ => println!("{}", tr.t(keys::INVALID_CHOICE)),
    }
    Ok(())
}

fn print_table(table: &ReferenceTable) {
    println!("[{}]", table.name());
    for row in table.rows() {
        println!("{:>8} -> {:.2}", row.breakpoint.to_string(), row.value);
    }
}

/// 곡물 물성 메뉴를 처리한다.
pub fn handle_grain_properties(
    tr: &Translator,
    cfg: &Config,
    velocity_log: &mut VelocityLog,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GRAIN_HEADING));
    println!("{}", tr.t(keys::GRAIN_OPTION_GEOMETRY));
    println!("{}", tr.t(keys::GRAIN_OPTION_BULK_DENSITY));
    println!("{}", tr.t(keys::GRAIN_OPTION_POROSITY));
    println!("{}", tr.t(keys::GRAIN_OPTION_TV_MEASURED));
    println!("{}", tr.t(keys::GRAIN_OPTION_TV_THEORY));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            let count = read_usize(tr, tr.t(keys::PROMPT_REPLICATE_COUNT))?;
            if count == 1 {
                let input = GrainGeometryInput {
                    length_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_LENGTH))?,
                    breadth_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_BREADTH))?,
                    thickness_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_THICKNESS))?,
                    projected_area_mm2: read_optional_f64(tr, tr.t(keys::PROMPT_PROJECTED_AREA))?,
                    circumscribed_area_mm2: read_optional_f64(
                        tr,
                        tr.t(keys::PROMPT_CIRCUMSCRIBED_AREA),
                    )?,
                    inscribed_radius_mm: read_optional_f64(
                        tr,
                        tr.t(keys::PROMPT_INSCRIBED_RADIUS),
                    )?,
                    circumscribed_radius_mm: read_optional_f64(
                        tr,
                        tr.t(keys::PROMPT_CIRCUMSCRIBED_RADIUS),
                    )?,
                };
                let result = compute_geometry(input)?;
                println!("{} {:.2} mm3", tr.t(keys::RESULT_VOLUME), result.volume_mm3);
                println!(
                    "{} {:.2} mm",
                    tr.t(keys::RESULT_EQUIVALENT_DIAMETER),
                    result.equivalent_diameter_mm
                );
                println!("{} {:.3}", tr.t(keys::RESULT_SPHERICITY), result.sphericity);
                println!(
                    "{} {:.2}, {:.2}",
                    tr.t(keys::RESULT_ASPECT_RATIOS),
                    result.length_breadth_ratio,
                    result.breadth_thickness_ratio
                );
                if let Some(roundness) = result.roundness {
                    println!("{} {:.3}", tr.t(keys::RESULT_ROUNDNESS), roundness);
                }
                if let Some(ratio) = result.roundness_ratio {
                    println!("{} {:.3}", tr.t(keys::RESULT_ROUNDNESS_RATIO), ratio);
                }
                println!(
                    "{} {}",
                    tr.t(keys::RESULT_SHAPE),
                    shape_label(tr, result.shape)
                );
            } else {
                let mut samples = Vec::with_capacity(count);
                for i in 0..count {
                    println!("{} {}", tr.t(keys::PROMPT_READING), i + 1);
                    samples.push(AxialDimensions {
                        length_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_LENGTH))?,
                        breadth_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_BREADTH))?,
                        thickness_mm: read_f64(tr, tr.t(keys::PROMPT_GRAIN_THICKNESS))?,
                    });
                }
                let summary = summarize_geometry(&samples)?;
                println!("{}", tr.t(keys::PROMPT_GRAIN_LENGTH));
                print_stats(tr, &summary.length, "mm");
                println!("{}", tr.t(keys::PROMPT_GRAIN_BREADTH));
                print_stats(tr, &summary.breadth, "mm");
                println!("{}", tr.t(keys::PROMPT_GRAIN_THICKNESS));
                print_stats(tr, &summary.thickness, "mm");
                println!("{}", tr.t(keys::RESULT_EQUIVALENT_DIAMETER));
                print_stats(tr, &summary.equivalent_diameter, "mm");
                println!("{}", tr.t(keys::RESULT_SPHERICITY));
                print_stats(tr, &summary.sphericity, "");
                println!(
                    "{} {}",
                    tr.t(keys::RESULT_SHAPE),
                    shape_label(tr, summary.shape)
                );
            }
        }
        "2" => {
            let container_volume_cm3 = read_container_volume(tr)?;
            let container_g = read_f64(tr, tr.t(keys::PROMPT_CONTAINER_MASS))?;
            let count = read_usize(tr, tr.t(keys::PROMPT_REPLICATE_COUNT))?;
            let mut readings = Vec::with_capacity(count);
            for i in 0..count {
                let prompt = format!("{} {}: ", tr.t(keys::PROMPT_READING), i + 1);
                let filled_g = read_f64(tr, &prompt)?;
                readings.push(BulkDensityReading {
                    container_g,
                    filled_g,
                });
            }
            let result = compute_bulk_density(BulkDensityInput {
                container_volume_cm3,
                readings,
            })?;
            let unit = cfg.default_units.density;
            println!(
                "{} {:.1} {}",
                tr.t(keys::RESULT_BULK_DENSITY),
                convert_density(result.stats.mean, DensityUnit::KilogramPerCubicMeter, unit),
                density_label(unit)
            );
            print_stats(tr, &result.stats, "kg/m3");
        }
        "3" => {
            let count = read_usize(tr, tr.t(keys::PROMPT_REPLICATE_COUNT))?;
            let mut readings = Vec::with_capacity(count);
            for _ in 0..count {
                readings.push(PorosityReading {
                    tank_pressure_p1: read_f64(tr, tr.t(keys::PROMPT_TANK_PRESSURE))?,
                    coupled_pressure_p2: read_f64(tr, tr.t(keys::PROMPT_COUPLED_PRESSURE))?,
                });
            }
            let result = compute_porosity(&readings)?;
            println!(
                "{} {:.2} %",
                tr.t(keys::RESULT_POROSITY),
                result.stats.mean
            );
            print_stats(tr, &result.stats, "%");
            let bulk = read_f64(tr, tr.t(keys::PROMPT_BULK_DENSITY))?;
            if bulk > 0.0 {
                let rho_true = true_density(bulk, result.stats.mean)?;
                println!("{} {:.1} kg/m3", tr.t(keys::RESULT_TRUE_DENSITY), rho_true);
            }
        }
        "4" => {
            let unit = read_velocity_unit(tr, cfg.default_units.velocity)?;
            let count = read_usize(tr, tr.t(keys::PROMPT_REPLICATE_COUNT))?;
            let mut readings = Vec::with_capacity(count);
            for i in 0..count {
                let prompt = format!("{} {}: ", tr.t(keys::PROMPT_READING), i + 1);
                readings.push(read_f64(tr, &prompt)?);
            }
            let input = MeasuredVelocityInput {
                unit,
                readings,
                air_temperature_c: read_optional_f64(tr, tr.t(keys::PROMPT_AIR_TEMP))?,
                air_pressure_kpa: read_optional_f64(tr, tr.t(keys::PROMPT_AIR_PRESSURE))?,
            };
            let result = summarize_measurements(input)?;
            println!(
                "{} {:.2} m/s",
                tr.t(keys::RESULT_TERMINAL_VELOCITY),
                result.stats.mean
            );
            print_stats(tr, &result.stats, "m/s");
            let append = read_line(tr.t(keys::PROMPT_LOG_APPEND))?;
            if append.trim().eq_ignore_ascii_case("y") {
                let grain = read_line(tr.t(keys::PROMPT_GRAIN_NAME))?;
                let record = VelocityRecord {
                    grain: grain.trim().to_string(),
                    moisture_db_percent: read_f64(tr, tr.t(keys::PROMPT_MOISTURE_DB))?,
                    terminal_velocity_m_per_s: result.stats.mean,
                    particle_density_kg_per_m3: read_f64(tr, tr.t(keys::PROMPT_PARTICLE_DENSITY))?,
                    equivalent_diameter_mm: read_f64(tr, tr.t(keys::PROMPT_EQUIVALENT_DIAMETER))?,
                };
                velocity_log.push(record);
                println!("{}", tr.t(keys::LOG_APPENDED));
            }
        }
        "5" => {
            let input = TheoreticalVelocityInput {
                particle_diameter_mm: read_f64(tr, tr.t(keys::PROMPT_PARTICLE_DIAMETER))?,
                particle_density_kg_per_m3: read_f64(tr, tr.t(keys::PROMPT_PARTICLE_DENSITY))?,
                shape_factor: read_f64(tr, tr.t(keys::PROMPT_SHAPE_FACTOR))?,
                drag_coefficient: read_f64(tr, tr.t(keys::PROMPT_DRAG_COEFFICIENT))?,
                air_density_kg_per_m3: read_f64(tr, tr.t(keys::PROMPT_AIR_DENSITY))?,
            };
            let result = compute_theoretical_velocity(input)?;
            println!(
                "{} {:.2} m/s",
                tr.t(keys::RESULT_TERMINAL_VELOCITY),
                result.terminal_velocity_m_per_s
            );
            println!("{}", tr.t(keys::SENSITIVITY_HEADING));
            for entry in &result.sensitivity {
                println!(
                    "  {:<18} {:>7.2} m/s ({:+.1} %)",
                    entry.parameter, entry.velocity_m_per_s, entry.change_percent
                );
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_CHOICE)),
    }
    Ok(())
}

/// 함수율 측정 메뉴를 처리한다.
pub fn handle_moisture(tr: &Translator, moisture_log: &mut MoistureLog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::MOISTURE_HEADING));
    println!("{}", tr.t(keys::MOISTURE_OPTION_OVEN));
    println!("{}", tr.t(keys::MOISTURE_OPTION_WB_TO_DB));
    println!("{}", tr.t(keys::MOISTURE_OPTION_DB_TO_WB));
    println!("{}", tr.t(keys::MOISTURE_OPTION_ADVISOR));
    println!("{}", tr.t(keys::MOISTURE_OPTION_LOG));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            let method = read_drying_method(tr)?;
            let count = read_usize(tr, tr.t(keys::PROMPT_REPLICATE_COUNT))?;
            let mut readings = Vec::with_capacity(count);
            for _ in 0..count {
                readings.push(OvenReading {
                    container_g: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_MASS))?,
                    wet_g: read_f64(tr, tr.t(keys::PROMPT_WET_MASS))?,
                    dried_g: read_f64(tr, tr.t(keys::PROMPT_DRIED_MASS))?,
                });
            }
            let result = compute_oven_moisture(OvenMoistureInput { method, readings })?;
            println!(
                "{} {:.2} %",
                tr.t(keys::RESULT_MOISTURE_WB),
                result.wet_basis.mean
            );
            print_stats(tr, &result.wet_basis, "%");
            println!(
                "{} {:.2} %",
                tr.t(keys::RESULT_MOISTURE_DB),
                result.dry_basis.mean
            );
            print_stats(tr, &result.dry_basis, "%");
            let append = read_line(tr.t(keys::PROMPT_LOG_APPEND))?;
            if append.trim().eq_ignore_ascii_case("y") {
                let grain = read_line(tr.t(keys::PROMPT_GRAIN_NAME))?;
                let measured_on = read_line(tr.t(keys::PROMPT_MEASURED_ON))?;
                let measured_on = match measured_on.trim() {
                    "" => "-".to_string(),
                    s => s.to_string(),
                };
                moisture_log.push(MoistureRecord {
                    grain: grain.trim().to_string(),
                    method: method.describe(),
                    moisture_wb_percent: result.wet_basis.mean,
                    moisture_db_percent: result.dry_basis.mean,
                    measured_on,
                });
                println!("{}", tr.t(keys::LOG_APPENDED));
            }
        }
        "2" => {
            let wb = read_f64(tr, tr.t(keys::PROMPT_WB_VALUE))?;
            let db = wet_to_dry_basis(wb)?;
            println!("{} {:.2} %", tr.t(keys::RESULT_MOISTURE_DB), db);
        }
        "3" => {
            let db = read_f64(tr, tr.t(keys::PROMPT_DB_VALUE))?;
            let wb = dry_to_wet_basis(db)?;
            println!("{} {:.2} %", tr.t(keys::RESULT_MOISTURE_WB), wb);
        }
        "4" => {
            println!("{}", tr.t(keys::ADVISOR_ACCURACY_OPTIONS));
            let accuracy = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => MeasurementAccuracy::Low,
                "3" => MeasurementAccuracy::High,
                "4" => MeasurementAccuracy::VeryHigh,
                _ => MeasurementAccuracy::Medium,
            };
            println!("{}", tr.t(keys::ADVISOR_TIME_OPTIONS));
            let time = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => AvailableTime::VeryLimited,
                "2" => AvailableTime::Limited,
                "4" => AvailableTime::Extensive,
                _ => AvailableTime::Moderate,
            };
            println!("{}", tr.t(keys::ADVISOR_MATERIAL_OPTIONS));
            let material = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "2" => SampleMaterial::OilSeeds,
                "3" => SampleMaterial::FruitsVegetables,
                "4" => SampleMaterial::HeatSensitive,
                "5" => SampleMaterial::OilyFatty,
                _ => SampleMaterial::CerealGrains,
            };
            println!("{}", tr.t(keys::ADVISOR_PURPOSE_OPTIONS));
            let purpose = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
                "1" => MeasurementPurpose::FieldTesting,
                "3" => MeasurementPurpose::TradeCommerce,
                "4" => MeasurementPurpose::Research,
                "5" => MeasurementPurpose::StandardReference,
                _ => MeasurementPurpose::QualityControl,
            };
            let rec = recommend_method(accuracy, time, material, purpose);
            println!("{} {}", tr.t(keys::RESULT_RECOMMENDED_METHOD), rec.method);
            println!("{} {}", tr.t(keys::RESULT_RECOMMENDATION_REASON), rec.reason);
        }
        "5" => {
            println!("{}", tr.t(keys::MOISTURE_LOG_HEADING));
            println!("{}", tr.t(keys::MOISTURE_LOG_HEADER));
            for record in moisture_log.records() {
                println!(
                    "{:<14} {:<30} {:>7.1} {:>8.1}    {}",
                    record.grain,
                    record.method,
                    record.moisture_wb_percent,
                    record.moisture_db_percent,
                    record.measured_on
                );
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_CHOICE)),
    }
    Ok(())
}

fn read_drying_method(tr: &Translator) -> Result<DryingMethod, AppError> {
    println!("{}", tr.t(keys::METHOD_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let method = match sel.trim() {
        "2" => DryingMethod::HotAirReference,
        "3" => DryingMethod::VacuumOven,
        "4" => DryingMethod::Custom {
            temperature_c: read_f64(tr, tr.t(keys::PROMPT_CUSTOM_TEMPERATURE))?,
            hours: read_f64(tr, tr.t(keys::PROMPT_CUSTOM_HOURS))?,
        },
        _ => DryingMethod::HotAirHighTemp,
    };
    Ok(method)
}

/// 수확 후 처리 기계 메뉴를 처리한다.
pub fn handle_postharvest(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POSTHARVEST_HEADING));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_CLEANER));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_GRADING));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_TRAY_DRYER));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_DRYING_CURVE));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_BELT));
    println!("{}", tr.t(keys::POSTHARVEST_OPTION_BUCKET));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    match choice.trim() {
        "1" => {
            println!("{}", tr.t(keys::CLEANER_FEED_HEADING));
            let feed_samples = read_samples(tr)?;
            println!("{}", tr.t(keys::CLEANER_CLEAN_HEADING));
            let clean_outlet_samples = read_samples(tr)?;
            println!("{}", tr.t(keys::CLEANER_CHAFF_HEADING));
            let chaff_outlet_samples = read_samples(tr)?;
            let result = compute_screen_cleaner(ScreenCleanerInput {
                feed_samples,
                clean_outlet_samples,
                chaff_outlet_samples,
            })?;
            println!(
                "{} {:.3} / {:.3} / {:.3}",
                tr.t(keys::RESULT_FRACTIONS),
                result.feed_fraction,
                result.clean_fraction,
                result.chaff_fraction
            );
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_RECOVERY),
                result.grain_recovery_percent
            );
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_REJECTION),
                result.chaff_rejection_percent
            );
            println!(
                "{} {:.1} % ({})",
                tr.t(keys::RESULT_OVERALL),
                result.overall_percent,
                rating_label(tr, EfficiencyRating::from_percent(result.overall_percent))
            );
            let mass = read_f64(tr, tr.t(keys::PROMPT_COLLECTED_MASS))?;
            let time = read_f64(tr, tr.t(keys::PROMPT_COLLECTION_TIME))?;
            let capacity = throughput_capacity(mass, time)?;
            println!("{} {:.1} kg/h", tr.t(keys::RESULT_CAPACITY), capacity);
        }
        "2" => {
            let input = GradingInput {
                sieve_size_mm: read_f64(tr, tr.t(keys::PROMPT_SIEVE_SIZE))?,
                feed_fraction: read_f64(tr, tr.t(keys::PROMPT_FEED_FRACTION))?,
                overflow_fraction: read_f64(tr, tr.t(keys::PROMPT_OVERFLOW_FRACTION))?,
                underflow_fraction: read_f64(tr, tr.t(keys::PROMPT_UNDERFLOW_FRACTION))?,
            };
            let result = compute_grading(input)?;
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_OVERFLOW_EFFICIENCY),
                result.overflow_efficiency_percent
            );
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_UNDERFLOW_EFFICIENCY),
                result.underflow_efficiency_percent
            );
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_OVERALL),
                result.overall_percent
            );
        }
        "3" => {
            let input = TrayDryerInput {
                empty_tray_g: read_f64(tr, tr.t(keys::PROMPT_EMPTY_TRAY))?,
                wet_tray_g: read_f64(tr, tr.t(keys::PROMPT_WET_TRAY))?,
                dry_tray_g: read_f64(tr, tr.t(keys::PROMPT_DRY_TRAY))?,
                batch_weight_g: read_f64(tr, tr.t(keys::PROMPT_BATCH_WEIGHT))?,
                heated_air_c: read_f64(tr, tr.t(keys::PROMPT_HEATED_AIR))?,
                exhaust_air_c: read_f64(tr, tr.t(keys::PROMPT_EXHAUST_AIR))?,
                ambient_air_c: read_f64(tr, tr.t(keys::PROMPT_AMBIENT_AIR))?,
                heater_power_w: read_f64(tr, tr.t(keys::PROMPT_HEATER_POWER))?,
                duration_min: read_f64(tr, tr.t(keys::PROMPT_DURATION))?,
            };
            let result = compute_tray_dryer(input)?;
            println!(
                "{} {:.2} %",
                tr.t(keys::RESULT_MOISTURE_WB),
                result.moisture_wb_percent
            );
            println!(
                "{} {:.2} %",
                tr.t(keys::RESULT_MOISTURE_DB),
                result.moisture_db_percent
            );
            println!(
                "{} {:.1} g",
                tr.t(keys::RESULT_PROBABLE_DRY_WEIGHT),
                result.probable_dry_weight_g
            );
            println!(
                "{} {:.3}",
                tr.t(keys::RESULT_HEAT_UTILIZATION),
                result.heat_utilization_factor
            );
            println!(
                "{} {:.3}",
                tr.t(keys::RESULT_COP),
                result.coefficient_of_performance
            );
            println!("{} {:.2} kWh", tr.t(keys::RESULT_ENERGY), result.energy_kwh);
            print_warnings(tr, &result.warnings);
        }
        "4" => {
            let count = read_usize(tr, tr.t(keys::PROMPT_OBSERVATION_COUNT))?;
            let mut observations = Vec::with_capacity(count);
            for _ in 0..count {
                observations.push(DryingObservation {
                    elapsed_min: read_f64(tr, tr.t(keys::PROMPT_OBSERVATION_TIME))?,
                    weight_g: read_f64(tr, tr.t(keys::PROMPT_OBSERVATION_WEIGHT))?,
                    ambient_air_c: read_optional_f64(tr, tr.t(keys::PROMPT_AMBIENT_AIR))?,
                    heated_air_c: read_optional_f64(tr, tr.t(keys::PROMPT_HEATED_AIR))?,
                    exhaust_air_c: read_optional_f64(tr, tr.t(keys::PROMPT_EXHAUST_AIR))?,
                });
            }
            let input = DryingCurveInput {
                observations,
                equilibrium_moisture_db: read_f64(tr, tr.t(keys::PROMPT_EQUILIBRIUM_MOISTURE))?,
                bone_dry_weight_g: read_optional_f64(tr, tr.t(keys::PROMPT_BONE_DRY))?,
            };
            let result = compute_drying_curve(input)?;
            println!("{}", tr.t(keys::CURVE_TABLE_HEADER));
            for point in &result.curve {
                println!(
                    "{:>10.0} {:>10.1} {:>12.2} {:>7} {:>7}",
                    point.elapsed_min,
                    point.weight_g,
                    point.moisture_db_percent,
                    optional_factor(point.heat_utilization_factor),
                    optional_factor(point.coefficient_of_performance)
                );
            }
            println!("{}", tr.t(keys::RATE_TABLE_HEADER));
            for rate in &result.rates {
                println!(
                    "{:>14.1} {:>16.3}",
                    rate.mid_elapsed_min, rate.rate_percent_db_per_h
                );
            }
            println!(
                "{} {:.4} 1/h",
                tr.t(keys::RESULT_DRYING_CONSTANT),
                result.drying_constant_per_h
            );
            println!(
                "{} {:.1} g",
                tr.t(keys::RESULT_BONE_DRY_WEIGHT),
                result.bone_dry_weight_g
            );
        }
        "5" => {
            let bulk_density_kg_per_m3 = read_bulk_density(tr)?;
            let input = BeltConveyorInput {
                bulk_density_kg_per_m3,
                top_width_cm: read_f64(tr, tr.t(keys::PROMPT_TOP_WIDTH))?,
                bottom_width_cm: read_f64(tr, tr.t(keys::PROMPT_BOTTOM_WIDTH))?,
                depth_cm: read_f64(tr, tr.t(keys::PROMPT_DEPTH))?,
                pulley_diameter_cm: read_f64(tr, tr.t(keys::PROMPT_PULLEY_DIAMETER))?,
                pulley_rpm: read_f64(tr, tr.t(keys::PROMPT_PULLEY_RPM))?,
                collected_mass_kg: read_f64(tr, tr.t(keys::PROMPT_COLLECTED_MASS))?,
                collection_time_min: read_f64(tr, tr.t(keys::PROMPT_COLLECTION_TIME))?,
            };
            let result = compute_belt_conveyor(input)?;
            println!(
                "{} {:.1} m/min",
                tr.t(keys::RESULT_BELT_SPEED),
                result.belt_speed_m_per_min
            );
            println!(
                "{} {:.0} cm3/m",
                tr.t(keys::RESULT_LOAD_SECTION),
                result.load_section_cm3_per_m
            );
            println!(
                "{} {:.1} °",
                tr.t(keys::RESULT_TROUGH_ANGLE),
                result.trough_angle_deg
            );
            println!(
                "{} {:.1} kg/h",
                tr.t(keys::RESULT_THEORETICAL_CAPACITY),
                result.theoretical_capacity_kg_per_h
            );
            println!(
                "{} {:.1} kg/h",
                tr.t(keys::RESULT_ACTUAL_CAPACITY),
                result.actual_capacity_kg_per_h
            );
            println!(
                "{} {:.1} % ({})",
                tr.t(keys::RESULT_EFFICIENCY),
                result.efficiency_percent,
                rating_label(tr, result.rating)
            );
        }
        "6" => {
            let bulk_density_kg_per_m3 = read_bulk_density(tr)?;
            let input = BucketElevatorInput {
                bucket_volume_cm3: read_f64(tr, tr.t(keys::PROMPT_BUCKET_VOLUME))?,
                bucket_spacing_cm: read_f64(tr, tr.t(keys::PROMPT_BUCKET_SPACING))?,
                bulk_density_kg_per_m3,
                pulley_diameter_cm: read_f64(tr, tr.t(keys::PROMPT_PULLEY_DIAMETER))?,
                pulley_rpm: read_f64(tr, tr.t(keys::PROMPT_PULLEY_RPM))?,
                collected_mass_kg: read_f64(tr, tr.t(keys::PROMPT_COLLECTED_MASS))?,
                collection_time_min: read_f64(tr, tr.t(keys::PROMPT_COLLECTION_TIME))?,
                loaded_power_w: read_f64(tr, tr.t(keys::PROMPT_LOADED_POWER))?,
                no_load_power_w: read_f64(tr, tr.t(keys::PROMPT_NO_LOAD_POWER))?,
                lift_height_m: read_f64(tr, tr.t(keys::PROMPT_LIFT_HEIGHT))?,
            };
            let result = compute_bucket_elevator(input)?;
            println!(
                "{} {:.1} m/min",
                tr.t(keys::RESULT_BELT_SPEED),
                result.belt_speed_m_per_min
            );
            println!(
                "{} {:.1} kg/h",
                tr.t(keys::RESULT_THEORETICAL_CAPACITY),
                result.theoretical_capacity_kg_per_h
            );
            println!(
                "{} {:.1} kg/h",
                tr.t(keys::RESULT_ACTUAL_CAPACITY),
                result.actual_capacity_kg_per_h
            );
            println!(
                "{} {:.1} % ({})",
                tr.t(keys::RESULT_EFFICIENCY),
                result.efficiency_percent,
                rating_label(tr, result.rating)
            );
            println!(
                "{} {:.2}",
                tr.t(keys::RESULT_DISCHARGE_RATIO),
                result.discharge_ratio
            );
            println!(
                "{} {:.0} rpm",
                tr.t(keys::RESULT_OPTIMAL_RPM),
                result.optimal_rpm
            );
            println!(
                "{} {:.1} W",
                tr.t(keys::RESULT_NET_POWER),
                result.net_power_w
            );
            println!(
                "{} {:.3} Wh/kg",
                tr.t(keys::RESULT_ENERGY_PER_KG),
                result.energy_per_kg_wh
            );
            println!(
                "{} {:.1} %",
                tr.t(keys::RESULT_MECHANICAL_EFFICIENCY),
                result.mechanical_efficiency_percent
            );
            print_warnings(tr, &result.warnings);
        }
        _ => println!("{}", tr.t(keys::INVALID_CHOICE)),
    }
    Ok(())
}

// 스트림당 시료 3점을 고정으로 받는다.
fn read_samples(tr: &Translator) -> Result<Vec<MassFractionSample>, AppError> {
    let mut samples = Vec::with_capacity(3);
    for _ in 0..3 {
        samples.push(MassFractionSample {
            total_g: read_f64(tr, tr.t(keys::PROMPT_SAMPLE_TOTAL))?,
            good_grain_g: read_f64(tr, tr.t(keys::PROMPT_SAMPLE_GOOD))?,
        });
    }
    Ok(samples)
}

// 밀도 직접 입력 또는 0 입력 시 용기 충전 3회 측정으로 환산한다.
fn read_bulk_density(tr: &Translator) -> Result<f64, AppError> {
    let density = read_f64(tr, tr.t(keys::PROMPT_DENSITY_OR_MEASURE))?;
    if density > 0.0 {
        return Ok(density);
    }
    let container_volume_cm3 = read_container_volume(tr)?;
    let container_g = read_f64(tr, tr.t(keys::PROMPT_CONTAINER_MASS))?;
    let mut readings = Vec::with_capacity(3);
    for i in 0..3 {
        println!("{} {}", tr.t(keys::PROMPT_READING), i + 1);
        readings.push(BulkDensityReading {
            container_g,
            filled_g: read_f64(tr, tr.t(keys::PROMPT_FILLED_MASS))?,
        });
    }
    let result = compute_bulk_density(BulkDensityInput {
        container_volume_cm3,
        readings,
    })?;
    println!(
        "{} {:.1} kg/m3",
        tr.t(keys::RESULT_BULK_DENSITY),
        result.stats.mean
    );
    Ok(result.stats.mean)
}

// 용기 형상을 골라 내용적(cm³)을 구한다. 치수 대신 실측값도 받는다.
fn read_container_volume(tr: &Translator) -> Result<f64, AppError> {
    println!("{}", tr.t(keys::CONTAINER_SHAPE_OPTIONS));
    let geometry = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => ContainerGeometry::Cylindrical {
            diameter_cm: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_DIAMETER))?,
            height_cm: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_HEIGHT))?,
        },
        "2" => ContainerGeometry::Rectangular {
            length_cm: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_LENGTH))?,
            width_cm: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_WIDTH))?,
            height_cm: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_HEIGHT))?,
        },
        _ => ContainerGeometry::Measured {
            volume_cm3: read_f64(tr, tr.t(keys::PROMPT_CONTAINER_VOLUME))?,
        },
    };
    Ok(geometry.volume_cm3()?)
}

fn optional_factor(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.3}"),
        None => "-".to_string(),
    }
}

/// 기준 데이터 메뉴를 처리한다.
pub fn handle_reference_data(tr: &Translator, velocity_log: &VelocityLog) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REFERENCE_HEADING));
    println!("{}", tr.t(keys::REFERENCE_GRAIN_HEADING));
    println!("{}", tr.t(keys::REFERENCE_GRAIN_HEADER));
    for grain in grain_db::grains() {
        println!(
            "{:<9} {:<11} {:>5.1} {:>8.1} {:>9.0} {:>7.1} {:>9}  {}",
            grain.code,
            grain.name,
            grain.moisture_db_percent,
            grain.terminal_velocity_m_per_s,
            grain.particle_density_kg_per_m3,
            grain.equivalent_diameter_mm,
            format!(
                "{:.2}-{:.2}",
                grain.bulk_density_range_g_per_cc.0, grain.bulk_density_range_g_per_cc.1
            ),
            grain.notes
        );
    }
    println!();
    println!("{}", tr.t(keys::REFERENCE_VELOCITY_LOG_HEADING));
    for record in velocity_log.records() {
        println!(
            "{:<11} {:>5.1} {:>8.2} {:>9.0} {:>7.1}",
            record.grain,
            record.moisture_db_percent,
            record.terminal_velocity_m_per_s,
            record.particle_density_kg_per_m3,
            record.equivalent_diameter_mm
        );
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {} / {} / {} / {}",
        tr.t(keys::SETTINGS_CURRENT),
        cfg.language.as_deref().unwrap_or("auto"),
        airflow_label(cfg.default_units.airflow),
        velocity_label(cfg.default_units.velocity),
        density_label(cfg.default_units.density)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.language = match lang.trim() {
                "1" => Some("ko".to_string()),
                "2" => Some("en".to_string()),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    cfg.language.clone()
                }
            };
        }
        "2" => cfg.default_units.airflow = read_airflow_unit(tr, cfg.default_units.airflow)?,
        "3" => cfg.default_units.velocity = read_velocity_unit(tr, cfg.default_units.velocity)?,
        "4" => cfg.default_units.density = read_density_unit(tr, cfg.default_units.density)?,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_usize(tr: &Translator, prompt: &str) -> Result<usize, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<usize>() {
            Ok(v) if v > 0 => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

// 빈 입력은 None. 숫자가 아니면 다시 묻는다.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line(prompt)?;
        if s.trim().is_empty() {
            return Ok(None);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_velocity_unit(tr: &Translator, default: VelocityUnit) -> Result<VelocityUnit, AppError> {
    println!("{}", tr.t(keys::VELOCITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => VelocityUnit::MeterPerSecond,
        "2" => VelocityUnit::FootPerSecond,
        "3" => VelocityUnit::KilometerPerHour,
        "4" => VelocityUnit::MilePerHour,
        _ => default,
    };
    Ok(unit)
}

fn read_airflow_unit(tr: &Translator, default: AirflowUnit) -> Result<AirflowUnit, AppError> {
    println!("{}", tr.t(keys::AIRFLOW_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => AirflowUnit::CubicMeterPerMinute,
        "2" => AirflowUnit::CubicMeterPerHour,
        "3" => AirflowUnit::CubicFootPerMinute,
        _ => default,
    };
    Ok(unit)
}

fn read_density_unit(tr: &Translator, default: DensityUnit) -> Result<DensityUnit, AppError> {
    println!("{}", tr.t(keys::DENSITY_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => DensityUnit::KilogramPerCubicMeter,
        "2" => DensityUnit::GramPerCubicCentimeter,
        "3" => DensityUnit::PoundPerCubicFoot,
        _ => default,
    };
    Ok(unit)
}

fn velocity_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::MeterPerSecond => "m/s",
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::KilometerPerHour => "km/h",
        VelocityUnit::MilePerHour => "mph",
    }
}

fn airflow_label(unit: AirflowUnit) -> &'static str {
    match unit {
        AirflowUnit::CubicMeterPerMinute => "m3/min",
        AirflowUnit::CubicMeterPerHour => "m3/h",
        AirflowUnit::CubicFootPerMinute => "cfm",
    }
}

fn density_label(unit: DensityUnit) -> &'static str {
    match unit {
        DensityUnit::KilogramPerCubicMeter => "kg/m3",
        DensityUnit::GramPerCubicCentimeter => "g/cm3",
        DensityUnit::PoundPerCubicFoot => "lb/ft3",
    }
}

fn shape_label(tr: &Translator, shape: GrainShape) -> &'static str {
    match shape {
        GrainShape::Round => tr.t(keys::SHAPE_ROUND),
        GrainShape::Oblong => tr.t(keys::SHAPE_OBLONG),
        GrainShape::Oblate => tr.t(keys::SHAPE_OBLATE),
        GrainShape::Elliptical => tr.t(keys::SHAPE_ELLIPTICAL),
        GrainShape::Irregular => tr.t(keys::SHAPE_IRREGULAR),
    }
}

fn rating_label(tr: &Translator, rating: EfficiencyRating) -> &'static str {
    match rating {
        EfficiencyRating::Low => tr.t(keys::RATING_LOW),
        EfficiencyRating::Moderate => tr.t(keys::RATING_MODERATE),
        EfficiencyRating::Good => tr.t(keys::RATING_GOOD),
        EfficiencyRating::Excellent => tr.t(keys::RATING_EXCELLENT),
        EfficiencyRating::SuspectMeasurement => tr.t(keys::RATING_SUSPECT),
    }
}

fn print_stats(tr: &Translator, stats: &ReplicationStats, unit_label: &str) {
    println!(
        "  {} {:.3} {unit_label} / {} {:.3} / {} {:.3} / {} {:.3}",
        tr.t(keys::STATS_MEAN),
        stats.mean,
        tr.t(keys::STATS_MIN),
        stats.min,
        tr.t(keys::STATS_MAX),
        stats.max,
        tr.t(keys::STATS_STD_DEV),
        stats.std_dev
    );
}

fn print_warnings(tr: &Translator, warnings: &[String]) {
    for warning in warnings {
        println!("{}: {warning}", tr.t(keys::WARNING_PREFIX));
    }
}
