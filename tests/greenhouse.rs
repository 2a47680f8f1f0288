use agri_engineering_toolbox::greenhouse::{
    compute_summer_cooling, compute_winter_ventilation, factors, GreenhouseError,
    SummerCoolingInput, WinterVentilationInput,
};

#[test]
fn summer_cooling_reference_case() {
    // 30 m × 10 m 온실, 표고 915 m, 나머지는 기준 조건.
    let res = compute_summer_cooling(SummerCoolingInput {
        length_m: 30.0,
        width_m: 10.0,
        elevation_m: 915.0,
        light_klx: 53.8,
        temperature_rise_c: 3.9,
        pad_to_fan_m: 36.0,
    })
    .expect("summer cooling");
    assert_eq!(res.standard_airflow_m3_per_min, 750.0);
    assert!((res.elevation_factor - 1.122).abs() < 1e-9);
    assert_eq!(res.light_factor, 1.00);
    assert_eq!(res.temperature_factor, 1.00);
    assert_eq!(res.velocity_factor, 1.00);
    assert!((res.house_factor - 1.122).abs() < 1e-9);
    assert!((res.design_factor - 1.122).abs() < 1e-9);
    assert!((res.adjusted_airflow_m3_per_min - 841.5).abs() < 1e-9);
    assert!((res.pad_area_m2 - 11.22).abs() < 1e-9);
    assert!(res.warnings.is_empty());
}

#[test]
fn summer_cooling_takes_larger_of_house_and_velocity_factor() {
    // 패드-팬 거리 6.1 m의 풍속 계수 2.24가 주택 계수를 누른다.
    let res = compute_summer_cooling(SummerCoolingInput {
        length_m: 10.0,
        width_m: 8.0,
        elevation_m: 100.0,
        light_klx: 53.8,
        temperature_rise_c: 3.9,
        pad_to_fan_m: 6.1,
    })
    .expect("summer cooling");
    assert_eq!(res.velocity_factor, 2.24);
    assert_eq!(res.design_factor, 2.24);
}

#[test]
fn summer_cooling_warns_outside_table_range() {
    let res = compute_summer_cooling(SummerCoolingInput {
        length_m: 30.0,
        width_m: 10.0,
        elevation_m: 4000.0,
        light_klx: 30.0,
        temperature_rise_c: 3.9,
        pad_to_fan_m: 30.0,
    })
    .expect("summer cooling");
    // 표 밖 입력은 가장자리 계수로 고정하고 경고를 남긴다.
    assert_eq!(res.elevation_factor, 1.30);
    assert_eq!(res.light_factor, 0.80);
    assert_eq!(res.warnings.len(), 2);
}

#[test]
fn summer_cooling_rejects_non_positive_dimensions() {
    let err = compute_summer_cooling(SummerCoolingInput {
        length_m: 0.0,
        width_m: 10.0,
        elevation_m: 100.0,
        light_klx: 53.8,
        temperature_rise_c: 3.9,
        pad_to_fan_m: 20.0,
    })
    .unwrap_err();
    assert!(matches!(err, GreenhouseError::InvalidInput(_)));
}

#[test]
fn winter_ventilation_reference_case() {
    let res = compute_winter_ventilation(WinterVentilationInput {
        length_m: 30.0,
        width_m: 10.0,
        inside_outside_diff_c: 8.3,
    })
    .expect("winter ventilation");
    assert_eq!(res.standard_airflow_m3_per_min, 183.0);
    assert_eq!(res.winter_factor, 1.00);
    assert_eq!(res.adjusted_airflow_m3_per_min, 183.0);
    // 폭 10 m는 튜브 2본, 길이 30 m는 직경 61 cm 급이다.
    assert_eq!(res.tube_count, 2);
    assert_eq!(res.tube_diameter_cm, 61);
    assert!((res.flow_per_tube_m3_per_min - 91.5).abs() < 1e-9);
}

#[test]
fn winter_ventilation_interpolates_temperature_factor() {
    let res = compute_winter_ventilation(WinterVentilationInput {
        length_m: 20.0,
        width_m: 6.0,
        inside_outside_diff_c: 7.0,
    })
    .expect("winter ventilation");
    assert!((res.winter_factor - 1.19).abs() < 1e-9);
    assert_eq!(res.tube_count, 1);
}

#[test]
fn winter_ventilation_warns_on_long_house() {
    let res = compute_winter_ventilation(WinterVentilationInput {
        length_m: 80.0,
        width_m: 12.0,
        inside_outside_diff_c: 8.3,
    })
    .expect("winter ventilation");
    assert_eq!(res.tube_count, 3);
    assert_eq!(res.tube_diameter_cm, 76);
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn winter_ventilation_rejects_non_positive_difference() {
    let err = compute_winter_ventilation(WinterVentilationInput {
        length_m: 30.0,
        width_m: 10.0,
        inside_outside_diff_c: 0.0,
    })
    .unwrap_err();
    assert!(matches!(err, GreenhouseError::InvalidInput(_)));
}

#[test]
fn factor_tables_cover_published_anchors() {
    assert!((factors::elevation_factor(915.0) - 1.122).abs() < 1e-9);
    assert_eq!(factors::elevation_factor(100.0), 1.00);
    assert_eq!(factors::elevation_factor(300.0), 1.04);
    assert_eq!(factors::pad_to_fan_factor(18.3), 1.29);
    assert_eq!(factors::pad_to_fan_factor(50.0), 1.00);
    assert!((factors::light_factor(56.5) - 1.05).abs() < 1e-9);
    assert_eq!(factors::temperature_rise_factor(3.9), 1.00);
    assert_eq!(factors::winter_temperature_factor(8.3), 1.00);
}

#[test]
fn factor_tables_expose_rows_for_display() {
    let table = factors::elevation_table();
    assert_eq!(table.name(), "Elevation Factor");
    assert_eq!(table.rows().len(), 9);
    assert_eq!(format!("{}", table.rows()[0].breakpoint), "<300");
}
