use agri_engineering_toolbox::postharvest::{
    compute_belt_conveyor, compute_bucket_elevator, compute_drying_curve, compute_grading,
    compute_screen_cleaner, compute_tray_dryer, throughput_capacity, BeltConveyorInput,
    BucketElevatorInput, DryingCurveInput, DryingObservation, EfficiencyRating, GradingInput,
    MassFractionSample, PostharvestError, ScreenCleanerInput, TrayDryerInput,
};

fn sample(total_g: f64, good_grain_g: f64) -> MassFractionSample {
    MassFractionSample {
        total_g,
        good_grain_g,
    }
}

#[test]
fn screen_cleaner_mass_balance_case() {
    // X=0.8, Y=0.95, Z=0.1.
    let res = compute_screen_cleaner(ScreenCleanerInput {
        feed_samples: vec![sample(100.0, 80.0), sample(100.0, 80.0)],
        clean_outlet_samples: vec![sample(100.0, 95.0)],
        chaff_outlet_samples: vec![sample(100.0, 10.0)],
    })
    .expect("screen cleaner");
    assert!((res.feed_fraction - 0.8).abs() < 1e-9);
    assert!((res.clean_fraction - 0.95).abs() < 1e-9);
    assert!((res.chaff_fraction - 0.1).abs() < 1e-9);
    // Eg = Y(X-Z)/(X(Y-Z)), Ec = (Y-X)(1-Z)/((Y-Z)(1-X)).
    let eg = 0.95 * 0.7 / (0.8 * 0.85);
    let ec = 0.15 * 0.9 / (0.85 * 0.2);
    assert!((res.grain_recovery_percent - eg * 100.0).abs() < 1e-9);
    assert!((res.chaff_rejection_percent - ec * 100.0).abs() < 1e-9);
    assert!((res.overall_percent - eg * ec * 100.0).abs() < 1e-9);
}

#[test]
fn screen_cleaner_rejects_degenerate_separation() {
    // 두 배출구 분율이 같으면 분리가 없다.
    let err = compute_screen_cleaner(ScreenCleanerInput {
        feed_samples: vec![sample(100.0, 80.0)],
        clean_outlet_samples: vec![sample(100.0, 50.0)],
        chaff_outlet_samples: vec![sample(100.0, 50.0)],
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));

    // 투입이 전부 정상 곡물이면 효율이 정의되지 않는다.
    let err = compute_screen_cleaner(ScreenCleanerInput {
        feed_samples: vec![sample(100.0, 100.0)],
        clean_outlet_samples: vec![sample(100.0, 95.0)],
        chaff_outlet_samples: vec![sample(100.0, 10.0)],
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

#[test]
fn screen_cleaner_rejects_bad_samples() {
    let err = compute_screen_cleaner(ScreenCleanerInput {
        feed_samples: vec![],
        clean_outlet_samples: vec![sample(100.0, 95.0)],
        chaff_outlet_samples: vec![sample(100.0, 10.0)],
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));

    let err = compute_screen_cleaner(ScreenCleanerInput {
        feed_samples: vec![sample(100.0, 120.0)],
        clean_outlet_samples: vec![sample(100.0, 95.0)],
        chaff_outlet_samples: vec![sample(100.0, 10.0)],
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

#[test]
fn grading_applies_same_balance_to_oversize_fraction() {
    let res = compute_grading(GradingInput {
        sieve_size_mm: 4.0,
        feed_fraction: 0.6,
        overflow_fraction: 0.9,
        underflow_fraction: 0.2,
    })
    .expect("grading");
    let overflow = 0.9 * 0.4 / (0.6 * 0.7);
    let underflow = 0.3 * 0.8 / (0.7 * 0.4);
    assert!((res.overflow_efficiency_percent - overflow * 100.0).abs() < 1e-9);
    assert!((res.underflow_efficiency_percent - underflow * 100.0).abs() < 1e-9);
    assert!((res.overall_percent - overflow * underflow * 100.0).abs() < 1e-9);
}

#[test]
fn grading_rejects_out_of_range_fractions() {
    let err = compute_grading(GradingInput {
        sieve_size_mm: 4.0,
        feed_fraction: 1.2,
        overflow_fraction: 0.9,
        underflow_fraction: 0.2,
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

#[test]
fn throughput_is_mass_per_hour() {
    // 15분에 30 kg → 120 kg/h.
    let capacity = throughput_capacity(30.0, 15.0).expect("throughput");
    assert!((capacity - 120.0).abs() < 1e-9);
    assert!(throughput_capacity(30.0, 0.0).is_err());
    assert!(throughput_capacity(-1.0, 15.0).is_err());
}

#[test]
fn tray_dryer_reference_case() {
    // 습시료 200 g, 건조 후 160 g, t1/t2/t0 = 60/45/30 °C.
    let res = compute_tray_dryer(TrayDryerInput {
        empty_tray_g: 50.0,
        wet_tray_g: 250.0,
        dry_tray_g: 210.0,
        batch_weight_g: 10000.0,
        heated_air_c: 60.0,
        exhaust_air_c: 45.0,
        ambient_air_c: 30.0,
        heater_power_w: 1500.0,
        duration_min: 120.0,
    })
    .expect("tray dryer");
    assert!((res.moisture_wb_percent - 20.0).abs() < 1e-9);
    assert!((res.moisture_db_percent - 25.0).abs() < 1e-9);
    assert!((res.probable_dry_weight_g - 8000.0).abs() < 1e-9);
    assert!((res.heat_utilization_factor - 0.5).abs() < 1e-9);
    assert!((res.coefficient_of_performance - 0.5).abs() < 1e-9);
    // HUF + COP = 1.
    assert!(
        (res.heat_utilization_factor + res.coefficient_of_performance - 1.0).abs() < 1e-9
    );
    assert!((res.energy_kwh - 3.0).abs() < 1e-9);
    assert!(res.warnings.is_empty());
}

#[test]
fn tray_dryer_warns_on_exhaust_outside_span() {
    let res = compute_tray_dryer(TrayDryerInput {
        empty_tray_g: 50.0,
        wet_tray_g: 250.0,
        dry_tray_g: 210.0,
        batch_weight_g: 10000.0,
        heated_air_c: 60.0,
        exhaust_air_c: 65.0,
        ambient_air_c: 30.0,
        heater_power_w: 1500.0,
        duration_min: 120.0,
    })
    .expect("tray dryer");
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn tray_dryer_rejects_invalid_masses() {
    let err = compute_tray_dryer(TrayDryerInput {
        empty_tray_g: 50.0,
        wet_tray_g: 210.0,
        dry_tray_g: 250.0,
        batch_weight_g: 10000.0,
        heated_air_c: 60.0,
        exhaust_air_c: 45.0,
        ambient_air_c: 30.0,
        heater_power_w: 1500.0,
        duration_min: 120.0,
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

fn obs(elapsed_min: f64, weight_g: f64) -> DryingObservation {
    DryingObservation {
        elapsed_min,
        weight_g,
        ambient_air_c: None,
        heated_air_c: None,
        exhaust_air_c: None,
    }
}

#[test]
fn drying_curve_with_known_bone_dry_weight() {
    let res = compute_drying_curve(DryingCurveInput {
        observations: vec![obs(0.0, 130.0), obs(60.0, 110.0), obs(120.0, 104.0)],
        equilibrium_moisture_db: 0.0,
        bone_dry_weight_g: Some(100.0),
    })
    .expect("drying curve");
    assert_eq!(res.bone_dry_weight_g, 100.0);
    assert!((res.curve[0].moisture_db_percent - 30.0).abs() < 1e-9);
    assert!((res.curve[1].moisture_db_percent - 10.0).abs() < 1e-9);
    assert!((res.curve[2].moisture_db_percent - 4.0).abs() < 1e-9);
    assert_eq!(res.rates.len(), 2);
    assert!((res.rates[0].mid_elapsed_min - 30.0).abs() < 1e-9);
    assert!((res.rates[0].rate_percent_db_per_h - 20.0).abs() < 1e-9);
    assert!((res.rates[1].rate_percent_db_per_h - 6.0).abs() < 1e-9);
    // k = 평균(ln(M0/M1), ln(M1/M2)) / 1 h.
    let expected_k = (3.0_f64.ln() + 2.5_f64.ln()) / 2.0;
    assert!((res.drying_constant_per_h - expected_k).abs() < 1e-9);
}

#[test]
fn drying_curve_estimates_bone_dry_from_equilibrium() {
    // 마지막 관측 104 g을 평형 함수율 4 %d.b. 상태로 보면 완전 건조 질량은 100 g.
    let res = compute_drying_curve(DryingCurveInput {
        observations: vec![obs(0.0, 130.0), obs(120.0, 104.0)],
        equilibrium_moisture_db: 4.0,
        bone_dry_weight_g: None,
    })
    .expect("drying curve");
    assert!((res.bone_dry_weight_g - 100.0).abs() < 1e-9);
    // 마지막 점이 평형이라 건조 상수 추정 구간이 없다.
    assert_eq!(res.drying_constant_per_h, 0.0);
}

#[test]
fn drying_curve_carries_per_point_air_factors() {
    let mut first = obs(0.0, 130.0);
    first.ambient_air_c = Some(30.0);
    first.heated_air_c = Some(60.0);
    first.exhaust_air_c = Some(45.0);
    let res = compute_drying_curve(DryingCurveInput {
        observations: vec![first, obs(60.0, 110.0)],
        equilibrium_moisture_db: 0.0,
        bone_dry_weight_g: Some(100.0),
    })
    .expect("drying curve");
    // 온도 3점이 있는 관측에만 HUF/COP가 붙는다.
    assert!((res.curve[0].heat_utilization_factor.unwrap() - 0.5).abs() < 1e-9);
    assert!((res.curve[0].coefficient_of_performance.unwrap() - 0.5).abs() < 1e-9);
    assert!(res.curve[1].heat_utilization_factor.is_none());
    assert!(res.curve[1].coefficient_of_performance.is_none());
}

#[test]
fn drying_curve_rejects_non_increasing_time() {
    let err = compute_drying_curve(DryingCurveInput {
        observations: vec![obs(60.0, 130.0), obs(60.0, 110.0)],
        equilibrium_moisture_db: 0.0,
        bone_dry_weight_g: None,
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

#[test]
fn belt_conveyor_reference_case() {
    // D=10 cm, N=30 rpm → V=3π m/min. 단면 (12+8)/2×5 = 50 cm².
    let res = compute_belt_conveyor(BeltConveyorInput {
        bulk_density_kg_per_m3: 800.0,
        top_width_cm: 12.0,
        bottom_width_cm: 8.0,
        depth_cm: 5.0,
        pulley_diameter_cm: 10.0,
        pulley_rpm: 30.0,
        collected_mass_kg: 32.0,
        collection_time_min: 1.0,
    })
    .expect("belt conveyor");
    let speed = 3.0 * std::f64::consts::PI;
    assert!((res.belt_speed_m_per_min - speed).abs() < 1e-9);
    assert!((res.load_section_cm3_per_m - 5000.0).abs() < 1e-9);
    assert!((res.trough_angle_deg - 0.4_f64.atan().to_degrees()).abs() < 1e-9);
    let theoretical = 800.0e-6 * 5000.0 * speed * 60.0;
    assert!((res.theoretical_capacity_kg_per_h - theoretical).abs() < 1e-9);
    assert!((res.actual_capacity_kg_per_h - 1920.0).abs() < 1e-9);
    assert!((res.efficiency_percent - 1920.0 / theoretical * 100.0).abs() < 1e-9);
    assert_eq!(res.rating, EfficiencyRating::Good);
}

#[test]
fn belt_conveyor_rejects_inverted_trapezoid() {
    let err = compute_belt_conveyor(BeltConveyorInput {
        bulk_density_kg_per_m3: 800.0,
        top_width_cm: 8.0,
        bottom_width_cm: 12.0,
        depth_cm: 5.0,
        pulley_diameter_cm: 10.0,
        pulley_rpm: 30.0,
        collected_mass_kg: 32.0,
        collection_time_min: 1.0,
    })
    .unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

fn elevator_input() -> BucketElevatorInput {
    BucketElevatorInput {
        bucket_volume_cm3: 500.0,
        bucket_spacing_cm: 20.0,
        bulk_density_kg_per_m3: 800.0,
        pulley_diameter_cm: 40.0,
        pulley_rpm: 50.0,
        collected_mass_kg: 60.0,
        collection_time_min: 0.5,
        loaded_power_w: 1000.0,
        no_load_power_w: 400.0,
        lift_height_m: 3.0,
    }
}

#[test]
fn bucket_elevator_reference_case() {
    let res = compute_bucket_elevator(elevator_input()).expect("bucket elevator");
    assert!((res.buckets_per_meter - 5.0).abs() < 1e-9);
    assert!((res.load_per_meter_kg - 2.0).abs() < 1e-9);
    let speed = 20.0 * std::f64::consts::PI;
    assert!((res.belt_speed_m_per_min - speed).abs() < 1e-9);
    assert!((res.theoretical_capacity_kg_per_h - 2.0 * speed * 60.0).abs() < 1e-9);
    assert!((res.actual_capacity_kg_per_h - 7200.0).abs() < 1e-9);
    assert_eq!(res.rating, EfficiencyRating::Excellent);

    let speed_mps = speed / 60.0;
    let ratio = speed_mps * speed_mps / (9.81 * 0.2);
    assert!((res.discharge_ratio - ratio).abs() < 1e-9);

    assert!((res.net_power_w - 600.0).abs() < 1e-9);
    assert!((res.actual_energy_wh - 5.0).abs() < 1e-9);
    assert!((res.theoretical_lift_energy_wh - 60.0 * 9.81 * 3.0 / 3600.0).abs() < 1e-9);
    assert!((res.energy_per_kg_wh - 5.0 / 60.0).abs() < 1e-9);
    assert!(
        (res.mechanical_efficiency_percent
            - res.theoretical_lift_energy_wh / res.actual_energy_wh * 100.0)
            .abs()
            < 1e-9
    );
}

#[test]
fn bucket_elevator_warns_below_centrifugal_discharge() {
    let res = compute_bucket_elevator(elevator_input()).expect("bucket elevator");
    // 판별비 ≈ 0.56은 중력 배출 영역이라 경고가 붙는다.
    assert!(res.discharge_ratio < 0.9);
    assert_eq!(res.warnings.len(), 1);
}

#[test]
fn bucket_elevator_optimal_rpm_unitizes_discharge_ratio() {
    let base = compute_bucket_elevator(elevator_input()).expect("bucket elevator");
    let mut tuned_input = elevator_input();
    tuned_input.pulley_rpm = base.optimal_rpm;
    let tuned = compute_bucket_elevator(tuned_input).expect("bucket elevator");
    // 제안 회전수에서 Fc/W = 1이 되어야 한다.
    assert!((tuned.discharge_ratio - 1.0).abs() < 1e-9);
    assert!(tuned.warnings.is_empty());
}

#[test]
fn bucket_elevator_rejects_inconsistent_power_readings() {
    let mut input = elevator_input();
    input.loaded_power_w = 300.0;
    let err = compute_bucket_elevator(input).unwrap_err();
    assert!(matches!(err, PostharvestError::InvalidInput(_)));
}

#[test]
fn efficiency_rating_bands() {
    assert_eq!(
        EfficiencyRating::from_percent(120.0),
        EfficiencyRating::SuspectMeasurement
    );
    assert_eq!(EfficiencyRating::from_percent(96.0), EfficiencyRating::Excellent);
    assert_eq!(EfficiencyRating::from_percent(85.0), EfficiencyRating::Good);
    assert_eq!(EfficiencyRating::from_percent(60.0), EfficiencyRating::Moderate);
    assert_eq!(EfficiencyRating::from_percent(40.0), EfficiencyRating::Low);
}
