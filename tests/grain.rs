use agri_engineering_toolbox::grain::bulk_density::{
    compute_bulk_density, compute_porosity, true_density, BulkDensityInput, BulkDensityReading,
    ContainerGeometry, PorosityReading,
};
use agri_engineering_toolbox::grain::geometry::{
    compute_geometry, summarize_geometry, AxialDimensions, GrainGeometryInput, GrainShape,
};
use agri_engineering_toolbox::grain::moisture::{
    compute_oven_moisture, dry_to_wet_basis, recommend_method, wet_to_dry_basis, AvailableTime,
    DryingMethod, MeasurementAccuracy, MeasurementPurpose, MoistureLog, MoistureRecord,
    OvenMoistureInput, OvenReading, SampleMaterial,
};
use agri_engineering_toolbox::grain::terminal_velocity::{
    compute_theoretical_velocity, summarize_measurements, MeasuredVelocityInput,
    TheoreticalVelocityInput, VelocityLog,
};
use agri_engineering_toolbox::grain::GrainCalcError;
use agri_engineering_toolbox::grain_db;
use agri_engineering_toolbox::units::VelocityUnit;

fn geometry_input(l: f64, b: f64, t: f64) -> GrainGeometryInput {
    GrainGeometryInput {
        length_mm: l,
        breadth_mm: b,
        thickness_mm: t,
        projected_area_mm2: None,
        circumscribed_area_mm2: None,
        inscribed_radius_mm: None,
        circumscribed_radius_mm: None,
    }
}

#[test]
fn geometry_reference_case() {
    // 8 × 4 × 2 mm 타원체 근사.
    let res = compute_geometry(geometry_input(8.0, 4.0, 2.0)).expect("geometry");
    assert!((res.volume_mm3 - std::f64::consts::PI / 6.0 * 64.0).abs() < 1e-9);
    assert!((res.equivalent_diameter_mm - 4.0).abs() < 1e-9);
    assert!((res.sphericity - 0.5).abs() < 1e-9);
    assert_eq!(res.length_breadth_ratio, 2.0);
    assert_eq!(res.breadth_thickness_ratio, 2.0);
    assert_eq!(res.shape, GrainShape::Elliptical);
    assert!(res.roundness.is_none());
    assert!(res.roundness_ratio.is_none());
}

#[test]
fn geometry_computes_roundness_when_areas_given() {
    let mut input = geometry_input(5.0, 5.0, 5.0);
    input.projected_area_mm2 = Some(18.0);
    input.circumscribed_area_mm2 = Some(20.0);
    input.inscribed_radius_mm = Some(2.0);
    input.circumscribed_radius_mm = Some(2.5);
    let res = compute_geometry(input).expect("geometry");
    assert!((res.sphericity - 1.0).abs() < 1e-9);
    assert_eq!(res.shape, GrainShape::Round);
    assert!((res.roundness.unwrap() - 0.9).abs() < 1e-9);
    assert!((res.roundness_ratio.unwrap() - 0.8).abs() < 1e-9);
}

#[test]
fn geometry_shape_classification_bands() {
    // 장축이 길고 단면이 원에 가까우면 장립형.
    let res = compute_geometry(geometry_input(8.0, 5.0, 5.0)).expect("geometry");
    assert_eq!(res.shape, GrainShape::Oblong);
    // 폭이 장축보다 크면 편평형.
    let res = compute_geometry(geometry_input(4.0, 5.0, 2.0)).expect("geometry");
    assert_eq!(res.shape, GrainShape::Oblate);
    // 어느 판정에도 들지 않으면 불규칙형.
    let res = compute_geometry(geometry_input(5.0, 4.0, 4.0)).expect("geometry");
    assert_eq!(res.shape, GrainShape::Irregular);
}

#[test]
fn geometry_rejects_non_positive_dimensions() {
    let err = compute_geometry(geometry_input(0.0, 4.0, 2.0)).unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
    let mut input = geometry_input(8.0, 4.0, 2.0);
    input.projected_area_mm2 = Some(-1.0);
    let err = compute_geometry(input).unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn geometry_summary_over_replicates() {
    let samples = [
        AxialDimensions {
            length_mm: 8.0,
            breadth_mm: 4.0,
            thickness_mm: 2.0,
        },
        AxialDimensions {
            length_mm: 6.0,
            breadth_mm: 4.0,
            thickness_mm: 2.0,
        },
    ];
    let res = summarize_geometry(&samples).expect("geometry summary");
    assert!((res.length.mean - 7.0).abs() < 1e-9);
    assert!((res.breadth.mean - 4.0).abs() < 1e-9);
    assert!((res.thickness.mean - 2.0).abs() < 1e-9);
    // De = (l·b·t)^(1/3), φ = De/l 반복별 계산 후 통계.
    let de0 = 64.0_f64.cbrt();
    let de1 = 48.0_f64.cbrt();
    assert!((res.equivalent_diameters_mm[0] - de0).abs() < 1e-9);
    assert!((res.equivalent_diameters_mm[1] - de1).abs() < 1e-9);
    assert!((res.equivalent_diameter.mean - (de0 + de1) / 2.0).abs() < 1e-9);
    assert!((res.sphericities[0] - de0 / 8.0).abs() < 1e-9);
    // 형상은 평균 축비 1.75, 2.0으로 판정한다.
    assert_eq!(res.shape, GrainShape::Elliptical);
}

#[test]
fn geometry_summary_rejects_bad_samples() {
    assert!(summarize_geometry(&[]).is_err());
    let err = summarize_geometry(&[AxialDimensions {
        length_mm: 8.0,
        breadth_mm: 0.0,
        thickness_mm: 2.0,
    }])
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn container_volume_from_shape() {
    let cyl = ContainerGeometry::Cylindrical {
        diameter_cm: 10.0,
        height_cm: 20.0,
    };
    let expected = std::f64::consts::PI * 25.0 * 20.0;
    assert!((cyl.volume_cm3().expect("cylinder") - expected).abs() < 1e-9);

    let rect = ContainerGeometry::Rectangular {
        length_cm: 10.0,
        width_cm: 8.0,
        height_cm: 5.0,
    };
    assert!((rect.volume_cm3().expect("rectangular") - 400.0).abs() < 1e-9);

    let measured = ContainerGeometry::Measured { volume_cm3: 500.0 };
    assert!((measured.volume_cm3().expect("measured") - 500.0).abs() < 1e-9);

    let bad = ContainerGeometry::Measured { volume_cm3: 0.0 };
    assert!(matches!(
        bad.volume_cm3().unwrap_err(),
        GrainCalcError::InvalidInput(_)
    ));
}

#[test]
fn bulk_density_from_container_filling() {
    // 500 cm³ 용기, 시료 순질량 375 g → 0.75 g/cm³ = 750 kg/m³.
    let res = compute_bulk_density(BulkDensityInput {
        container_volume_cm3: 500.0,
        readings: vec![
            BulkDensityReading {
                container_g: 100.0,
                filled_g: 475.0,
            },
            BulkDensityReading {
                container_g: 100.0,
                filled_g: 485.0,
            },
        ],
    })
    .expect("bulk density");
    assert!((res.replicate_kg_per_m3[0] - 750.0).abs() < 1e-9);
    assert!((res.replicate_kg_per_m3[1] - 770.0).abs() < 1e-9);
    assert!((res.stats.mean - 760.0).abs() < 1e-9);
    assert_eq!(res.stats.min, 750.0);
    assert_eq!(res.stats.max, 770.0);
    assert!((res.stats.std_dev - 10.0).abs() < 1e-9);
}

#[test]
fn bulk_density_rejects_underfilled_reading() {
    let err = compute_bulk_density(BulkDensityInput {
        container_volume_cm3: 500.0,
        readings: vec![BulkDensityReading {
            container_g: 100.0,
            filled_g: 90.0,
        }],
    })
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn porosity_from_pycnometer_pressures() {
    // ε = (P1-P2)/P2 × 100.
    let res = compute_porosity(&[
        PorosityReading {
            tank_pressure_p1: 150.0,
            coupled_pressure_p2: 100.0,
        },
        PorosityReading {
            tank_pressure_p1: 148.0,
            coupled_pressure_p2: 100.0,
        },
    ])
    .expect("porosity");
    assert!((res.replicate_percent[0] - 50.0).abs() < 1e-9);
    assert!((res.replicate_percent[1] - 48.0).abs() < 1e-9);
    assert!((res.stats.mean - 49.0).abs() < 1e-9);
}

#[test]
fn porosity_rejects_inverted_pressures() {
    let err = compute_porosity(&[PorosityReading {
        tank_pressure_p1: 90.0,
        coupled_pressure_p2: 100.0,
    }])
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn true_density_from_bulk_and_porosity() {
    // ρt = ρb / (1 - ε/100).
    let rho_t = true_density(750.0, 50.0).expect("true density");
    assert!((rho_t - 1500.0).abs() < 1e-9);
    assert!(true_density(750.0, 100.0).is_err());
    assert!(true_density(0.0, 50.0).is_err());
}

#[test]
fn oven_moisture_reference_case() {
    // 습시료 100 g, 건조 후 85 g → 수분 15 g.
    let res = compute_oven_moisture(OvenMoistureInput {
        method: DryingMethod::HotAirReference,
        readings: vec![OvenReading {
            container_g: 20.0,
            wet_g: 120.0,
            dried_g: 105.0,
        }],
    })
    .expect("oven moisture");
    assert!((res.replicate_wb_percent[0] - 15.0).abs() < 1e-9);
    assert!((res.replicate_db_percent[0] - 15.0 / 85.0 * 100.0).abs() < 1e-9);
    assert_eq!(res.wet_basis.mean, res.replicate_wb_percent[0]);
}

#[test]
fn oven_moisture_rejects_weight_gain() {
    let err = compute_oven_moisture(OvenMoistureInput {
        method: DryingMethod::HotAirHighTemp,
        readings: vec![OvenReading {
            container_g: 20.0,
            wet_g: 100.0,
            dried_g: 110.0,
        }],
    })
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn oven_moisture_rejects_bad_custom_method() {
    let err = compute_oven_moisture(OvenMoistureInput {
        method: DryingMethod::Custom {
            temperature_c: 0.0,
            hours: 2.0,
        },
        readings: vec![OvenReading {
            container_g: 20.0,
            wet_g: 120.0,
            dried_g: 105.0,
        }],
    })
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn basis_conversions_round_trip() {
    // 20 %w.b. ↔ 25 %d.b.
    let db = wet_to_dry_basis(20.0).expect("wb->db");
    assert!((db - 25.0).abs() < 1e-9);
    let wb = dry_to_wet_basis(25.0).expect("db->wb");
    assert!((wb - 20.0).abs() < 1e-9);
    assert!(wet_to_dry_basis(100.0).is_err());
    assert!(dry_to_wet_basis(-1.0).is_err());
}

#[test]
fn method_advisor_rules_are_order_sensitive() {
    // 표준 기준 측정이 최우선이라 유지방 시료여도 진공 오븐을 권한다.
    let rec = recommend_method(
        MeasurementAccuracy::VeryHigh,
        AvailableTime::Extensive,
        SampleMaterial::OilyFatty,
        MeasurementPurpose::StandardReference,
    );
    assert_eq!(rec.method, "Vacuum Oven");

    let rec = recommend_method(
        MeasurementAccuracy::Medium,
        AvailableTime::Extensive,
        SampleMaterial::OilyFatty,
        MeasurementPurpose::QualityControl,
    );
    assert_eq!(rec.method, "Distillation (Dean-Stark)");

    let rec = recommend_method(
        MeasurementAccuracy::Low,
        AvailableTime::VeryLimited,
        SampleMaterial::CerealGrains,
        MeasurementPurpose::FieldTesting,
    );
    assert_eq!(rec.method, "Electrical Moisture Meter");

    let rec = recommend_method(
        MeasurementAccuracy::High,
        AvailableTime::Limited,
        SampleMaterial::CerealGrains,
        MeasurementPurpose::QualityControl,
    );
    assert_eq!(rec.method, "Infra-Red Moisture Meter");

    let rec = recommend_method(
        MeasurementAccuracy::Medium,
        AvailableTime::Extensive,
        SampleMaterial::CerealGrains,
        MeasurementPurpose::Research,
    );
    assert_eq!(rec.method, "Hot Air Oven");
}

#[test]
fn measured_velocity_converts_units_before_stats() {
    // 36 km/h = 10 m/s.
    let res = summarize_measurements(MeasuredVelocityInput {
        unit: VelocityUnit::KilometerPerHour,
        readings: vec![36.0, 43.2],
        air_temperature_c: Some(20.0),
        air_pressure_kpa: None,
    })
    .expect("measured velocity");
    assert!((res.readings_m_per_s[0] - 10.0).abs() < 1e-9);
    assert!((res.readings_m_per_s[1] - 12.0).abs() < 1e-9);
    assert!((res.stats.mean - 11.0).abs() < 1e-9);
    assert_eq!(res.air_temperature_c, Some(20.0));
}

#[test]
fn measured_velocity_rejects_non_positive_reading() {
    let err = summarize_measurements(MeasuredVelocityInput {
        unit: VelocityUnit::MeterPerSecond,
        readings: vec![9.0, 0.0],
        air_temperature_c: None,
        air_pressure_kpa: None,
    })
    .unwrap_err();
    assert!(matches!(err, GrainCalcError::InvalidInput(_)));
}

#[test]
fn theoretical_velocity_reference_case() {
    // Vt = sqrt(4·g·d·ρp·SF / (3·CD·ρa)).
    let res = compute_theoretical_velocity(TheoreticalVelocityInput {
        particle_diameter_mm: 10.0,
        particle_density_kg_per_m3: 1300.0,
        shape_factor: 1.0,
        drag_coefficient: 0.44,
        air_density_kg_per_m3: 1.2,
    })
    .expect("theoretical velocity");
    let expected = (4.0_f64 * 9.81 * 0.01 * 1300.0 / (3.0 * 0.44 * 1.2)).sqrt();
    assert!((res.terminal_velocity_m_per_s - expected).abs() < 1e-9);
    assert_eq!(res.sensitivity.len(), 5);
}

#[test]
fn sensitivity_matches_square_root_scaling() {
    let res = compute_theoretical_velocity(TheoreticalVelocityInput {
        particle_diameter_mm: 5.0,
        particle_density_kg_per_m3: 1200.0,
        shape_factor: 0.9,
        drag_coefficient: 0.5,
        air_density_kg_per_m3: 1.2,
    })
    .expect("theoretical velocity");
    // 분자 항의 10% 증가는 √1.1 − 1 ≈ +4.881%, 분모 항은 1/√1.1 − 1 ≈ −4.654%.
    let up = (1.1_f64.sqrt() - 1.0) * 100.0;
    let down = (1.0 / 1.1_f64.sqrt() - 1.0) * 100.0;
    for entry in &res.sensitivity {
        let expected = match entry.parameter {
            "Particle Density" | "Particle Diameter" | "Shape Factor" => up,
            "Air Density" | "Drag Coefficient" => down,
            other => panic!("unexpected parameter {other}"),
        };
        assert!(
            (entry.change_percent - expected).abs() < 1e-9,
            "{}: {} vs {}",
            entry.parameter,
            entry.change_percent,
            expected
        );
    }
}

#[test]
fn moisture_log_is_append_only() {
    let mut log = MoistureLog::with_reference_data();
    let seeded = log.records().len();
    assert_eq!(seeded, 4);
    log.push(MoistureRecord {
        grain: "Barley".to_string(),
        method: "Hot Air Oven".to_string(),
        moisture_wb_percent: 12.0,
        moisture_db_percent: 13.6,
        measured_on: "2023-02-01".to_string(),
    });
    assert_eq!(log.records().len(), seeded + 1);
    assert_eq!(log.records()[seeded].grain, "Barley");
}

#[test]
fn velocity_log_seeds_from_grain_db() {
    let log = VelocityLog::with_reference_data();
    assert_eq!(log.records().len(), grain_db::grains().len());
    let wheat = grain_db::find_grain("wheat").expect("wheat entry");
    assert_eq!(log.records()[0].grain, wheat.name);
    assert_eq!(
        log.records()[0].terminal_velocity_m_per_s,
        wheat.terminal_velocity_m_per_s
    );
    assert!(grain_db::find_grain("no-such-grain").is_none());
}
