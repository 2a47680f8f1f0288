//! 기준표 구성 검증과 조회 동작 회귀 테스트.
use agri_engineering_toolbox::interp::Breakpoint::{Finite, OpenAbove, OpenBelow};
use agri_engineering_toolbox::interp::{ReferenceTable, TableError, TableRow, DEFAULT_EPSILON};

fn table(rows: &[(f64, f64)]) -> ReferenceTable {
    let rows = rows
        .iter()
        .map(|&(x, v)| TableRow::new(Finite(x), v))
        .collect();
    ReferenceTable::new("finite", rows).expect("valid table")
}

#[test]
fn exact_breakpoint_returns_row_value() {
    let t = table(&[(300.0, 1.04), (600.0, 1.08), (900.0, 1.12), (1200.0, 1.16)]);
    // 일치 조회는 산술 없이 행 값을 그대로 돌려준다.
    assert_eq!(t.lookup(300.0), 1.04);
    assert_eq!(t.lookup(600.0), 1.08);
    assert_eq!(t.lookup(900.0), 1.12);
    assert_eq!(t.lookup(1200.0), 1.16);
}

#[test]
fn midpoint_interpolates_linearly() {
    let t = table(&[(0.0, 0.0), (10.0, 100.0)]);
    assert_eq!(t.lookup(5.0), 50.0);
    assert_eq!(t.lookup(2.5), 25.0);
    let t = table(&[(900.0, 1.12), (1200.0, 1.16)]);
    assert!((t.lookup(915.0) - 1.122).abs() < 1e-9);
}

#[test]
fn out_of_range_clamps_to_edge_values() {
    let t = table(&[(0.0, 0.0), (10.0, 100.0)]);
    assert_eq!(t.lookup(-5.0), 0.0);
    assert_eq!(t.lookup(0.0), 0.0);
    assert_eq!(t.lookup(10.0), 100.0);
    assert_eq!(t.lookup(1.0e9), 100.0);
}

#[test]
fn lookup_is_monotonic_between_breakpoints() {
    let t = table(&[(0.0, 0.0), (5.0, 20.0), (10.0, 100.0)]);
    let mut prev = t.lookup(-1.0);
    for step in 0..=48 {
        let q = step as f64 * 0.25;
        let v = t.lookup(q);
        assert!(v >= prev, "q={q} v={v} prev={prev}");
        prev = v;
    }
}

#[test]
fn open_lower_bound_shifts_inward() {
    let rows = vec![
        TableRow::new(OpenBelow(300.0), 1.00),
        TableRow::new(Finite(300.0), 1.04),
    ];
    let t = ReferenceTable::new("open lower", rows).expect("valid table");
    // "<300"은 유효 수치 299.9로 해석된다.
    assert_eq!(t.lookup(100.0), 1.00);
    assert_eq!(t.lookup(299.9), 1.00);
    assert!((t.lookup(299.95) - 1.02).abs() < 1e-9);
    assert_eq!(t.lookup(300.0), 1.04);
    assert_eq!(t.lookup(2000.0), 1.04);
}

#[test]
fn open_upper_bound_shifts_outward() {
    let rows = vec![
        TableRow::new(Finite(18.3), 1.29),
        TableRow::new(OpenAbove(30.5), 1.00),
    ];
    let t = ReferenceTable::new("open upper", rows).expect("valid table");
    // ">30.5"는 유효 수치 30.6으로 해석되므로 30.5는 아직 보간 구간이다.
    assert_eq!(t.lookup(18.3), 1.29);
    assert_eq!(t.lookup(50.0), 1.00);
    assert_eq!(t.lookup(30.6), 1.00);
    assert!((t.lookup(30.5) - 1.0023577235772358).abs() < 1e-9);
}

#[test]
fn coincident_breakpoints_return_matching_row_without_division() {
    let t = table(&[(0.0, 1.0), (5.0, 2.0), (5.0, 3.0), (10.0, 4.0)]);
    // 겹친 기준점은 앞쪽 일치 행이 이긴다. 0 나눗셈 경로는 없다.
    assert_eq!(t.lookup(5.0), 2.0);
    assert_eq!(t.lookup(2.5), 1.5);
    assert_eq!(t.lookup(7.5), 3.5);
}

#[test]
fn construction_rejects_too_few_rows() {
    let err = ReferenceTable::new("empty", Vec::new()).unwrap_err();
    assert_eq!(err, TableError::TooFewRows { found: 0 });
    let err = ReferenceTable::new("single", vec![TableRow::new(Finite(1.0), 1.0)]).unwrap_err();
    assert_eq!(err, TableError::TooFewRows { found: 1 });
}

#[test]
fn construction_rejects_unordered_breakpoints() {
    let rows = vec![
        TableRow::new(Finite(10.0), 1.0),
        TableRow::new(Finite(5.0), 2.0),
    ];
    let err = ReferenceTable::new("unordered", rows).unwrap_err();
    assert_eq!(err, TableError::UnorderedBreakpoints { index: 1 });
}

#[test]
fn construction_rejects_misplaced_open_bounds() {
    let rows = vec![
        TableRow::new(Finite(1.0), 1.0),
        TableRow::new(OpenBelow(5.0), 2.0),
        TableRow::new(Finite(10.0), 3.0),
    ];
    let err = ReferenceTable::new("late open below", rows).unwrap_err();
    assert_eq!(err, TableError::MisplacedOpenBound { index: 1 });

    let rows = vec![
        TableRow::new(OpenAbove(1.0), 1.0),
        TableRow::new(Finite(10.0), 2.0),
    ];
    let err = ReferenceTable::new("early open above", rows).unwrap_err();
    assert_eq!(err, TableError::MisplacedOpenBound { index: 0 });

    let rows = vec![
        TableRow::new(OpenBelow(1.0), 1.0),
        TableRow::new(OpenBelow(2.0), 2.0),
    ];
    let err = ReferenceTable::new("double open below", rows).unwrap_err();
    assert_eq!(err, TableError::MisplacedOpenBound { index: 1 });
}

#[test]
fn ordering_is_checked_on_effective_values() {
    // 표기 수치는 겹쳐도 유효 수치가 비감소면 유효하다.
    let rows = vec![
        TableRow::new(OpenBelow(300.0), 1.00),
        TableRow::new(Finite(299.95), 1.02),
        TableRow::new(Finite(300.0), 1.04),
    ];
    assert!(ReferenceTable::new("effective order", rows).is_ok());

    // 표기 수치로는 4 < 5지만 유효 수치 4.1이 앞 행 5보다 작아진다.
    let rows = vec![
        TableRow::new(Finite(5.0), 1.0),
        TableRow::new(OpenAbove(4.0), 2.0),
    ];
    let err = ReferenceTable::new("effective unordered", rows).unwrap_err();
    assert_eq!(err, TableError::UnorderedBreakpoints { index: 1 });
}

#[test]
fn custom_epsilon_widens_bound_shift() {
    let rows = vec![
        TableRow::new(OpenBelow(300.0), 1.00),
        TableRow::new(Finite(300.0), 1.04),
    ];
    let t = ReferenceTable::with_epsilon("own spacing", rows, 5.0).expect("valid table");
    assert_eq!(t.epsilon(), 5.0);
    assert_eq!(t.lookup(294.0), 1.00);
    assert_eq!(t.lookup(295.0), 1.00);
    assert!((t.lookup(297.0) - 1.016).abs() < 1e-9);
    assert_eq!(t.lookup(300.0), 1.04);
}

#[test]
fn default_epsilon_is_one_tenth() {
    assert_eq!(DEFAULT_EPSILON, 0.1);
    let t = table(&[(0.0, 0.0), (10.0, 100.0)]);
    assert_eq!(t.epsilon(), DEFAULT_EPSILON);
}

#[test]
fn breakpoint_display_keeps_bound_notation() {
    assert_eq!(format!("{}", Finite(300.0)), "300");
    assert_eq!(format!("{}", OpenBelow(300.0)), "<300");
    assert_eq!(format!("{}", OpenAbove(30.5)), ">30.5");
}

#[test]
fn accessors_expose_rows_and_name() {
    let t = table(&[(0.0, 0.0), (10.0, 100.0)]);
    assert_eq!(t.name(), "finite");
    assert_eq!(t.rows().len(), 2);
    assert_eq!(t.rows()[1].value, 100.0);
}
