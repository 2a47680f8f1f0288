/// 주요 곡물의 대표 물성 테이블을 제공한다.
/// 값은 참고용이며 품종과 함수율에 따라 달라지므로 설계 시 실측으로 검증해야 한다.

#[derive(Debug)]
pub struct GrainData {
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    /// 대표값 기준 함수율(%d.b.)
    pub moisture_db_percent: f64,
    /// 종말속도(m/s)
    pub terminal_velocity_m_per_s: f64,
    /// 입자(진) 밀도(kg/m³)
    pub particle_density_kg_per_m3: f64,
    /// 등가 직경(mm)
    pub equivalent_diameter_mm: f64,
    /// 통상 산물밀도 범위(g/cc)
    pub bulk_density_range_g_per_cc: (f64, f64),
}

pub fn grains() -> &'static [GrainData] {
    GRAINS
}

pub fn find_grain(code: &str) -> Option<&'static GrainData> {
    GRAINS
        .iter()
        .find(|g| g.code.eq_ignore_ascii_case(code) || g.name.eq_ignore_ascii_case(code))
}

const GRAINS: &[GrainData] = &[
    GrainData {
        code: "WHEAT",
        name: "Wheat",
        notes: "밀; 경질 기준 대표치",
        moisture_db_percent: 14.0,
        terminal_velocity_m_per_s: 9.5,
        particle_density_kg_per_m3: 1250.0,
        equivalent_diameter_mm: 4.0,
        bulk_density_range_g_per_cc: (0.76, 0.82),
    },
    GrainData {
        code: "RICE",
        name: "Rice",
        notes: "벼; 장립 현미 기준 대표치",
        moisture_db_percent: 12.0,
        terminal_velocity_m_per_s: 8.2,
        particle_density_kg_per_m3: 1150.0,
        equivalent_diameter_mm: 7.0,
        bulk_density_range_g_per_cc: (0.56, 0.60),
    },
    GrainData {
        code: "CORN",
        name: "Corn",
        notes: "옥수수; 마치종 기준 대표치",
        moisture_db_percent: 15.0,
        terminal_velocity_m_per_s: 12.3,
        particle_density_kg_per_m3: 1300.0,
        equivalent_diameter_mm: 10.0,
        bulk_density_range_g_per_cc: (0.68, 0.75),
    },
    GrainData {
        code: "SOYBEAN",
        name: "Soybean",
        notes: "콩; 황색 대두 기준 대표치",
        moisture_db_percent: 12.5,
        terminal_velocity_m_per_s: 10.8,
        particle_density_kg_per_m3: 1180.0,
        equivalent_diameter_mm: 7.5,
        bulk_density_range_g_per_cc: (0.70, 0.77),
    },
    GrainData {
        code: "MILLET",
        name: "Millet",
        notes: "조; 소립 잡곡 기준 대표치",
        moisture_db_percent: 11.0,
        terminal_velocity_m_per_s: 6.5,
        particle_density_kg_per_m3: 1100.0,
        equivalent_diameter_mm: 2.5,
        bulk_density_range_g_per_cc: (0.60, 0.65),
    },
];

// NOTE:
// - Representative values compiled from common post-harvest engineering references (circa 2023).
// - Terminal velocity and bulk density vary strongly with moisture content; treat as first estimates.
