use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_GREENHOUSE: &str = "main_menu.greenhouse";
    pub const MAIN_MENU_GRAIN: &str = "main_menu.grain";
    pub const MAIN_MENU_MOISTURE: &str = "main_menu.moisture";
    pub const MAIN_MENU_POSTHARVEST: &str = "main_menu.postharvest";
    pub const MAIN_MENU_REFERENCE: &str = "main_menu.reference";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_CHOICE: &str = "error.invalid_choice";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_REPLICATE_COUNT: &str = "prompt.replicate_count";
    pub const PROMPT_CONTAINER_MASS: &str = "prompt.container_mass";
    pub const PROMPT_COLLECTED_MASS: &str = "prompt.collected_mass";
    pub const PROMPT_COLLECTION_TIME: &str = "prompt.collection_time";
    pub const PROMPT_PULLEY_DIAMETER: &str = "prompt.pulley_diameter";
    pub const PROMPT_PULLEY_RPM: &str = "prompt.pulley_rpm";
    pub const PROMPT_BULK_DENSITY: &str = "prompt.bulk_density";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_CAPACITY: &str = "result.capacity";
    pub const RESULT_THEORETICAL_CAPACITY: &str = "result.theoretical_capacity";
    pub const RESULT_ACTUAL_CAPACITY: &str = "result.actual_capacity";
    pub const RESULT_BELT_SPEED: &str = "result.belt_speed";
    pub const STATS_MEAN: &str = "stats.mean";
    pub const STATS_MIN: &str = "stats.min";
    pub const STATS_MAX: &str = "stats.max";
    pub const STATS_STD_DEV: &str = "stats.std_dev";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS_LINE1: &str = "unit_conversion.options_line1";
    pub const UNIT_CONVERSION_OPTIONS_LINE2: &str = "unit_conversion.options_line2";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const GREENHOUSE_HEADING: &str = "greenhouse.heading";
    pub const GREENHOUSE_OPTION_SUMMER: &str = "greenhouse.option_summer";
    pub const GREENHOUSE_OPTION_WINTER: &str = "greenhouse.option_winter";
    pub const GREENHOUSE_OPTION_TABLES: &str = "greenhouse.option_tables";
    pub const PROMPT_HOUSE_LENGTH: &str = "greenhouse.prompt_length";
    pub const PROMPT_HOUSE_WIDTH: &str = "greenhouse.prompt_width";
    pub const PROMPT_ELEVATION: &str = "greenhouse.prompt_elevation";
    pub const PROMPT_LIGHT: &str = "greenhouse.prompt_light";
    pub const PROMPT_TEMP_RISE: &str = "greenhouse.prompt_temp_rise";
    pub const PROMPT_PAD_FAN_DISTANCE: &str = "greenhouse.prompt_pad_fan";
    pub const PROMPT_TEMP_DIFF: &str = "greenhouse.prompt_temp_diff";
    pub const RESULT_STANDARD_AIRFLOW: &str = "greenhouse.result_standard_airflow";
    pub const RESULT_FACTOR_BREAKDOWN: &str = "greenhouse.result_factors";
    pub const RESULT_DESIGN_FACTOR: &str = "greenhouse.result_design_factor";
    pub const RESULT_ADJUSTED_AIRFLOW: &str = "greenhouse.result_adjusted_airflow";
    pub const RESULT_PAD_AREA: &str = "greenhouse.result_pad_area";
    pub const RESULT_WINTER_FACTOR: &str = "greenhouse.result_winter_factor";
    pub const RESULT_TUBE_LAYOUT: &str = "greenhouse.result_tube_layout";
    pub const RESULT_FLOW_PER_TUBE: &str = "greenhouse.result_flow_per_tube";
    pub const TABLES_OPTIONS: &str = "greenhouse.tables_options";
    pub const TABLES_PROMPT_QUERY: &str = "greenhouse.tables_prompt_query";
    pub const TABLES_LOOKUP_RESULT: &str = "greenhouse.tables_result";

    pub const GRAIN_HEADING: &str = "grain.heading";
    pub const GRAIN_OPTION_GEOMETRY: &str = "grain.option_geometry";
    pub const GRAIN_OPTION_BULK_DENSITY: &str = "grain.option_bulk_density";
    pub const GRAIN_OPTION_POROSITY: &str = "grain.option_porosity";
    pub const GRAIN_OPTION_TV_MEASURED: &str = "grain.option_tv_measured";
    pub const GRAIN_OPTION_TV_THEORY: &str = "grain.option_tv_theory";
    pub const PROMPT_GRAIN_LENGTH: &str = "grain.prompt_length";
    pub const PROMPT_GRAIN_BREADTH: &str = "grain.prompt_breadth";
    pub const PROMPT_GRAIN_THICKNESS: &str = "grain.prompt_thickness";
    pub const PROMPT_PROJECTED_AREA: &str = "grain.prompt_projected_area";
    pub const PROMPT_CIRCUMSCRIBED_AREA: &str = "grain.prompt_circumscribed_area";
    pub const PROMPT_INSCRIBED_RADIUS: &str = "grain.prompt_inscribed_radius";
    pub const PROMPT_CIRCUMSCRIBED_RADIUS: &str = "grain.prompt_circumscribed_radius";
    pub const RESULT_VOLUME: &str = "grain.result_volume";
    pub const RESULT_EQUIVALENT_DIAMETER: &str = "grain.result_equivalent_diameter";
    pub const RESULT_SPHERICITY: &str = "grain.result_sphericity";
    pub const RESULT_ASPECT_RATIOS: &str = "grain.result_aspect_ratios";
    pub const RESULT_ROUNDNESS: &str = "grain.result_roundness";
    pub const RESULT_ROUNDNESS_RATIO: &str = "grain.result_roundness_ratio";
    pub const RESULT_SHAPE: &str = "grain.result_shape";
    pub const PROMPT_CONTAINER_VOLUME: &str = "grain.prompt_container_volume";
    pub const CONTAINER_SHAPE_OPTIONS: &str = "grain.container_shape_options";
    pub const PROMPT_CONTAINER_DIAMETER: &str = "grain.prompt_container_diameter";
    pub const PROMPT_CONTAINER_HEIGHT: &str = "grain.prompt_container_height";
    pub const PROMPT_CONTAINER_LENGTH: &str = "grain.prompt_container_length";
    pub const PROMPT_CONTAINER_WIDTH: &str = "grain.prompt_container_width";
    pub const PROMPT_FILLED_MASS: &str = "grain.prompt_filled_mass";
    pub const RESULT_BULK_DENSITY: &str = "grain.result_bulk_density";
    pub const PROMPT_TANK_PRESSURE: &str = "grain.prompt_tank_pressure";
    pub const PROMPT_COUPLED_PRESSURE: &str = "grain.prompt_coupled_pressure";
    pub const RESULT_POROSITY: &str = "grain.result_porosity";
    pub const RESULT_TRUE_DENSITY: &str = "grain.result_true_density";
    pub const PROMPT_READING: &str = "grain.prompt_reading";
    pub const PROMPT_AIR_TEMP: &str = "grain.prompt_air_temp";
    pub const PROMPT_AIR_PRESSURE: &str = "grain.prompt_air_pressure";
    pub const RESULT_TERMINAL_VELOCITY: &str = "grain.result_terminal_velocity";
    pub const PROMPT_LOG_APPEND: &str = "grain.prompt_log_append";
    pub const PROMPT_GRAIN_NAME: &str = "grain.prompt_grain_name";
    pub const PROMPT_MOISTURE_DB: &str = "grain.prompt_moisture_db";
    pub const PROMPT_EQUIVALENT_DIAMETER: &str = "grain.prompt_equivalent_diameter";
    pub const LOG_APPENDED: &str = "grain.log_appended";
    pub const PROMPT_PARTICLE_DIAMETER: &str = "grain.prompt_particle_diameter";
    pub const PROMPT_PARTICLE_DENSITY: &str = "grain.prompt_particle_density";
    pub const PROMPT_SHAPE_FACTOR: &str = "grain.prompt_shape_factor";
    pub const PROMPT_DRAG_COEFFICIENT: &str = "grain.prompt_drag_coefficient";
    pub const PROMPT_AIR_DENSITY: &str = "grain.prompt_air_density";
    pub const SENSITIVITY_HEADING: &str = "grain.sensitivity_heading";

    pub const SHAPE_ROUND: &str = "shape.round";
    pub const SHAPE_OBLONG: &str = "shape.oblong";
    pub const SHAPE_OBLATE: &str = "shape.oblate";
    pub const SHAPE_ELLIPTICAL: &str = "shape.elliptical";
    pub const SHAPE_IRREGULAR: &str = "shape.irregular";

    pub const MOISTURE_HEADING: &str = "moisture.heading";
    pub const MOISTURE_OPTION_OVEN: &str = "moisture.option_oven";
    pub const MOISTURE_OPTION_WB_TO_DB: &str = "moisture.option_wb_to_db";
    pub const MOISTURE_OPTION_DB_TO_WB: &str = "moisture.option_db_to_wb";
    pub const MOISTURE_OPTION_ADVISOR: &str = "moisture.option_advisor";
    pub const MOISTURE_OPTION_LOG: &str = "moisture.option_log";
    pub const METHOD_OPTIONS: &str = "moisture.method_options";
    pub const PROMPT_CUSTOM_TEMPERATURE: &str = "moisture.prompt_custom_temperature";
    pub const PROMPT_CUSTOM_HOURS: &str = "moisture.prompt_custom_hours";
    pub const PROMPT_WET_MASS: &str = "moisture.prompt_wet_mass";
    pub const PROMPT_DRIED_MASS: &str = "moisture.prompt_dried_mass";
    pub const RESULT_MOISTURE_WB: &str = "moisture.result_wb";
    pub const RESULT_MOISTURE_DB: &str = "moisture.result_db";
    pub const PROMPT_WB_VALUE: &str = "moisture.prompt_wb_value";
    pub const PROMPT_DB_VALUE: &str = "moisture.prompt_db_value";
    pub const ADVISOR_ACCURACY_OPTIONS: &str = "moisture.advisor_accuracy_options";
    pub const ADVISOR_TIME_OPTIONS: &str = "moisture.advisor_time_options";
    pub const ADVISOR_MATERIAL_OPTIONS: &str = "moisture.advisor_material_options";
    pub const ADVISOR_PURPOSE_OPTIONS: &str = "moisture.advisor_purpose_options";
    pub const RESULT_RECOMMENDED_METHOD: &str = "moisture.result_method";
    pub const RESULT_RECOMMENDATION_REASON: &str = "moisture.result_reason";
    pub const MOISTURE_LOG_HEADING: &str = "moisture.log_heading";
    pub const MOISTURE_LOG_HEADER: &str = "moisture.log_header";
    pub const PROMPT_MEASURED_ON: &str = "moisture.prompt_measured_on";

    pub const POSTHARVEST_HEADING: &str = "postharvest.heading";
    pub const POSTHARVEST_OPTION_CLEANER: &str = "postharvest.option_cleaner";
    pub const POSTHARVEST_OPTION_GRADING: &str = "postharvest.option_grading";
    pub const POSTHARVEST_OPTION_TRAY_DRYER: &str = "postharvest.option_tray_dryer";
    pub const POSTHARVEST_OPTION_DRYING_CURVE: &str = "postharvest.option_drying_curve";
    pub const POSTHARVEST_OPTION_BELT: &str = "postharvest.option_belt";
    pub const POSTHARVEST_OPTION_BUCKET: &str = "postharvest.option_bucket";
    pub const CLEANER_FEED_HEADING: &str = "postharvest.feed_heading";
    pub const CLEANER_CLEAN_HEADING: &str = "postharvest.clean_heading";
    pub const CLEANER_CHAFF_HEADING: &str = "postharvest.chaff_heading";
    pub const PROMPT_SAMPLE_TOTAL: &str = "postharvest.prompt_sample_total";
    pub const PROMPT_SAMPLE_GOOD: &str = "postharvest.prompt_sample_good";
    pub const RESULT_FRACTIONS: &str = "postharvest.result_fractions";
    pub const RESULT_RECOVERY: &str = "postharvest.result_recovery";
    pub const RESULT_REJECTION: &str = "postharvest.result_rejection";
    pub const RESULT_OVERALL: &str = "postharvest.result_overall";
    pub const PROMPT_SIEVE_SIZE: &str = "postharvest.prompt_sieve_size";
    pub const PROMPT_FEED_FRACTION: &str = "postharvest.prompt_feed_fraction";
    pub const PROMPT_OVERFLOW_FRACTION: &str = "postharvest.prompt_overflow_fraction";
    pub const PROMPT_UNDERFLOW_FRACTION: &str = "postharvest.prompt_underflow_fraction";
    pub const RESULT_OVERFLOW_EFFICIENCY: &str = "postharvest.result_overflow_efficiency";
    pub const RESULT_UNDERFLOW_EFFICIENCY: &str = "postharvest.result_underflow_efficiency";
    pub const PROMPT_EMPTY_TRAY: &str = "postharvest.prompt_empty_tray";
    pub const PROMPT_WET_TRAY: &str = "postharvest.prompt_wet_tray";
    pub const PROMPT_DRY_TRAY: &str = "postharvest.prompt_dry_tray";
    pub const PROMPT_BATCH_WEIGHT: &str = "postharvest.prompt_batch_weight";
    pub const PROMPT_HEATED_AIR: &str = "postharvest.prompt_heated_air";
    pub const PROMPT_EXHAUST_AIR: &str = "postharvest.prompt_exhaust_air";
    pub const PROMPT_AMBIENT_AIR: &str = "postharvest.prompt_ambient_air";
    pub const PROMPT_HEATER_POWER: &str = "postharvest.prompt_heater_power";
    pub const PROMPT_DURATION: &str = "postharvest.prompt_duration";
    pub const RESULT_PROBABLE_DRY_WEIGHT: &str = "postharvest.result_probable_dry_weight";
    pub const RESULT_HEAT_UTILIZATION: &str = "postharvest.result_heat_utilization";
    pub const RESULT_COP: &str = "postharvest.result_cop";
    pub const RESULT_ENERGY: &str = "postharvest.result_energy";
    pub const PROMPT_OBSERVATION_COUNT: &str = "postharvest.prompt_observation_count";
    pub const PROMPT_OBSERVATION_TIME: &str = "postharvest.prompt_observation_time";
    pub const PROMPT_OBSERVATION_WEIGHT: &str = "postharvest.prompt_observation_weight";
    pub const PROMPT_EQUILIBRIUM_MOISTURE: &str = "postharvest.prompt_equilibrium_moisture";
    pub const PROMPT_BONE_DRY: &str = "postharvest.prompt_bone_dry";
    pub const CURVE_TABLE_HEADER: &str = "postharvest.curve_header";
    pub const RATE_TABLE_HEADER: &str = "postharvest.rate_header";
    pub const RESULT_DRYING_CONSTANT: &str = "postharvest.result_drying_constant";
    pub const RESULT_BONE_DRY_WEIGHT: &str = "postharvest.result_bone_dry_weight";
    pub const PROMPT_DENSITY_OR_MEASURE: &str = "postharvest.prompt_density_or_measure";
    pub const PROMPT_TOP_WIDTH: &str = "postharvest.prompt_top_width";
    pub const PROMPT_BOTTOM_WIDTH: &str = "postharvest.prompt_bottom_width";
    pub const PROMPT_DEPTH: &str = "postharvest.prompt_depth";
    pub const RESULT_LOAD_SECTION: &str = "postharvest.result_load_section";
    pub const RESULT_TROUGH_ANGLE: &str = "postharvest.result_trough_angle";
    pub const PROMPT_BUCKET_VOLUME: &str = "postharvest.prompt_bucket_volume";
    pub const PROMPT_BUCKET_SPACING: &str = "postharvest.prompt_bucket_spacing";
    pub const PROMPT_LOADED_POWER: &str = "postharvest.prompt_loaded_power";
    pub const PROMPT_NO_LOAD_POWER: &str = "postharvest.prompt_no_load_power";
    pub const PROMPT_LIFT_HEIGHT: &str = "postharvest.prompt_lift_height";
    pub const RESULT_DISCHARGE_RATIO: &str = "postharvest.result_discharge_ratio";
    pub const RESULT_OPTIMAL_RPM: &str = "postharvest.result_optimal_rpm";
    pub const RESULT_NET_POWER: &str = "postharvest.result_net_power";
    pub const RESULT_ENERGY_PER_KG: &str = "postharvest.result_energy_per_kg";
    pub const RESULT_MECHANICAL_EFFICIENCY: &str = "postharvest.result_mechanical_efficiency";

    pub const RATING_LOW: &str = "rating.low";
    pub const RATING_MODERATE: &str = "rating.moderate";
    pub const RATING_GOOD: &str = "rating.good";
    pub const RATING_EXCELLENT: &str = "rating.excellent";
    pub const RATING_SUSPECT: &str = "rating.suspect";

    pub const REFERENCE_HEADING: &str = "reference.heading";
    pub const REFERENCE_GRAIN_HEADING: &str = "reference.grain_heading";
    pub const REFERENCE_GRAIN_HEADER: &str = "reference.grain_header";
    pub const REFERENCE_VELOCITY_LOG_HEADING: &str = "reference.velocity_log_heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";

    pub const VELOCITY_UNIT_OPTIONS: &str = "unit.velocity_options";
    pub const AIRFLOW_UNIT_OPTIONS: &str = "unit.airflow_options";
    pub const DENSITY_UNIT_OPTIONS: &str = "unit.density_options";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정 파일/시스템 로케일 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ko-kr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// 언어팩 디렉터리에서 "{코드}.toml"을 읽는다. 전체 코드가 없으면 기본 코드를 시도한다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩. 외부 파일이 없어도 동작하도록 빌드 시 포함한다.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        WARNING_PREFIX => "주의",
        MAIN_MENU_TITLE => "\n=== Agricultural Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_GREENHOUSE => "2) 온실 환기 설계",
        MAIN_MENU_GRAIN => "3) 곡물 물성",
        MAIN_MENU_MOISTURE => "4) 함수율 측정",
        MAIN_MENU_POSTHARVEST => "5) 수확 후 처리 기계",
        MAIN_MENU_REFERENCE => "6) 기준 데이터",
        MAIN_MENU_SETTINGS => "7) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_CHOICE => "잘못된 선택입니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_REPLICATE_COUNT => "반복 횟수: ",
        PROMPT_CONTAINER_MASS => "빈 용기 질량 [g]: ",
        PROMPT_COLLECTED_MASS => "받아낸 질량 [kg]: ",
        PROMPT_COLLECTION_TIME => "받아낸 시간 [min]: ",
        PROMPT_PULLEY_DIAMETER => "풀리 지름 [cm]: ",
        PROMPT_PULLEY_RPM => "풀리 회전수 [rpm]: ",
        PROMPT_BULK_DENSITY => "산물밀도 [kg/m3]: ",
        RESULT_EFFICIENCY => "효율:",
        RESULT_CAPACITY => "처리 용량:",
        RESULT_THEORETICAL_CAPACITY => "이론 용량:",
        RESULT_ACTUAL_CAPACITY => "실측 용량:",
        RESULT_BELT_SPEED => "벨트 속도:",
        STATS_MEAN => "평균",
        STATS_MIN => "최소",
        STATS_MAX => "최대",
        STATS_STD_DEV => "표준편차",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS_LINE1 => "1) 온도  2) 온도차  3) 길이  4) 면적  5) 체적",
        UNIT_CONVERSION_OPTIONS_LINE2 => "6) 속도  7) 질량  8) 밀도  9) 풍량",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, m, kg/m3): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, ft, lb/ft3): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        GREENHOUSE_HEADING => "\n-- 온실 환기 설계 --",
        GREENHOUSE_OPTION_SUMMER => "1) 여름철 냉방 환기(팬-패드)",
        GREENHOUSE_OPTION_WINTER => "2) 겨울철 최소 환기",
        GREENHOUSE_OPTION_TABLES => "3) 보정 계수 표 조회",
        PROMPT_HOUSE_LENGTH => "온실 길이 [m]: ",
        PROMPT_HOUSE_WIDTH => "온실 폭 [m]: ",
        PROMPT_ELEVATION => "해발 고도 [m]: ",
        PROMPT_LIGHT => "실내 광도 [klx]: ",
        PROMPT_TEMP_RISE => "허용 온도 상승 [°C]: ",
        PROMPT_PAD_FAN_DISTANCE => "패드-팬 거리 [m]: ",
        PROMPT_TEMP_DIFF => "실내외 온도차 [°C]: ",
        RESULT_STANDARD_AIRFLOW => "기준 환기량:",
        RESULT_FACTOR_BREAKDOWN => "적용 계수:",
        RESULT_DESIGN_FACTOR => "설계 계수:",
        RESULT_ADJUSTED_AIRFLOW => "보정 환기량:",
        RESULT_PAD_AREA => "필요 패드 면적:",
        RESULT_WINTER_FACTOR => "겨울철 온도 계수:",
        RESULT_TUBE_LAYOUT => "권장 덕트 구성:",
        RESULT_FLOW_PER_TUBE => "덕트당 풍량:",
        TABLES_OPTIONS => "1) 고도  2) 광도  3) 온도 상승  4) 패드-팬 거리  5) 겨울철 온도차",
        TABLES_PROMPT_QUERY => "조회할 값: ",
        TABLES_LOOKUP_RESULT => "보간 계수:",
        GRAIN_HEADING => "\n-- 곡물 물성 --",
        GRAIN_OPTION_GEOMETRY => "1) 형상/크기 분석",
        GRAIN_OPTION_BULK_DENSITY => "2) 산물밀도 측정",
        GRAIN_OPTION_POROSITY => "3) 공극률/진밀도",
        GRAIN_OPTION_TV_MEASURED => "4) 종말속도 실측 정리",
        GRAIN_OPTION_TV_THEORY => "5) 종말속도 이론 계산",
        PROMPT_GRAIN_LENGTH => "길이 L [mm]: ",
        PROMPT_GRAIN_BREADTH => "폭 B [mm]: ",
        PROMPT_GRAIN_THICKNESS => "두께 T [mm]: ",
        PROMPT_PROJECTED_AREA => "투영 면적 Ap [mm2] (없으면 엔터): ",
        PROMPT_CIRCUMSCRIBED_AREA => "외접원 면적 Ac [mm2] (없으면 엔터): ",
        PROMPT_INSCRIBED_RADIUS => "내접원 반지름 r [mm] (없으면 엔터): ",
        PROMPT_CIRCUMSCRIBED_RADIUS => "외접원 반지름 R [mm] (없으면 엔터): ",
        RESULT_VOLUME => "추정 체적:",
        RESULT_EQUIVALENT_DIAMETER => "등가 직경:",
        RESULT_SPHERICITY => "구형도:",
        RESULT_ASPECT_RATIOS => "축비 L/B, B/T:",
        RESULT_ROUNDNESS => "원형도:",
        RESULT_ROUNDNESS_RATIO => "원형도 비:",
        RESULT_SHAPE => "형상 분류:",
        PROMPT_CONTAINER_VOLUME => "용기 부피 [cm3]: ",
        CONTAINER_SHAPE_OPTIONS => "용기 형상: 1=원통 2=직육면체 3=부피 직접 입력",
        PROMPT_CONTAINER_DIAMETER => "용기 안지름 [cm]: ",
        PROMPT_CONTAINER_HEIGHT => "용기 높이 [cm]: ",
        PROMPT_CONTAINER_LENGTH => "용기 가로 [cm]: ",
        PROMPT_CONTAINER_WIDTH => "용기 세로 [cm]: ",
        PROMPT_FILLED_MASS => "곡물 채운 질량 [g]: ",
        RESULT_BULK_DENSITY => "산물밀도:",
        PROMPT_TANK_PRESSURE => "탱크 압력 P1 [kPa]: ",
        PROMPT_COUPLED_PRESSURE => "연결 후 압력 P2 [kPa]: ",
        RESULT_POROSITY => "공극률:",
        RESULT_TRUE_DENSITY => "진밀도:",
        PROMPT_READING => "판독값",
        PROMPT_AIR_TEMP => "기온 [°C] (없으면 엔터): ",
        PROMPT_AIR_PRESSURE => "기압 [kPa] (없으면 엔터): ",
        RESULT_TERMINAL_VELOCITY => "종말속도:",
        PROMPT_LOG_APPEND => "측정 이력에 추가할까요? (y/N): ",
        PROMPT_GRAIN_NAME => "곡물 이름: ",
        PROMPT_MOISTURE_DB => "함수율 [%d.b.]: ",
        PROMPT_EQUIVALENT_DIAMETER => "등가 직경 [mm]: ",
        LOG_APPENDED => "이력에 추가되었습니다.",
        PROMPT_PARTICLE_DIAMETER => "입자 등가 직경 [mm]: ",
        PROMPT_PARTICLE_DENSITY => "입자 밀도 [kg/m3]: ",
        PROMPT_SHAPE_FACTOR => "형상 계수 (구=1.0): ",
        PROMPT_DRAG_COEFFICIENT => "항력 계수 (구 약 0.44): ",
        PROMPT_AIR_DENSITY => "공기 밀도 [kg/m3] (표준 약 1.2): ",
        SENSITIVITY_HEADING => "매개변수 +10% 민감도:",
        SHAPE_ROUND => "원형",
        SHAPE_OBLONG => "장립형",
        SHAPE_OBLATE => "편평형",
        SHAPE_ELLIPTICAL => "타원형",
        SHAPE_IRREGULAR => "불규칙형",
        MOISTURE_HEADING => "\n-- 함수율 측정 --",
        MOISTURE_OPTION_OVEN => "1) 오븐법 계산",
        MOISTURE_OPTION_WB_TO_DB => "2) 습량 기준 -> 건량 기준",
        MOISTURE_OPTION_DB_TO_WB => "3) 건량 기준 -> 습량 기준",
        MOISTURE_OPTION_ADVISOR => "4) 측정 방법 추천",
        MOISTURE_OPTION_LOG => "5) 측정 이력",
        METHOD_OPTIONS => "건조 방식: 1=열풍 130°C(1~2h) 2=열풍 100°C(24h) 3=진공 70°C(6h) 4=직접 입력",
        PROMPT_CUSTOM_TEMPERATURE => "건조 온도 [°C]: ",
        PROMPT_CUSTOM_HOURS => "건조 시간 [h]: ",
        PROMPT_WET_MASS => "습시료+용기 질량 [g]: ",
        PROMPT_DRIED_MASS => "건조 후+용기 질량 [g]: ",
        RESULT_MOISTURE_WB => "함수율(습량 기준):",
        RESULT_MOISTURE_DB => "함수율(건량 기준):",
        PROMPT_WB_VALUE => "습량 기준 함수율 [%]: ",
        PROMPT_DB_VALUE => "건량 기준 함수율 [%]: ",
        ADVISOR_ACCURACY_OPTIONS => "요구 정확도: 1=낮음 2=보통 3=높음 4=매우 높음",
        ADVISOR_TIME_OPTIONS => "가용 시간: 1=매우 부족 2=부족 3=보통 4=충분",
        ADVISOR_MATERIAL_OPTIONS => "시료: 1=곡류 2=유지 종자 3=과채류 4=열 민감 5=유분 다량",
        ADVISOR_PURPOSE_OPTIONS => "목적: 1=현장 측정 2=품질 관리 3=거래/유통 4=연구 5=표준 기준",
        RESULT_RECOMMENDED_METHOD => "추천 방법:",
        RESULT_RECOMMENDATION_REASON => "근거:",
        MOISTURE_LOG_HEADING => "\n-- 수분 측정 이력 --",
        MOISTURE_LOG_HEADER => "곡물            방법                            %w.b.    %d.b.    측정일",
        PROMPT_MEASURED_ON => "측정일 (YYYY-MM-DD, 없으면 엔터): ",
        POSTHARVEST_HEADING => "\n-- 수확 후 처리 기계 --",
        POSTHARVEST_OPTION_CLEANER => "1) 정선기 효율",
        POSTHARVEST_OPTION_GRADING => "2) 체 선별 효율",
        POSTHARVEST_OPTION_TRAY_DRYER => "3) 트레이 건조기 성능",
        POSTHARVEST_OPTION_DRYING_CURVE => "4) 건조 곡선 해석",
        POSTHARVEST_OPTION_BELT => "5) 벨트 컨베이어 용량",
        POSTHARVEST_OPTION_BUCKET => "6) 버킷 엘리베이터 용량",
        CLEANER_FEED_HEADING => "투입구 시료 3회:",
        CLEANER_CLEAN_HEADING => "정선 배출구 시료 3회:",
        CLEANER_CHAFF_HEADING => "이물 배출구 시료 3회:",
        PROMPT_SAMPLE_TOTAL => "시료 총질량 [g]: ",
        PROMPT_SAMPLE_GOOD => "정상 곡물 질량 [g]: ",
        RESULT_FRACTIONS => "질량 분율 X/Y/Z:",
        RESULT_RECOVERY => "곡물 회수율:",
        RESULT_REJECTION => "이물 제거율:",
        RESULT_OVERALL => "종합 효율:",
        PROMPT_SIEVE_SIZE => "체 눈 크기 [mm]: ",
        PROMPT_FEED_FRACTION => "투입 대립 분율 X (0~1): ",
        PROMPT_OVERFLOW_FRACTION => "체 위 대립 분율 Y (0~1): ",
        PROMPT_UNDERFLOW_FRACTION => "체 아래 대립 분율 Z (0~1): ",
        RESULT_OVERFLOW_EFFICIENCY => "체 위 효율:",
        RESULT_UNDERFLOW_EFFICIENCY => "체 아래 효율:",
        PROMPT_EMPTY_TRAY => "빈 트레이 질량 [g]: ",
        PROMPT_WET_TRAY => "습시료+트레이 질량 [g]: ",
        PROMPT_DRY_TRAY => "건조 후+트레이 질량 [g]: ",
        PROMPT_BATCH_WEIGHT => "배치 투입 질량 [g]: ",
        PROMPT_HEATED_AIR => "가열 공기 온도 t1 [°C]: ",
        PROMPT_EXHAUST_AIR => "배기 온도 t2 [°C]: ",
        PROMPT_AMBIENT_AIR => "외기 온도 t0 [°C]: ",
        PROMPT_HEATER_POWER => "히터 전력 [W]: ",
        PROMPT_DURATION => "운전 시간 [min]: ",
        RESULT_PROBABLE_DRY_WEIGHT => "예상 건조 후 질량:",
        RESULT_HEAT_UTILIZATION => "열 이용률:",
        RESULT_COP => "성능 계수:",
        RESULT_ENERGY => "소비 에너지:",
        PROMPT_OBSERVATION_COUNT => "관측점 수: ",
        PROMPT_OBSERVATION_TIME => "경과 시간 [min]: ",
        PROMPT_OBSERVATION_WEIGHT => "시료 질량 [g]: ",
        PROMPT_EQUILIBRIUM_MOISTURE => "평형 함수율 Me [%d.b.]: ",
        PROMPT_BONE_DRY => "완전 건조 질량 [g] (없으면 엔터): ",
        CURVE_TABLE_HEADER => "  시간[min]    질량[g]    함수율[%d.b.]    HUF     COP",
        RATE_TABLE_HEADER => "  구간중앙[min]    건조속도[%d.b./h]",
        RESULT_DRYING_CONSTANT => "건조 상수 k:",
        RESULT_BONE_DRY_WEIGHT => "완전 건조 질량:",
        PROMPT_DENSITY_OR_MEASURE => "산물밀도 [kg/m3] (0 입력 시 용기 실측으로 계산): ",
        PROMPT_TOP_WIDTH => "재료 단면 윗변 [cm]: ",
        PROMPT_BOTTOM_WIDTH => "재료 단면 아랫변 [cm]: ",
        PROMPT_DEPTH => "재료 깊이 [cm]: ",
        RESULT_LOAD_SECTION => "적재 단면 부피:",
        RESULT_TROUGH_ANGLE => "트로프 각도:",
        PROMPT_BUCKET_VOLUME => "버킷 용적 [cm3]: ",
        PROMPT_BUCKET_SPACING => "버킷 간격 [cm]: ",
        PROMPT_LOADED_POWER => "부하 전력 [W]: ",
        PROMPT_NO_LOAD_POWER => "무부하 전력 [W]: ",
        PROMPT_LIFT_HEIGHT => "양정 [m]: ",
        RESULT_DISCHARGE_RATIO => "배출 판별비 V²/gR:",
        RESULT_OPTIMAL_RPM => "원심 배출 설계 회전수:",
        RESULT_NET_POWER => "순 소비 전력:",
        RESULT_ENERGY_PER_KG => "단위 질량당 에너지:",
        RESULT_MECHANICAL_EFFICIENCY => "기계 효율:",
        RATING_LOW => "낮음",
        RATING_MODERATE => "보통",
        RATING_GOOD => "양호",
        RATING_EXCELLENT => "우수",
        RATING_SUSPECT => "계측 확인 필요",
        REFERENCE_HEADING => "\n-- 기준 데이터 --",
        REFERENCE_GRAIN_HEADING => "곡물 물성 대표값:",
        REFERENCE_GRAIN_HEADER => "코드      이름        %d.b.    m/s      kg/m3    mm   산물밀도[g/cc]",
        REFERENCE_VELOCITY_LOG_HEADING => "종말속도 이력:",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 풍량 단위  3) 속도 단위  4) 밀도 단위",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=한국어 2=English",
        VELOCITY_UNIT_OPTIONS => "속도 단위: 1=m/s 2=ft/s 3=km/h 4=mph",
        AIRFLOW_UNIT_OPTIONS => "풍량 단위: 1=m3/min 2=m3/h 3=cfm",
        DENSITY_UNIT_OPTIONS => "밀도 단위: 1=kg/m3 2=g/cm3 3=lb/ft3",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        WARNING_PREFIX => "Warning",
        MAIN_MENU_TITLE => "\n=== Agricultural Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_GREENHOUSE => "2) Greenhouse Ventilation",
        MAIN_MENU_GRAIN => "3) Grain Properties",
        MAIN_MENU_MOISTURE => "4) Moisture Measurement",
        MAIN_MENU_POSTHARVEST => "5) Post-harvest Machinery",
        MAIN_MENU_REFERENCE => "6) Reference Data",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_CHOICE => "Invalid selection.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_REPLICATE_COUNT => "Number of replicates: ",
        PROMPT_CONTAINER_MASS => "Empty container mass [g]: ",
        PROMPT_COLLECTED_MASS => "Collected mass [kg]: ",
        PROMPT_COLLECTION_TIME => "Collection time [min]: ",
        PROMPT_PULLEY_DIAMETER => "Pulley diameter [cm]: ",
        PROMPT_PULLEY_RPM => "Pulley speed [rpm]: ",
        PROMPT_BULK_DENSITY => "Bulk density [kg/m3]: ",
        RESULT_EFFICIENCY => "Efficiency:",
        RESULT_CAPACITY => "Throughput capacity:",
        RESULT_THEORETICAL_CAPACITY => "Theoretical capacity:",
        RESULT_ACTUAL_CAPACITY => "Actual capacity:",
        RESULT_BELT_SPEED => "Belt speed:",
        STATS_MEAN => "Mean",
        STATS_MIN => "Min",
        STATS_MAX => "Max",
        STATS_STD_DEV => "Std dev",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS_LINE1 => "1) Temperature  2) dT  3) Length  4) Area  5) Volume",
        UNIT_CONVERSION_OPTIONS_LINE2 => "6) Velocity  7) Mass  8) Density  9) Airflow",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, m, kg/m3): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, ft, lb/ft3): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        GREENHOUSE_HEADING => "\n-- Greenhouse Ventilation --",
        GREENHOUSE_OPTION_SUMMER => "1) Summer cooling (fan and pad)",
        GREENHOUSE_OPTION_WINTER => "2) Winter minimum ventilation",
        GREENHOUSE_OPTION_TABLES => "3) Correction factor tables",
        PROMPT_HOUSE_LENGTH => "House length [m]: ",
        PROMPT_HOUSE_WIDTH => "House width [m]: ",
        PROMPT_ELEVATION => "Elevation [m]: ",
        PROMPT_LIGHT => "Interior light [klx]: ",
        PROMPT_TEMP_RISE => "Allowed temperature rise [°C]: ",
        PROMPT_PAD_FAN_DISTANCE => "Pad-to-fan distance [m]: ",
        PROMPT_TEMP_DIFF => "Inside-outside dT [°C]: ",
        RESULT_STANDARD_AIRFLOW => "Standard airflow:",
        RESULT_FACTOR_BREAKDOWN => "Applied factors:",
        RESULT_DESIGN_FACTOR => "Design factor:",
        RESULT_ADJUSTED_AIRFLOW => "Adjusted airflow:",
        RESULT_PAD_AREA => "Required pad area:",
        RESULT_WINTER_FACTOR => "Winter temperature factor:",
        RESULT_TUBE_LAYOUT => "Recommended tube layout:",
        RESULT_FLOW_PER_TUBE => "Flow per tube:",
        TABLES_OPTIONS => "1) Elevation  2) Light  3) Temp rise  4) Pad-to-fan  5) Winter dT",
        TABLES_PROMPT_QUERY => "Query value: ",
        TABLES_LOOKUP_RESULT => "Interpolated factor:",
        GRAIN_HEADING => "\n-- Grain Properties --",
        GRAIN_OPTION_GEOMETRY => "1) Size and shape analysis",
        GRAIN_OPTION_BULK_DENSITY => "2) Bulk density",
        GRAIN_OPTION_POROSITY => "3) Porosity and true density",
        GRAIN_OPTION_TV_MEASURED => "4) Terminal velocity (measured)",
        GRAIN_OPTION_TV_THEORY => "5) Terminal velocity (theoretical)",
        PROMPT_GRAIN_LENGTH => "Length L [mm]: ",
        PROMPT_GRAIN_BREADTH => "Breadth B [mm]: ",
        PROMPT_GRAIN_THICKNESS => "Thickness T [mm]: ",
        PROMPT_PROJECTED_AREA => "Projected area Ap [mm2] (enter to skip): ",
        PROMPT_CIRCUMSCRIBED_AREA => "Circumscribing circle area Ac [mm2] (enter to skip): ",
        PROMPT_INSCRIBED_RADIUS => "Inscribed circle radius r [mm] (enter to skip): ",
        PROMPT_CIRCUMSCRIBED_RADIUS => "Circumscribing circle radius R [mm] (enter to skip): ",
        RESULT_VOLUME => "Estimated volume:",
        RESULT_EQUIVALENT_DIAMETER => "Equivalent diameter:",
        RESULT_SPHERICITY => "Sphericity:",
        RESULT_ASPECT_RATIOS => "Aspect ratios L/B, B/T:",
        RESULT_ROUNDNESS => "Roundness:",
        RESULT_ROUNDNESS_RATIO => "Roundness ratio:",
        RESULT_SHAPE => "Shape class:",
        PROMPT_CONTAINER_VOLUME => "Container volume [cm3]: ",
        CONTAINER_SHAPE_OPTIONS => "Container shape: 1=cylindrical 2=rectangular 3=enter volume",
        PROMPT_CONTAINER_DIAMETER => "Container inner diameter [cm]: ",
        PROMPT_CONTAINER_HEIGHT => "Container height [cm]: ",
        PROMPT_CONTAINER_LENGTH => "Container length [cm]: ",
        PROMPT_CONTAINER_WIDTH => "Container width [cm]: ",
        PROMPT_FILLED_MASS => "Filled mass [g]: ",
        RESULT_BULK_DENSITY => "Bulk density:",
        PROMPT_TANK_PRESSURE => "Tank pressure P1 [kPa]: ",
        PROMPT_COUPLED_PRESSURE => "Coupled pressure P2 [kPa]: ",
        RESULT_POROSITY => "Porosity:",
        RESULT_TRUE_DENSITY => "True density:",
        PROMPT_READING => "Reading",
        PROMPT_AIR_TEMP => "Air temperature [°C] (enter to skip): ",
        PROMPT_AIR_PRESSURE => "Air pressure [kPa] (enter to skip): ",
        RESULT_TERMINAL_VELOCITY => "Terminal velocity:",
        PROMPT_LOG_APPEND => "Append to session log? (y/N): ",
        PROMPT_GRAIN_NAME => "Grain name: ",
        PROMPT_MOISTURE_DB => "Moisture [%d.b.]: ",
        PROMPT_EQUIVALENT_DIAMETER => "Equivalent diameter [mm]: ",
        LOG_APPENDED => "Added to session log.",
        PROMPT_PARTICLE_DIAMETER => "Particle diameter [mm]: ",
        PROMPT_PARTICLE_DENSITY => "Particle density [kg/m3]: ",
        PROMPT_SHAPE_FACTOR => "Shape factor (sphere=1.0): ",
        PROMPT_DRAG_COEFFICIENT => "Drag coefficient (about 0.44 for spheres): ",
        PROMPT_AIR_DENSITY => "Air density [kg/m3] (about 1.2 at standard): ",
        SENSITIVITY_HEADING => "Sensitivity to +10% parameter change:",
        SHAPE_ROUND => "Round",
        SHAPE_OBLONG => "Oblong",
        SHAPE_OBLATE => "Oblate",
        SHAPE_ELLIPTICAL => "Elliptical",
        SHAPE_IRREGULAR => "Irregular",
        MOISTURE_HEADING => "\n-- Moisture Measurement --",
        MOISTURE_OPTION_OVEN => "1) Oven method",
        MOISTURE_OPTION_WB_TO_DB => "2) Wet basis to dry basis",
        MOISTURE_OPTION_DB_TO_WB => "3) Dry basis to wet basis",
        MOISTURE_OPTION_ADVISOR => "4) Method advisor",
        MOISTURE_OPTION_LOG => "5) Session log",
        METHOD_OPTIONS => "Method: 1=hot air 130°C (1-2h) 2=hot air 100°C (24h) 3=vacuum 70°C (6h) 4=custom",
        PROMPT_CUSTOM_TEMPERATURE => "Drying temperature [°C]: ",
        PROMPT_CUSTOM_HOURS => "Drying time [h]: ",
        PROMPT_WET_MASS => "Wet sample + container [g]: ",
        PROMPT_DRIED_MASS => "Dried sample + container [g]: ",
        RESULT_MOISTURE_WB => "Moisture (wet basis):",
        RESULT_MOISTURE_DB => "Moisture (dry basis):",
        PROMPT_WB_VALUE => "Wet-basis moisture [%]: ",
        PROMPT_DB_VALUE => "Dry-basis moisture [%]: ",
        ADVISOR_ACCURACY_OPTIONS => "Accuracy: 1=low 2=medium 3=high 4=very high",
        ADVISOR_TIME_OPTIONS => "Time: 1=very limited 2=limited 3=moderate 4=extensive",
        ADVISOR_MATERIAL_OPTIONS => "Material: 1=cereal grains 2=oil seeds 3=fruits/vegetables 4=heat sensitive 5=oily/fatty",
        ADVISOR_PURPOSE_OPTIONS => "Purpose: 1=field 2=quality control 3=trade 4=research 5=standard reference",
        RESULT_RECOMMENDED_METHOD => "Recommended method:",
        RESULT_RECOMMENDATION_REASON => "Reason:",
        MOISTURE_LOG_HEADING => "\n-- Moisture Log --",
        MOISTURE_LOG_HEADER => "Grain           Method                          %w.b.    %d.b.    Date",
        PROMPT_MEASURED_ON => "Date (YYYY-MM-DD, enter to skip): ",
        POSTHARVEST_HEADING => "\n-- Post-harvest Machinery --",
        POSTHARVEST_OPTION_CLEANER => "1) Screen cleaner efficiency",
        POSTHARVEST_OPTION_GRADING => "2) Sieve grading efficiency",
        POSTHARVEST_OPTION_TRAY_DRYER => "3) Tray dryer performance",
        POSTHARVEST_OPTION_DRYING_CURVE => "4) Drying curve analysis",
        POSTHARVEST_OPTION_BELT => "5) Belt conveyor capacity",
        POSTHARVEST_OPTION_BUCKET => "6) Bucket elevator capacity",
        CLEANER_FEED_HEADING => "Feed samples (3):",
        CLEANER_CLEAN_HEADING => "Clean outlet samples (3):",
        CLEANER_CHAFF_HEADING => "Chaff outlet samples (3):",
        PROMPT_SAMPLE_TOTAL => "Sample total [g]: ",
        PROMPT_SAMPLE_GOOD => "Good grain [g]: ",
        RESULT_FRACTIONS => "Mass fractions X/Y/Z:",
        RESULT_RECOVERY => "Grain recovery:",
        RESULT_REJECTION => "Chaff rejection:",
        RESULT_OVERALL => "Overall efficiency:",
        PROMPT_SIEVE_SIZE => "Sieve size [mm]: ",
        PROMPT_FEED_FRACTION => "Feed oversize fraction X (0-1): ",
        PROMPT_OVERFLOW_FRACTION => "Overflow oversize fraction Y (0-1): ",
        PROMPT_UNDERFLOW_FRACTION => "Underflow oversize fraction Z (0-1): ",
        RESULT_OVERFLOW_EFFICIENCY => "Overflow efficiency:",
        RESULT_UNDERFLOW_EFFICIENCY => "Underflow efficiency:",
        PROMPT_EMPTY_TRAY => "Empty tray [g]: ",
        PROMPT_WET_TRAY => "Wet sample + tray [g]: ",
        PROMPT_DRY_TRAY => "Dried sample + tray [g]: ",
        PROMPT_BATCH_WEIGHT => "Batch weight [g]: ",
        PROMPT_HEATED_AIR => "Heated air t1 [°C]: ",
        PROMPT_EXHAUST_AIR => "Exhaust air t2 [°C]: ",
        PROMPT_AMBIENT_AIR => "Ambient air t0 [°C]: ",
        PROMPT_HEATER_POWER => "Heater power [W]: ",
        PROMPT_DURATION => "Run time [min]: ",
        RESULT_PROBABLE_DRY_WEIGHT => "Probable dry weight:",
        RESULT_HEAT_UTILIZATION => "Heat utilization factor:",
        RESULT_COP => "Coefficient of performance:",
        RESULT_ENERGY => "Energy used:",
        PROMPT_OBSERVATION_COUNT => "Number of observations: ",
        PROMPT_OBSERVATION_TIME => "Elapsed time [min]: ",
        PROMPT_OBSERVATION_WEIGHT => "Sample weight [g]: ",
        PROMPT_EQUILIBRIUM_MOISTURE => "Equilibrium moisture Me [%d.b.]: ",
        PROMPT_BONE_DRY => "Bone-dry weight [g] (enter to skip): ",
        CURVE_TABLE_HEADER => "  time[min]    weight[g]    MC[%d.b.]    HUF     COP",
        RATE_TABLE_HEADER => "  mid-time[min]    rate[%d.b./h]",
        RESULT_DRYING_CONSTANT => "Drying constant k:",
        RESULT_BONE_DRY_WEIGHT => "Bone-dry weight:",
        PROMPT_DENSITY_OR_MEASURE => "Bulk density [kg/m3] (0 = measure with container): ",
        PROMPT_TOP_WIDTH => "Section top width [cm]: ",
        PROMPT_BOTTOM_WIDTH => "Section bottom width [cm]: ",
        PROMPT_DEPTH => "Material depth [cm]: ",
        RESULT_LOAD_SECTION => "Load section volume:",
        RESULT_TROUGH_ANGLE => "Trough angle:",
        PROMPT_BUCKET_VOLUME => "Bucket volume [cm3]: ",
        PROMPT_BUCKET_SPACING => "Bucket spacing [cm]: ",
        PROMPT_LOADED_POWER => "Loaded power [W]: ",
        PROMPT_NO_LOAD_POWER => "No-load power [W]: ",
        PROMPT_LIFT_HEIGHT => "Lift height [m]: ",
        RESULT_DISCHARGE_RATIO => "Discharge ratio V²/gR:",
        RESULT_OPTIMAL_RPM => "Centrifugal design speed:",
        RESULT_NET_POWER => "Net power:",
        RESULT_ENERGY_PER_KG => "Energy per kg:",
        RESULT_MECHANICAL_EFFICIENCY => "Mechanical efficiency:",
        RATING_LOW => "Low",
        RATING_MODERATE => "Moderate",
        RATING_GOOD => "Good",
        RATING_EXCELLENT => "Excellent",
        RATING_SUSPECT => "Check measurement",
        REFERENCE_HEADING => "\n-- Reference Data --",
        REFERENCE_GRAIN_HEADING => "Representative grain properties:",
        REFERENCE_GRAIN_HEADER => "Code      Name        %d.b.    m/s      kg/m3    mm   bulk[g/cc]",
        REFERENCE_VELOCITY_LOG_HEADING => "Terminal velocity log:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Airflow unit  3) Velocity unit  4) Density unit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=한국어 2=English",
        VELOCITY_UNIT_OPTIONS => "Velocity units: 1=m/s 2=ft/s 3=km/h 4=mph",
        AIRFLOW_UNIT_OPTIONS => "Airflow units: 1=m3/min 2=m3/h 3=cfm",
        DENSITY_UNIT_OPTIONS => "Density units: 1=kg/m3 2=g/cm3 3=lb/ft3",
        _ => return None,
    })
}
