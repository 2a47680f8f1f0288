use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `mm`, `kg`, `m3/min`, `cfm`, `g/cc` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_diff_unit(from_unit_str)?;
            let to = parse_temperature_diff_unit(to_unit_str)?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Length => {
            let from = parse_length_unit(from_unit_str)?;
            let to = parse_length_unit(to_unit_str)?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from = parse_area_unit(from_unit_str)?;
            let to = parse_area_unit(to_unit_str)?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Volume => {
            let from = parse_volume_unit(from_unit_str)?;
            let to = parse_volume_unit(to_unit_str)?;
            Ok(convert_volume(value, from, to))
        }
        QuantityKind::Velocity => {
            let from = parse_velocity_unit(from_unit_str)?;
            let to = parse_velocity_unit(to_unit_str)?;
            Ok(convert_velocity(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Density => {
            let from = parse_density_unit(from_unit_str)?;
            let to = parse_density_unit(to_unit_str)?;
            Ok(convert_density(value, from, to))
        }
        QuantityKind::AirFlow => {
            let from = parse_airflow_unit(from_unit_str)?;
            let to = parse_airflow_unit(to_unit_str)?;
            Ok(convert_airflow(value, from, to))
        }
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_diff_unit(s: &str) -> Result<TemperatureDiffUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureDiffUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureDiffUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureDiffUnit::Fahrenheit),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "ha" | "hectare" => Ok(AreaUnit::Hectare),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "cm3" | "cm^3" | "cc" => Ok(VolumeUnit::CubicCentimeter),
        "bu" | "bushel" => Ok(VolumeUnit::Bushel),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "mph" | "mi/h" => Ok(VelocityUnit::MilePerHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "q" | "quintal" => Ok(MassUnit::Quintal),
        "t" | "ton" | "tonne" => Ok(MassUnit::Tonne),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cc" | "g/cm3" | "g/cm^3" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_airflow_unit(s: &str) -> Result<AirflowUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/min" | "m^3/min" | "cmm" => Ok(AirflowUnit::CubicMeterPerMinute),
        "m3/h" | "m^3/h" | "cmh" => Ok(AirflowUnit::CubicMeterPerHour),
        "cfm" | "ft3/min" => Ok(AirflowUnit::CubicFootPerMinute),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
