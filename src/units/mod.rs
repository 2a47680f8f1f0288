//! 단위 정의 및 변환 모듈 모음.

pub mod airflow;
pub mod area;
pub mod density;
pub mod length;
pub mod mass;
pub mod temperature;
pub mod velocity;
pub mod volume;

pub use airflow::{convert_airflow, AirflowUnit};
pub use area::{convert_area, AreaUnit};
pub use density::{convert_density, DensityUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};
pub use velocity::{convert_velocity, VelocityUnit};
pub use volume::{convert_volume, VolumeUnit};
