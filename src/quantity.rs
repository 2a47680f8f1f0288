/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Length,
    Area,
    Volume,
    Velocity,
    Mass,
    Density,
    AirFlow,
}
