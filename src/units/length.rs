/// 길이 단위. 내부 기준은 meters이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Feet,
    Inches,
    Centimeters,
    Kilometers,
    Miles,
}

/// 선택 목록 순서의 단위 이름.
pub const NAMES: [&str; 6] = [
    "meters",
    "feet",
    "inches",
    "centimeters",
    "kilometers",
    "miles",
];

// 배율은 기준 단위 1에 해당하는 각 단위의 양이다.
fn to_meters(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meters => value,
        LengthUnit::Feet => value / 3.28084,
        LengthUnit::Inches => value / 39.3701,
        LengthUnit::Centimeters => value / 100.0,
        LengthUnit::Kilometers => value / 0.001,
        LengthUnit::Miles => value / 0.000621371,
    }
}

fn from_meters(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meters => value_m,
        LengthUnit::Feet => value_m * 3.28084,
        LengthUnit::Inches => value_m * 39.3701,
        LengthUnit::Centimeters => value_m * 100.0,
        LengthUnit::Kilometers => value_m * 0.001,
        LengthUnit::Miles => value_m * 0.000621371,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meters(value, from);
    from_meters(m, to)
}
