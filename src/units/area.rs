/// 면적 단위. 내부 기준은 square meters이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaUnit {
    SquareMeters,
    SquareFeet,
    SquareInches,
    SquareCentimeters,
    Hectares,
    Acres,
}

/// 선택 목록 순서의 단위 이름.
pub const NAMES: [&str; 6] = [
    "square meters",
    "square feet",
    "square inches",
    "square centimeters",
    "hectares",
    "acres",
];

fn to_square_meters(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeters => value,
        AreaUnit::SquareFeet => value / 10.7639,
        AreaUnit::SquareInches => value / 1550.0,
        AreaUnit::SquareCentimeters => value / 10000.0,
        AreaUnit::Hectares => value / 0.0001,
        AreaUnit::Acres => value / 0.000247105,
    }
}

fn from_square_meters(value_m2: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeters => value_m2,
        AreaUnit::SquareFeet => value_m2 * 10.7639,
        AreaUnit::SquareInches => value_m2 * 1550.0,
        AreaUnit::SquareCentimeters => value_m2 * 10000.0,
        AreaUnit::Hectares => value_m2 * 0.0001,
        AreaUnit::Acres => value_m2 * 0.000247105,
    }
}

/// 면적을 다른 단위로 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meters(value, from);
    from_square_meters(m2, to)
}
